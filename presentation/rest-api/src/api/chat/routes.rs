use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::chat::use_cases::send_message::{
    SendChatMessageParams, SendChatMessageUseCase,
};
use business::domain::chat::use_cases::show_more::{ShowMoreParams, ShowMoreUseCase};
use business::domain::chat::use_cases::start_session::{
    StartChatSessionParams, StartChatSessionUseCase,
};

use crate::api::chat::dto::{
    ChatPageResponse, SendMessageRequest, SessionResponse, StartSessionRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::language::{parse_language, parse_session_id};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    start_session_use_case: Arc<dyn StartChatSessionUseCase>,
    send_message_use_case: Arc<dyn SendChatMessageUseCase>,
    show_more_use_case: Arc<dyn ShowMoreUseCase>,
}

impl ChatApi {
    pub fn new(
        start_session_use_case: Arc<dyn StartChatSessionUseCase>,
        send_message_use_case: Arc<dyn SendChatMessageUseCase>,
        show_more_use_case: Arc<dyn ShowMoreUseCase>,
    ) -> Self {
        Self {
            start_session_use_case,
            send_message_use_case,
            show_more_use_case,
        }
    }
}

/// Chat API
///
/// Server-side sessions with paginated recommendations. Each new message
/// resets pagination; "more" reveals the next page without a new completion.
#[OpenApi]
impl ChatApi {
    /// Start a chat session
    #[oai(path = "/chat/sessions", method = "post", tag = "ApiTags::Chat")]
    async fn start_session(&self, body: Json<StartSessionRequest>) -> StartSessionResponse {
        let language = match parse_language(body.0.language.as_deref()) {
            Ok(language) => language,
            Err(json) => return StartSessionResponse::BadRequest(json),
        };

        match self
            .start_session_use_case
            .execute(StartChatSessionParams { language })
            .await
        {
            Ok(session) => StartSessionResponse::Created(Json(session.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                StartSessionResponse::InternalError(json)
            }
        }
    }

    /// Send a message
    ///
    /// Returns the narrative reply and the first page of recommendations.
    /// 409 when a newer message on the same session superseded this one.
    #[oai(
        path = "/chat/sessions/:session_id/messages",
        method = "post",
        tag = "ApiTags::Chat"
    )]
    async fn send_message(
        &self,
        session_id: Path<String>,
        body: Json<SendMessageRequest>,
    ) -> ChatPageApiResponse {
        let session_id = match parse_session_id(&session_id.0) {
            Ok(id) => id,
            Err(json) => return ChatPageApiResponse::BadRequest(json),
        };

        let params = SendChatMessageParams {
            session_id,
            message: body.0.message,
        };

        match self.send_message_use_case.execute(params).await {
            Ok(reply) => ChatPageApiResponse::Ok(Json(reply.into())),
            Err(err) => ChatPageApiResponse::from_error(err.into_error_response()),
        }
    }

    /// Show more
    ///
    /// Reveals the next page of the current query's recommendations.
    #[oai(
        path = "/chat/sessions/:session_id/more",
        method = "post",
        tag = "ApiTags::Chat"
    )]
    async fn show_more(&self, session_id: Path<String>) -> ChatPageApiResponse {
        let session_id = match parse_session_id(&session_id.0) {
            Ok(id) => id,
            Err(json) => return ChatPageApiResponse::BadRequest(json),
        };

        match self
            .show_more_use_case
            .execute(ShowMoreParams { session_id })
            .await
        {
            Ok(page) => ChatPageApiResponse::Ok(Json(page.into())),
            Err(err) => ChatPageApiResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ChatPageApiResponse {
    #[oai(status = 200)]
    Ok(Json<ChatPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ChatPageApiResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => ChatPageApiResponse::BadRequest(json),
            404 => ChatPageApiResponse::NotFound(json),
            409 => ChatPageApiResponse::Conflict(json),
            _ => ChatPageApiResponse::InternalError(json),
        }
    }
}
