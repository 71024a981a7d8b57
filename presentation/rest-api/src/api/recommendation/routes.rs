use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recommendation::model::RecommendationQuery;
use business::domain::recommendation::use_cases::recommend::{RecommendParams, RecommendUseCase};
use business::domain::suggestion::use_cases::record::{RecordQueryParams, RecordQueryUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::language::parse_language;
use crate::api::recommendation::dto::{RecommendationRequest, RecommendationResponse};
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    recommend_use_case: Arc<dyn RecommendUseCase>,
    record_query_use_case: Arc<dyn RecordQueryUseCase>,
}

impl RecommendationApi {
    pub fn new(
        recommend_use_case: Arc<dyn RecommendUseCase>,
        record_query_use_case: Arc<dyn RecordQueryUseCase>,
    ) -> Self {
        Self {
            recommend_use_case,
            record_query_use_case,
        }
    }
}

/// Stateless recommendation API
///
/// The caller keeps history and shown ids itself and sends them with every
/// request.
#[OpenApi]
impl RecommendationApi {
    /// Recommend wines
    ///
    /// Runs the full pipeline. When the completion service is unavailable the
    /// response is still 200 with `mode = degraded`; when no wine matches the
    /// price constraints it is 200 with `mode = clarification`.
    #[oai(
        path = "/recommendations",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn recommend(&self, body: Json<RecommendationRequest>) -> RecommendResponse {
        let request = body.0;
        let text = request.message.trim().to_string();
        if text.is_empty() {
            return RecommendResponse::BadRequest(ErrorResponse::validation(
                "recommendation.empty_message",
            ));
        }
        let language = match parse_language(request.language.as_deref()) {
            Ok(language) => language,
            Err(json) => return RecommendResponse::BadRequest(json),
        };

        let mut history = Vec::with_capacity(request.history.len());
        for message in request.history {
            match message.into_domain() {
                Some(message) => history.push(message),
                None => {
                    return RecommendResponse::BadRequest(ErrorResponse::validation(
                        "recommendation.invalid_history_role",
                    ));
                }
            }
        }

        let mut query = RecommendationQuery::new(text.clone(), language);
        query.history = history;
        query.exclude_ids = request.exclude_ids.into_iter().collect();

        let catalog = (!request.wines.is_empty())
            .then(|| request.wines.into_iter().map(|w| w.into_domain()).collect());

        if let Err(err) = self
            .record_query_use_case
            .execute(RecordQueryParams { language, text })
            .await
        {
            tracing::warn!("Could not record query history: {}", err);
        }

        match self
            .recommend_use_case
            .execute(RecommendParams { query, catalog })
            .await
        {
            Ok(result) => RecommendResponse::Ok(Json(result.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                RecommendResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
