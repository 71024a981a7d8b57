use poem_openapi::Object;

use business::domain::chat::session::{ChatSession, Page};
use business::domain::chat::use_cases::send_message::ChatReply;

use crate::api::catalog::dto::CatalogItemDto;

#[derive(Debug, Clone, Object)]
pub struct StartSessionRequest {
    /// en, fr or nl (default: en)
    #[oai(skip_serializing_if_is_none)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub language: String,
}

impl From<ChatSession> for SessionResponse {
    fn from(session: ChatSession) -> Self {
        Self {
            session_id: session.id.to_string(),
            language: session.language.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SendMessageRequest {
    pub message: String,
}

/// One page of recommendations for the current query.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ChatPageResponse {
    /// Narrative reply; absent on "show more" pages
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
    /// ai, degraded or clarification; absent on "show more" pages
    #[oai(skip_serializing_if_is_none)]
    pub mode: Option<String>,
    pub recommendations: Vec<CatalogItemDto>,
    /// Items shown so far for this query, this page included
    pub shown_count: u32,
    /// No more items to show for this query
    pub exhausted: bool,
}

impl From<Page> for ChatPageResponse {
    fn from(page: Page) -> Self {
        Self {
            message: None,
            mode: None,
            recommendations: page.items.into_iter().map(CatalogItemDto::from).collect(),
            shown_count: page.shown_count as u32,
            exhausted: page.exhausted,
        }
    }
}

impl From<ChatReply> for ChatPageResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            message: Some(reply.narrative),
            mode: Some(reply.mode.to_string()),
            ..ChatPageResponse::from(reply.page)
        }
    }
}
