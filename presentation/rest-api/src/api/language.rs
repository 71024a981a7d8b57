use poem_openapi::payload::Json;

use business::domain::shared::value_objects::{Language, SessionId};

use crate::api::error::ErrorResponse;

/// Parses an optional `lang` value; absent means English.
pub fn parse_language(raw: Option<&str>) -> Result<Language, Json<ErrorResponse>> {
    match raw {
        None => Ok(Language::En),
        Some(value) => value
            .parse::<Language>()
            .map_err(|_| ErrorResponse::validation("language.unsupported")),
    }
}

pub fn parse_session_id(raw: &str) -> Result<SessionId, Json<ErrorResponse>> {
    SessionId::parse(raw).ok_or_else(|| ErrorResponse::validation("session.invalid_id"))
}
