use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match self {
            ChatError::Recommendation(err) => return err.into_error_response(),
            ChatError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ChatError::EmptyMessage => (StatusCode::BAD_REQUEST, "ValidationError"),
            ChatError::StaleResponse | ChatError::AwaitingCompletion => {
                (StatusCode::CONFLICT, "Conflict")
            }
            ChatError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
