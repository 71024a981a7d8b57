use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RecommendationError::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable")
            }
            RecommendationError::MalformedUpstreamReply => (StatusCode::BAD_GATEWAY, "BadGateway"),
            RecommendationError::EmptyCandidateSet => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UnprocessableEntity")
            }
            RecommendationError::CatalogUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_catalog_to_internal_error() {
        let (status, json) = RecommendationError::CatalogUnavailable.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "recommendation.catalog_unavailable");
    }
}
