use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::application::suggestion::generate::MAX_SUGGESTIONS;
use business::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::language::parse_language;
use crate::api::suggestion::dto::SuggestionResponse;
use crate::api::tags::ApiTags;

const DEFAULT_LIMIT: usize = 4;

pub struct SuggestionApi {
    generate_use_case: Arc<dyn GenerateSuggestionsUseCase>,
}

impl SuggestionApi {
    pub fn new(generate_use_case: Arc<dyn GenerateSuggestionsUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Suggestion API
///
/// Quick-reply chips shown under the chat input.
#[OpenApi]
impl SuggestionApi {
    /// List suggestion chips
    ///
    /// Returns the most asked queries for the language, falling back to a
    /// fixed starter list when nothing has been asked yet.
    #[oai(path = "/suggestions", method = "get", tag = "ApiTags::Suggestions")]
    async fn get_suggestions(
        &self,
        /// Language code: en, fr or nl (default: en)
        lang: Query<Option<String>>,
        /// Maximum number of chips (default: 4)
        limit: Query<Option<usize>>,
    ) -> GetSuggestionsResponse {
        let language = match parse_language(lang.0.as_deref()) {
            Ok(language) => language,
            Err(json) => return GetSuggestionsResponse::BadRequest(json),
        };
        let limit = limit.0.unwrap_or(DEFAULT_LIMIT).min(MAX_SUGGESTIONS);

        match self
            .generate_use_case
            .execute(GenerateSuggestionsParams { language, limit })
            .await
        {
            Ok(suggestions) => GetSuggestionsResponse::Ok(Json(
                suggestions.into_iter().map(SuggestionResponse::from).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetSuggestionsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSuggestionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SuggestionResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
