use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    /// Chip label; sending it as a chat message runs the query
    pub text: String,
}

impl From<String> for SuggestionResponse {
    fn from(text: String) -> Self {
        Self { text }
    }
}
