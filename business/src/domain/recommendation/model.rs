use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::CatalogItem;
use crate::domain::shared::value_objects::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl std::str::FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" | "bot" => Ok(ChatRole::Assistant),
            _ => Err(format!("Invalid chat role: {}", s)),
        }
    }
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A single chat turn's request for recommendations.
#[derive(Debug, Clone)]
pub struct RecommendationQuery {
    pub text: String,
    pub language: Language,
    /// Ids already shown this session; never recommended again.
    pub exclude_ids: HashSet<String>,
    pub history: Vec<ChatMessage>,
}

impl RecommendationQuery {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
            exclude_ids: HashSet::new(),
            history: Vec::new(),
        }
    }

    /// A query with no conversational context; eligible for the response cache.
    pub fn is_fresh(&self) -> bool {
        self.exclude_ids.is_empty() && self.history.is_empty()
    }
}

/// Which path produced a [`RecommendationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Parsed from a model completion.
    Ai,
    /// Rule-based answer after the completion service failed.
    Degraded,
    /// No candidates left; the narrative asks the user to loosen constraints.
    Clarification,
}

impl std::fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseMode::Ai => write!(f, "ai"),
            ResponseMode::Degraded => write!(f, "degraded"),
            ResponseMode::Clarification => write!(f, "clarification"),
        }
    }
}

/// Narrative plus recommended items, in preference order.
#[derive(Debug, Clone)]
pub struct RecommendationResult {
    pub narrative: String,
    pub items: Vec<CatalogItem>,
    pub mode: ResponseMode,
}

/// Conceptual completion request sent to the hosted model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_query_without_context_as_fresh() {
        let query = RecommendationQuery::new("red wine", Language::En);
        assert!(query.is_fresh());
    }

    #[test]
    fn should_not_treat_query_with_history_as_fresh() {
        let mut query = RecommendationQuery::new("and cheaper?", Language::En);
        query.history.push(ChatMessage::user("red wine"));
        assert!(!query.is_fresh());
    }

    #[test]
    fn should_parse_legacy_bot_role() {
        assert_eq!("bot".parse::<ChatRole>().unwrap(), ChatRole::Assistant);
    }
}
