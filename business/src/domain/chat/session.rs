use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::catalog::model::CatalogItem;
use crate::domain::recommendation::model::{ChatMessage, RecommendationResult, ResponseMode};
use crate::domain::recommendation::prompt::MAX_HISTORY_TURNS;
use crate::domain::shared::value_objects::{Language, SessionId};

use super::errors::ChatError;
use super::padding::pad_recommendations;

/// Items revealed per page.
pub const PAGE_SIZE: usize = 4;
/// Length the recommendation list is padded to after a completion.
pub const BATCH_TARGET: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingCompletion { turn: u64 },
    Rendered { shown: usize },
    Exhausted,
}

/// Identifies the query a completion result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnToken(u64);

/// A slice of the padded recommendation list.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<CatalogItem>,
    /// Total shown for the current query, including this page.
    pub shown_count: usize,
    pub exhausted: bool,
}

/// Conversation and pagination state of one widget session.
///
/// `Idle → AwaitingCompletion → Rendered(n) → Rendered(n + k) → … → Exhausted`.
/// A new query while a completion is pending makes the pending result stale.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: SessionId,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    state: SessionState,
    turn: u64,
    padded: Vec<CatalogItem>,
    shown: usize,
    exclude_ids: HashSet<String>,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(id: SessionId, language: Language) -> Self {
        Self {
            id,
            language,
            created_at: Utc::now(),
            state: SessionState::Idle,
            turn: 0,
            padded: Vec::new(),
            shown: 0,
            exclude_ids: HashSet::new(),
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn exclude_ids(&self) -> &HashSet<String> {
        &self.exclude_ids
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    fn push_history(&mut self, message: ChatMessage) {
        self.history.push(message);
        let overflow = self.history.len().saturating_sub(MAX_HISTORY_TURNS);
        self.history.drain(..overflow);
    }

    /// Starts a new query: resets pagination and the shown ids.
    ///
    /// The history returned to the caller for prompting excludes the message
    /// being asked, which is appended here.
    pub fn begin_query(&mut self, text: &str) -> (TurnToken, Vec<ChatMessage>) {
        let prior_history = self.history.clone();

        self.turn += 1;
        self.state = SessionState::AwaitingCompletion { turn: self.turn };
        self.padded.clear();
        self.shown = 0;
        self.exclude_ids.clear();
        self.push_history(ChatMessage::user(text));

        (TurnToken(self.turn), prior_history)
    }

    /// Applies a completion result and reveals the first page.
    ///
    /// Fails with [`ChatError::StaleResponse`] unless `token` is the pending
    /// turn.
    pub fn complete(
        &mut self,
        token: TurnToken,
        result: &RecommendationResult,
        pool: &[CatalogItem],
    ) -> Result<Page, ChatError> {
        match self.state {
            SessionState::AwaitingCompletion { turn } if turn == token.0 => {}
            _ => return Err(ChatError::StaleResponse),
        }

        self.push_history(ChatMessage::assistant(result.narrative.clone()));

        self.padded = match result.mode {
            ResponseMode::Clarification => Vec::new(),
            ResponseMode::Ai | ResponseMode::Degraded => {
                pad_recommendations(&result.items, pool, &self.exclude_ids, BATCH_TARGET)
            }
        };

        Ok(self.next_page())
    }

    /// Reveals the next page of the already computed list.
    pub fn show_more(&mut self) -> Result<Page, ChatError> {
        match self.state {
            SessionState::Idle => Ok(Page {
                items: Vec::new(),
                shown_count: 0,
                exhausted: true,
            }),
            SessionState::AwaitingCompletion { .. } => Err(ChatError::AwaitingCompletion),
            SessionState::Rendered { .. } | SessionState::Exhausted => Ok(self.next_page()),
        }
    }

    fn next_page(&mut self) -> Page {
        let end = (self.shown + PAGE_SIZE).min(self.padded.len());
        let items = self.padded[self.shown..end].to_vec();

        self.exclude_ids
            .extend(items.iter().map(|item| item.id.clone()));
        self.shown = end;

        let exhausted = self.shown >= self.padded.len();
        self.state = if exhausted {
            SessionState::Exhausted
        } else {
            SessionState::Rendered { shown: self.shown }
        };

        Page {
            items,
            shown_count: self.shown,
            exhausted,
        }
    }
}
