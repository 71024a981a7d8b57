use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use business::domain::chat::repository::ChatSessionRepository;
use business::domain::chat::session::ChatSession;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_IDLE_TTL_MINUTES: i64 = 120;

struct StoredSession {
    session: ChatSession,
    touched_at: DateTime<Utc>,
}

/// Chat sessions kept in process memory.
///
/// A session idle for longer than `idle_ttl` is gone. When `max_sessions` is
/// reached, saving a new session drops the least recently saved one.
pub struct ChatSessionRepositoryInMemory {
    sessions: RwLock<HashMap<SessionId, StoredSession>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl Default for ChatSessionRepositoryInMemory {
    fn default() -> Self {
        Self::with_limits(
            DEFAULT_MAX_SESSIONS,
            Duration::minutes(DEFAULT_IDLE_TTL_MINUTES),
        )
    }
}

impl ChatSessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle_ttl,
        }
    }

    fn is_expired(&self, stored: &StoredSession, now: DateTime<Utc>) -> bool {
        now - stored.touched_at > self.idle_ttl
    }
}

#[async_trait]
impl ChatSessionRepository for ChatSessionRepositoryInMemory {
    async fn get(&self, id: &SessionId) -> Result<ChatSession, RepositoryError> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|stored| !self.is_expired(stored, now))
            .map(|stored| stored.session.clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, session: &ChatSession) -> Result<(), RepositoryError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, stored| !self.is_expired(stored, now));
        if sessions.len() < before {
            tracing::debug!("Dropped {} idle chat sessions", before - sessions.len());
        }

        if !sessions.contains_key(&session.id) && sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, stored)| stored.touched_at)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
            }
        }

        sessions.insert(
            session.id.clone(),
            StoredSession {
                session: session.clone(),
                touched_at: now,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::chat::session::SessionState;
    use business::domain::shared::value_objects::Language;

    #[tokio::test]
    async fn should_return_saved_session() {
        let repository = ChatSessionRepositoryInMemory::new();
        let mut session = ChatSession::new(SessionId::new("tab-1"), Language::Nl);
        session.begin_query("iets bubbels");

        repository.save(&session).await.unwrap();
        let loaded = repository.get(&SessionId::new("tab-1")).await.unwrap();

        assert_eq!(loaded.language, Language::Nl);
        assert!(matches!(
            loaded.state(),
            SessionState::AwaitingCompletion { .. }
        ));
    }

    #[tokio::test]
    async fn should_fail_for_unknown_session() {
        let repository = ChatSessionRepositoryInMemory::new();

        let result = repository.get(&SessionId::new("nope")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_forget_idle_session() {
        let repository = ChatSessionRepositoryInMemory::new();
        let session = ChatSession::new(SessionId::new("tab-idle"), Language::En);
        repository.sessions.write().await.insert(
            session.id.clone(),
            StoredSession {
                session,
                touched_at: Utc::now() - Duration::minutes(DEFAULT_IDLE_TTL_MINUTES + 1),
            },
        );

        let result = repository.get(&SessionId::new("tab-idle")).await;
        repository
            .save(&ChatSession::new(SessionId::new("tab-new"), Language::En))
            .await
            .unwrap();

        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(repository.sessions.read().await.len(), 1);
    }

    #[tokio::test]
    async fn should_drop_least_recently_saved_session_when_full() {
        let repository = ChatSessionRepositoryInMemory::with_limits(2, Duration::hours(1));
        let first = ChatSession::new(SessionId::new("tab-1"), Language::Fr);
        let second = ChatSession::new(SessionId::new("tab-2"), Language::Fr);
        repository.save(&first).await.unwrap();
        repository.save(&second).await.unwrap();
        repository.sessions.write().await.get_mut(&first.id).unwrap().touched_at =
            Utc::now() - Duration::minutes(5);

        repository
            .save(&ChatSession::new(SessionId::new("tab-3"), Language::Fr))
            .await
            .unwrap();
        repository.save(&second).await.unwrap();

        assert_eq!(repository.sessions.read().await.len(), 2);
        assert!(repository.get(&first.id).await.is_err());
        assert!(repository.get(&second.id).await.is_ok());
        assert!(repository.get(&SessionId::new("tab-3")).await.is_ok());
    }
}
