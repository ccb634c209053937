use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::models::AcademicYear;

pub const DEFAULT_MAX_SESSIONS: usize = 1000;
pub const DEFAULT_MAX_SESSION_MESSAGES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// One mock-interview conversation. History only grows, one exchange at a time.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub year: Option<AcademicYear>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

impl InterviewSession {
    pub fn new(year: Option<AcademicYear>, company: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            year,
            company,
            created_at: Utc::now(),
            messages: Vec::new(),
        }
    }

    /// The last `limit` messages, oldest first.
    pub fn recent(&self, limit: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            role,
            content,
            sent_at: Utc::now(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Interview session {0} not found")]
    NotFound(Uuid),

    #[error("The interviewer is still replying to your previous message")]
    Busy,

    #[error("This interview reached its limit of {0} messages; start a new session")]
    Full(usize),
}

/// Exclusive right to add the next exchange to one session.
/// Holds a snapshot of the history as it was when the turn began.
pub struct Turn {
    session: InterviewSession,
    _guard: OwnedMutexGuard<()>,
}

impl Turn {
    pub fn session(&self) -> &InterviewSession {
        &self.session
    }
}

struct Entry {
    session: InterviewSession,
    /// Creation order; the smallest is evicted first.
    seq: u64,
    turn: Arc<Mutex<()>>,
}

#[derive(Default)]
struct Inner {
    sessions: HashMap<Uuid, Entry>,
    next_seq: u64,
}

/// In-memory interview sessions keyed by id. Process lifetime only.
///
/// Bounded two ways: at most `max_sessions` live sessions (creating one more
/// evicts the oldest) and at most `max_messages` messages per session.
///
/// The map lock is never held across an LLM call. A handler takes a [`Turn`]
/// with [`SessionStore::begin_turn`], calls the model, then commits with
/// [`SessionStore::append_exchange`]. Only one turn per session can be open,
/// so every reply is generated from the complete history.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
    max_sessions: usize,
    max_messages: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS, DEFAULT_MAX_SESSION_MESSAGES)
    }
}

impl SessionStore {
    pub fn new(max_sessions: usize, max_messages: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            max_sessions: max_sessions.max(1),
            max_messages: max_messages.max(2),
        }
    }

    pub async fn create(
        &self,
        year: Option<AcademicYear>,
        company: Option<String>,
    ) -> InterviewSession {
        let session = InterviewSession::new(year, company);
        let mut inner = self.inner.write().await;

        while inner.sessions.len() >= self.max_sessions {
            let oldest = inner
                .sessions
                .iter()
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    inner.sessions.remove(&id);
                    info!("Interview session {id} evicted (limit {})", self.max_sessions);
                }
                None => break,
            }
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.sessions.insert(
            session.id,
            Entry {
                session: session.clone(),
                seq,
                turn: Arc::new(Mutex::new(())),
            },
        );
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<InterviewSession> {
        self.inner
            .read()
            .await
            .sessions
            .get(&id)
            .map(|entry| entry.session.clone())
    }

    /// Opens the next exchange. Fails if another turn is open or the session is full.
    pub async fn begin_turn(&self, id: Uuid) -> Result<Turn, SessionError> {
        let inner = self.inner.read().await;
        let entry = inner.sessions.get(&id).ok_or(SessionError::NotFound(id))?;
        if entry.session.messages.len() + 2 > self.max_messages {
            return Err(SessionError::Full(self.max_messages));
        }
        let guard = entry
            .turn
            .clone()
            .try_lock_owned()
            .map_err(|_| SessionError::Busy)?;
        Ok(Turn {
            session: entry.session.clone(),
            _guard: guard,
        })
    }

    /// Appends the user message and the model reply together, closing the turn.
    pub async fn append_exchange(
        &self,
        turn: Turn,
        user_message: String,
        reply: String,
    ) -> Result<InterviewSession, SessionError> {
        let id = turn.session.id;
        let mut inner = self.inner.write().await;
        let entry = inner
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound(id))?;
        entry.session.push(ChatRole::User, user_message);
        entry.session.push(ChatRole::Assistant, reply);
        Ok(entry.session.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn exchange(
        store: &SessionStore,
        id: Uuid,
        user: &str,
        reply: &str,
    ) -> Result<InterviewSession, SessionError> {
        let turn = store.begin_turn(id).await?;
        store
            .append_exchange(turn, user.to_string(), reply.to_string())
            .await
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::default();
        let session = store
            .create(Some(AcademicYear::Fourth), Some("TCS".to_string()))
            .await;

        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.company.as_deref(), Some("TCS"));
        assert!(fetched.messages.is_empty());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_append_exchange_keeps_order() {
        let store = SessionStore::default();
        let id = store.create(None, None).await.id;

        exchange(&store, id, "Hi", "Tell me about yourself").await.unwrap();
        let session = exchange(&store, id, "I am a CS student", "Why us?").await.unwrap();

        let roles: Vec<ChatRole> = session.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
        );
        assert_eq!(session.messages[3].content, "Why us?");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.create(None, None).await.id;
        let b = store.create(None, None).await.id;

        exchange(&store, a, "hello", "hi").await.unwrap();

        assert_eq!(store.get(a).await.unwrap().messages.len(), 2);
        assert!(store.get(b).await.unwrap().messages.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = SessionStore::default();
        let id = Uuid::new_v4();
        assert!(store.get(id).await.is_none());
        assert_eq!(
            store.begin_turn(id).await.err(),
            Some(SessionError::NotFound(id))
        );
    }

    #[tokio::test]
    async fn test_oldest_session_evicted_at_capacity() {
        let store = SessionStore::new(2, DEFAULT_MAX_SESSION_MESSAGES);
        let first = store.create(None, None).await.id;
        let second = store.create(None, None).await.id;
        let third = store.create(None, None).await.id;

        assert_eq!(store.len().await, 2);
        assert!(store.get(first).await.is_none());
        assert!(store.get(second).await.is_some());
        assert!(store.get(third).await.is_some());

        for _ in 0..10 {
            store.create(None, None).await;
        }
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_message_limit_per_session() {
        let store = SessionStore::new(10, 4);
        let id = store.create(None, None).await.id;

        exchange(&store, id, "a", "b").await.unwrap();
        exchange(&store, id, "c", "d").await.unwrap();
        assert_eq!(
            exchange(&store, id, "e", "f").await.err(),
            Some(SessionError::Full(4))
        );
        assert_eq!(store.get(id).await.unwrap().messages.len(), 4);
    }

    #[tokio::test]
    async fn test_only_one_open_turn_per_session() {
        let store = SessionStore::default();
        let id = store.create(None, None).await.id;
        let other = store.create(None, None).await.id;

        let turn = store.begin_turn(id).await.unwrap();
        assert_eq!(store.begin_turn(id).await.err(), Some(SessionError::Busy));
        // Other sessions are unaffected
        assert!(store.begin_turn(other).await.is_ok());

        store
            .append_exchange(turn, "q".to_string(), "a".to_string())
            .await
            .unwrap();
        let next = store.begin_turn(id).await.unwrap();
        assert_eq!(next.session().messages.len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_turn_releases_session() {
        let store = SessionStore::default();
        let id = store.create(None, None).await.id;

        drop(store.begin_turn(id).await.unwrap());
        assert!(store.begin_turn(id).await.is_ok());
        assert!(store.get(id).await.unwrap().messages.is_empty());
    }

    #[test]
    fn test_recent_returns_tail() {
        let mut session = InterviewSession::new(None, None);
        for i in 0..5 {
            session.push(ChatRole::User, format!("m{i}"));
        }
        let tail: Vec<&str> = session.recent(2).iter().map(|m| m.content.as_str()).collect();
        assert_eq!(tail, vec!["m3", "m4"]);
        assert_eq!(session.recent(50).len(), 5);
    }
}
