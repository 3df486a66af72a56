//! Session store abstraction and the in-memory implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use ghiaccio_core::result::AppResult;
use ghiaccio_entity::session::Session;

/// Capability interface for session persistence.
///
/// The server holds sessions behind this trait so the backing store can
/// be anything that implements get/set/destroy — the default is an
/// in-process map, but an external cache would slot in unchanged.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a session by id.
    async fn get(&self, id: Uuid) -> AppResult<Option<Session>>;
    /// Insert or replace a session.
    async fn set(&self, session: Session) -> AppResult<()>;
    /// Remove a session.
    async fn destroy(&self, id: Uuid) -> AppResult<()>;
}

/// In-memory session store backed by a concurrent map.
///
/// Sessions do not survive a server restart; expired entries are evicted
/// lazily by the manager when they are next touched.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<Uuid, Session>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held (including not-yet-evicted
    /// expired ones).
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: Uuid) -> AppResult<Option<Session>> {
        Ok(self.sessions.get(&id).map(|entry| entry.value().clone()))
    }

    async fn set(&self, session: Session) -> AppResult<()> {
        self.sessions.insert(session.id, session);
        Ok(())
    }

    async fn destroy(&self, id: Uuid) -> AppResult<()> {
        self.sessions.remove(&id);
        Ok(())
    }
}
