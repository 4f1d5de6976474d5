use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tibasasa_core::{RiskScorer, Session};
use uuid::Uuid;

/// Live sessions keyed by id.
///
/// The lock is held for exactly one synchronous core call, never across an
/// `.await`.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session seeded with the sample patient and doctor.
    pub fn create(&self) -> Uuid {
        let session = Session::seeded();
        let id = session.id;
        self.lock().insert(id, session);
        tracing::info!("✓ Session opened: {}", id);
        id
    }

    /// Tear down a session. Returns `false` if it did not exist.
    pub fn close(&self, id: Uuid) -> bool {
        let removed = self.lock().remove(&id).is_some();
        if removed {
            tracing::info!("✓ Session closed: {}", id);
        }
        removed
    }

    /// Run `f` against the session, or `None` if it does not exist.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.lock().get_mut(&id).map(f)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub scorer: Arc<RiskScorer>,
}

impl AppState {
    pub fn new(scorer: RiskScorer) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new()),
            scorer: Arc::new(scorer),
        }
    }
}
