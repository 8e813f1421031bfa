//! Mounted assistant sessions.
//!
//! One [`AssistantSession`] per mounted chat widget, keyed by its id. A
//! session lives from `POST /api/assistant/sessions` until the matching
//! `DELETE`, until it sits idle longer than the store's TTL, or until it is
//! the least recently used one when the table is full. Nothing is written to
//! disk.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use shravfolio_assistant::{AssistantSession, OptionPayload, Outcome};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Idle lifetime used by [`SessionStore::default`].
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);
/// Table size used by [`SessionStore::default`].
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct Entry {
    session: AssistantSession,
    touched: Instant,
}

/// In-memory session table with idle expiry and a size cap.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Entry>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    /// Store that drops sessions idle for `ttl` and never holds more than
    /// `max_sessions` (at least one).
    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Mount a new session and return a snapshot of it.
    pub async fn create(&self) -> AssistantSession {
        self.create_at(Instant::now()).await
    }

    async fn create_at(&self, now: Instant) -> AssistantSession {
        let mut sessions = self.sessions.lock().await;
        self.evict(&mut sessions, now);

        let session = AssistantSession::new();
        sessions.insert(
            session.id(),
            Entry {
                session: session.clone(),
                touched: now,
            },
        );
        session
    }

    /// Drop expired sessions, then the least recently used ones until there
    /// is room for one more.
    fn evict(&self, sessions: &mut HashMap<Uuid, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.touched) < self.ttl);

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| *id)
            else {
                break;
            };
            sessions.remove(&oldest);
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "assistant sessions evicted");
        }
    }

    /// Snapshot of a mounted session.
    pub async fn get(&self, id: Uuid) -> Option<AssistantSession> {
        self.get_at(id, Instant::now()).await
    }

    async fn get_at(&self, id: Uuid, now: Instant) -> Option<AssistantSession> {
        let mut sessions = self.sessions.lock().await;
        let entry = self.live(&mut sessions, id, now)?;
        entry.touched = now;
        Some(entry.session.clone())
    }

    /// Apply a selection to a mounted session.
    pub async fn select(
        &self,
        id: Uuid,
        label: &str,
        payload: Option<&OptionPayload>,
    ) -> Option<(Outcome, AssistantSession)> {
        self.select_at(id, label, payload, Instant::now()).await
    }

    async fn select_at(
        &self,
        id: Uuid,
        label: &str,
        payload: Option<&OptionPayload>,
        now: Instant,
    ) -> Option<(Outcome, AssistantSession)> {
        let mut sessions = self.sessions.lock().await;
        let entry = self.live(&mut sessions, id, now)?;
        entry.touched = now;
        let outcome = entry.session.select(label, payload);
        Some((outcome, entry.session.clone()))
    }

    /// The entry for `id` unless it has expired; an expired one is dropped.
    fn live<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, Entry>,
        id: Uuid,
        now: Instant,
    ) -> Option<&'a mut Entry> {
        let expired = now.saturating_duration_since(sessions.get(&id)?.touched) >= self.ttl;
        if expired {
            sessions.remove(&id);
            return None;
        }
        sessions.get_mut(&id)
    }

    /// Unmount a session. Returns false if it was not mounted.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.lock().await.remove(&id).is_some()
    }

    /// Number of sessions in the table, including any not yet swept.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shravfolio_assistant::DialogueState;

    #[tokio::test]
    async fn lifecycle() {
        let store = SessionStore::default();
        let session = store.create().await;
        assert_eq!(store.len().await, 1);

        let (outcome, snapshot) = store
            .select(session.id(), "Contact", None)
            .await
            .unwrap();
        assert_ne!(outcome, Outcome::Ignored);
        assert_eq!(snapshot.state(), DialogueState::Contact);
        assert_eq!(
            store.get(session.id()).await.unwrap().state(),
            DialogueState::Contact
        );

        assert!(store.remove(session.id()).await);
        assert!(!store.remove(session.id()).await);
        assert!(store.select(session.id(), "Back", None).await.is_none());
    }

    #[tokio::test]
    async fn idle_sessions_expire() {
        let ttl = Duration::from_secs(60);
        let store = SessionStore::with_limits(ttl, 100);
        let start = Instant::now();

        let idle = store.create_at(start).await;
        let busy = store.create_at(start).await;

        // Touching a session restarts its clock.
        let half = start + ttl / 2;
        assert!(store.get_at(busy.id(), half).await.is_some());

        let later = start + ttl;
        assert!(store.get_at(idle.id(), later).await.is_none());
        assert!(store.select_at(idle.id(), "Contact", None, later).await.is_none());
        assert!(store.get_at(busy.id(), later).await.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn create_sweeps_expired_sessions() {
        let ttl = Duration::from_secs(60);
        let store = SessionStore::with_limits(ttl, 100);
        let start = Instant::now();

        for _ in 0..5 {
            store.create_at(start).await;
        }
        assert_eq!(store.len().await, 5);

        let fresh = store.create_at(start + ttl).await;
        assert_eq!(store.len().await, 1);
        assert!(store.get_at(fresh.id(), start + ttl).await.is_some());
    }

    #[tokio::test]
    async fn full_table_drops_least_recently_used() {
        let store = SessionStore::with_limits(Duration::from_secs(3600), 3);
        let start = Instant::now();
        let at = |secs| start + Duration::from_secs(secs);

        let a = store.create_at(at(0)).await;
        let b = store.create_at(at(1)).await;
        let c = store.create_at(at(2)).await;
        // `a` becomes the most recently used.
        store.select_at(a.id(), "Contact", None, at(3)).await.unwrap();

        let d = store.create_at(at(4)).await;
        assert_eq!(store.len().await, 3);
        assert!(store.get_at(b.id(), at(5)).await.is_none());
        for kept in [&a, &c, &d] {
            assert!(store.get_at(kept.id(), at(5)).await.is_some());
        }
    }

    #[test]
    fn zero_cap_still_holds_one() {
        let store = SessionStore::with_limits(DEFAULT_TTL, 0);
        assert_eq!(store.max_sessions, 1);
    }
}
