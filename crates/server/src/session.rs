//! Session Management
//!
//! Each session owns one [`Conversation`]. Conversations never share memory
//! or randomness; the template tables are shared read-only. Turns on the
//! same session are serialized by the session's mutex.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use emobot_agent::{Conversation, ResponseTemplateStore};
use emobot_config::constants::server::{DEFAULT_CLEANUP_INTERVAL_SECS, DEFAULT_SESSION_TIMEOUT_SECS};
use emobot_config::ServerConfig;
use parking_lot::{Mutex, MutexGuard, RwLock};
use tokio::sync::watch;

use crate::ServerError;

/// Session state
pub struct Session {
    /// Session ID
    pub id: String,
    /// Wall-clock creation time
    pub created_at: DateTime<Utc>,
    conversation: Mutex<Conversation>,
    last_activity: RwLock<Instant>,
    active: RwLock<bool>,
}

impl Session {
    /// Create a new session
    pub fn new(id: impl Into<String>, templates: Arc<ResponseTemplateStore>, seed: Option<u64>) -> Self {
        let id = id.into();
        Self {
            conversation: Mutex::new(Conversation::new(&id, templates, seed)),
            id,
            created_at: Utc::now(),
            last_activity: RwLock::new(Instant::now()),
            active: RwLock::new(true),
        }
    }

    /// Lock the conversation for one turn
    pub fn conversation(&self) -> MutexGuard<'_, Conversation> {
        self.conversation.lock()
    }

    /// Update last activity
    pub fn touch(&self) {
        *self.last_activity.write() = Instant::now();
    }

    /// Check if session is expired
    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.last_activity.read().elapsed() > timeout
    }

    /// Time since the last turn
    pub fn idle(&self) -> Duration {
        self.last_activity.read().elapsed()
    }

    /// Close session
    pub fn close(&self) {
        *self.active.write() = false;
    }

    /// Is session active
    pub fn is_active(&self) -> bool {
        *self.active.read()
    }
}

/// Session manager
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
    templates: Arc<ResponseTemplateStore>,
    rng_seed: Option<u64>,
    max_sessions: usize,
    session_timeout: Duration,
    cleanup_interval: Duration,
}

impl SessionManager {
    /// Create a session manager with default timeouts
    pub fn new(templates: Arc<ResponseTemplateStore>, max_sessions: usize) -> Self {
        Self::with_config(
            templates,
            max_sessions,
            Duration::from_secs(DEFAULT_SESSION_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
        )
    }

    /// Create a session manager with custom timeout and cleanup interval
    pub fn with_config(
        templates: Arc<ResponseTemplateStore>,
        max_sessions: usize,
        session_timeout: Duration,
        cleanup_interval: Duration,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            templates,
            rng_seed: None,
            max_sessions,
            session_timeout,
            cleanup_interval,
        }
    }

    /// Create a session manager from server settings
    pub fn from_settings(templates: Arc<ResponseTemplateStore>, config: &ServerConfig) -> Self {
        Self::with_config(
            templates,
            config.max_sessions,
            Duration::from_secs(config.session_timeout_secs),
            Duration::from_secs(config.cleanup_interval_secs),
        )
    }

    /// Seed every new conversation's RNG with `seed`
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Start a background task that periodically removes expired sessions
    ///
    /// Send `true` on the returned channel to stop it.
    pub fn start_cleanup_task(self: &Arc<Self>) -> watch::Sender<bool> {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let manager = Arc::clone(self);
        let interval = manager.cleanup_interval;

        tokio::spawn(async move {
            let mut interval_timer = tokio::time::interval(interval);
            interval_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval_timer.tick() => {
                        let removed = manager.cleanup_expired();
                        if removed > 0 {
                            tracing::info!(
                                removed = removed,
                                remaining = manager.count(),
                                "Session cleanup"
                            );
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            tracing::info!("Session cleanup task shutting down");
                            break;
                        }
                    }
                }
            }
        });

        shutdown_tx
    }

    /// Create a new session
    pub fn create(&self) -> Result<Arc<Session>, ServerError> {
        let mut sessions = self.sessions.write();

        if sessions.len() >= self.max_sessions {
            self.cleanup_expired_internal(&mut sessions);

            if sessions.len() >= self.max_sessions {
                return Err(ServerError::SessionLimit(self.max_sessions));
            }
        }

        let id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(Session::new(&id, self.templates.clone(), self.rng_seed));
        sessions.insert(id.clone(), session.clone());

        tracing::info!(session_id = %id, seeded = self.rng_seed.is_some(), "Created session");

        Ok(session)
    }

    /// Get a session by ID
    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.read().get(id).cloned()
    }

    /// Remove a session; returns whether it existed
    pub fn remove(&self, id: &str) -> bool {
        match self.sessions.write().remove(id) {
            Some(session) => {
                session.close();
                tracing::info!(session_id = %id, "Removed session");
                true
            }
            None => false,
        }
    }

    /// Number of live sessions
    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Remove expired sessions; returns how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write();
        self.cleanup_expired_internal(&mut sessions)
    }

    fn cleanup_expired_internal(&self, sessions: &mut HashMap<String, Arc<Session>>) -> usize {
        let timeout = self.session_timeout;
        let expired: Vec<String> = sessions
            .iter()
            .filter(|(_, s)| s.is_expired(timeout))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            if let Some(session) = sessions.remove(id) {
                session.close();
                tracing::info!(session_id = %id, "Expired session");
            }
        }

        expired.len()
    }

    /// List all session IDs
    pub fn list(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn manager(max: usize) -> SessionManager {
        SessionManager::new(Arc::new(ResponseTemplateStore::with_defaults().unwrap()), max)
    }

    #[test]
    fn test_session_creation() {
        let manager = manager(10);
        let session = manager.create().unwrap();

        assert!(session.is_active());
        assert!(!session.is_expired(Duration::from_secs(60)));
        assert_eq!(session.conversation().id(), session.id);
    }

    #[test]
    fn test_session_get() {
        let manager = manager(10);
        let session = manager.create().unwrap();
        let id = session.id.clone();

        let retrieved = manager.get(&id);
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id, id);
    }

    #[test]
    fn test_session_remove() {
        let manager = manager(10);
        let session = manager.create().unwrap();
        let id = session.id.clone();

        assert!(manager.remove(&id));
        assert!(manager.get(&id).is_none());
        assert!(!session.is_active());
        assert!(!manager.remove(&id));
    }

    #[test]
    fn test_session_limit() {
        let manager = manager(2);
        manager.create().unwrap();
        manager.create().unwrap();

        assert!(matches!(manager.create(), Err(ServerError::SessionLimit(2))));
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn test_expired_sessions_are_removed() {
        let manager = SessionManager::with_config(
            Arc::new(ResponseTemplateStore::with_defaults().unwrap()),
            1,
            Duration::ZERO,
            Duration::from_secs(60),
        );
        manager.create().unwrap();
        std::thread::sleep(Duration::from_millis(5));

        // Full manager evicts the expired session to make room
        assert!(manager.create().is_ok());
        assert_eq!(manager.count(), 1);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(manager.cleanup_expired(), 1);
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_sessions_do_not_share_memory() {
        let manager = manager(10);
        let a = manager.create().unwrap();
        let b = manager.create().unwrap();

        a.conversation().process_message("hello", 0.5, &["hello"], &[], Utc::now());
        a.conversation().process_message("sad day", -0.5, &["sad", "day"], &[], Utc::now());

        assert_eq!(a.conversation().turn_count(), 2);
        assert_eq!(b.conversation().turn_count(), 0);
    }

    #[test]
    fn test_seeded_sessions_greet_alike() {
        let manager = manager(10).with_seed(Some(5));
        let a = manager.create().unwrap();
        let b = manager.create().unwrap();
        assert_eq!(a.conversation().greet(), b.conversation().greet());
    }

    #[tokio::test]
    async fn test_cleanup_task_stops() {
        let manager = Arc::new(SessionManager::with_config(
            Arc::new(ResponseTemplateStore::with_defaults().unwrap()),
            10,
            Duration::ZERO,
            Duration::from_millis(10),
        ));
        manager.create().unwrap();

        let shutdown = manager.start_cleanup_task();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(manager.count(), 0);

        assert!(shutdown.send(true).is_ok());
    }

    #[test]
    fn test_concurrent_turns_are_serialized() {
        const THREADS: usize = 8;
        const TURNS: usize = 25;

        let manager = manager(10);
        let session = manager.create().unwrap();
        let signals = crate::state::default_signal_extractor();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let session = Arc::clone(&session);
                let signals = &signals;
                scope.spawn(move || {
                    for i in 0..TURNS {
                        let reply = session
                            .conversation()
                            .respond(&format!("message {} from {}", i, t), signals, Utc::now());
                        assert!(!reply.is_empty());
                    }
                });
            }
        });

        let conversation = session.conversation();
        assert_eq!(conversation.turn_count(), THREADS * TURNS);
        assert!(conversation
            .history()
            .windows(2)
            .all(|pair| pair[0].timestamp() <= pair[1].timestamp()));
    }

    #[test]
    fn test_default_timeouts() {
        let manager = manager(1);
        assert_eq!(manager.session_timeout, Duration::from_secs(DEFAULT_SESSION_TIMEOUT_SECS));
        assert_eq!(manager.cleanup_interval, Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS));
    }
}
