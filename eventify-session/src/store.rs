use crate::identity::{Identity, Role};
use eventify_shared::{Clock, Masked};
use std::sync::Arc;

/// Namespace key under which the active identity is persisted.
pub const SESSION_KEY: &str = "eventify_user";

/// Reserved address that receives the admin role under the demo auth policy.
pub const ADMIN_EMAIL: &str = "admin@eventify.com";

const DEFAULT_AVATAR: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100";

/// String-keyed local persistence collaborator (the browser-storage stand-in).
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Owner of the current authenticated identity.
///
/// Persistence is best-effort: a failing backend degrades the session to
/// in-memory-only for the rest of the page lifetime instead of failing the
/// login/signup/logout operation itself.
///
/// Authentication is the demo-mode mock policy carried over from the
/// original product: no credential is ever verified, and the role is derived
/// purely from the email address (`ADMIN_EMAIL` gets admin, everyone else
/// gets user).
pub struct SessionStore {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    current: Option<Identity>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock, current: None }
    }

    /// Attempt to load a previously persisted identity. Absent or malformed
    /// payloads yield `None` silently; this never fails the caller.
    pub fn restore(&mut self) -> Option<&Identity> {
        let payload = match self.store.get(SESSION_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "session restore skipped, storage unavailable");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&payload) {
            Ok(identity) => {
                tracing::info!(email = %identity.email, "session restored");
                self.current = Some(identity);
                self.current.as_ref()
            }
            Err(e) => {
                // Treat a corrupt record as absent rather than faulting startup.
                tracing::warn!(error = %e, "persisted session malformed, discarding");
                None
            }
        }
    }

    /// Demo-mode login: builds the identity deterministically from the email
    /// and overwrites any existing session. The credential is accepted
    /// unverified.
    pub fn login(&mut self, email: &str, _credential: Masked<String>) -> Identity {
        let role = if email == ADMIN_EMAIL { Role::Admin } else { Role::User };
        let identity = Identity {
            id: 1,
            name: "John Doe".to_string(),
            email: email.to_string(),
            role,
            avatar: DEFAULT_AVATAR.to_string(),
        };
        tracing::info!(email = %identity.email, role = ?identity.role, "login");
        self.activate(identity)
    }

    /// Demo-mode signup: fresh clock-derived id, role always user.
    pub fn signup(&mut self, name: &str, email: &str, _credential: Masked<String>) -> Identity {
        let identity = Identity {
            id: self.clock.timestamp_millis(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            avatar: DEFAULT_AVATAR.to_string(),
        };
        tracing::info!(email = %identity.email, "signup");
        self.activate(identity)
    }

    /// Clear the active identity and its persisted record. Idempotent: a
    /// logout with no active session is a no-op.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("logout");
        }
        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    fn activate(&mut self, identity: Identity) -> Identity {
        self.persist(&identity);
        self.current = Some(identity.clone());
        identity
    }

    fn persist(&self, identity: &Identity) {
        let payload = match serde_json::to_string(identity) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session");
                return;
            }
        };
        if let Err(e) = self.store.set(SESSION_KEY, &payload) {
            tracing::warn!(error = %e, "session not persisted, continuing in-memory only");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use eventify_shared::ManualClock;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapStore {
        map: Mutex<HashMap<String, String>>,
    }

    impl MapStore {
        fn new() -> Self {
            Self { map: Mutex::new(HashMap::new()) }
        }
    }

    impl KvStore for MapStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.map.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.map.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// Backend whose every operation fails, for the degradation path.
    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }
    }

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap()))
    }

    #[test]
    fn test_admin_sentinel_email_gets_admin_role() {
        let store = Arc::new(MapStore::new());
        let mut session = SessionStore::new(store, clock());

        let admin = session.login(ADMIN_EMAIL, "x".into());
        assert_eq!(admin.role, Role::Admin);

        let user = session.login("a@b.com", "x".into());
        assert_eq!(user.role, Role::User);
        assert_eq!(session.current_identity().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_login_then_restore_round_trip() {
        let store = Arc::new(MapStore::new());
        let mut session = SessionStore::new(store.clone(), clock());
        let original = session.login("admin@eventify.com", "pw".into());

        // Simulated reload: a fresh SessionStore over the same backend.
        let mut reloaded = SessionStore::new(store, clock());
        let restored = reloaded.restore().cloned().unwrap();
        assert_eq!(restored.email, original.email);
        assert_eq!(restored.role, original.role);
    }

    #[test]
    fn test_restore_tolerates_absent_and_malformed_payloads() {
        let store = Arc::new(MapStore::new());
        let mut session = SessionStore::new(store.clone(), clock());
        assert!(session.restore().is_none());

        store.set(SESSION_KEY, "{not json").unwrap();
        assert!(session.restore().is_none());
        assert!(session.current_identity().is_none());
    }

    #[test]
    fn test_broken_storage_degrades_to_in_memory_session() {
        let mut session = SessionStore::new(Arc::new(BrokenStore), clock());
        let identity = session.login("a@b.com", "x".into());
        assert_eq!(identity.email, "a@b.com");
        assert!(session.current_identity().is_some());

        session.logout();
        assert!(session.current_identity().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = Arc::new(MapStore::new());
        let mut session = SessionStore::new(store.clone(), clock());
        session.login("a@b.com", "x".into());

        session.logout();
        session.logout();
        assert!(session.current_identity().is_none());
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_signup_derives_fresh_id_from_clock() {
        let store = Arc::new(MapStore::new());
        let manual = clock();
        let mut session = SessionStore::new(store, manual.clone());

        let identity = session.signup("Ada", "ada@b.com", "x".into());
        assert_eq!(identity.id, manual.timestamp_millis());
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.name, "Ada");
    }
}
