//! Session store
//!
//! The single persisted session record between page loads. Modeled as an
//! explicit get/set/clear interface rather than ambient mutable globals;
//! presence of a record is what gates route access.

use dash_model::SessionUser;
use parking_lot::Mutex;

/// Persisted session slot.
pub trait SessionStore: Send + Sync {
    /// Current session record, if a user is logged in.
    fn get(&self) -> Option<SessionUser>;

    /// Replace the session record (login, or cache refresh).
    fn set(&self, user: SessionUser);

    /// Drop the session record (logout). The remember-me preference is a
    /// separate slot and survives.
    fn clear(&self);

    /// Persist the remember-me preference.
    fn set_remembered(&self, remembered: bool);

    fn remembered(&self) -> bool;

    /// Whether a session record exists (dashboard vs login routing).
    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory session store, one slot guarded by a mutex.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<SessionUser>>,
    remembered: Mutex<bool>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a logged-in user.
    #[must_use]
    pub fn with_user(user: SessionUser) -> Self {
        let store = Self::new();
        store.set(user);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionUser> {
        self.user.lock().clone()
    }

    fn set(&self, user: SessionUser) {
        *self.user.lock() = Some(user);
    }

    fn clear(&self) {
        *self.user.lock() = None;
    }

    fn set_remembered(&self, remembered: bool) {
        *self.remembered.lock() = remembered;
    }

    fn remembered(&self) -> bool {
        *self.remembered.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user() -> SessionUser {
        SessionUser {
            id: "abc".to_string(),
            user_id: "u-1".to_string(),
            email: "jo@example.com".to_string(),
            created_at: String::new(),
            profile_photo: None,
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());

        store.set(user());
        assert_eq!(store.get(), Some(user()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn clear_logs_out_but_keeps_remember_me() {
        let store = MemorySessionStore::with_user(user());
        store.set_remembered(true);

        store.clear();
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());
        assert!(store.remembered());
    }
}
