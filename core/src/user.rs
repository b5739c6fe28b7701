//! User records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A connected user.
///
/// Channel membership and the pending notice queue are tracked by the
/// directory's membership and fanout components, keyed by `id`, so the
/// record itself stays small and cheap to clone.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID, never reused while the process runs
    pub id: Uuid,
    /// Nickname, unique among currently connected users
    pub nick: String,
    /// Registration time
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(nick: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            nick,
            registered_at: Utc::now(),
        }
    }

    /// Get user nickname
    pub fn nickname(&self) -> &str {
        &self.nick
    }
}
