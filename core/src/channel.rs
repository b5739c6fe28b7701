//! Channel records

use chrono::{DateTime, Utc};

/// A named channel.
///
/// The name is the lookup key; there is no separate channel id. The
/// member set is derived from the membership tracker, never stored
/// here, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct Channel {
    /// Channel name
    pub name: String,
    /// Survives with zero members when set (reserved/permanent channels)
    pub keep: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new channel
    pub fn new(name: String) -> Self {
        Self {
            name,
            keep: false,
            created_at: Utc::now(),
        }
    }

    /// Create a permanent channel that is never garbage-collected
    pub fn permanent(name: String) -> Self {
        Self {
            name,
            keep: true,
            created_at: Utc::now(),
        }
    }
}
