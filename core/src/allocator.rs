//! Nickname allocation and lookup

use std::collections::HashMap;
use uuid::Uuid;

/// Assigns nicknames to registering users and resolves collisions.
///
/// Holds the nick index for all currently connected users. Lookups are
/// case-sensitive exact matches. Allocation never fails: if the
/// requested nick is taken, suffixed variants `nick_1`, `nick_2`, ...
/// are probed in order and the first free one wins. The probe restarts
/// from `_1` on every registration, so suffixes freed by a disconnect
/// are handed out again.
#[derive(Debug, Default)]
pub struct NickAllocator {
    by_nick: HashMap<String, Uuid>,
}

impl NickAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a requested nick to a free one
    pub fn resolve(&self, requested: &str) -> String {
        if !self.by_nick.contains_key(requested) {
            return requested.to_string();
        }
        let mut suffix = 1u64;
        loop {
            let candidate = format!("{}_{}", requested, suffix);
            if !self.by_nick.contains_key(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Record a resolved nick as taken by the given user
    pub fn claim(&mut self, nick: String, id: Uuid) {
        self.by_nick.insert(nick, id);
    }

    /// Free a nick for reuse
    pub fn release(&mut self, nick: &str) {
        self.by_nick.remove(nick);
    }

    /// Find the user id holding a nick
    pub fn lookup(&self, nick: &str) -> Option<Uuid> {
        self.by_nick.get(nick).copied()
    }

    /// Number of nicks currently claimed
    pub fn len(&self) -> usize {
        self.by_nick.len()
    }

    /// Whether no nicks are claimed
    pub fn is_empty(&self) -> bool {
        self.by_nick.is_empty()
    }
}
