//! Per-user notice queues

use crate::Notice;
use std::collections::{HashMap, VecDeque};
use uuid::Uuid;

/// Queues notices per recipient for pull-based delivery.
///
/// Events are pushed at the moment they happen and pulled whenever the
/// recipient polls, so no streaming transport is needed. Queues are
/// unbounded: a user that never drains accumulates memory without
/// limit. That is a known resource-growth risk, accepted because any
/// cap would have to pick which notices to drop.
#[derive(Debug, Default)]
pub struct NoticeFanout {
    queues: HashMap<Uuid, VecDeque<Notice>>,
}

impl NoticeFanout {
    /// Create an empty fanout engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice to every audience member's queue, preserving
    /// arrival order per recipient
    pub fn notify(&mut self, notice: &Notice, audience: &[Uuid]) {
        for recipient in audience {
            self.queues
                .entry(*recipient)
                .or_default()
                .push_back(notice.clone());
        }
    }

    /// Take the user's full pending queue in FIFO order, leaving it
    /// empty. Draining with nothing pending yields an empty vec.
    pub fn drain(&mut self, user: Uuid) -> Vec<Notice> {
        self.queues
            .remove(&user)
            .map(|queue| queue.into_iter().collect())
            .unwrap_or_default()
    }

    /// Number of notices pending for a user
    pub fn pending(&self, user: Uuid) -> usize {
        self.queues.get(&user).map_or(0, |queue| queue.len())
    }

    /// Discard a user's queue entirely. Used on disconnect.
    pub fn drop_queue(&mut self, user: Uuid) {
        self.queues.remove(&user);
    }
}
