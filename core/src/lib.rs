//! Rust Chat Directory Core
//!
//! In-memory presence/messaging directory: unique user identities with
//! nick collision resolution, lazily created channels, bidirectional
//! membership tracking, and pull-based notice fanout.

pub mod allocator;
pub mod channel;
pub mod config;
pub mod directory;
pub mod error;
pub mod fanout;
pub mod membership;
pub mod notice;
pub mod registry;
pub mod user;

#[cfg(test)]
mod tests;

pub use allocator::NickAllocator;
pub use channel::Channel;
pub use config::Config;
pub use directory::{Directory, Registration};
pub use error::{Error, Result};
pub use fanout::NoticeFanout;
pub use membership::MembershipTracker;
pub use notice::Notice;
pub use registry::ChannelRegistry;
pub use user::User;

/// Re-exports for convenience
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
