//! Error types for the chat directory

use thiserror::Error;
use uuid::Uuid;

/// Main error type for the chat directory
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown user: {0}")]
    UnknownUser(Uuid),

    #[error("Unknown nick: {0}")]
    UnknownNick(String),

    #[error("{nick} is not a member of {channel}")]
    NotMember { nick: String, channel: String },

    /// Declared for completeness of the registration contract. The
    /// suffix probe is unbounded, so the allocator never returns this.
    #[error("No nickname variant available")]
    NicknameExhausted,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
