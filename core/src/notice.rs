//! Notice events queued for asynchronous pickup

use serde::{Deserialize, Serialize};

/// An event record describing a join, leave, or message in a channel.
///
/// Notices are fanned out to every other member of the channel at the
/// moment of the event and sit in each recipient's queue until drained.
/// The wire tags are camelCase to match the published API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notice {
    #[serde(rename = "channelJoin")]
    ChannelJoin { user: String, channel: String },

    #[serde(rename = "channelLeave")]
    ChannelLeave { user: String, channel: String },

    #[serde(rename = "channelMessage")]
    ChannelMessage {
        user: String,
        channel: String,
        message: String,
    },
}

impl Notice {
    /// Nick of the user that caused the event
    pub fn actor(&self) -> &str {
        match self {
            Notice::ChannelJoin { user, .. } => user,
            Notice::ChannelLeave { user, .. } => user,
            Notice::ChannelMessage { user, .. } => user,
        }
    }

    /// Channel the event happened in
    pub fn channel(&self) -> &str {
        match self {
            Notice::ChannelJoin { channel, .. } => channel,
            Notice::ChannelLeave { channel, .. } => channel,
            Notice::ChannelMessage { channel, .. } => channel,
        }
    }
}
