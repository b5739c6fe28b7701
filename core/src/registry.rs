//! Channel registry with lazy creation and eager cleanup

use crate::Channel;
use std::collections::HashMap;

/// Creates, looks up, and garbage-collects channels.
///
/// Channels come into existence the first time someone joins or speaks
/// in them, so join and say never fail on a missing channel. A channel
/// without the `keep` flag is released as soon as its last member goes,
/// keeping the registry from filling up with abandoned names.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, Channel>,
}

impl ChannelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-create a permanent channel (from configuration)
    pub fn insert_keep(&mut self, name: &str) {
        self.channels
            .insert(name.to_string(), Channel::permanent(name.to_string()));
    }

    /// Look up a channel, creating it on first reference
    pub fn get_or_create(&mut self, name: &str) -> &Channel {
        self.channels
            .entry(name.to_string())
            .or_insert_with(|| Channel::new(name.to_string()))
    }

    /// Look up an existing channel
    pub fn lookup(&self, name: &str) -> Option<&Channel> {
        self.channels.get(name)
    }

    /// Drop the channel if it has no members left and is not permanent
    pub fn release_if_empty(&mut self, name: &str, member_count: usize) {
        if member_count > 0 {
            return;
        }
        if let Some(channel) = self.channels.get(name) {
            if !channel.keep {
                self.channels.remove(name);
            }
        }
    }

    /// Names of all live channels
    pub fn names(&self) -> Vec<String> {
        self.channels.keys().cloned().collect()
    }

    /// Number of live channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
