//! Bidirectional channel membership tracking

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Tracks which users belong to which channels.
///
/// Two maps kept in lockstep: user -> channel names and channel name ->
/// member ids. Every mutation goes through this tracker so the two
/// sides can never drift apart; the channel type itself carries no
/// member list.
#[derive(Debug, Default)]
pub struct MembershipTracker {
    user_channels: HashMap<Uuid, HashSet<String>>,
    channel_members: HashMap<String, HashSet<Uuid>>,
}

impl MembershipTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user to a channel. Returns false if already a member.
    pub fn join(&mut self, user: Uuid, channel: &str) -> bool {
        let added = self
            .user_channels
            .entry(user)
            .or_default()
            .insert(channel.to_string());
        if added {
            self.channel_members
                .entry(channel.to_string())
                .or_default()
                .insert(user);
        }
        added
    }

    /// Remove a user from a channel. Returns false (and mutates
    /// nothing) if the user was not a member.
    pub fn leave(&mut self, user: Uuid, channel: &str) -> bool {
        let removed = self
            .user_channels
            .get_mut(&user)
            .map_or(false, |channels| channels.remove(channel));
        if removed {
            if let Some(members) = self.channel_members.get_mut(channel) {
                members.remove(&user);
                if members.is_empty() {
                    self.channel_members.remove(channel);
                }
            }
        }
        removed
    }

    /// Whether a user is in a channel
    pub fn is_member(&self, user: Uuid, channel: &str) -> bool {
        self.user_channels
            .get(&user)
            .map_or(false, |channels| channels.contains(channel))
    }

    /// Member ids of a channel
    pub fn members(&self, channel: &str) -> Vec<Uuid> {
        self.channel_members
            .get(channel)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of members in a channel
    pub fn member_count(&self, channel: &str) -> usize {
        self.channel_members
            .get(channel)
            .map_or(0, |members| members.len())
    }

    /// Channel names a user belongs to
    pub fn channels_of(&self, user: Uuid) -> Vec<String> {
        self.user_channels
            .get(&user)
            .map(|channels| channels.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove a user from every channel, returning the channels left.
    /// Used on disconnect.
    pub fn remove_user(&mut self, user: Uuid) -> Vec<String> {
        let channels: Vec<String> = self
            .user_channels
            .remove(&user)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();
        for channel in &channels {
            if let Some(members) = self.channel_members.get_mut(channel) {
                members.remove(&user);
                if members.is_empty() {
                    self.channel_members.remove(channel);
                }
            }
        }
        channels
    }
}
