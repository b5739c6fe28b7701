//! Directory service facade
//!
//! Composes the nick allocator, channel registry, membership tracker,
//! and notice fanout into the operation set the transport layer calls.
//! All state lives behind one mutex, so every operation is a single
//! atomic step: no caller can observe a partially applied mutation.
//! Operations do no I/O and are bounded by input size, which keeps
//! hold times short enough for a single coarse lock.

use crate::{
    ChannelRegistry, Config, Error, MembershipTracker, NickAllocator, Notice, NoticeFanout,
    Result, User,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct Registration {
    /// Assigned user id
    pub id: Uuid,
    /// Assigned nick, suffixed if the requested one was taken
    pub nick: String,
}

#[derive(Debug, Default)]
struct State {
    users: HashMap<Uuid, User>,
    allocator: NickAllocator,
    registry: ChannelRegistry,
    membership: MembershipTracker,
    fanout: NoticeFanout,
}

/// The in-memory registry of users and channels.
///
/// Constructed once per process and handed to the transport layer;
/// tests build independent instances.
#[derive(Debug, Default)]
pub struct Directory {
    state: Mutex<State>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory with the configured permanent channels
    pub fn from_config(config: &Config) -> Self {
        let directory = Self::new();
        {
            let mut state = directory.state.lock();
            for name in &config.channels.keep {
                state.registry.insert_keep(name);
            }
        }
        directory
    }

    /// Register a user under the requested nick, or the first free
    /// suffixed variant of it. Never fails.
    pub fn register(&self, requested: &str) -> Registration {
        let mut state = self.state.lock();
        let nick = state.allocator.resolve(requested);
        let user = User::new(nick.clone());
        let id = user.id;
        state.allocator.claim(nick.clone(), id);
        state.users.insert(id, user);
        tracing::info!("{} is connected", nick);
        Registration { id, nick }
    }

    /// Nicks of all connected users, sorted for stable output
    pub fn list_users(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut nicks: Vec<String> =
            state.users.values().map(|user| user.nick.clone()).collect();
        nicks.sort();
        nicks
    }

    /// Look up a user by nick
    pub fn whois(&self, nick: &str) -> Result<User> {
        let state = self.state.lock();
        state
            .allocator
            .lookup(nick)
            .and_then(|id| state.users.get(&id).cloned())
            .ok_or_else(|| Error::UnknownNick(nick.to_string()))
    }

    /// Disconnect a user: leave every channel it belongs to (emitting a
    /// leave notice in each), discard its notice queue, and free the
    /// nick and id.
    pub fn disconnect(&self, id: Uuid) -> Result<()> {
        let mut state = self.state.lock();
        let nick = state
            .users
            .get(&id)
            .map(|user| user.nick.clone())
            .ok_or(Error::UnknownUser(id))?;

        let mut channels = state.membership.remove_user(id);
        channels.sort();
        for channel in &channels {
            let audience = state.membership.members(channel);
            let notice = Notice::ChannelLeave {
                user: nick.clone(),
                channel: channel.clone(),
            };
            state.fanout.notify(&notice, &audience);
            let count = state.membership.member_count(channel);
            state.registry.release_if_empty(channel, count);
            tracing::info!("{} left {}", nick, channel);
        }

        state.fanout.drop_queue(id);
        state.allocator.release(&nick);
        state.users.remove(&id);
        tracing::info!("{} is disconnected", nick);
        Ok(())
    }

    /// Names of all live channels, sorted for stable output
    pub fn list_channels(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut names = state.registry.names();
        names.sort();
        names
    }

    /// Join a channel, creating it on first reference. Returns the full
    /// member nick list, joiner included. Members present before the
    /// join receive a channelJoin notice.
    pub fn join(&self, id: Uuid, channel: &str) -> Result<Vec<String>> {
        let mut state = self.state.lock();
        let nick = state
            .users
            .get(&id)
            .map(|user| user.nick.clone())
            .ok_or(Error::UnknownUser(id))?;

        state.registry.get_or_create(channel);
        if state.membership.join(id, channel) {
            let audience = Self::audience(&state, channel, id);
            let notice = Notice::ChannelJoin {
                user: nick.clone(),
                channel: channel.to_string(),
            };
            state.fanout.notify(&notice, &audience);
            tracing::info!("{} joined {}", nick, channel);
        }

        let mut members: Vec<String> = state
            .membership
            .members(channel)
            .into_iter()
            .filter_map(|member| state.users.get(&member).map(|user| user.nick.clone()))
            .collect();
        members.sort();
        Ok(members)
    }

    /// Speak in a channel. A non-member is joined implicitly first,
    /// without a join notice; only the channelMessage is fanned out to
    /// the other members. The asymmetry with `leave` (which refuses
    /// non-members) is deliberate: talking is low-friction, leaving
    /// requires having been a member.
    pub fn say(&self, id: Uuid, channel: &str, message: &str) -> Result<()> {
        let mut state = self.state.lock();
        let nick = state
            .users
            .get(&id)
            .map(|user| user.nick.clone())
            .ok_or(Error::UnknownUser(id))?;

        state.registry.get_or_create(channel);
        state.membership.join(id, channel);

        let audience = Self::audience(&state, channel, id);
        let notice = Notice::ChannelMessage {
            user: nick.clone(),
            channel: channel.to_string(),
            message: message.to_string(),
        };
        state.fanout.notify(&notice, &audience);
        tracing::info!("<{}#{}> {}", nick, channel, message);
        Ok(())
    }

    /// Leave a channel. Refuses with NotMember if the user never joined
    /// it; the remaining members receive a channelLeave notice and the
    /// channel is released if it ends up empty and is not permanent.
    pub fn leave(&self, id: Uuid, channel: &str) -> Result<()> {
        let mut state = self.state.lock();
        let nick = state
            .users
            .get(&id)
            .map(|user| user.nick.clone())
            .ok_or(Error::UnknownUser(id))?;

        if !state.membership.leave(id, channel) {
            return Err(Error::NotMember {
                nick,
                channel: channel.to_string(),
            });
        }

        let audience = state.membership.members(channel);
        let notice = Notice::ChannelLeave {
            user: nick.clone(),
            channel: channel.to_string(),
        };
        state.fanout.notify(&notice, &audience);
        let count = state.membership.member_count(channel);
        state.registry.release_if_empty(channel, count);
        tracing::info!("{} left {}", nick, channel);
        Ok(())
    }

    /// Take all pending notices for a user in FIFO order, emptying the
    /// queue. A second immediate call returns an empty sequence.
    pub fn drain_notices(&self, id: Uuid) -> Result<Vec<Notice>> {
        let mut state = self.state.lock();
        if !state.users.contains_key(&id) {
            return Err(Error::UnknownUser(id));
        }
        let notices = state.fanout.drain(id);
        tracing::debug!("drained {} notices for {}", notices.len(), id);
        Ok(notices)
    }

    /// Number of connected users
    pub fn user_count(&self) -> usize {
        self.state.lock().users.len()
    }

    /// Number of live channels
    pub fn channel_count(&self) -> usize {
        self.state.lock().registry.len()
    }

    /// Every member of the channel other than the acting user
    fn audience(state: &State, channel: &str, actor: Uuid) -> Vec<Uuid> {
        state
            .membership
            .members(channel)
            .into_iter()
            .filter(|member| *member != actor)
            .collect()
    }
}
