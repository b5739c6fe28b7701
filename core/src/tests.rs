//! Tests for the core directory components

#[cfg(test)]
mod tests {
    use crate::{ChannelRegistry, Config, MembershipTracker, NickAllocator, Notice, NoticeFanout};
    use uuid::Uuid;

    #[test]
    fn test_allocator_assigns_verbatim_when_free() {
        let allocator = NickAllocator::new();
        assert_eq!(allocator.resolve("toto"), "toto");
    }

    #[test]
    fn test_allocator_probes_suffixes_in_order() {
        let mut allocator = NickAllocator::new();
        allocator.claim("toto".to_string(), Uuid::new_v4());
        assert_eq!(allocator.resolve("toto"), "toto_1");

        allocator.claim("toto_1".to_string(), Uuid::new_v4());
        assert_eq!(allocator.resolve("toto"), "toto_2");
    }

    #[test]
    fn test_allocator_reuses_freed_suffixes() {
        let mut allocator = NickAllocator::new();
        allocator.claim("toto".to_string(), Uuid::new_v4());
        allocator.claim("toto_1".to_string(), Uuid::new_v4());
        allocator.claim("toto_2".to_string(), Uuid::new_v4());

        // Freeing an earlier suffix makes the probe hand it out again
        allocator.release("toto_1");
        assert_eq!(allocator.resolve("toto"), "toto_1");
    }

    #[test]
    fn test_allocator_is_case_sensitive() {
        let mut allocator = NickAllocator::new();
        allocator.claim("Toto".to_string(), Uuid::new_v4());
        assert_eq!(allocator.resolve("toto"), "toto");
    }

    #[test]
    fn test_registry_creates_lazily() {
        let mut registry = ChannelRegistry::new();
        assert!(registry.lookup("general").is_none());

        let channel = registry.get_or_create("general");
        assert_eq!(channel.name, "general");
        assert!(!channel.keep);
        assert!(registry.lookup("general").is_some());
    }

    #[test]
    fn test_registry_releases_empty_channels() {
        let mut registry = ChannelRegistry::new();
        registry.get_or_create("general");

        registry.release_if_empty("general", 1);
        assert!(registry.lookup("general").is_some());

        registry.release_if_empty("general", 0);
        assert!(registry.lookup("general").is_none());
    }

    #[test]
    fn test_registry_keeps_permanent_channels() {
        let mut registry = ChannelRegistry::new();
        registry.insert_keep("lobby");

        registry.release_if_empty("lobby", 0);
        let lobby = registry.lookup("lobby").expect("lobby should survive");
        assert!(lobby.keep);
    }

    #[test]
    fn test_membership_keeps_both_sides_in_lockstep() {
        let mut membership = MembershipTracker::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        assert!(membership.join(alice, "general"));
        assert!(membership.join(bob, "general"));
        assert!(membership.join(alice, "random"));

        assert_eq!(membership.member_count("general"), 2);
        let mut alice_channels = membership.channels_of(alice);
        alice_channels.sort();
        assert_eq!(alice_channels, vec!["general", "random"]);

        assert!(membership.leave(alice, "general"));
        assert_eq!(membership.members("general"), vec![bob]);
        assert_eq!(membership.channels_of(alice), vec!["random"]);
    }

    #[test]
    fn test_membership_leave_requires_membership() {
        let mut membership = MembershipTracker::new();
        let alice = Uuid::new_v4();

        assert!(!membership.leave(alice, "general"));

        membership.join(alice, "general");
        assert!(!membership.leave(alice, "random"));
        assert_eq!(membership.member_count("general"), 1);
    }

    #[test]
    fn test_membership_remove_user_clears_every_channel() {
        let mut membership = MembershipTracker::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        membership.join(alice, "a");
        membership.join(alice, "b");
        membership.join(bob, "b");

        let mut left = membership.remove_user(alice);
        left.sort();
        assert_eq!(left, vec!["a", "b"]);
        assert_eq!(membership.member_count("a"), 0);
        assert_eq!(membership.members("b"), vec![bob]);
        assert!(membership.channels_of(alice).is_empty());
    }

    #[test]
    fn test_fanout_preserves_fifo_order_per_recipient() {
        let mut fanout = NoticeFanout::new();
        let bob = Uuid::new_v4();

        let first = Notice::ChannelJoin {
            user: "alice".to_string(),
            channel: "general".to_string(),
        };
        let second = Notice::ChannelMessage {
            user: "alice".to_string(),
            channel: "general".to_string(),
            message: "hi".to_string(),
        };
        fanout.notify(&first, &[bob]);
        fanout.notify(&second, &[bob]);

        assert_eq!(fanout.drain(bob), vec![first, second]);
    }

    #[test]
    fn test_fanout_drain_consumes() {
        let mut fanout = NoticeFanout::new();
        let bob = Uuid::new_v4();
        let notice = Notice::ChannelLeave {
            user: "alice".to_string(),
            channel: "general".to_string(),
        };
        fanout.notify(&notice, &[bob]);

        assert_eq!(fanout.drain(bob).len(), 1);
        assert!(fanout.drain(bob).is_empty());
        assert_eq!(fanout.pending(bob), 0);
    }

    #[test]
    fn test_fanout_reaches_whole_audience() {
        let mut fanout = NoticeFanout::new();
        let bob = Uuid::new_v4();
        let carol = Uuid::new_v4();
        let notice = Notice::ChannelMessage {
            user: "alice".to_string(),
            channel: "general".to_string(),
            message: "hi".to_string(),
        };
        fanout.notify(&notice, &[bob, carol]);

        assert_eq!(fanout.pending(bob), 1);
        assert_eq!(fanout.pending(carol), 1);
    }

    #[test]
    fn test_notice_serialization_tags() {
        let notice = Notice::ChannelMessage {
            user: "alice".to_string(),
            channel: "general".to_string(),
            message: "hi".to_string(),
        };
        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["type"], "channelMessage");
        assert_eq!(json["user"], "alice");
        assert_eq!(json["channel"], "general");
        assert_eq!(json["message"], "hi");

        let join = Notice::ChannelJoin {
            user: "alice".to_string(),
            channel: "general".to_string(),
        };
        assert_eq!(serde_json::to_value(&join).unwrap()["type"], "channelJoin");
    }

    #[test]
    fn test_config_roundtrip_and_validation() {
        let mut config = Config::default();
        config.channels.keep = vec!["lobby".to_string()];
        config.validate().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.listen.port, config.listen.port);
        assert_eq!(loaded.channels.keep, vec!["lobby"]);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let mut config = Config::default();
        config.listen.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.channels.keep = vec!["lobby".to_string(), "lobby".to_string()];
        assert!(config.validate().is_err());
    }
}
