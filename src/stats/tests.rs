#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::swarm_registry::SwarmRegistry;

    #[test]
    fn test_apply_increments_and_decrements() {
        let stats = StatsAtomics::default();
        stats.apply(StatsEvent::Tcp4AnnouncesHandled, 3);
        stats.apply(StatsEvent::Tcp4AnnouncesHandled, -1);
        stats.apply(StatsEvent::Tcp6Failure, 0);
        assert_eq!(stats.load(StatsEvent::Tcp4AnnouncesHandled), 2);
        assert_eq!(stats.load(StatsEvent::Tcp6Failure), 0);
    }

    #[test]
    fn test_set_overwrites_counter() {
        let stats = StatsAtomics::new(1_700_000_000);
        stats.apply(StatsEvent::PeersEvicted, 5);
        stats.set(StatsEvent::PeersEvicted, 1);
        assert_eq!(stats.load(StatsEvent::PeersEvicted), 1);
        assert_eq!(stats.started.load(std::sync::atomic::Ordering::SeqCst), 1_700_000_000);
    }

    #[test]
    fn test_registry_stats_include_live_totals() {
        let registry = SwarmRegistry::new(Arc::new(Configuration::init()));
        registry.announce_peer(&InfoHash::from("a"), PeerId::from("p1"), String::from("1.2.3.4"), String::from("1"), 100);
        registry.announce_peer(&InfoHash::from("a"), PeerId::from("p2"), String::from("1.2.3.5"), String::from("2"), 100);
        registry.announce_peer(&InfoHash::from("b"), PeerId::from("p1"), String::from("1.2.3.4"), String::from("1"), 100);
        registry.update_stats(StatsEvent::Tcp4AnnouncesHandled, 3);
        let stats = registry.get_stats();
        assert_eq!(stats.swarms, 2);
        assert_eq!(stats.peers, 3);
        assert_eq!(stats.swarms_created, 2);
        assert_eq!(stats.tcp4_announces_handled, 3);
        assert!(stats.started > 0);
    }
}
