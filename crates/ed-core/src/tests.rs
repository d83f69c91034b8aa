//! Unit tests for ed-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EmergencyId, NodeId, UnitId};

    #[test]
    fn index_roundtrip() {
        let id = UnitId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(UnitId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EmergencyId(0) < EmergencyId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(UnitId(7).to_string(), "UnitId(7)");
    }

    #[test]
    fn serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&EmergencyId(12)).unwrap(), "12");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Point};

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(12.5, 7.0);
        let b = Point::new(180.0, 33.3);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn enclosing_bounds() {
        let b = Bounds::enclosing([
            Point::new(5.0, 9.0),
            Point::new(-1.0, 20.0),
            Point::new(3.0, 0.0),
        ])
        .unwrap();
        assert_eq!(b.min, Point::new(-1.0, 0.0));
        assert_eq!(b.max, Point::new(5.0, 20.0));
        assert!(b.contains(Point::new(0.0, 10.0)));
        assert!(!b.contains(Point::new(6.0, 10.0)));
    }

    #[test]
    fn enclosing_empty_is_none() {
        assert!(Bounds::enclosing(std::iter::empty()).is_none());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn ordering_and_arithmetic() {
        let a = SimTime::from_secs(10.0);
        let b = a + 2.5;
        assert!(b > a);
        assert_eq!(b - a, 2.5);
        assert_eq!(a.since(b), -2.5);
        assert_eq!(SimTime::ZERO.max(a), a);
    }

    #[test]
    fn clock_never_rewinds() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime::from_secs(30.0));
        clock.advance_to(SimTime::from_secs(10.0));
        assert_eq!(clock.now(), SimTime::from_secs(30.0));
        assert_eq!(clock.events(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(SimTime::from_secs(12.0).to_string(), "t=12.0s");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        for _ in 0..16 {
            assert_eq!(a.uniform(0.0, 200.0), b.uniform(0.0, 200.0));
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            let v = rng.uniform(200.0, 50.0);
            assert!((50.0..=200.0).contains(&v));
        }
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
    }
}

#[cfg(test)]
mod capability {
    use crate::{CapabilityTable, Category, CategorySet, UnitKind};

    #[test]
    fn default_table() {
        let t = CapabilityTable::default();
        assert!(t.can_serve(UnitKind::Fire, Category::Fire));
        assert!(t.can_serve(UnitKind::Fire, Category::Medical));
        assert!(!t.can_serve(UnitKind::Fire, Category::Police));
        assert!(t.can_serve(UnitKind::Police, Category::Police));
        assert!(!t.can_serve(UnitKind::Police, Category::Medical));
        assert!(t.can_serve(UnitKind::Medical, Category::Medical));
        assert!(t.can_serve(UnitKind::Medical, Category::Police));
    }

    #[test]
    fn missing_kind_serves_nothing() {
        let t = CapabilityTable::empty().with(UnitKind::Fire, &[Category::Fire]);
        assert!(t.serves(UnitKind::Police).is_empty());
        assert!(!t.can_serve(UnitKind::Medical, Category::Medical));
    }

    #[test]
    fn category_set_ops() {
        let mut s = CategorySet::of(&[Category::Police]);
        s.insert(Category::Fire);
        s.insert(Category::Fire);
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![Category::Fire, Category::Police]);
    }

    #[test]
    fn parses_from_json() {
        let t: CapabilityTable =
            serde_json::from_str(r#"{ "fire": ["fire"], "paramedic": ["medical"] }"#).unwrap();
        assert!(t.can_serve(UnitKind::Medical, Category::Medical));
        assert!(!t.can_serve(UnitKind::Fire, Category::Medical));
    }

    #[test]
    fn kind_names() {
        assert_eq!("Hospital".parse::<UnitKind>().unwrap(), UnitKind::Medical);
        assert_eq!("police".parse::<Category>().unwrap(), Category::Police);
        assert!("coast guard".parse::<UnitKind>().is_err());
        assert_eq!(UnitKind::Police.letter(), 'P');
    }
}

#[cfg(test)]
mod severity {
    use crate::{HandlingRule, RewardRule, SeverityWeights, TierLookup, TierTable, UrgencyTier};

    fn tier(n: u8) -> UrgencyTier {
        UrgencyTier::new(n).unwrap()
    }

    #[test]
    fn tier_bounds() {
        assert!(UrgencyTier::new(0).is_none());
        assert!(UrgencyTier::new(11).is_none());
        assert!(UrgencyTier::try_from(10u8).is_ok());
    }

    #[test]
    fn listed_windows_map_exactly() {
        let t = TierTable::default();
        assert_eq!(t.tier_for_window(30.0), tier(10));
        assert_eq!(t.tier_for_window(60.0), tier(8));
        assert_eq!(t.tier_for_window(120.0), tier(5));
        assert_eq!(t.tier_for_window(300.0), tier(3));
        assert_eq!(t.tier_for_window(600.0), tier(1));
    }

    #[test]
    fn unlisted_window_takes_fallback() {
        let t = TierTable::default();
        assert_eq!(t.tier_for_window(45.0), tier(3));
        assert_eq!(t.tier_for_window(90.0), tier(3));
        assert_eq!(t.tier_for_window(10_000.0), tier(3));
        assert_eq!(t.with_fallback(tier(7)).tier_for_window(45.0), tier(7));
    }

    #[test]
    fn step_lookup_rounds_up() {
        let t = TierTable::default().with_lookup(TierLookup::Step);
        assert_eq!(t.tier_for_window(20.0), tier(10));
        assert_eq!(t.tier_for_window(30.0), tier(10));
        assert_eq!(t.tier_for_window(45.0), tier(8));
        assert_eq!(t.tier_for_window(90.0), tier(5));
        assert_eq!(t.tier_for_window(301.0), tier(1));
        assert_eq!(t.tier_for_window(10_000.0), tier(1));
    }

    #[test]
    fn tier_table_from_json() {
        let t: TierTable = serde_json::from_str(
            r#"{ "rows": [{ "max_window_secs": 90, "tier": 6 }], "lookup": "step", "fallback": 2 }"#,
        )
        .unwrap();
        assert_eq!(t.lookup, TierLookup::Step);
        assert_eq!(t.tier_for_window(10.0), tier(6));
        assert_eq!(t.tier_for_window(900.0), tier(6));
        let empty: TierTable = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TierTable::default());
    }

    #[test]
    fn weights_are_monotone() {
        let w = SeverityWeights::default();
        assert!(w.is_monotone());
        assert_eq!(w.weight(tier(1)), 1.0);
        assert_eq!(w.weight(tier(10)), 50.0);
    }

    #[test]
    fn weights_need_ten_entries() {
        let r: Result<SeverityWeights, _> = serde_json::from_str("[1.0, 2.0]");
        assert!(r.is_err());
    }

    #[test]
    fn reward_shrinks_with_window() {
        let r = RewardRule::default();
        assert_eq!(r.reward(30.0), 97.0);
        assert_eq!(r.reward(125.0), 88.0);
        assert_eq!(r.reward(5_000.0), 10.0);
    }

    #[test]
    fn handling_time_by_tier() {
        let h = HandlingRule::default();
        assert_eq!(h.handling_secs(tier(10)), 30.0);
        assert_eq!(h.handling_secs(tier(9)), 45.0);
        assert_eq!(h.handling_secs(tier(8)), 45.0);
        assert_eq!(h.handling_secs(tier(3)), 60.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{DispatchConfig, PolicyKind, ServiceModel, UrgencyTier};

    #[test]
    fn empty_document_is_default() {
        let c = DispatchConfig::from_json_str("{}").unwrap();
        assert_eq!(c, DispatchConfig::default());
        assert_eq!(c.policy, PolicyKind::BenefitPerCost);
        assert_eq!(c.service_model, ServiceModel::Instant);
        assert!(c.budget.include_return_leg);
        assert!(c.budget.max_route_cost.is_none());
    }

    #[test]
    fn partial_override() {
        let c = DispatchConfig::from_json_str(
            r#"{ "seed": 7, "policy": "deadline_aware", "budget": { "max_route_cost": 250.0 } }"#,
        )
        .unwrap();
        assert_eq!(c.seed, 7);
        assert_eq!(c.policy, PolicyKind::DeadlineAware);
        assert_eq!(c.budget.max_route_cost, Some(250.0));
        assert!(c.budget.include_return_leg);
        assert_eq!(c.unit_speed, 1.0);
    }

    #[test]
    fn rejects_bad_speed() {
        assert!(DispatchConfig::from_json_str(r#"{ "unit_speed": 0.0 }"#).is_err());
        assert!(DispatchConfig::from_json_str(r#"{ "budget": { "max_route_cost": -1.0 } }"#).is_err());
    }

    #[test]
    fn rejects_decreasing_weights() {
        let json = r#"{ "severity_weights": [5, 4, 3, 2, 1, 1, 1, 1, 1, 1] }"#;
        assert!(DispatchConfig::from_json_str(json).is_err());
    }

    #[test]
    fn benefit_per_cost_preset() {
        let c = DispatchConfig::benefit_per_cost();
        assert_eq!(c.policy, PolicyKind::BenefitPerCost);
        assert_eq!(c.budget.max_route_cost, Some(2000.0));
        assert!(c.budget.include_return_leg);
        assert!(c.ignores(UrgencyTier::MIN));
        assert!(!c.ignores(UrgencyTier::new(2).unwrap()));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn nearest_policy_parses() {
        let c = DispatchConfig::from_json_str(r#"{ "policy": "nearest" }"#).unwrap();
        assert_eq!(c.policy, PolicyKind::Nearest);
    }

    #[test]
    fn ignore_threshold() {
        let mut c = DispatchConfig::default();
        assert!(!c.ignores(UrgencyTier::MIN));
        c.ignore_tier_at_or_below = 3;
        assert!(c.ignores(UrgencyTier::new(3).unwrap()));
        assert!(!c.ignores(UrgencyTier::new(4).unwrap()));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{ "service_model": "handle_and_return" }"#).unwrap();
        let c = DispatchConfig::from_json_path(&path).unwrap();
        assert_eq!(c.service_model, ServiceModel::HandleAndReturn);
    }
}
