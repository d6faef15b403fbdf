//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn ordering_is_numeric() {
        assert!(Floor(9) > Floor(4));
        assert!(Floor(4).is_above(Floor(1)));
        assert!(!Floor(1).is_above(Floor(1)));
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(7)), 5);
        assert_eq!(Floor(7).distance(Floor(2)), 5);
        assert_eq!(Floor(3).distance(Floor(3)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Floor(7).to_string(), "F7");
        assert_eq!(Floor::GROUND.to_string(), "F0");
    }
}

#[cfg(test)]
mod ids {
    use crate::{CarId, PersonId};

    #[test]
    fn index_roundtrip() {
        let id = CarId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(CarId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CarId::INVALID.0, u32::MAX);
        assert_eq!(PersonId::default(), PersonId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(CarId(1).to_string(), "CarId(1)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(8)), 0);
    }

    #[test]
    fn adding_past_the_end_saturates() {
        assert_eq!(Tick(u64::MAX - 1) + 5, Tick(u64::MAX));
    }
}

#[cfg(test)]
mod config {
    use crate::{Floor, LiftError, SimConfig, Tick};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
    }

    #[test]
    fn floor_bounds() {
        let cfg = SimConfig { num_floors: 5, ..SimConfig::default() };
        assert!(cfg.contains(Floor(4)));
        assert!(!cfg.contains(Floor(5)));
        assert!(matches!(
            cfg.check_floor(Floor(5)),
            Err(LiftError::FloorOutOfRange { num_floors: 5, .. })
        ));
    }

    #[test]
    fn rejects_degenerate_values() {
        let single_floor = SimConfig { num_floors: 1, ..SimConfig::default() };
        assert!(matches!(single_floor.validate(), Err(LiftError::Config(_))));

        let no_cars = SimConfig { car_count: 0, ..SimConfig::default() };
        assert!(no_cars.validate().is_err());

        let bad_prob = SimConfig { spawn_probability: 1.5, ..SimConfig::default() };
        assert!(bad_prob.validate().is_err());

        let frozen = SimConfig { ticks_per_floor: 0, ..SimConfig::default() };
        assert!(frozen.validate().is_err());
    }

    #[test]
    fn trip_must_go_somewhere() {
        let cfg = SimConfig { num_floors: 5, ..SimConfig::default() };
        assert!(cfg.check_trip(Floor(1), Floor(4)).is_ok());
        assert!(matches!(
            cfg.check_trip(Floor(2), Floor(2)),
            Err(LiftError::SameFloorTrip { floor: Floor(2) })
        ));
        assert!(matches!(
            cfg.check_trip(Floor(1), Floor(7)),
            Err(LiftError::FloorOutOfRange { .. })
        ));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000);
            let b: u32 = r2.gen_range(0..1_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(2.0)); // clamped to 1.0
        }
    }

    #[test]
    fn children_are_deterministic() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(1);
        let mut ca = a.child(3);
        let mut cb = b.child(3);
        let x: u64 = ca.gen_range(0..u64::MAX);
        let y: u64 = cb.gen_range(0..u64::MAX);
        assert_eq!(x, y);
    }
}
