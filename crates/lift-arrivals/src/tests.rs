//! Unit tests for lift-arrivals.

use lift_core::{Floor, SimConfig, SimRng, Tick};

use crate::{ArrivalError, ArrivalProcess, PersonGenerator, ScriptedArrivals, WeightedTable};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(floors: u32, max_new_people: u32) -> SimConfig {
    SimConfig { max_new_people, ..SimConfig::with_floors(floors) }
}

// ── Person ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod person {
    use super::*;
    use crate::Person;
    use lift_core::PersonId;

    #[test]
    fn wait_advances_one_counter() {
        let mut p = Person::new(PersonId(0), Floor(3), Floor(0), Tick(0));
        p.wait(false);
        p.wait(false);
        p.wait(true);
        assert_eq!(p.floor_wait, 2);
        assert_eq!(p.elevator_wait, 1);
        assert_eq!(p.total_wait(), 3);
    }
}

// ── WeightedTable ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod weighted_table {
    use super::*;

    #[test]
    fn all_zero_weights_are_degenerate() {
        let err = WeightedTable::from_weights([0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ArrivalError::SamplingDegenerate(_)));
    }

    #[test]
    fn empty_table_is_degenerate() {
        assert!(WeightedTable::from_weights(std::iter::empty()).is_err());
    }

    #[test]
    fn negative_or_nan_weight_is_degenerate() {
        assert!(WeightedTable::from_weights([1.0, -0.5]).is_err());
        assert!(WeightedTable::from_weights([1.0, f64::NAN]).is_err());
        assert!(WeightedTable::from_weights([1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn weights_recovered_from_running_totals() {
        let t = WeightedTable::from_weights([0.5, 0.25, 0.25]).unwrap();
        assert_eq!(t.len(), 3);
        assert!((t.total() - 1.0).abs() < 1e-12);
        assert!((t.weight(1).unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(t.weight(3), None);
    }

    #[test]
    fn zero_weight_slots_never_drawn() {
        let t = WeightedTable::from_weights([0.0, 1.0, 0.0, 2.0, 0.0]).unwrap();
        let mut rng = SimRng::new(5);
        for _ in 0..5_000 {
            let i = t.sample(&mut rng);
            assert!(i == 1 || i == 3, "drew zero-weight slot {i}");
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        let t = WeightedTable::from_weights([3.0, 1.0]).unwrap();
        let mut rng = SimRng::new(9);
        let n = 40_000;
        let zeros = (0..n).filter(|_| t.sample(&mut rng) == 0).count();
        let p = zeros as f64 / n as f64;
        assert!((p - 0.75).abs() < 0.02, "p = {p}");
    }

    #[test]
    fn excluded_slot_never_drawn() {
        let t = WeightedTable::from_weights([1.0, 0.5, 0.2, 0.1]).unwrap();
        let mut rng = SimRng::new(17);
        for excluded in 0..4 {
            for _ in 0..2_000 {
                assert_ne!(t.sample_excluding(&mut rng, excluded).unwrap(), excluded);
            }
        }
    }

    #[test]
    fn excluding_only_positive_slot_is_degenerate() {
        let t = WeightedTable::from_weights([0.0, 4.0, 0.0]).unwrap();
        let mut rng = SimRng::new(1);
        let err = t.sample_excluding(&mut rng, 1).unwrap_err();
        assert!(matches!(err, ArrivalError::SamplingDegenerate(_)));
    }

    #[test]
    fn exclusion_renormalises_the_rest() {
        // Excluding slot 0 leaves weights 1 : 1 on slots 1 and 2.
        let t = WeightedTable::from_weights([8.0, 1.0, 1.0]).unwrap();
        let mut rng = SimRng::new(23);
        let n = 20_000;
        let ones = (0..n)
            .filter(|_| t.sample_excluding(&mut rng, 0).unwrap() == 1)
            .count();
        let p = ones as f64 / n as f64;
        assert!((p - 0.5).abs() < 0.02, "p = {p}");
    }
}

// ── Exponential countdown ─────────────────────────────────────────────────────

#[cfg(test)]
mod countdown {
    use super::*;
    use crate::exponential_countdown;

    #[test]
    fn non_positive_rate_is_degenerate() {
        let mut rng = SimRng::new(0);
        assert!(exponential_countdown(&mut rng, 0.0).is_err());
        assert!(exponential_countdown(&mut rng, -1.0).is_err());
        assert!(exponential_countdown(&mut rng, f64::NAN).is_err());
    }

    #[test]
    fn mean_matches_rate() {
        // floor(Exp(λ)) has mean 1 / (e^λ - 1); for λ = 0.1 that is ≈ 9.508.
        let mut rng = SimRng::new(77);
        let n = 50_000;
        let sum: u64 = (0..n).map(|_| exponential_countdown(&mut rng, 0.1).unwrap()).sum();
        let mean = sum as f64 / n as f64;
        let expected = 1.0 / (0.1f64.exp() - 1.0);
        assert!((mean - expected).abs() < 0.3, "mean = {mean}, expected ≈ {expected}");
    }

    #[test]
    fn high_rate_is_mostly_zero() {
        let mut rng = SimRng::new(3);
        let zeros = (0..1_000)
            .filter(|_| exponential_countdown(&mut rng, 50.0).unwrap() == 0)
            .count();
        assert!(zeros > 990);
    }
}

// ── PersonGenerator ───────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;
    use crate::floor_weight;

    #[test]
    fn weights_decay_with_floor_squared() {
        assert_eq!(floor_weight(Floor(0)), 1.0);
        assert_eq!(floor_weight(Floor(1)), 0.5);
        assert_eq!(floor_weight(Floor(3)), 0.1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = SimRng::new(0);
        assert!(PersonGenerator::new(&config(1, 3), &mut rng).is_err());
        assert!(PersonGenerator::new(&config(5, 0), &mut rng).is_err());
    }

    #[test]
    fn desired_floor_never_equals_origin() {
        for floors in [2, 3, 10, 50] {
            let mut rng = SimRng::new(u64::from(floors));
            let mut g = PersonGenerator::new(&config(floors, 4), &mut rng).unwrap();
            for t in 0..300 {
                let arrivals = g.generate(Tick(t), &mut rng).unwrap();
                for p in &arrivals.people {
                    assert_ne!(p.origin, p.desired_floor);
                    assert!(p.desired_floor.0 < floors);
                }
            }
        }
    }

    #[test]
    fn two_floor_building_always_crosses() {
        let mut rng = SimRng::new(8);
        let g = PersonGenerator::new(&config(2, 1), &mut rng).unwrap();
        for _ in 0..500 {
            assert_eq!(g.sample_destination(Floor(0), &mut rng).unwrap(), Floor(1));
            assert_eq!(g.sample_destination(Floor(1), &mut rng).unwrap(), Floor(0));
        }
    }

    #[test]
    fn batch_sizes_within_bounds() {
        let mut rng = SimRng::new(21);
        let mut g = PersonGenerator::new(&config(8, 3), &mut rng).unwrap();
        for t in 0..500 {
            let a = g.generate(Tick(t), &mut rng).unwrap();
            for &floor in &a.requests {
                let n = a.people.iter().filter(|p| p.origin == floor).count();
                assert!((1..=3).contains(&n), "{n} people on {floor}");
            }
            // Every person's origin is among the requests.
            assert!(a.people.iter().all(|p| a.requests.contains(&p.origin)));
        }
    }

    #[test]
    fn requests_ascending_and_distinct() {
        let mut rng = SimRng::new(2);
        let mut g = PersonGenerator::new(&config(6, 2), &mut rng).unwrap();
        for t in 0..200 {
            let a = g.generate(Tick(t), &mut rng).unwrap();
            assert!(a.requests.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn countdown_decrements_until_arrival() {
        let mut rng = SimRng::new(4);
        let mut g = PersonGenerator::new(&config(30, 1), &mut rng).unwrap();
        // The top floor has a tiny rate; find a tick where it is counting down.
        let top = Floor(29);
        let before = g.countdown(top).unwrap();
        if before > 0 {
            let a = g.generate(Tick(0), &mut rng).unwrap();
            assert!(!a.requests.contains(&top));
            assert_eq!(g.countdown(top), Some(before - 1));
        }
    }

    #[test]
    fn countdown_outside_building_is_none() {
        let mut rng = SimRng::new(4);
        let g = PersonGenerator::new(&config(4, 1), &mut rng).unwrap();
        assert!(g.countdown(Floor(3)).is_some());
        assert_eq!(g.countdown(Floor(4)), None);
    }

    #[test]
    fn redrawn_countdown_is_at_least_one() {
        let mut rng = SimRng::new(6);
        let mut g = PersonGenerator::new(&config(4, 1), &mut rng).unwrap();
        for t in 0..500 {
            let a = g.generate(Tick(t), &mut rng).unwrap();
            for &floor in &a.requests {
                assert!(g.countdown(floor).unwrap() >= 1);
            }
        }
    }

    #[test]
    fn lobby_is_busiest() {
        let mut rng = SimRng::new(10);
        let mut g = PersonGenerator::new(&config(10, 1), &mut rng).unwrap();
        let mut per_floor = [0usize; 10];
        for t in 0..2_000 {
            for p in g.generate(Tick(t), &mut rng).unwrap().people {
                per_floor[p.origin.index()] += 1;
            }
        }
        assert!(per_floor[0] > per_floor[3]);
        assert!(per_floor[3] >= per_floor[9]);
    }

    #[test]
    fn person_ids_are_unique_and_sequential() {
        let mut rng = SimRng::new(13);
        let mut g = PersonGenerator::new(&config(5, 3), &mut rng).unwrap();
        let mut ids = Vec::new();
        for t in 0..100 {
            ids.extend(g.generate(Tick(t), &mut rng).unwrap().people.iter().map(|p| p.id.0));
        }
        let expected: Vec<u64> = (0..ids.len() as u64).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn same_seed_same_arrivals() {
        let run = |seed| {
            let mut rng = SimRng::new(seed);
            let mut g = PersonGenerator::new(&config(12, 3), &mut rng).unwrap();
            (0..50)
                .map(|t| g.generate(Tick(t), &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }
}

// ── ScriptedArrivals ──────────────────────────────────────────────────────────

#[cfg(test)]
mod scripted {
    use super::*;

    #[test]
    fn releases_people_at_their_tick() {
        let mut s = ScriptedArrivals::new(5)
            .with(Tick(2), Floor(3), Floor(0))
            .unwrap()
            .with(Tick(2), Floor(1), Floor(4))
            .unwrap();
        let mut rng = SimRng::new(0);

        assert!(s.generate(Tick(0), &mut rng).unwrap().is_empty());
        assert!(s.generate(Tick(1), &mut rng).unwrap().is_empty());
        let a = s.generate(Tick(2), &mut rng).unwrap();
        assert_eq!(a.people.len(), 2);
        assert_eq!(a.requests, vec![Floor(1), Floor(3)]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn same_floor_trip_rejected() {
        let mut s = ScriptedArrivals::new(5);
        assert!(s.push(Tick(0), Floor(2), Floor(2)).is_err());
    }

    #[test]
    fn out_of_range_floor_rejected() {
        let mut s = ScriptedArrivals::new(5);
        assert!(s.push(Tick(0), Floor(5), Floor(0)).is_err());
        assert!(s.push(Tick(0), Floor(0), Floor(9)).is_err());
        assert_eq!(s.pending(), 0);
    }
}
