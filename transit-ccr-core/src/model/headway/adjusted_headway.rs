use super::{HeadwayPolicy, SegmentLoad};

/// growth-limited update of a segment's perceived headway.
///
/// the previous perceived headway grows with the ratio of boardings to available
/// capacity, limited by the policy's growth factor and ceiling, and is never
/// better than the line's nominal headway.
pub fn adjusted_headway(load: &SegmentLoad, previous_headway: f64, policy: &HeadwayPolicy) -> f64 {
    let available_capacity = (load.capacity - load.volume + load.boardings).max(0.0);
    let growth =
        ((load.boardings + 1.0) / (available_capacity + 1.0)).min(policy.max_headway_growth);
    let adjusted = (previous_headway * growth).min(policy.max_headway);
    load.headway.max(adjusted)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_growth_limited() {
        // full vehicle: boardings far exceed available capacity
        let load = SegmentLoad::new(100.0, 60.0, 10.0, 50.0);
        let hdwy = adjusted_headway(&load, 12.0, &HeadwayPolicy::default());
        assert!((hdwy - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_floored_at_nominal_headway() {
        let load = SegmentLoad::new(5.0, 1.0, 10.0, 500.0);
        let hdwy = adjusted_headway(&load, 12.0, &HeadwayPolicy::default());
        assert_eq!(hdwy, 10.0);
    }

    #[test]
    fn test_capped_at_max_headway() {
        let load = SegmentLoad::new(100.0, 60.0, 10.0, 50.0);
        let hdwy = adjusted_headway(&load, 900.0, &HeadwayPolicy::default());
        assert_eq!(hdwy, 999.98);
    }

    #[test]
    fn test_bounds_hold_across_inputs() {
        let policy = HeadwayPolicy::default();
        for nominal in [0.5, 5.0, 30.0, 120.0, 999.0] {
            for previous in [0.0, 1.0, 15.0, 400.0, 5000.0] {
                for volume in [0.0, 20.0, 80.0, 400.0] {
                    for boardings in [0.0, 5.0, 50.0] {
                        for capacity in [0.0, 10.0, 100.0, 1000.0] {
                            let load = SegmentLoad::new(volume, boardings, nominal, capacity);
                            let hdwy = adjusted_headway(&load, previous, &policy);
                            assert!(hdwy >= nominal);
                            assert!(hdwy <= policy.max_headway);
                        }
                    }
                }
            }
        }
    }
}
