use std::collections::BTreeMap;

use super::{EawtWeightsConfig, HeadwayError, LineAggregates, SegmentLoad};
use crate::model::network::SegmentRef;

/// mode character -> eawt scaling factor.
pub type EawtFactors = BTreeMap<char, f64>;

/// nominal headways below this are treated as degenerate schedules.
pub const DEGENERATE_HEADWAY: f64 = 0.1;
/// headway substituted for a degenerate schedule.
pub const HEADWAY_SENTINEL: f64 = 9999.0;

/// scaling factor for a mode key. a line without a mode key scales by 1, while a
/// mode that is missing from the factor table is a configuration error.
pub fn eawt_factor(mode_key: Option<char>, factors: &EawtFactors) -> Result<f64, HeadwayError> {
    match mode_key {
        None => Ok(1.0),
        Some(mode) => factors
            .get(&mode)
            .copied()
            .ok_or(HeadwayError::MissingEawtFactor(mode)),
    }
}

/// extra added wait time of a segment.
///
/// `aggregates` must have been computed from the segment's own line.
pub fn extra_added_wait_time(
    segment: &SegmentRef,
    aggregates: &LineAggregates,
    load: &SegmentLoad,
    weights: &EawtWeightsConfig,
    factors: &EawtFactors,
    use_fares: bool,
) -> Result<f64, HeadwayError> {
    let line = segment.line();
    if load.capacity.is_nan() || load.capacity <= 0.0 {
        return Err(HeadwayError::NonPositiveCapacity {
            line_id: line.id.clone(),
            capacity: load.capacity,
        });
    }
    let headway = if load.headway >= DEGENERATE_HEADWAY {
        load.headway
    } else {
        HEADWAY_SENTINEL
    };
    let exit_proportion =
        aggregates
            .exit_proportion(segment.index())
            .ok_or_else(|| HeadwayError::SegmentOutOfRange {
                line_id: line.id.clone(),
                index: segment.index(),
            })?;

    let eawt = weights.constant
        + weights.weight_inverse_headway * (1.0 / headway)
        + weights.vcr * (load.volume / load.capacity)
        + weights.exit_proportion * exit_proportion;

    let factor = eawt_factor(line.mode_key(use_fares), factors)?;
    Ok(eawt * factor)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::network::{Line, Segment, Vehicle};

    fn weights() -> EawtWeightsConfig {
        EawtWeightsConfig {
            constant: 0.259625,
            weight_inverse_headway: 1.612019,
            vcr: 0.005274,
            exit_proportion: 0.591765,
        }
    }

    fn line(mode: char, source_mode: Option<char>, headway: f64) -> Line {
        Line {
            id: String::from("L"),
            mode,
            source_mode,
            headway,
            vehicle: Vehicle {
                seated_capacity: 50.0,
                total_capacity: 100.0,
            },
            segments: vec![
                Segment::new(10.0, 10.0, headway),
                Segment::new(15.0, 8.0, headway),
                Segment::new(0.0, 0.0, headway),
            ],
        }
    }

    #[test]
    fn test_eawt_terms() {
        let line = line('b', None, 10.0);
        let agg = LineAggregates::from_line(&line);
        let seg = line.segment_ref(1).expect("test invariant failed");
        let factors = EawtFactors::from([('b', 2.0)]);
        let load = SegmentLoad::from_segment(&seg, 150.0);
        let eawt = extra_added_wait_time(&seg, &agg, &load, &weights(), &factors, false)
            .expect("test invariant failed");
        let w = weights();
        let expected = 2.0
            * (w.constant
                + w.weight_inverse_headway / 10.0
                + w.vcr * (15.0 / 150.0)
                + w.exit_proportion * (3.0 / 18.0));
        assert!((eawt - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_headway_uses_sentinel() {
        let line = line('b', None, 0.05);
        let agg = LineAggregates::from_line(&line);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let factors = EawtFactors::from([('b', 1.0)]);
        let w = EawtWeightsConfig {
            constant: 0.0,
            weight_inverse_headway: 1.0,
            vcr: 0.0,
            exit_proportion: 0.0,
        };
        let load = SegmentLoad::from_segment(&seg, 100.0);
        let eawt = extra_added_wait_time(&seg, &agg, &load, &w, &factors, false)
            .expect("test invariant failed");
        assert!((eawt - 1.0 / HEADWAY_SENTINEL).abs() < 1e-15);
    }

    #[test]
    fn test_missing_mode_factor_fails() {
        let line = line('b', None, 10.0);
        let agg = LineAggregates::from_line(&line);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let factors = EawtFactors::from([('r', 1.0)]);
        let load = SegmentLoad::from_segment(&seg, 100.0);
        let result = extra_added_wait_time(&seg, &agg, &load, &weights(), &factors, false);
        assert_eq!(result, Err(HeadwayError::MissingEawtFactor('b')));
    }

    #[test]
    fn test_fares_use_source_mode_key() {
        let factors = EawtFactors::from([('b', 3.0)]);
        assert_eq!(eawt_factor(line('x', Some('b'), 10.0).mode_key(true), &factors), Ok(3.0));
        // no source mode: empty key scales by 1
        assert_eq!(eawt_factor(line('x', None, 10.0).mode_key(true), &factors), Ok(1.0));
    }

    #[test]
    fn test_non_positive_capacity_fails() {
        let line = line('b', None, 10.0);
        let agg = LineAggregates::from_line(&line);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let factors = EawtFactors::from([('b', 1.0)]);
        let load = SegmentLoad::from_segment(&seg, 0.0);
        let result = extra_added_wait_time(&seg, &agg, &load, &weights(), &factors, false);
        assert!(matches!(result, Err(HeadwayError::NonPositiveCapacity { .. })));
    }
}
