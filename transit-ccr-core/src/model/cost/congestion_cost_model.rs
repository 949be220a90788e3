use super::{
    cost_ops, CongestedWeightsConfig, CongestionFunctionSpec, CostModel, CostModelError,
    CONGESTION_ATTRIBUTE,
};
use crate::model::network::SegmentRef;
use uom::si::{f64::Time, time::minute};

/// mode character whose crowding follows the steep power curve by default.
pub const DEFAULT_STEEP_MODE: char = 'p';

/// congestion cost of (non-CCR) congested assignment.
///
/// lines of the steep mode get `0.25 * vcr^8` regardless of seating. all other lines
/// blend seated and standing curves, and the blend is floored at the uncongested
/// baseline before it is normalized.
#[derive(Debug, Clone)]
pub struct CongestionCostModel {
    pub period: Time,
    pub weights: CongestedWeightsConfig,
    pub steep_mode: char,
    /// when true the line's source mode selects the steep curve
    pub use_fares: bool,
}

impl CongestionCostModel {
    pub fn new(period: Time, weights: CongestedWeightsConfig, use_fares: bool) -> Self {
        Self {
            period,
            weights,
            steep_mode: DEFAULT_STEEP_MODE,
            use_fares,
        }
    }

    pub fn with_steep_mode(mut self, steep_mode: char) -> Self {
        self.steep_mode = steep_mode;
        self
    }
}

impl CostModel for CongestionCostModel {
    fn segment_cost(
        &self,
        volume: f64,
        capacity: f64,
        segment: &SegmentRef,
    ) -> Result<f64, CostModelError> {
        if volume <= 0.0 {
            return Ok(0.0);
        }
        if capacity <= 0.0 {
            return Err(CostModelError::NonPositiveCapacity { volume, capacity });
        }
        let line = segment.line();
        let vcr = volume / capacity;
        if line.mode_key(self.use_fares) == Some(self.steep_mode) {
            return Ok(0.25 * vcr.powi(8));
        }
        if line.headway <= 0.0 {
            return Err(CostModelError::DegenerateHeadway {
                line_id: line.id.clone(),
                headway: line.headway,
            });
        }

        let seated_capacity = cost_ops::time_period_capacity(
            line.vehicle.seated_capacity,
            line.headway,
            self.period,
        );
        let (seated_pax, standing_pax) = cost_ops::seated_standing_split(volume, seated_capacity);

        let w = &self.weights;
        let seated_cost = cost_ops::power_law_cost(w.min_seat, w.max_seat, w.power_seat, vcr);
        let standing_cost = cost_ops::power_law_cost(w.min_stand, w.max_stand, w.power_stand, vcr);
        let crowded_cost = (seated_cost * seated_pax + standing_cost * standing_pax) / volume;

        Ok(crowded_cost.max(1.0) - 1.0)
    }

    fn function_spec(&self) -> CongestionFunctionSpec {
        CongestionFunctionSpec::Congestion {
            weights: self.weights,
            steep_mode: self.steep_mode,
            use_fares: self.use_fares,
            assignment_period: self.period.get::<minute>(),
            congestion_attribute: CONGESTION_ATTRIBUTE.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::network::{Line, Segment, Vehicle};

    fn weights() -> CongestedWeightsConfig {
        CongestedWeightsConfig {
            min_seat: 1.0,
            max_seat: 1.4,
            power_seat: 2.2,
            min_stand: 1.4,
            max_stand: 1.6,
            power_stand: 3.4,
        }
    }

    fn line(mode: char, source_mode: Option<char>) -> Line {
        Line {
            id: String::from("L"),
            mode,
            source_mode,
            headway: 10.0,
            vehicle: Vehicle {
                seated_capacity: 50.0,
                total_capacity: 100.0,
            },
            segments: vec![Segment::new(40.0, 40.0, 10.0), Segment::new(0.0, 0.0, 10.0)],
        }
    }

    #[test]
    fn test_non_positive_volume_is_free() {
        let line = line('b', None);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let model = CongestionCostModel::new(Time::new::<minute>(60.0), weights(), false);
        assert_eq!(model.segment_cost(0.0, 100.0, &seg), Ok(0.0));
        assert_eq!(model.segment_cost(-5.0, 100.0, &seg), Ok(0.0));
    }

    #[test]
    fn test_steep_mode_curve() {
        let line = line('p', None);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let model = CongestionCostModel::new(Time::new::<minute>(60.0), weights(), false);
        let cost = model
            .segment_cost(120.0, 100.0, &seg)
            .expect("test invariant failed");
        assert!((cost - 0.25 * 1.2_f64.powi(8)).abs() < 1e-12);
    }

    #[test]
    fn test_steep_mode_uses_source_mode_with_fares() {
        let line = line('x', Some('p'));
        let seg = line.segment_ref(0).expect("test invariant failed");
        let with_fares = CongestionCostModel::new(Time::new::<minute>(60.0), weights(), true)
            .segment_cost(120.0, 100.0, &seg)
            .expect("test invariant failed");
        let without_fares = CongestionCostModel::new(Time::new::<minute>(60.0), weights(), false)
            .segment_cost(120.0, 100.0, &seg)
            .expect("test invariant failed");
        assert!((with_fares - 1.07495).abs() < 1e-4, "found {with_fares}");
        assert!((without_fares - 0.59739).abs() < 1e-4, "found {without_fares}");
    }

    #[test]
    fn test_custom_steep_mode() {
        let line = line('r', None);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let model = CongestionCostModel::new(Time::new::<minute>(60.0), weights(), false)
            .with_steep_mode('r');
        let cost = model
            .segment_cost(50.0, 100.0, &seg)
            .expect("test invariant failed");
        assert!((cost - 0.25 * 0.5_f64.powi(8)).abs() < 1e-12);
    }

    #[test]
    fn test_blend_floors_at_baseline() {
        let line = line('b', None);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let model = CongestionCostModel::new(Time::new::<minute>(60.0), weights(), false);
        let low = model
            .segment_cost(40.0, 100.0, &seg)
            .expect("test invariant failed");
        assert!((low - 0.05328).abs() < 1e-4, "found {low}");
        for step in 1..=300 {
            let cost = model
                .segment_cost(step as f64, 100.0, &seg)
                .expect("test invariant failed");
            assert!(cost >= 0.0);
        }
    }
}
