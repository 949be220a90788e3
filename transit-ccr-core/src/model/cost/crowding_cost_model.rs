use super::{
    cost_ops, CcrWeightsConfig, CongestionFunctionSpec, CostModel, CostModelError,
    CONGESTION_ATTRIBUTE,
};
use crate::model::network::SegmentRef;
use uom::si::{f64::Time, time::minute};

/// crowding cost of capacitated (CCR) assignment. blends seated and standing power-law
/// curves and clips the normalized result at zero.
#[derive(Debug, Clone)]
pub struct CrowdingCostModel {
    pub period: Time,
    pub weights: CcrWeightsConfig,
}

impl CrowdingCostModel {
    pub fn new(period: Time, weights: CcrWeightsConfig) -> Self {
        Self {
            period,
            weights,
        }
    }
}

impl CostModel for CrowdingCostModel {
    fn segment_cost(
        &self,
        volume: f64,
        capacity: f64,
        segment: &SegmentRef,
    ) -> Result<f64, CostModelError> {
        if volume == 0.0 {
            return Ok(0.0);
        }
        if capacity <= 0.0 {
            return Err(CostModelError::NonPositiveCapacity { volume, capacity });
        }
        let line = segment.line();
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
        let vcr = volume / capacity;
        let seated_cost = cost_ops::power_law_cost(w.min_seat, w.max_seat, w.power_seat, vcr);
        let standing_cost = cost_ops::power_law_cost(w.min_stand, w.max_stand, w.power_stand, vcr);

        let crowded_cost = (seated_cost * seated_pax + standing_cost * standing_pax)
            / (volume + cost_ops::CROWDING_EPSILON);
        Ok((crowded_cost - 1.0).max(0.0))
    }

    fn function_spec(&self) -> CongestionFunctionSpec {
        CongestionFunctionSpec::Crowding {
            weights: self.weights,
            assignment_period: self.period.get::<minute>(),
            congestion_attribute: CONGESTION_ATTRIBUTE.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::network::{Line, Segment, Vehicle};

    fn weights() -> CcrWeightsConfig {
        CcrWeightsConfig {
            min_seat: 1.0,
            max_seat: 1.4,
            power_seat: 2.2,
            min_stand: 1.4,
            max_stand: 1.6,
            power_stand: 3.4,
        }
    }

    fn line(headway: f64) -> Line {
        Line {
            id: String::from("L"),
            mode: 'b',
            source_mode: None,
            headway,
            vehicle: Vehicle {
                seated_capacity: 50.0,
                total_capacity: 100.0,
            },
            segments: vec![
                Segment::new(40.0, 40.0, headway),
                Segment::new(80.0, 40.0, headway),
                Segment::new(120.0, 40.0, headway),
            ],
        }
    }

    #[test]
    fn test_zero_volume_is_free() {
        let line = line(10.0);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let model = CrowdingCostModel::new(Time::new::<minute>(60.0), weights());
        assert_eq!(model.segment_cost(0.0, 100.0, &seg), Ok(0.0));
        // zero volume short-circuits before the capacity check
        assert_eq!(model.segment_cost(0.0, 0.0, &seg), Ok(0.0));
    }

    #[test]
    fn test_non_negative_and_non_decreasing() {
        let line = line(10.0);
        let seg = line.segment_ref(1).expect("test invariant failed");
        let model = CrowdingCostModel::new(Time::new::<minute>(60.0), weights());
        let mut prev = 0.0;
        for step in 0..=300 {
            let volume = step as f64;
            let cost = model
                .segment_cost(volume, 100.0, &seg)
                .expect("test invariant failed");
            assert!(cost >= 0.0, "negative cost {cost} at volume {volume}");
            assert!(
                cost >= prev - 1e-12,
                "cost decreased from {prev} to {cost} at volume {volume}"
            );
            prev = cost;
        }
    }

    #[test]
    fn test_known_values() {
        let line = line(10.0);
        let seg = line.segment_ref(2).expect("test invariant failed");
        let model = CrowdingCostModel::new(Time::new::<minute>(60.0), weights());
        let low = model
            .segment_cost(40.0, 100.0, &seg)
            .expect("test invariant failed");
        let high = model
            .segment_cost(120.0, 100.0, &seg)
            .expect("test invariant failed");
        assert!((low - 0.05302).abs() < 1e-4, "found {low}");
        assert!((high - 0.59726).abs() < 1e-4, "found {high}");
    }

    #[test]
    fn test_standing_passengers_cost_more() {
        // a short period shrinks seated capacity to 50 passengers, so 70 of 120 stand
        let mut line = line(60.0);
        line.vehicle.seated_capacity = 50.0;
        let seg = line.segment_ref(2).expect("test invariant failed");
        let standing = CrowdingCostModel::new(Time::new::<minute>(1.0), weights())
            .segment_cost(120.0, 100.0, &seg)
            .expect("test invariant failed");
        let seated = CrowdingCostModel::new(Time::new::<minute>(60.0), weights())
            .segment_cost(120.0, 100.0, &seg)
            .expect("test invariant failed");
        assert!((standing - 0.69896).abs() < 1e-4, "found {standing}");
        assert!(standing > seated);
    }

    #[test]
    fn test_non_positive_capacity_is_an_error() {
        let line = line(10.0);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let model = CrowdingCostModel::new(Time::new::<minute>(60.0), weights());
        assert!(matches!(
            model.segment_cost(10.0, 0.0, &seg),
            Err(CostModelError::NonPositiveCapacity { .. })
        ));
    }

    #[test]
    fn test_zero_headway_is_an_error() {
        let line = line(0.0);
        let seg = line.segment_ref(0).expect("test invariant failed");
        let model = CrowdingCostModel::new(Time::new::<minute>(60.0), weights());
        assert!(matches!(
            model.segment_cost(10.0, 100.0, &seg),
            Err(CostModelError::DegenerateHeadway { .. })
        ));
    }
}
