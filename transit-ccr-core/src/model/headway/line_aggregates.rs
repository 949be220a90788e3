use crate::model::network::{Line, SegmentIdx};

/// lines whose boardings sum below this are treated as having no ridership.
pub const MIN_TOTAL_OFFS: f64 = 0.001;
/// total alightings substituted for a line with no ridership.
pub const TOTAL_OFFS_SENTINEL: f64 = 9999.0;

/// alighting statistics of one line, computed in a single pass over its segments
/// in line order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineAggregates {
    total_offs: f64,
    offs_thru: Vec<f64>,
}

impl LineAggregates {
    pub fn from_line(line: &Line) -> LineAggregates {
        let boardings: f64 = line.segments.iter().map(|s| s.transit_boardings).sum();
        let total_offs = if boardings >= MIN_TOTAL_OFFS {
            boardings
        } else {
            TOTAL_OFFS_SENTINEL
        };

        // alightings at segment i: v[i-1] - v[i] + b[i]; nothing alights at the first
        let mut offs_thru = Vec::with_capacity(line.segments.len());
        let mut running = 0.0;
        for (idx, this) in line.segments.iter().enumerate() {
            if let Some(prev) = idx.checked_sub(1).and_then(|p| line.segments.get(p)) {
                running += prev.transit_volume - this.transit_volume + this.transit_boardings;
            }
            offs_thru.push(running);
        }

        LineAggregates {
            total_offs,
            offs_thru,
        }
    }

    /// total alightings of the line, or the sentinel when the line carries nobody.
    pub fn total_offs(&self) -> f64 {
        self.total_offs
    }

    /// cumulative alightings up to and including a segment.
    pub fn offs_thru_segment(&self, index: SegmentIdx) -> Option<f64> {
        self.offs_thru.get(index).copied()
    }

    /// share of the line's alightings that happened by this segment.
    pub fn exit_proportion(&self, index: SegmentIdx) -> Option<f64> {
        self.offs_thru_segment(index).map(|offs| offs / self.total_offs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::network::{Segment, Vehicle};

    fn line(volumes: &[f64], boardings: &[f64]) -> Line {
        Line {
            id: String::from("L"),
            mode: 'b',
            source_mode: None,
            headway: 10.0,
            vehicle: Vehicle {
                seated_capacity: 50.0,
                total_capacity: 100.0,
            },
            segments: volumes
                .iter()
                .zip(boardings.iter())
                .map(|(v, b)| Segment::new(*v, *b, 10.0))
                .collect(),
        }
    }

    #[test]
    fn test_zero_ridership_uses_sentinel() {
        let agg = LineAggregates::from_line(&line(&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]));
        assert_eq!(agg.total_offs(), TOTAL_OFFS_SENTINEL);
        assert_eq!(agg.exit_proportion(2), Some(0.0));
    }

    #[test]
    fn test_tiny_ridership_uses_sentinel() {
        let agg = LineAggregates::from_line(&line(&[0.0005, 0.0], &[0.0005, 0.0]));
        assert_eq!(agg.total_offs(), TOTAL_OFFS_SENTINEL);
    }

    #[test]
    fn test_offs_thru_segments() {
        let agg = LineAggregates::from_line(&line(&[10.0, 15.0, 0.0], &[10.0, 8.0, 0.0]));
        assert_eq!(agg.total_offs(), 18.0);
        assert_eq!(agg.offs_thru_segment(0), Some(0.0));
        // 10 - 15 + 8 = 3 riders got off before the second segment
        assert_eq!(agg.offs_thru_segment(1), Some(3.0));
        assert_eq!(agg.offs_thru_segment(2), Some(18.0));
        assert_eq!(agg.offs_thru_segment(3), None);
    }

    #[test]
    fn test_conserved_flow_reproduces_total() {
        let boardings = [25.0, 12.5, 7.0, 30.0, 3.5, 0.0];
        let alightings = [0.0, 4.0, 10.0, 6.5, 20.0, 37.5];
        let mut volumes = vec![];
        let mut onboard = 0.0;
        for (b, a) in boardings.iter().zip(alightings.iter()) {
            onboard += b - a;
            volumes.push(onboard);
        }
        let agg = LineAggregates::from_line(&line(&volumes, &boardings));
        let last = agg
            .offs_thru_segment(volumes.len() - 1)
            .expect("test invariant failed");
        assert!((last - agg.total_offs()).abs() < 1e-9);
        let mut prev = 0.0;
        for idx in 0..volumes.len() {
            let offs = agg.offs_thru_segment(idx).expect("test invariant failed");
            assert!(offs >= prev - 1e-9);
            prev = offs;
        }
    }
}
