use serde::{Deserialize, Serialize};

use uom::si::f64::Time;

use super::{Segment, SegmentIdx, SegmentRef};

/// capacity attributes of the vehicle (or train set) serving a line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub seated_capacity: f64,
    pub total_capacity: f64,
}

/// a scheduled transit service: an ordered sequence of segments sharing a headway
/// and a vehicle type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Line {
    pub id: String,
    /// assignment mode character of the line
    pub mode: char,
    /// the mode this line had before fare-based mode splitting, if fares are modeled
    pub source_mode: Option<char>,
    /// nominal (scheduled) headway in minutes
    pub headway: f64,
    pub vehicle: Vehicle,
    /// segments in line order, including the final hidden segment
    pub segments: Vec<Segment>,
}

impl Line {
    /// mode character used to look up mode-specific parameters. when fares split modes,
    /// the source mode is used, and a line without one has no key.
    pub fn mode_key(&self, use_fares: bool) -> Option<char> {
        if use_fares {
            self.source_mode
        } else {
            Some(self.mode)
        }
    }

    /// total vehicle capacity offered by this line over a time period.
    pub fn period_capacity(&self, period: Time) -> f64 {
        crate::model::cost::cost_ops::time_period_capacity(
            self.vehicle.total_capacity,
            self.headway,
            period,
        )
    }

    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }

    /// a read-only handle on one segment of this line, or None if out of range.
    pub fn segment_ref(&self, index: SegmentIdx) -> Option<SegmentRef<'_>> {
        if index < self.segments.len() {
            Some(SegmentRef::new(self, index))
        } else {
            None
        }
    }

    /// handles on every segment in line order.
    pub fn segment_refs(&self) -> impl Iterator<Item = SegmentRef<'_>> {
        (0..self.segments.len()).map(move |idx| SegmentRef::new(self, idx))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn line(source_mode: Option<char>) -> Line {
        Line {
            id: String::from("L1"),
            mode: 'b',
            source_mode,
            headway: 10.0,
            vehicle: Vehicle {
                seated_capacity: 50.0,
                total_capacity: 100.0,
            },
            segments: vec![Segment::new(1.0, 1.0, 10.0), Segment::new(0.0, 0.0, 10.0)],
        }
    }

    #[test]
    fn test_mode_key() {
        assert_eq!(line(Some('x')).mode_key(false), Some('b'));
        assert_eq!(line(Some('x')).mode_key(true), Some('x'));
        assert_eq!(line(None).mode_key(true), None);
    }

    #[test]
    fn test_segment_ref_bounds() {
        let l = line(None);
        assert!(l.segment_ref(1).is_some());
        assert!(l.segment_ref(2).is_none());
        assert_eq!(l.segment_refs().count(), 2);
    }
}
