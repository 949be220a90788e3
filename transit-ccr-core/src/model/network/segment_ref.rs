use super::{Line, Segment, SegmentIdx};

/// read access to a segment and the line it belongs to, as supplied by the
/// assignment engine when it invokes a cost or headway function.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRef<'a> {
    line: &'a Line,
    index: SegmentIdx,
}

impl<'a> SegmentRef<'a> {
    /// callers must guarantee `index < line.segments.len()`, see [`Line::segment_ref`].
    pub(super) fn new(line: &'a Line, index: SegmentIdx) -> Self {
        Self { line, index }
    }

    pub fn line(&self) -> &'a Line {
        self.line
    }

    pub fn index(&self) -> SegmentIdx {
        self.index
    }

    pub fn segment(&self) -> &'a Segment {
        &self.line.segments[self.index]
    }

    /// the segment preceding this one on the line, None for the first segment.
    pub fn previous(&self) -> Option<&'a Segment> {
        self.index
            .checked_sub(1)
            .and_then(|idx| self.line.segments.get(idx))
    }
}
