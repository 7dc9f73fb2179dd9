use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A generic RGB stroke color referencing no particular color space.
pub type PenColor = (u8, u8, u8);

/// The complete, engine-agnostic record of a drawing.
///
/// This structure is what a rendering backend ingests: an ordered list of
/// stroked line segments in drawing order. It carries no pen or turtle state
/// of its own; the recorder stamps each segment with the pen settings that
/// were active when it was drawn.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SketchBlueprint {
    /// All visible segments, in the order they were drawn.
    pub segments: Vec<TraceSegment>,
}

impl SketchBlueprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: TraceSegment) {
        self.segments.push(segment);
    }

    /// Number of recorded segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Axis-aligned bounds `(min, max)` of everything drawn, or `None` for an
    /// empty blueprint. Stroke width is not included in the bounds.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut segments = self.segments.iter();
        let first = segments.next()?;
        let mut min = first.start.min(first.end);
        let mut max = first.start.max(first.end);
        for segment in segments {
            min = min.min(segment.start).min(segment.end);
            max = max.max(segment.start).max(segment.end);
        }
        Some((min, max))
    }
}

/// A single stroked line segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceSegment {
    /// Where the pen was when the move began.
    pub start: DVec2,

    /// Where the pen ended up.
    pub end: DVec2,

    /// Stroke width active at draw time.
    pub width: f64,

    /// Stroke color active at draw time.
    pub color: PenColor,
}

impl TraceSegment {
    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}
