//! The turtle capability trait and the headless recording turtle.

use crate::blueprint::{PenColor, SketchBlueprint, TraceSegment};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Reduces an angle in degrees to the canonical `[0, 360)` range.
///
/// Negative input wraps upward, so `normalize_degrees(-90.0) == 270.0`.
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// The minimal capability a drawing backend must provide.
///
/// Headings are measured clockwise from north ("up"). The drawing routines in
/// [`crate::shapes`] issue only these two commands; everything else (pen
/// state, rendering, export) belongs to the implementor.
pub trait Turtle {
    /// Move the pen `distance` units along the current heading, recording a
    /// line segment from the old position to the new one if the pen is down.
    /// Callers pass positive distances.
    fn forward(&mut self, distance: f64);

    /// Rotate the heading clockwise by `degrees`. Implementors normalize the
    /// stored heading back into `[0, 360)`.
    fn turn(&mut self, degrees: f64);
}

/// Initial pen setup for a [`SketchTurtle`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Stroke width stamped on each recorded segment.
    pub pen_width: f64,
    /// Stroke color stamped on each recorded segment.
    pub pen_color: PenColor,
    /// Whether the pen starts down (drawing) or up (moving silently).
    pub pen_down: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            pen_width: 1.0,
            pen_color: (0, 0, 0),
            pen_down: true,
        }
    }
}

/// A headless [`Turtle`] that records every pen-down move into a
/// [`SketchBlueprint`].
///
/// Starts at the origin facing north (heading 0) with the pen configuration
/// from its [`SketchConfig`]. Useful both as the production recorder feeding
/// a renderer and as a test double for the drawing routines.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SketchTurtle {
    position: DVec2,
    heading: f64,
    pen_down: bool,
    pen_width: f64,
    pen_color: PenColor,
    blueprint: SketchBlueprint,
}

impl Default for SketchTurtle {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchTurtle {
    /// Creates a recorder at the origin, facing north, pen down.
    pub fn new() -> Self {
        Self::with_config(SketchConfig::default())
    }

    /// Creates a recorder with an explicit pen setup.
    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
            pen_down: config.pen_down,
            pen_width: config.pen_width,
            pen_color: config.pen_color,
            blueprint: SketchBlueprint::new(),
        }
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current heading in degrees, clockwise from north, in `[0, 360)`.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Whether the pen is currently down.
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Lifts the pen; subsequent moves reposition without recording.
    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    /// Lowers the pen; subsequent moves record segments.
    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    /// Sets the stroke width for subsequently recorded segments.
    pub fn set_pen_width(&mut self, width: f64) {
        self.pen_width = width;
    }

    /// Sets the stroke color for subsequently recorded segments.
    pub fn set_pen_color(&mut self, color: PenColor) {
        self.pen_color = color;
    }

    /// The blueprint recorded so far.
    pub fn blueprint(&self) -> &SketchBlueprint {
        &self.blueprint
    }

    /// Consumes the recorder and returns the finished blueprint.
    pub fn into_blueprint(self) -> SketchBlueprint {
        self.blueprint
    }
}

impl Turtle for SketchTurtle {
    fn forward(&mut self, distance: f64) {
        // Heading is clockwise from north, so x grows with sin and y with cos.
        let (s, c) = self.heading.to_radians().sin_cos();
        let to = self.position + DVec2::new(s, c) * distance;

        if self.pen_down {
            self.blueprint.add_segment(TraceSegment {
                start: self.position,
                end: to,
                width: self.pen_width,
                color: self.pen_color,
            });
        }

        self.position = to;
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = normalize_degrees(self.heading + degrees);
    }
}
