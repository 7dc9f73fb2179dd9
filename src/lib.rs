//! # turtle-sketch
//!
//! An engine-agnostic turtle drawing crate: an agent with a position, heading,
//! and pen, steered through `forward`/`turn` commands, plus the pure geometry
//! needed to drive it (regular-polygon angle math, point-to-point heading
//! adjustments, heading sequences along a path).
//!
//! It decouples the *drawing program* (a sequence of turtle commands) from the
//! *rendering backend*, producing a [`SketchBlueprint`] of line segments that
//! can be ingested by game engines, SVG writers, or plotters. The bundled
//! [`SketchTurtle`] records a blueprint headlessly; rendering implementations
//! of [`Turtle`] live outside this crate.

pub mod blueprint;
pub mod geometry;
pub mod shapes;
pub mod turtle;

pub use blueprint::*;
pub use geometry::*;
pub use shapes::*;
pub use turtle::*;

/// Contract violations surfaced by the geometry functions and drawing
/// routines. Every variant is a precondition failure raised before any
/// turtle command is issued.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SketchError {
    #[error("a regular polygon needs more than 2 sides, got {0}")]
    TooFewSides(u32),

    #[error("interior angle must lie in (0, 180) degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("heading must lie in [0, 360) degrees, got {0}")]
    HeadingOutOfRange(f64),

    #[error("side length must be positive, got {0}")]
    NonPositiveLength(f64),

    #[error("coordinate lists must have equal length ({xs} x-coords vs {ys} y-coords)")]
    MismatchedPath { xs: usize, ys: usize },
}
