//! Drawing routines composed from [`Turtle`] commands.
//!
//! Every routine validates its arguments before issuing the first turtle
//! command, so invalid input leaves the backend untouched. All turns are
//! right-hand turns, and every closed routine rotates a net multiple of 360°
//! so the turtle exits with the heading it entered with.

use crate::SketchError;
use crate::geometry::regular_polygon_interior_angle;
use crate::turtle::Turtle;

/// Side length used by [`draw_personal_art`].
const ART_SIDE_LENGTH: f64 = 256.0;

/// Recursion depth used by [`draw_personal_art`].
const ART_LEVEL: u32 = 6;

/// Draws a square of the given side length.
///
/// The turtle traces four sides with 90° right turns at each corner and
/// finishes back at its starting position and heading.
///
/// # Errors
///
/// [`SketchError::NonPositiveLength`] if `side_length <= 0`.
pub fn draw_square<T: Turtle + ?Sized>(turtle: &mut T, side_length: f64) -> Result<(), SketchError> {
    if side_length <= 0.0 {
        return Err(SketchError::NonPositiveLength(side_length));
    }
    for _ in 0..4 {
        turtle.forward(side_length);
        turtle.turn(90.0);
    }
    Ok(())
}

/// Draws a regular polygon with `sides` sides of the given length, using
/// only right turns.
///
/// With the turtle starting at the polygon's lower-left corner, each vertex
/// turn is the exterior angle `180 − interior(sides)`; after `sides` legs
/// the turtle is back at its starting position and heading.
///
/// # Errors
///
/// [`SketchError::NonPositiveLength`] if `side_length <= 0`, and
/// [`SketchError::TooFewSides`] if `sides <= 2`.
pub fn draw_regular_polygon<T: Turtle + ?Sized>(
    turtle: &mut T,
    sides: u32,
    side_length: f64,
) -> Result<(), SketchError> {
    if side_length <= 0.0 {
        return Err(SketchError::NonPositiveLength(side_length));
    }
    let exterior = 180.0 - regular_polygon_interior_angle(sides)?;
    for _ in 0..sides {
        turtle.forward(side_length);
        turtle.turn(exterior);
    }
    Ok(())
}

/// Draws the crate's showpiece: a level-6 Sierpinski triangle with a 256-unit
/// base side. Fixed parameterization, no knobs.
pub fn draw_personal_art<T: Turtle + ?Sized>(turtle: &mut T) -> Result<(), SketchError> {
    draw_sierpinski_triangle(turtle, ART_SIDE_LENGTH, ART_LEVEL)
}

/// Draws a Sierpinski triangle by recursive subdivision.
///
/// At `level == 0` this is a single equilateral triangle of `side_length`.
/// Otherwise the side is halved and three sub-triangles are drawn at
/// `level − 1`, with repositioning maneuvers between them. Every maneuver
/// turns a net 360°, so each call, at every recursion level, leaves the
/// turtle's heading exactly as it found it. That invariant is what lets the
/// maneuvers compose across levels.
///
/// The repositioning moves are ordinary `forward` commands; on a pen-down
/// turtle they draw, which is part of the figure's look. Recursion depth is
/// `level`, bounded by the caller.
///
/// # Errors
///
/// [`SketchError::NonPositiveLength`] if `side_length <= 0`.
pub fn draw_sierpinski_triangle<T: Turtle + ?Sized>(
    turtle: &mut T,
    side_length: f64,
    level: u32,
) -> Result<(), SketchError> {
    if side_length <= 0.0 {
        return Err(SketchError::NonPositiveLength(side_length));
    }

    if level == 0 {
        draw_triangle(turtle, side_length);
        return Ok(());
    }

    let half = side_length / 2.0;
    draw_sierpinski_triangle(turtle, half, level - 1)?;
    turtle.turn(30.0); // onto the first side, toward its midpoint
    turtle.forward(half);
    turtle.turn(330.0); // 30 + 330 = 360, heading restored
    draw_sierpinski_triangle(turtle, half, level - 1)?;
    turtle.turn(150.0); // across to the third sub-triangle's anchor
    turtle.forward(half);
    turtle.turn(210.0); // 150 + 210 = 360
    draw_sierpinski_triangle(turtle, half, level - 1)?;
    turtle.turn(270.0); // back along the base to the leftmost point
    turtle.forward(half);
    turtle.turn(90.0); // 270 + 90 = 360
    Ok(())
}

/// One equilateral triangle, first side 30° clockwise of the entry heading.
/// Turns sum to 360° so the entry heading is restored.
fn draw_triangle<T: Turtle + ?Sized>(turtle: &mut T, side_length: f64) {
    turtle.turn(30.0);
    turtle.forward(side_length);
    turtle.turn(120.0);
    turtle.forward(side_length);
    turtle.turn(120.0);
    turtle.forward(side_length);
    turtle.turn(90.0);
}
