//! Pure angle and heading math, independent of any turtle backend.
//!
//! Angles are degrees throughout. Headings and bearings are measured
//! clockwise from north ("up"), matching the turtle convention in
//! [`crate::turtle`].

use crate::SketchError;
use glam::IVec2;

/// Interior angle, in degrees, of a regular polygon with `sides` sides.
///
/// Returns `(sides − 2) · 180 / sides`, which lies in `(0, 180)` and
/// increases toward 180 as `sides` grows.
///
/// # Errors
///
/// [`SketchError::TooFewSides`] if `sides <= 2`.
pub fn regular_polygon_interior_angle(sides: u32) -> Result<f64, SketchError> {
    if sides <= 2 {
        return Err(SketchError::TooFewSides(sides));
    }
    let sides = f64::from(sides);
    Ok((sides - 2.0) * 180.0 / sides)
}

/// Number of sides of the regular polygon whose interior angle is `angle`
/// degrees.
///
/// Works through the exterior angle: `round(360 / (180 − angle))`. Rounding
/// is `f64::round`, i.e. half away from zero; exact-half inputs do not occur
/// for interior angles of actual regular polygons, so the tie-break rule has
/// no practical effect.
///
/// # Errors
///
/// [`SketchError::AngleOutOfRange`] unless `0 < angle < 180` (NaN is
/// rejected by the same check).
pub fn polygon_sides_from_angle(angle: f64) -> Result<u32, SketchError> {
    if !(angle > 0.0 && angle < 180.0) {
        return Err(SketchError::AngleOutOfRange(angle));
    }
    Ok((360.0 / (180.0 - angle)).round() as u32)
}

/// Right-turn amount steering a turtle at `current`, facing
/// `current_heading`, toward `target`.
///
/// The absolute bearing from `current` to `target` is `atan2(dx, dy)` in
/// degrees. Note that x is the *first* argument to `atan2`; that is what
/// makes this a clockwise-from-north bearing rather than a mathematical
/// angle. The result
/// is `bearing − current_heading` when the bearing is ahead of the heading,
/// and `360 − current_heading − bearing` otherwise.
///
/// Two quirks callers should know about:
///
/// - When `target == current` the bearing is `atan2(0, 0) == 0`, i.e. due
///   north; the function returns the turn that would face the turtle north.
/// - Bearings are negative for targets west of `current`, and the
///   `360 − current_heading − bearing` branch can then exceed 360. Feeding
///   the raw value to [`crate::Turtle::turn`] still rotates to the correct
///   facing, since turning is modular, but the value itself is not reduced
///   to `[0, 360)`.
///
/// # Errors
///
/// [`SketchError::HeadingOutOfRange`] unless `0 <= current_heading < 360`.
pub fn heading_to_point(
    current_heading: f64,
    current: IVec2,
    target: IVec2,
) -> Result<f64, SketchError> {
    if !(0.0..360.0).contains(&current_heading) {
        return Err(SketchError::HeadingOutOfRange(current_heading));
    }

    let delta = (target - current).as_dvec2();
    let bearing = delta.x.atan2(delta.y).to_degrees();

    if current_heading > bearing {
        Ok(360.0 - current_heading - bearing)
    } else {
        Ok(bearing - current_heading)
    }
}

/// Heading adjustments needed to walk the path `(xs[i], ys[i])` point by
/// point.
///
/// The turtle is assumed to start at the first point facing north
/// (heading 0). Each leg's adjustment comes from [`heading_to_point`], and
/// the *adjustment itself* becomes the current heading for the next leg:
/// the fold tracks turn amounts, not absolute bearings. Returns one value
/// per leg: empty input (or a single point) yields an empty vec, `n` points
/// yield `n − 1` adjustments, computed eagerly.
///
/// # Errors
///
/// [`SketchError::MismatchedPath`] if the coordinate slices differ in
/// length. A path whose geometry produces an adjustment of 360 or more (see
/// [`heading_to_point`]) fails the next leg's heading precondition, and that
/// [`SketchError::HeadingOutOfRange`] propagates out.
pub fn headings_along_path(xs: &[i32], ys: &[i32]) -> Result<Vec<f64>, SketchError> {
    if xs.len() != ys.len() {
        return Err(SketchError::MismatchedPath {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let mut headings = Vec::with_capacity(xs.len().saturating_sub(1));
    let (Some(&x0), Some(&y0)) = (xs.first(), ys.first()) else {
        return Ok(headings);
    };

    let mut current = IVec2::new(x0, y0);
    let mut current_heading = 0.0;
    for (&x, &y) in xs.iter().zip(ys).skip(1) {
        let next = IVec2::new(x, y);
        let adjustment = heading_to_point(current_heading, current, next)?;
        headings.push(adjustment);
        current_heading = adjustment;
        current = next;
    }

    Ok(headings)
}
