// tests/drawing.rs
use glam::DVec2;
use turtle_sketch::{
    SketchBlueprint, SketchConfig, SketchError, SketchTurtle, Turtle, draw_personal_art,
    draw_regular_polygon, draw_sierpinski_triangle, draw_square,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn assert_at(turtle: &SketchTurtle, expected: DVec2) {
    let actual = turtle.position();
    assert!(
        actual.distance(expected) < 1e-9,
        "expected position {expected}, got {actual}"
    );
}

/// Segment count of the fractal: 3 at level 0, then each level replaces the
/// drawing with three copies plus three repositioning moves.
fn sierpinski_segments(level: u32) -> usize {
    let mut count = 3usize;
    for _ in 0..level {
        count = 3 * count + 3;
    }
    count
}

#[test]
fn test_square_is_closed_and_recorded() {
    let mut turtle = SketchTurtle::new();
    draw_square(&mut turtle, 40.0).unwrap();

    let blueprint = turtle.blueprint();
    assert_eq!(blueprint.len(), 4, "a square has 4 sides");

    // First leg goes north from the origin, second east along the top.
    assert!(blueprint.segments[0].start.distance(DVec2::ZERO) < 1e-9);
    assert!(blueprint.segments[0].end.distance(DVec2::new(0.0, 40.0)) < 1e-9);
    assert!(blueprint.segments[1].end.distance(DVec2::new(40.0, 40.0)) < 1e-9);

    // Closed path: back at the start, facing the way we came in.
    assert_at(&turtle, DVec2::ZERO);
    assert_close(turtle.heading(), 0.0);
}

#[test]
fn test_regular_polygons_close() {
    for sides in [3u32, 4, 5, 6, 8, 12] {
        let mut turtle = SketchTurtle::new();
        draw_regular_polygon(&mut turtle, sides, 25.0).unwrap();

        assert_eq!(
            turtle.blueprint().len(),
            sides as usize,
            "{sides}-gon should record {sides} segments"
        );
        assert_at(&turtle, DVec2::ZERO);
        assert_close(turtle.heading(), 0.0);
    }
}

#[test]
fn test_polygon_segments_have_requested_length() {
    let mut turtle = SketchTurtle::new();
    draw_regular_polygon(&mut turtle, 6, 17.5).unwrap();
    for segment in &turtle.blueprint().segments {
        assert_close(segment.length(), 17.5);
    }
}

#[test]
fn test_sierpinski_preserves_entry_heading() {
    for level in 0..=3 {
        // Enter at an arbitrary heading; the fractal must hand it back.
        let mut turtle = SketchTurtle::new();
        turtle.turn(17.0);
        draw_sierpinski_triangle(&mut turtle, 64.0, level).unwrap();

        assert_close(turtle.heading(), 17.0);
        assert_eq!(
            turtle.blueprint().len(),
            sierpinski_segments(level),
            "segment count at level {level}"
        );
    }
}

#[test]
fn test_personal_art_is_a_level_six_fractal() {
    let mut turtle = SketchTurtle::new();
    draw_personal_art(&mut turtle).unwrap();

    assert_eq!(turtle.blueprint().len(), sierpinski_segments(6));
    assert_close(turtle.heading(), 0.0);
}

#[test]
fn test_invalid_input_leaves_turtle_untouched() {
    let mut turtle = SketchTurtle::new();

    assert_eq!(
        draw_square(&mut turtle, 0.0),
        Err(SketchError::NonPositiveLength(0.0))
    );
    assert_eq!(
        draw_regular_polygon(&mut turtle, 2, 10.0),
        Err(SketchError::TooFewSides(2))
    );
    assert_eq!(
        draw_sierpinski_triangle(&mut turtle, -1.0, 2),
        Err(SketchError::NonPositiveLength(-1.0))
    );

    // No partial drawings: nothing recorded, turtle never moved.
    assert!(turtle.blueprint().is_empty());
    assert_at(&turtle, DVec2::ZERO);
    assert_close(turtle.heading(), 0.0);
}

#[test]
fn test_pen_up_moves_without_recording() {
    let mut turtle = SketchTurtle::new();
    turtle.pen_up();
    turtle.forward(10.0);
    assert!(turtle.blueprint().is_empty());
    assert_at(&turtle, DVec2::new(0.0, 10.0));

    // Pen back down: drawing resumes from the new position.
    turtle.pen_down();
    turtle.turn(90.0);
    turtle.forward(5.0);
    assert_eq!(turtle.blueprint().len(), 1);
    assert!(
        turtle.blueprint().segments[0]
            .start
            .distance(DVec2::new(0.0, 10.0))
            < 1e-9
    );
}

#[test]
fn test_pen_style_is_stamped_on_segments() {
    let mut turtle = SketchTurtle::with_config(SketchConfig {
        pen_width: 2.5,
        pen_color: (255, 0, 0),
        pen_down: true,
    });
    draw_square(&mut turtle, 10.0).unwrap();

    for segment in &turtle.blueprint().segments {
        assert_close(segment.width, 2.5);
        assert_eq!(segment.color, (255, 0, 0));
    }
}

#[test]
fn test_blueprint_bounds_cover_the_drawing() {
    let mut turtle = SketchTurtle::new();
    draw_square(&mut turtle, 10.0).unwrap();

    let (min, max) = turtle.blueprint().bounds().unwrap();
    assert!(min.distance(DVec2::ZERO) < 1e-9);
    assert!(max.distance(DVec2::new(10.0, 10.0)) < 1e-9);

    assert_eq!(SketchBlueprint::new().bounds(), None);
}

#[test]
fn test_blueprint_serde_round_trip() {
    let mut turtle = SketchTurtle::new();
    draw_regular_polygon(&mut turtle, 3, 5.0).unwrap();
    let blueprint = turtle.into_blueprint();

    let json = serde_json::to_string(&blueprint).unwrap();
    let restored: SketchBlueprint = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), blueprint.len());
    assert_eq!(restored.segments, blueprint.segments);
}
