use chart_annotations::annotations::{
    DEGENERATE_FORK_DX, PITCHFORK_PENS, PitchforkOptions, PitchforkStyle, draw_pitchfork,
    pitchfork_geometry,
};
use chart_annotations::core::{Bounds, Point, Segment};
use chart_annotations::render::{PathCommand, PathSet, PenRole};

fn bounds() -> Bounds {
    Bounds::from_size(400.0, 300.0).expect("bounds")
}

fn anchors() -> (Point, Point, Point) {
    (
        Point::new(20.0, 150.0),
        Point::new(100.0, 100.0),
        Point::new(100.0, 200.0),
    )
}

fn move_to(x: f64, y: f64) -> PathCommand {
    PathCommand::MoveTo { x, y }
}

fn line_to(x: f64, y: f64) -> PathCommand {
    PathCommand::LineTo { x, y }
}

#[test]
fn andrews_fork_traces_tines_handle_and_median() {
    let (p1, p2, p3) = anchors();
    let mut paths = PathSet::with_roles(PITCHFORK_PENS);
    draw_pitchfork(
        &mut paths,
        p1,
        p2,
        p3,
        bounds(),
        PitchforkOptions::andrews().with_extra_lines(0),
    );

    assert_eq!(
        paths.commands(PenRole::Stroke),
        &[
            move_to(400.0, 100.0),
            line_to(100.0, 100.0),
            line_to(100.0, 100.0),
            line_to(100.0, 200.0),
            line_to(100.0, 200.0),
            line_to(400.0, 200.0),
            move_to(20.0, 150.0),
            line_to(400.0, 150.0),
        ]
    );
    assert_eq!(paths.commands(PenRole::Hover), paths.commands(PenRole::Stroke));
    assert!(paths.pen(PenRole::Trend).expect("trend pen").is_empty());
}

#[test]
fn extra_lines_only_reach_hover_and_trend() {
    let (p1, p2, p3) = anchors();
    let mut paths = PathSet::with_roles(PITCHFORK_PENS);
    draw_pitchfork(&mut paths, p1, p2, p3, bounds(), PitchforkOptions::andrews());

    assert_eq!(paths.commands(PenRole::Stroke).len(), 8);
    assert_eq!(
        paths.commands(PenRole::Trend),
        &[
            move_to(20.0, 50.0),
            line_to(400.0, 50.0),
            move_to(20.0, 250.0),
            line_to(400.0, 250.0),
        ]
    );
    assert_eq!(paths.commands(PenRole::Hover).len(), 8 + 4);
    assert_eq!(
        paths.commands(PenRole::Hover)[8..],
        *paths.commands(PenRole::Trend)
    );
}

#[test]
fn extra_levels_step_outward() {
    let (p1, p2, p3) = anchors();
    let geometry = pitchfork_geometry(
        p1,
        p2,
        p3,
        Bounds::from_size(400.0, 1000.0).expect("bounds"),
        PitchforkOptions::andrews().with_extra_lines(3),
    );

    let starts: Vec<f64> = geometry
        .extra_tines
        .iter()
        .map(|pair| pair.toward_third.expect("visible").start.y)
        .collect();
    assert_eq!(starts, vec![250.0, 300.0, 350.0]);
    assert_eq!(geometry.extra_tines[2].level, 3);
    // horizontal tine starting at y = -50 never enters the bounds
    assert_eq!(geometry.extra_tines[2].toward_second, None);
}

#[test]
fn schiff_moves_origin_halfway_up_the_first_leg() {
    let (p1, p2, p3) = anchors();
    let andrews = pitchfork_geometry(p1, p2, p3, bounds(), PitchforkOptions::andrews());
    let schiff = pitchfork_geometry(p1, p2, p3, bounds(), PitchforkOptions::schiff());
    let modified = pitchfork_geometry(p1, p2, p3, bounds(), PitchforkOptions::modified_schiff());

    assert_eq!(andrews.origin, p1);
    assert_eq!(schiff.origin, Point::new(20.0, 125.0));
    assert_eq!(modified.origin, Point::new(60.0, 125.0));
    assert_eq!(schiff.direction, (80.0, 25.0));
    assert_ne!(andrews.median, schiff.median);
}

#[test]
fn connector_is_drawn_only_for_offset_origins() {
    let (p1, p2, p3) = anchors();
    let connector = Segment::new(p1, p2);

    for (options, expected) in [
        (PitchforkOptions::andrews(), None),
        (PitchforkOptions::schiff(), Some(connector)),
        (PitchforkOptions::modified_schiff(), Some(connector)),
    ] {
        let mut paths = PathSet::with_roles(PITCHFORK_PENS);
        let geometry = draw_pitchfork(&mut paths, p1, p2, p3, bounds(), options);
        assert_eq!(geometry.connector, expected);

        let stroke = paths.commands(PenRole::Stroke);
        let tail = &stroke[stroke.len() - 2..];
        let ends_with_connector = tail == [move_to(20.0, 150.0), line_to(100.0, 100.0)];
        assert_eq!(ends_with_connector, expected.is_some());
    }
}

#[test]
fn handle_outside_bounds_breaks_the_fork_path() {
    let mut paths = PathSet::with_roles(PITCHFORK_PENS);
    let geometry = draw_pitchfork(
        &mut paths,
        Point::new(-100.0, 150.0),
        Point::new(-50.0, 100.0),
        Point::new(-50.0, 200.0),
        bounds(),
        PitchforkOptions::andrews().with_extra_lines(0),
    );

    assert!(geometry.handle.is_none());
    assert_eq!(
        paths.commands(PenRole::Stroke),
        &[
            move_to(400.0, 100.0),
            line_to(0.0, 100.0),
            move_to(0.0, 200.0),
            line_to(400.0, 200.0),
            move_to(0.0, 150.0),
            line_to(400.0, 150.0),
        ]
    );
    assert_eq!(paths.pen(PenRole::Stroke).expect("pen").subpath_count(), 3);
}

#[test]
fn fork_pointing_away_draws_nothing() {
    let mut paths = PathSet::with_roles(PITCHFORK_PENS);
    draw_pitchfork(
        &mut paths,
        Point::new(-10.0, 150.0),
        Point::new(-50.0, 100.0),
        Point::new(-50.0, 200.0),
        bounds(),
        PitchforkOptions::andrews(),
    );
    assert!(paths.is_empty());
}

#[test]
fn coincident_anchors_fall_back_to_horizontal_direction() {
    let p = Point::new(50.0, 50.0);
    for options in [
        PitchforkOptions::andrews(),
        PitchforkOptions::schiff(),
        PitchforkOptions::modified_schiff(),
    ] {
        let mut paths = PathSet::with_roles(PITCHFORK_PENS);
        let geometry = draw_pitchfork(&mut paths, p, p, p, bounds(), options);

        assert_eq!(geometry.direction, (DEGENERATE_FORK_DX, 0.0));
        assert_eq!(
            geometry.median,
            Some(Segment::new(p, Point::new(400.0, 50.0)))
        );
        assert!(
            paths
                .commands(PenRole::Stroke)
                .iter()
                .all(|command| command.point().is_finite())
        );
    }
}

#[test]
fn redraw_is_idempotent_across_styles() {
    let (p1, p2, p3) = anchors();
    for style in [
        PitchforkStyle::Andrews,
        PitchforkStyle::Schiff,
        PitchforkStyle::ModifiedSchiff,
    ] {
        let options = PitchforkOptions {
            style,
            extra_lines: 2,
        };
        let mut paths = PathSet::with_roles(PITCHFORK_PENS);
        draw_pitchfork(&mut paths, p1, p2, p3, bounds(), options);
        let first = paths.clone();
        draw_pitchfork(&mut paths, p1, p2, p3, bounds(), options);
        assert_eq!(paths, first);
    }
}
