use chart_annotations::annotations::{
    LINE_CROSS_PENS, draw_cross_four_points, draw_cross_one_point, draw_cross_three_points,
    draw_cross_two_points, draw_three_line_cross,
};
use chart_annotations::core::Point;
use chart_annotations::render::{PathCommand, PathSet, PenRole};

fn anchors() -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(40.0, 20.0),
        Point::new(80.0, 0.0),
        Point::new(40.0, 80.0),
    ]
}

fn drawn(anchors: &[Point]) -> PathSet {
    let mut paths = PathSet::with_roles(LINE_CROSS_PENS);
    draw_three_line_cross(&mut paths, anchors);
    paths
}

#[test]
fn single_anchor_is_a_zero_length_marker() {
    let mut paths = PathSet::with_roles(LINE_CROSS_PENS);
    draw_cross_one_point(&mut paths, Point::new(7.0, 9.0));

    let expected = [
        PathCommand::MoveTo { x: 7.0, y: 9.0 },
        PathCommand::LineTo { x: 7.0, y: 9.0 },
    ];
    assert_eq!(paths.commands(PenRole::Stroke), &expected);
    assert_eq!(paths.commands(PenRole::Hover), &expected);
}

#[test]
fn each_leg_extends_half_its_length_past_the_pivot() {
    let paths = drawn(&anchors());

    assert_eq!(
        paths.commands(PenRole::Stroke),
        &[
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 60.0, y: 30.0 },
            PathCommand::MoveTo { x: 80.0, y: 0.0 },
            PathCommand::LineTo { x: 20.0, y: 30.0 },
            PathCommand::MoveTo { x: 40.0, y: 80.0 },
            PathCommand::LineTo { x: 40.0, y: -10.0 },
        ]
    );
}

#[test]
fn later_stages_extend_earlier_ones() {
    let anchors = anchors();
    let two = drawn(&anchors[..2]);
    let three = drawn(&anchors[..3]);
    let four = drawn(&anchors);

    for role in [PenRole::Stroke, PenRole::Hover] {
        let two = two.commands(role);
        let three = three.commands(role);
        let four = four.commands(role);
        assert_eq!(two.len(), 2);
        assert_eq!(three.len(), 4);
        assert_eq!(four.len(), 6);
        assert!(three.starts_with(two));
        assert!(four.starts_with(three));
    }
}

#[test]
fn staged_redraws_match_a_single_full_draw() {
    let [p1, p2, p3, p4] = anchors();
    let mut staged = PathSet::with_roles(LINE_CROSS_PENS);
    draw_cross_one_point(&mut staged, p1);
    draw_cross_two_points(&mut staged, p1, p2);
    draw_cross_three_points(&mut staged, p1, p2, p3);
    draw_cross_four_points(&mut staged, p1, p2, p3, p4);

    let mut direct = PathSet::with_roles(LINE_CROSS_PENS);
    draw_cross_four_points(&mut direct, p1, p2, p3, p4);

    assert_eq!(staged, direct);
}

#[test]
fn anchors_past_the_fourth_are_ignored() {
    let mut five = anchors().to_vec();
    five.push(Point::new(1.0, 1.0));
    assert_eq!(drawn(&five), drawn(&anchors()));
}

#[test]
fn coincident_anchors_stay_finite() {
    let p = Point::new(10.0, 10.0);
    let paths = drawn(&[p, p, p, p]);
    assert!(
        paths
            .commands(PenRole::Stroke)
            .iter()
            .all(|command| command.point() == p)
    );
}
