//! Three lines crossing in the second anchor.
//!
//! The first two anchors define the first line. The third and fourth anchors
//! each add one more line through the second anchor. Every line continues
//! past the pivot by half its own length.

use crate::core::Point;
use crate::render::{PathSet, PenRole};

const CROSS_PENS: &[PenRole] = &[PenRole::Stroke, PenRole::Hover];

/// Point half a leg past `pivot` on the line from `from` through `pivot`.
#[must_use]
pub fn extend_through_pivot(from: Point, pivot: Point) -> Point {
    Point::new(
        pivot.x + (pivot.x - from.x) / 2.0,
        pivot.y + (pivot.y - from.y) / 2.0,
    )
}

/// Zero-length marker at the only anchor.
pub fn draw_cross_one_point(paths: &mut PathSet, p: Point) {
    paths.clear_all();
    paths.draw_on(CROSS_PENS, |pen| {
        pen.move_to(p.x, p.y).line_to(p.x, p.y);
    });
}

pub fn draw_cross_two_points(paths: &mut PathSet, p1: Point, p2: Point) {
    paths.clear_all();
    append_leg(paths, p1, p2);
}

pub fn draw_cross_three_points(paths: &mut PathSet, p1: Point, p2: Point, p3: Point) {
    draw_cross_two_points(paths, p1, p2);
    append_leg(paths, p3, p2);
}

pub fn draw_cross_four_points(paths: &mut PathSet, p1: Point, p2: Point, p3: Point, p4: Point) {
    draw_cross_three_points(paths, p1, p2, p3);
    append_leg(paths, p4, p2);
}

/// Draws the stage matching the number of anchors; anchors past the fourth
/// are ignored.
pub fn draw_three_line_cross(paths: &mut PathSet, anchors: &[Point]) {
    match *anchors {
        [] => paths.clear_all(),
        [p] => draw_cross_one_point(paths, p),
        [p1, p2] => draw_cross_two_points(paths, p1, p2),
        [p1, p2, p3] => draw_cross_three_points(paths, p1, p2, p3),
        [p1, p2, p3, p4, ..] => draw_cross_four_points(paths, p1, p2, p3, p4),
    }
}

fn append_leg(paths: &mut PathSet, from: Point, pivot: Point) {
    let end = extend_through_pivot(from, pivot);
    paths.draw_on(CROSS_PENS, |pen| {
        pen.move_to(from.x, from.y).line_to(end.x, end.y);
    });
}
