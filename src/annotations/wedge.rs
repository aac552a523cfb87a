//! Symmetrical wedge: a main trend line through the first and last anchor,
//! mirrored around the middle anchor so both boundaries converge on the tip.
//!
//! The pattern projects two targets past the tip, one for a bullish and one
//! for a bearish breakout.

use serde::{Deserialize, Serialize};

use crate::annotations::target::{TargetSpec, draw_target};
use crate::core::{Point, Segment};
use crate::render::{PathSet, PenRole};

const LINE_PENS: &[PenRole] = &[PenRole::Stroke, PenRole::Hover, PenRole::Trend];
const HELPER_PENS: &[PenRole] = &[PenRole::Hover, PenRole::Trend];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WedgeOptions {
    pub show_target: bool,
}

impl Default for WedgeOptions {
    fn default() -> Self {
        Self { show_target: true }
    }
}

/// Geometry derived by one wedge redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeGeometry {
    /// Anchors after ordering constraints were applied.
    pub anchors: [Point; 3],
    /// Main line's y at the middle anchor's x.
    pub projected_y: f64,
    pub main_line: Segment,
    pub mirror_line: Segment,
    pub mid_y: f64,
    pub target_x: f64,
    pub targets: Option<[TargetSpec; 2]>,
    /// Main line extended backward by one full span.
    pub helper_line: Segment,
}

/// Two-anchor variant: the third anchor collapses onto the second.
pub fn draw_symmetrical_wedge_two_points(
    paths: &mut PathSet,
    p1: Point,
    p2: Point,
    options: WedgeOptions,
) -> WedgeGeometry {
    draw_symmetrical_wedge(paths, p1, p2, p2, options)
}

pub fn draw_symmetrical_wedge(
    paths: &mut PathSet,
    p1: Point,
    p2: Point,
    p3: Point,
    options: WedgeOptions,
) -> WedgeGeometry {
    let geometry = wedge_geometry(p1, p2, p3, options);
    let [first, _, last] = geometry.anchors;
    let mid_y = geometry.mid_y;

    paths.clear_all();
    paths.draw_on(LINE_PENS, |pen| {
        pen.segment(geometry.main_line)
            .segment(geometry.mirror_line)
            .move_to(first.x, mid_y)
            .line_to(last.x, mid_y);
    });

    if let Some(targets) = geometry.targets {
        for target in targets {
            draw_target(paths, target);
        }
    }

    paths.draw_on(HELPER_PENS, |pen| {
        pen.segment(geometry.helper_line);
    });

    geometry
}

/// Computes the wedge without drawing it.
#[must_use]
pub fn wedge_geometry(p1: Point, p2: Point, p3: Point, options: WedgeOptions) -> WedgeGeometry {
    let (mut x1, mut y1) = (p1.x, p1.y);
    let (mut x2, mut y2) = (p2.x, p2.y);
    let (x3, y3) = (p3.x.max(x1 + 1.0).max(x2 + 1.0), p3.y);
    x2 = x2.min(x3 - 1.0);

    if x2 < x1 {
        // slide the first anchor left of the middle one along the main line
        let shifted_x1 = x2 - 1.0;
        let shifted_y1 = line_y_at(x1, y1, x3, y3, shifted_x1);
        y2 += shifted_y1 - y1;
        x2 = x1;
        x1 = shifted_x1;
        y1 = shifted_y1;
    }

    let projected_y = line_y_at(x1, y1, x3, y3, x2);

    let (mirror_y1, mirror_y3) = if projected_y > y2 {
        (y2 - (y1 - projected_y), y2 + (projected_y - y3))
    } else {
        (y2 + (projected_y - y1), y2 - (y3 - projected_y))
    };

    let mid_y = y3 + (mirror_y3 - y3) / 2.0;
    let target_x = x3 + (x3 - x2) / 2.0;
    let target_height = (y2 - projected_y).abs();
    let targets = options.show_target.then(|| {
        let origin = Point::new(x3, mid_y);
        [
            TargetSpec::new(origin, Point::new(target_x, mid_y - target_height), true),
            TargetSpec::new(origin, Point::new(target_x, mid_y + target_height), false),
        ]
    });

    let helper_x = x1 - (x3 - x1);
    let helper_y = line_y_at(x1, y1, x3, y3, helper_x);

    WedgeGeometry {
        anchors: [Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)],
        projected_y,
        main_line: Segment::new(Point::new(x1, y1), Point::new(x3, y3)),
        mirror_line: Segment::new(Point::new(x1, mirror_y1), Point::new(x3, mirror_y3)),
        mid_y,
        target_x,
        targets,
        helper_line: Segment::new(Point::new(x1, y1), Point::new(helper_x, helper_y)),
    }
}

/// y of the line through `(x1, y1)` and `(x3, y3)` at `x`. Requires `x1 != x3`.
fn line_y_at(x1: f64, y1: f64, x3: f64, y3: f64, x: f64) -> f64 {
    y1 - (x - x1) / (x3 - x1) * (y1 - y3)
}
