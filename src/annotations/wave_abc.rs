//! ABC correction wave: three legs through four anchors with a single
//! projected target and a horizontal trend reference from the B anchor.

use serde::{Deserialize, Serialize};

use crate::annotations::target::{TargetSpec, draw_target};
use crate::core::{Point, Segment};
use crate::render::{PathSet, PenRole};

const WAVE_PENS: &[PenRole] = &[PenRole::Stroke, PenRole::Hover];
const TREND_PENS: &[PenRole] = &[PenRole::Hover, PenRole::Trend];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveAbcOptions {
    pub show_target: bool,
}

impl Default for WaveAbcOptions {
    fn default() -> Self {
        Self { show_target: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveAbcGeometry {
    /// Anchors after ordering constraints were applied.
    pub anchors: [Point; 4],
    pub target: Option<TargetSpec>,
    pub trend_line: Segment,
}

pub fn draw_wave_abc(
    paths: &mut PathSet,
    anchors: [Point; 4],
    options: WaveAbcOptions,
) -> WaveAbcGeometry {
    let geometry = wave_abc_geometry(anchors, options);
    let [p1, p2, p3, p4] = geometry.anchors;

    paths.clear_all();
    paths.draw_on(WAVE_PENS, |pen| {
        pen.move_to(p1.x, p1.y)
            .line_to(p2.x, p2.y)
            .line_to(p3.x, p3.y)
            .line_to(p4.x, p4.y);
    });

    if let Some(target) = geometry.target {
        draw_target(paths, target);
    }

    paths.draw_on(TREND_PENS, |pen| {
        pen.segment(geometry.trend_line);
    });

    geometry
}

/// Computes the wave without drawing it.
///
/// Anchors that break the left-to-right order are moved right, never the
/// earlier ones left, so the last anchor always ends past the C anchor.
#[must_use]
pub fn wave_abc_geometry(anchors: [Point; 4], options: WaveAbcOptions) -> WaveAbcGeometry {
    let [p1, mut p2, mut p3, mut p4] = anchors;

    // each anchor stays at least one pixel right of its predecessor
    p2.x = p2.x.max(p1.x + 1.0);
    p3.x = p3.x.max(p2.x + 1.0);
    p4.x = p4.x.max(p3.x + 1.0);

    // the C leg must end beyond B in the direction of the A leg
    p4.y = if p2.y > p1.y {
        p4.y.max(p2.y + 1.0)
    } else {
        p4.y.min(p2.y - 1.0)
    };

    let target = options.show_target.then(|| {
        let apex = Point::new(p4.x + (p4.x - p3.x), p2.y + (p3.y - p2.y) / 2.0);
        TargetSpec::new(p4, apex, true)
    });

    WaveAbcGeometry {
        anchors: [p1, p2, p3, p4],
        target,
        trend_line: Segment::new(p2, Point::new(p2.x + 2.0 * (p4.x - p2.x), p2.y)),
    }
}
