use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::render::{PathSet, PenRole};

/// Half-size of the chevron drawn at the target apex.
pub const TARGET_HEAD_PX: f64 = 4.0;

/// Profit target projected past a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub origin: Point,
    pub apex: Point,
    pub bullish: bool,
}

impl TargetSpec {
    #[must_use]
    pub const fn new(origin: Point, apex: Point, bullish: bool) -> Self {
        Self {
            origin,
            apex,
            bullish,
        }
    }

    /// The two points bounding the profit zone on the origin's level.
    #[must_use]
    pub fn zone_bounds(self) -> (Point, Point) {
        (self.origin, Point::new(self.apex.x, self.origin.y))
    }

    #[must_use]
    pub const fn fill_role(self) -> PenRole {
        if self.bullish {
            PenRole::BullishTarget
        } else {
            PenRole::BearishTarget
        }
    }

    /// Vertical price distance the target projects.
    #[must_use]
    pub fn height(self) -> f64 {
        (self.apex.y - self.origin.y).abs()
    }
}

/// Draws the profit-zone triangle and the apex chevron.
///
/// Commands go to the fill pen picked by `target.bullish` and to the hover
/// pen, so the marker is hit-testable.
pub fn draw_target(paths: &mut PathSet, target: TargetSpec) {
    let (zone_start, zone_end) = target.zone_bounds();
    let apex = target.apex;
    // chevron arms trail the apex, so the tip points toward the move
    let arm_dy = if target.bullish {
        TARGET_HEAD_PX
    } else {
        -TARGET_HEAD_PX
    };

    paths.draw_on(&[target.fill_role(), PenRole::Hover], |pen| {
        pen.move_to(zone_start.x, zone_start.y)
            .line_to(zone_end.x, zone_end.y)
            .line_to(apex.x, apex.y)
            .line_to(zone_start.x, zone_start.y);

        pen.move_to(apex.x - TARGET_HEAD_PX, apex.y + arm_dy)
            .line_to(apex.x, apex.y)
            .line_to(apex.x + TARGET_HEAD_PX, apex.y + arm_dy);
    });
}
