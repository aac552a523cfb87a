//! Pattern shape builders.
//!
//! Every builder is a full redraw: it clears the pens it owns and rewrites
//! them from the anchors, so repeated calls with the same input emit the
//! same commands.

pub mod pitchfork;
pub mod target;
pub mod three_line_cross;
pub mod wave_abc;
pub mod wedge;

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point};
use crate::error::ChartResult;
use crate::render::{PathSet, PenRole};

pub use pitchfork::{
    DEGENERATE_FORK_DX, ExtraTinePair, MAX_EXTRA_LINES, PitchforkGeometry, PitchforkOptions,
    PitchforkStyle, draw_pitchfork, pitchfork_geometry,
};
pub use target::{TARGET_HEAD_PX, TargetSpec, draw_target};
pub use three_line_cross::{
    draw_cross_four_points, draw_cross_one_point, draw_cross_three_points,
    draw_cross_two_points, draw_three_line_cross, extend_through_pivot,
};
pub use wave_abc::{WaveAbcGeometry, WaveAbcOptions, draw_wave_abc, wave_abc_geometry};
pub use wedge::{
    WedgeGeometry, WedgeOptions, draw_symmetrical_wedge, draw_symmetrical_wedge_two_points,
    wedge_geometry,
};

/// Pens of patterns that project profit targets.
pub const PATTERN_PENS: &[PenRole] = &[
    PenRole::Stroke,
    PenRole::BullishTarget,
    PenRole::BearishTarget,
    PenRole::Hover,
    PenRole::Trend,
];

pub const PITCHFORK_PENS: &[PenRole] = &[PenRole::Stroke, PenRole::Hover, PenRole::Trend];

pub const LINE_CROSS_PENS: &[PenRole] = &[PenRole::Stroke, PenRole::Hover];

/// Supported annotation patterns with their per-pattern options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AnnotationKind {
    SymmetricalWedge(WedgeOptions),
    WaveAbc(WaveAbcOptions),
    Pitchfork(PitchforkOptions),
    ThreeLineCross,
}

impl AnnotationKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SymmetricalWedge(_) => "symmetrical-wedge",
            Self::WaveAbc(_) => "wave-abc",
            Self::Pitchfork(_) => "pitchfork",
            Self::ThreeLineCross => "three-line-cross",
        }
    }

    #[must_use]
    pub const fn pen_roles(self) -> &'static [PenRole] {
        match self {
            Self::SymmetricalWedge(_) | Self::WaveAbc(_) => PATTERN_PENS,
            Self::Pitchfork(_) => PITCHFORK_PENS,
            Self::ThreeLineCross => LINE_CROSS_PENS,
        }
    }

    /// Fewest anchors the builder accepts.
    #[must_use]
    pub const fn min_anchors(self) -> usize {
        match self {
            Self::SymmetricalWedge(_) => 2,
            Self::WaveAbc(_) => 4,
            Self::Pitchfork(_) => 3,
            Self::ThreeLineCross => 1,
        }
    }

    /// Anchors the pattern consumes; extra anchors are ignored.
    #[must_use]
    pub const fn max_anchors(self) -> usize {
        match self {
            Self::SymmetricalWedge(_) | Self::Pitchfork(_) => 3,
            Self::WaveAbc(_) | Self::ThreeLineCross => 4,
        }
    }

    /// Checks per-pattern options that bound the amount of geometry drawn.
    pub fn validate(self) -> ChartResult<Self> {
        if let Self::Pitchfork(options) = self {
            options.validate()?;
        }
        Ok(self)
    }

    /// Redraws `paths` for `anchors`.
    ///
    /// Returns `false` and leaves every pen empty when there are fewer
    /// anchors than the pattern needs.
    pub fn draw(self, paths: &mut PathSet, anchors: &[Point], bounds: Bounds) -> bool {
        if anchors.len() < self.min_anchors() {
            paths.clear_all();
            return false;
        }

        match self {
            Self::SymmetricalWedge(options) => match anchors.get(2) {
                Some(p3) => {
                    draw_symmetrical_wedge(paths, anchors[0], anchors[1], *p3, options);
                }
                None => {
                    draw_symmetrical_wedge_two_points(paths, anchors[0], anchors[1], options);
                }
            },
            Self::WaveAbc(options) => {
                draw_wave_abc(paths, [anchors[0], anchors[1], anchors[2], anchors[3]], options);
            }
            Self::Pitchfork(options) => {
                draw_pitchfork(paths, anchors[0], anchors[1], anchors[2], bounds, options);
            }
            Self::ThreeLineCross => draw_three_line_cross(paths, anchors),
        }
        true
    }
}
