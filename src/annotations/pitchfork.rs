//! Andrews pitchfork and its Schiff variants.
//!
//! All three styles share one construction; the style only moves the fork
//! origin. The median tine runs from the origin through the midpoint of the
//! second and third anchors, the outer tines run parallel to it from those
//! anchors, and the handle joins the outer tines.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Bounds, Point, Segment, clip_ray_by_rect, clip_segment_by_rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{PathSet, Pen, PenRole};

/// Horizontal direction used when the fork vector collapses to zero.
pub const DEGENERATE_FORK_DX: f64 = 10.0;

/// Most extra tine pairs a fork may carry.
pub const MAX_EXTRA_LINES: u32 = 64;

const FORK_PENS: &[PenRole] = &[PenRole::Stroke, PenRole::Hover];
const EXTRA_TINE_PENS: &[PenRole] = &[PenRole::Hover, PenRole::Trend];

/// Where the median tine starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PitchforkStyle {
    /// Origin at the first anchor.
    #[default]
    Andrews,
    /// Origin halfway between the first two anchors vertically.
    Schiff,
    /// Origin at the midpoint of the first two anchors.
    ModifiedSchiff,
}

impl PitchforkStyle {
    #[must_use]
    pub fn origin(self, p1: Point, p2: Point) -> Point {
        match self {
            Self::Andrews => p1,
            Self::Schiff => Point::new(p1.x, p1.y + (p2.y - p1.y) / 2.0),
            Self::ModifiedSchiff => {
                Point::new(p1.x + (p2.x - p1.x) / 2.0, p1.y + (p2.y - p1.y) / 2.0)
            }
        }
    }

    /// Whether the first anchor is detached from the origin and gets a connector.
    #[must_use]
    pub const fn has_offset_origin(self) -> bool {
        !matches!(self, Self::Andrews)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchforkOptions {
    pub style: PitchforkStyle,
    /// Number of additional tine pairs outside the fork.
    pub extra_lines: u32,
}

impl Default for PitchforkOptions {
    fn default() -> Self {
        Self {
            style: PitchforkStyle::Andrews,
            extra_lines: 1,
        }
    }
}

impl PitchforkOptions {
    #[must_use]
    pub fn andrews() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn schiff() -> Self {
        Self {
            style: PitchforkStyle::Schiff,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn modified_schiff() -> Self {
        Self {
            style: PitchforkStyle::ModifiedSchiff,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extra_lines(mut self, extra_lines: u32) -> Self {
        self.extra_lines = extra_lines;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.extra_lines > MAX_EXTRA_LINES {
            return Err(ChartError::InvalidData(format!(
                "pitchfork extra_lines must be <= {MAX_EXTRA_LINES}, got {}",
                self.extra_lines
            )));
        }
        Ok(self)
    }
}

/// One pair of extra tines, offset to both sides of the median.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtraTinePair {
    pub level: u32,
    /// Tine shifted toward the second anchor.
    pub toward_second: Option<Segment>,
    /// Tine shifted toward the third anchor.
    pub toward_third: Option<Segment>,
}

/// Clipped fork geometry. `None` pieces fall outside the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchforkGeometry {
    pub origin: Point,
    pub direction: (f64, f64),
    pub median: Option<Segment>,
    pub second_tine: Option<Segment>,
    pub third_tine: Option<Segment>,
    pub handle: Option<Segment>,
    pub connector: Option<Segment>,
    pub extra_tines: Vec<ExtraTinePair>,
}

pub fn draw_pitchfork(
    paths: &mut PathSet,
    p1: Point,
    p2: Point,
    p3: Point,
    bounds: Bounds,
    options: PitchforkOptions,
) -> PitchforkGeometry {
    let geometry = pitchfork_geometry(p1, p2, p3, bounds, options);

    paths.clear_all();
    paths.draw_on(FORK_PENS, |pen| trace_fork(pen, &geometry));
    paths.draw_on(EXTRA_TINE_PENS, |pen| {
        for pair in &geometry.extra_tines {
            for tine in [pair.toward_second, pair.toward_third].into_iter().flatten() {
                pen.segment(tine);
            }
        }
    });

    geometry
}

#[must_use]
pub fn pitchfork_geometry(
    p1: Point,
    p2: Point,
    p3: Point,
    bounds: Bounds,
    options: PitchforkOptions,
) -> PitchforkGeometry {
    let origin = options.style.origin(p1, p2);
    let handle_mid = p2.midpoint(p3);

    let mut dx = handle_mid.x - origin.x;
    let dy = handle_mid.y - origin.y;
    if dx == 0.0 && dy == 0.0 {
        trace!(x = origin.x, y = origin.y, "degenerate pitchfork vector, pointing right");
        dx = DEGENERATE_FORK_DX;
    }

    let ray_from =
        |start: Point| clip_ray_by_rect(start.x, start.y, start.x + dx, start.y + dy, bounds);

    let connector = if options.style.has_offset_origin() {
        clip_segment_by_rect(p1.x, p1.y, p2.x, p2.y, bounds)
    } else {
        None
    };

    // the first extra level sits one handle-width outside the outer tines
    let extra_tines = (1..=options.extra_lines.min(MAX_EXTRA_LINES))
        .map(|level| {
            let scale = f64::from(level + 1) / 2.0;
            let step_x = scale * (p3.x - p2.x);
            let step_y = scale * (p2.y - p3.y);
            ExtraTinePair {
                level,
                toward_second: ray_from(Point::new(origin.x - step_x, origin.y + step_y)),
                toward_third: ray_from(Point::new(origin.x + step_x, origin.y - step_y)),
            }
        })
        .collect();

    PitchforkGeometry {
        origin,
        direction: (dx, dy),
        median: ray_from(origin),
        second_tine: ray_from(p2),
        third_tine: ray_from(p3),
        handle: clip_segment_by_rect(p2.x, p2.y, p3.x, p3.y, bounds),
        connector,
        extra_tines,
    }
}

/// Outer tines and handle as one path where the pieces touch, then the
/// median and connector as separate subpaths.
fn trace_fork(pen: &mut Pen, geometry: &PitchforkGeometry) {
    let mut connected = false;

    if let Some(tine) = geometry.second_tine {
        pen.move_to(tine.end.x, tine.end.y)
            .line_to(tine.start.x, tine.start.y);
        connected = true;
    }

    if let Some(handle) = geometry.handle {
        if connected {
            pen.line_to(handle.start.x, handle.start.y);
        } else {
            pen.move_to(handle.start.x, handle.start.y);
        }
        pen.line_to(handle.end.x, handle.end.y);
        connected = true;
    } else {
        connected = false;
    }

    if let Some(tine) = geometry.third_tine {
        if connected {
            pen.line_to(tine.start.x, tine.start.y);
        } else {
            pen.move_to(tine.start.x, tine.start.y);
        }
        pen.line_to(tine.end.x, tine.end.y);
    }

    if let Some(median) = geometry.median {
        pen.segment(median);
    }
    if let Some(connector) = geometry.connector {
        pen.segment(connector);
    }
}
