use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space position produced by the coordinate mapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Finite line piece in pixel space, ordered in traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Axis-aligned plotting area. Owned by the chart, read-only to builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> ChartResult<Self> {
        let bounds = Self {
            left,
            top,
            width,
            height,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Bounds covering a `width` x `height` surface anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> ChartResult<Self> {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(ChartError::InvalidData(
                "bounds origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    #[must_use]
    pub fn is_on_boundary(self, point: Point) -> bool {
        self.contains(point)
            && (point.x == self.left
                || point.x == self.right()
                || point.y == self.top
                || point.y == self.bottom())
    }
}
