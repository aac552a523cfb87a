use serde::{Deserialize, Serialize};

use crate::core::Bounds;
use crate::error::{ChartError, ChartResult};
use crate::render::{PathCommand, PenPaint, PenRole};

/// One pen as handed to a backend: commands plus resolved paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePen {
    pub role: PenRole,
    pub z_index: i32,
    pub paint: PenPaint,
    pub commands: Vec<PathCommand>,
}

impl FramePen {
    pub fn validate(&self) -> ChartResult<()> {
        self.paint.validate()?;
        if let Some(first) = self.commands.first() {
            if !matches!(first, PathCommand::MoveTo { .. }) {
                return Err(ChartError::InvalidData(format!(
                    "pen {:?} must start with move_to",
                    self.role
                )));
            }
        }
        if self.commands.iter().any(|command| !command.point().is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "pen {:?} contains non-finite coordinates",
                self.role
            )));
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one annotation draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFrame {
    pub bounds: Bounds,
    pub pens: Vec<FramePen>,
}

impl AnnotationFrame {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            pens: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pen(mut self, pen: FramePen) -> Self {
        self.pens.push(pen);
        self
    }

    #[must_use]
    pub fn pen(&self, role: PenRole) -> Option<&FramePen> {
        self.pens.iter().find(|pen| pen.role == role)
    }

    /// Pens in drawing order. Equal z-indices keep declaration order.
    #[must_use]
    pub fn pens_in_draw_order(&self) -> Vec<&FramePen> {
        let mut pens: Vec<&FramePen> = self.pens.iter().collect();
        pens.sort_by_key(|pen| pen.z_index);
        pens
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.bounds.validate()?;
        for pen in &self.pens {
            pen.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pens.iter().all(|pen| pen.commands.is_empty())
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.pens.iter().map(|pen| pen.commands.len()).sum()
    }
}
