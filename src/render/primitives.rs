use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Resolved paint for one pen: what the colorize step hands the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenPaint {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill: Option<Color>,
}

impl PenPaint {
    #[must_use]
    pub const fn stroke(stroke_color: Color, stroke_width: f64) -> Self {
        Self {
            stroke_color,
            stroke_width,
            fill: None,
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "pen stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.stroke_color.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}
