use serde::{Deserialize, Serialize};

use crate::annotations::{AnnotationKind, PitchforkOptions, WaveAbcOptions, WedgeOptions};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PenPaint, PenRole};

/// Colors and widths applied by the colorize step. Never affects geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub trend_color: Color,
    pub trend_width: f64,
    pub bullish_target_fill: Color,
    pub bearish_target_fill: Color,
    /// Half-width of the invisible hit-test stroke.
    pub hover_gap: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgb(0.129, 0.588, 0.953),
            stroke_width: 1.0,
            trend_color: Color::rgb(1.0, 0.596, 0.0),
            trend_width: 1.0,
            bullish_target_fill: Color::rgba(0.298, 0.686, 0.314, 0.3),
            bearish_target_fill: Color::rgba(0.957, 0.263, 0.212, 0.3),
            hover_gap: 5.0,
        }
    }
}

impl AnnotationStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.stroke_width, "stroke_width"),
            (self.trend_width, "trend_width"),
            (self.hover_gap, "hover_gap"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "annotation style `{name}` must be finite and >= 0"
                )));
            }
        }
        self.stroke_color.validate()?;
        self.trend_color.validate()?;
        self.bullish_target_fill.validate()?;
        self.bearish_target_fill.validate()?;
        Ok(self)
    }

    /// Paint for one pen role.
    ///
    /// The hover pen is always a transparent, unfilled stroke `2 * hover_gap`
    /// wide; it only enlarges the hit-test area.
    #[must_use]
    pub fn paint_for(self, role: PenRole) -> PenPaint {
        match role {
            PenRole::Stroke => PenPaint::stroke(self.stroke_color, self.stroke_width),
            PenRole::Trend => PenPaint::stroke(self.trend_color, self.trend_width),
            PenRole::Hover => PenPaint::stroke(Color::TRANSPARENT, self.hover_gap * 2.0),
            PenRole::BullishTarget => PenPaint::stroke(self.bullish_target_fill, self.stroke_width)
                .with_fill(self.bullish_target_fill),
            PenRole::BearishTarget => PenPaint::stroke(self.bearish_target_fill, self.stroke_width)
                .with_fill(self.bearish_target_fill),
        }
    }
}

/// Everything needed to construct an annotation.
///
/// Serializable so hosts can keep annotation setup next to their chart
/// config without an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    pub kind: AnnotationKind,
    #[serde(default)]
    pub style: AnnotationStyle,
}

impl AnnotationConfig {
    #[must_use]
    pub fn new(kind: AnnotationKind) -> Self {
        Self {
            kind,
            style: AnnotationStyle::default(),
        }
    }

    #[must_use]
    pub fn symmetrical_wedge() -> Self {
        Self::new(AnnotationKind::SymmetricalWedge(WedgeOptions::default()))
    }

    #[must_use]
    pub fn wave_abc() -> Self {
        Self::new(AnnotationKind::WaveAbc(WaveAbcOptions::default()))
    }

    #[must_use]
    pub fn pitchfork(options: PitchforkOptions) -> Self {
        Self::new(AnnotationKind::Pitchfork(options))
    }

    #[must_use]
    pub fn three_line_cross() -> Self {
        Self::new(AnnotationKind::ThreeLineCross)
    }

    #[must_use]
    pub fn with_style(mut self, style: AnnotationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.kind.validate()?;
        self.style.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize annotation config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse annotation config: {e}"))
        })?;
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnotationConfig, AnnotationStyle};
    use crate::annotations::{AnnotationKind, PitchforkOptions, PitchforkStyle};
    use crate::render::{Color, PenRole};

    #[test]
    fn hover_paint_is_transparent_and_unfilled() {
        let style = AnnotationStyle {
            hover_gap: 6.0,
            ..AnnotationStyle::default()
        };
        let paint = style.paint_for(PenRole::Hover);
        assert_eq!(paint.stroke_color, Color::TRANSPARENT);
        assert_eq!(paint.stroke_width, 12.0);
        assert!(paint.fill.is_none());
    }

    #[test]
    fn config_parses_with_default_style() {
        let config = AnnotationConfig::from_json_str(
            r#"{"kind":{"type":"pitchfork","style":"modified-schiff"}}"#,
        )
        .expect("config");
        assert_eq!(
            config.kind,
            AnnotationKind::Pitchfork(PitchforkOptions {
                style: PitchforkStyle::ModifiedSchiff,
                extra_lines: 1,
            })
        );
        assert_eq!(config.style, AnnotationStyle::default());
    }

    #[test]
    fn config_rejects_negative_hover_gap() {
        let style = AnnotationStyle {
            hover_gap: -1.0,
            ..AnnotationStyle::default()
        };
        assert!(AnnotationConfig::wave_abc().with_style(style).validate().is_err());
    }
}
