use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::annotations::{AnnotationKind, PitchforkStyle};
use crate::core::{AnchorMapper, Bounds, DataAnchor, Point};
use crate::error::{ChartError, ChartResult};
use crate::render::{AnnotationFrame, FramePen, PathSet, Renderer};

use super::{AnnotationConfig, AnnotationStyle};

/// Most anchors any supported pattern consumes.
pub const MAX_ANCHORS: usize = 4;

/// One annotation instance: anchors, options and the pens it draws into.
///
/// Anchor, bounds and option changes only mark the shapes dirty; `draw`
/// performs the single full redraw. Style changes never touch geometry.
#[derive(Debug, Clone)]
pub struct Annotation {
    config: AnnotationConfig,
    anchors: SmallVec<[Point; MAX_ANCHORS]>,
    bounds: Option<Bounds>,
    paths: Option<PathSet>,
    shapes_dirty: bool,
}

impl Annotation {
    pub fn new(config: AnnotationConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            anchors: SmallVec::new(),
            bounds: None,
            paths: None,
            shapes_dirty: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AnnotationConfig {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        self.config.kind
    }

    #[must_use]
    pub fn style(&self) -> AnnotationStyle {
        self.config.style
    }

    #[must_use]
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Pens of the last draw; `None` until the first draw.
    #[must_use]
    pub fn paths(&self) -> Option<&PathSet> {
        self.paths.as_ref()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.shapes_dirty
    }

    /// Whether enough anchors are placed for the pattern to draw.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.anchors.len() >= self.config.kind.min_anchors()
    }

    pub fn invalidate(&mut self) {
        self.shapes_dirty = true;
    }

    pub fn set_anchors(&mut self, anchors: &[Point]) -> ChartResult<()> {
        if anchors.is_empty() || anchors.len() > MAX_ANCHORS {
            warn!(
                count = anchors.len(),
                kind = self.config.kind.name(),
                "rejecting anchor update"
            );
            return Err(ChartError::InvalidAnchorCount {
                count: anchors.len(),
                max: MAX_ANCHORS,
            });
        }
        if let Some(index) = anchors.iter().position(|anchor| !anchor.is_finite()) {
            warn!(index, "rejecting non-finite anchor");
            return Err(ChartError::InvalidData(format!(
                "anchor {index} must have finite coordinates"
            )));
        }

        if self.anchors.as_slice() == anchors {
            return Ok(());
        }
        trace!(count = anchors.len(), "update anchors");
        self.anchors = SmallVec::from_slice(anchors);
        self.invalidate();
        Ok(())
    }

    /// Maps data-space anchors through `mapper` and adopts its bounds.
    pub fn set_data_anchors(
        &mut self,
        anchors: &[DataAnchor],
        mapper: &AnchorMapper,
    ) -> ChartResult<()> {
        let points = mapper.map_all(anchors)?;
        self.set_bounds(mapper.bounds())?;
        self.set_anchors(&points)
    }

    pub fn set_bounds(&mut self, bounds: Bounds) -> ChartResult<()> {
        bounds.validate()?;
        if self.bounds != Some(bounds) {
            trace!(
                left = bounds.left,
                top = bounds.top,
                width = bounds.width,
                height = bounds.height,
                "update bounds"
            );
            self.bounds = Some(bounds);
            self.invalidate();
        }
        Ok(())
    }

    pub fn set_style(&mut self, style: AnnotationStyle) -> ChartResult<()> {
        self.config.style = style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn pitchfork_style(&self) -> Option<PitchforkStyle> {
        match self.config.kind {
            AnnotationKind::Pitchfork(options) => Some(options.style),
            _ => None,
        }
    }

    pub fn set_pitchfork_style(&mut self, style: PitchforkStyle) -> ChartResult<()> {
        let kind = self.config.kind;
        let AnnotationKind::Pitchfork(options) = &mut self.config.kind else {
            return Err(option_mismatch(kind, "pitchfork style"));
        };
        if options.style != style {
            options.style = style;
            self.shapes_dirty = true;
        }
        Ok(())
    }

    #[must_use]
    pub fn extra_lines(&self) -> Option<u32> {
        match self.config.kind {
            AnnotationKind::Pitchfork(options) => Some(options.extra_lines),
            _ => None,
        }
    }

    pub fn set_extra_lines(&mut self, extra_lines: u32) -> ChartResult<()> {
        let kind = self.config.kind;
        let AnnotationKind::Pitchfork(options) = &mut self.config.kind else {
            return Err(option_mismatch(kind, "extra lines"));
        };
        let updated = options.with_extra_lines(extra_lines).validate().inspect_err(|_| {
            warn!(extra_lines, "rejecting extra lines update");
        })?;
        if *options != updated {
            *options = updated;
            self.shapes_dirty = true;
        }
        Ok(())
    }

    #[must_use]
    pub fn show_target(&self) -> Option<bool> {
        match self.config.kind {
            AnnotationKind::SymmetricalWedge(options) => Some(options.show_target),
            AnnotationKind::WaveAbc(options) => Some(options.show_target),
            _ => None,
        }
    }

    pub fn set_show_target(&mut self, show_target: bool) -> ChartResult<()> {
        let kind = self.config.kind;
        let current = match &mut self.config.kind {
            AnnotationKind::SymmetricalWedge(options) => &mut options.show_target,
            AnnotationKind::WaveAbc(options) => &mut options.show_target,
            _ => return Err(option_mismatch(kind, "show target")),
        };
        if *current != show_target {
            *current = show_target;
            self.shapes_dirty = true;
        }
        Ok(())
    }

    /// Redraws every pen when shapes are dirty.
    ///
    /// Returns whether a redraw happened. Requires bounds; an incomplete
    /// anchor set redraws to empty pens.
    pub fn draw(&mut self) -> ChartResult<bool> {
        if !self.shapes_dirty {
            return Ok(false);
        }
        let Some(bounds) = self.bounds else {
            return Err(ChartError::InvalidData(
                "annotation bounds must be set before drawing".to_owned(),
            ));
        };

        let kind = self.config.kind;
        let paths = self
            .paths
            .get_or_insert_with(|| PathSet::with_roles(kind.pen_roles()));
        let drawn = kind.draw(paths, &self.anchors, bounds);
        if drawn {
            debug!(
                kind = kind.name(),
                anchors = self.anchors.len(),
                "annotation redrawn"
            );
        } else {
            debug!(
                kind = kind.name(),
                anchors = self.anchors.len(),
                required = kind.min_anchors(),
                "annotation incomplete, pens cleared"
            );
        }

        self.shapes_dirty = false;
        Ok(true)
    }

    /// Draws if needed and attaches paint to every pen.
    pub fn build_frame(&mut self) -> ChartResult<AnnotationFrame> {
        self.draw()?;
        let (Some(bounds), Some(paths)) = (self.bounds, self.paths.as_ref()) else {
            return Err(ChartError::InvalidData(
                "annotation has not been drawn".to_owned(),
            ));
        };

        let style = self.config.style;
        let frame = paths
            .iter()
            .fold(AnnotationFrame::new(bounds), |frame, (role, pen)| {
                frame.with_pen(FramePen {
                    role,
                    z_index: role.z_index(),
                    paint: style.paint_for(role),
                    commands: pen.commands().to_vec(),
                })
            });
        Ok(frame)
    }

    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame()?;
        renderer.render(&frame)
    }
}

fn option_mismatch(kind: AnnotationKind, option: &str) -> ChartError {
    warn!(kind = kind.name(), option, "option does not apply");
    ChartError::InvalidData(format!(
        "{option} is not supported by {} annotations",
        kind.name()
    ))
}
