use cairo::{Context, Format, ImageSurface};

use crate::error::{ChartError, ChartResult};
use crate::render::{AnnotationFrame, Color, FramePen, PathCommand, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub pens_stroked: usize,
    pub pens_filled: usize,
    pub commands_replayed: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &AnnotationFrame,
    ) -> ChartResult<()>;
}

/// Cairo renderer backend for annotation frames.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external Cairo context through
/// `CairoContextRenderer`. Only the offscreen mode clears the surface first.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &AnnotationFrame) -> ChartResult<()> {
        frame.validate()?;

        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.rectangle(
            frame.bounds.left,
            frame.bounds.top,
            frame.bounds.width,
            frame.bounds.height,
        );
        context.clip();

        // restore on every path, including a failed pen
        let replayed = replay_pens(context, frame);
        let restored = context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err));
        let stats = replayed?;
        restored?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &AnnotationFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.clear_color.validate()?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &AnnotationFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn replay_pens(context: &Context, frame: &AnnotationFrame) -> ChartResult<CairoRenderStats> {
    let mut stats = CairoRenderStats::default();
    for pen in frame.pens_in_draw_order() {
        if pen.commands.is_empty() {
            continue;
        }
        append_pen_path(context, pen);
        stats.commands_replayed += pen.commands.len();

        if let Some(fill) = pen.paint.fill {
            apply_color(context, fill);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill pen", err))?;
            stats.pens_filled += 1;
        }

        apply_color(context, pen.paint.stroke_color);
        context.set_line_width(pen.paint.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke pen", err))?;
        stats.pens_stroked += 1;
    }
    Ok(stats)
}

fn append_pen_path(context: &Context, pen: &FramePen) {
    context.new_path();
    for command in &pen.commands {
        match *command {
            PathCommand::MoveTo { x, y } => context.move_to(x, y),
            PathCommand::LineTo { x, y } => context.line_to(x, y),
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
