mod frame;
mod null_renderer;
mod path;
mod primitives;

pub use frame::{AnnotationFrame, FramePen};
pub use null_renderer::NullRenderer;
pub use path::{PathCommand, PathSet, Pen, PenRole};
pub use primitives::{Color, PenPaint};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `AnnotationFrame` so
/// drawing code stays isolated from pattern geometry.
pub trait Renderer {
    fn render(&mut self, frame: &AnnotationFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
