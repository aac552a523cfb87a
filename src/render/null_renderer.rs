use crate::error::ChartResult;
use crate::render::{AnnotationFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_pen_count: usize,
    pub last_command_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &AnnotationFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_pen_count = frame.pens.len();
        self.last_command_count = frame.command_count();
        Ok(())
    }
}
