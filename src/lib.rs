//! chart-annotations: technical-analysis annotation geometry.
//!
//! Pattern builders turn a handful of pixel-space anchors into clipped,
//! deterministic pen commands; the `api` layer owns anchors, options and
//! pens per annotation and hands styled frames to a `Renderer`.

pub mod annotations;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use annotations::AnnotationKind;
pub use api::{Annotation, AnnotationConfig};
pub use error::{ChartError, ChartResult};
