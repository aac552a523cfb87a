mod annotation;
mod annotation_config;
mod json_contract;

pub use annotation::{Annotation, MAX_ANCHORS};
pub use annotation_config::{AnnotationConfig, AnnotationStyle};
pub use json_contract::{ANNOTATION_FRAME_JSON_SCHEMA_V1, AnnotationFrameJsonContractV1};
