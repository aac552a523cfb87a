use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::AnnotationFrame;

use super::Annotation;

pub const ANNOTATION_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Versioned snapshot of one drawn annotation, for diagnostics and
/// golden-file comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFrameJsonContractV1 {
    pub schema_version: u32,
    pub kind: String,
    pub frame: AnnotationFrame,
}

impl AnnotationFrame {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize annotation frame: {e}"))
        })
    }

    /// Accepts either a bare frame or a v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<AnnotationFrame>(input) {
            return Ok(frame);
        }
        let payload: AnnotationFrameJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse annotation frame payload: {e}"))
            })?;
        if payload.schema_version != ANNOTATION_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported annotation frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl Annotation {
    pub fn frame_json_contract_v1_pretty(&mut self) -> ChartResult<String> {
        let payload = AnnotationFrameJsonContractV1 {
            schema_version: ANNOTATION_FRAME_JSON_SCHEMA_V1,
            kind: self.kind().name().to_owned(),
            frame: self.build_frame()?,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize annotation contract v1: {e}"))
        })
    }
}
