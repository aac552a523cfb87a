use crate::error::{ChartError, ChartResult};

/// Affine mapping from a data domain onto a pixel range.
///
/// The pixel range may be reversed (`pixel_start > pixel_end`), which is how
/// price axes grow upward on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.pixel_start + normalized * (self.pixel_end - self.pixel_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let pixel_span = self.pixel_end - self.pixel_start;
        if pixel_span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a zero-width pixel range".to_owned(),
            ));
        }

        let normalized = (pixel - self.pixel_start) / pixel_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
