use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{Bounds, Point};
use crate::error::{ChartError, ChartResult};

/// Anchor placed in data space: unix time in seconds and a price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataAnchor {
    pub time: f64,
    pub price: f64,
}

impl DataAnchor {
    #[must_use]
    pub fn new(time: f64, price: f64) -> Self {
        Self { time, price }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        let price = price.to_f64().ok_or_else(|| {
            ChartError::InvalidData("anchor price cannot be represented as f64".to_owned())
        })?;
        Ok(Self {
            time: time.timestamp_millis() as f64 / 1000.0,
            price,
        })
    }
}

/// Minimal stand-in for the chart's coordinate mapper.
///
/// Time grows left to right across the bounds, price grows bottom to top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorMapper {
    bounds: Bounds,
    time_scale: LinearScale,
    price_scale: LinearScale,
}

impl AnchorMapper {
    pub fn new(bounds: Bounds, time_range: (f64, f64), price_range: (f64, f64)) -> ChartResult<Self> {
        bounds.validate()?;
        let time_scale = LinearScale::new(time_range.0, time_range.1, bounds.left, bounds.right())?;
        let price_scale =
            LinearScale::new(price_range.0, price_range.1, bounds.bottom(), bounds.top)?;
        Ok(Self {
            bounds,
            time_scale,
            price_scale,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn to_pixel(&self, anchor: DataAnchor) -> ChartResult<Point> {
        Ok(Point::new(
            self.time_scale.domain_to_pixel(anchor.time)?,
            self.price_scale.domain_to_pixel(anchor.price)?,
        ))
    }

    pub fn to_data(&self, point: Point) -> ChartResult<DataAnchor> {
        Ok(DataAnchor::new(
            self.time_scale.pixel_to_domain(point.x)?,
            self.price_scale.pixel_to_domain(point.y)?,
        ))
    }

    pub fn map_all(&self, anchors: &[DataAnchor]) -> ChartResult<Vec<Point>> {
        anchors.iter().map(|anchor| self.to_pixel(*anchor)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{AnchorMapper, DataAnchor};
    use crate::core::{Bounds, Point};

    #[test]
    fn decimal_anchor_converts_to_unix_seconds() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("time");
        let anchor =
            DataAnchor::from_decimal_time(time, Decimal::new(12_345, 2)).expect("anchor");
        assert_eq!(anchor.time, 1_704_067_200.0);
        assert!((anchor.price - 123.45).abs() <= 1e-9);
    }

    #[test]
    fn mapper_inverts_price_axis() {
        let bounds = Bounds::new(10.0, 20.0, 200.0, 100.0).expect("bounds");
        let mapper = AnchorMapper::new(bounds, (0.0, 100.0), (0.0, 50.0)).expect("mapper");

        assert_eq!(
            mapper.to_pixel(DataAnchor::new(0.0, 50.0)).expect("px"),
            Point::new(10.0, 20.0)
        );
        assert_eq!(
            mapper.to_pixel(DataAnchor::new(100.0, 0.0)).expect("px"),
            Point::new(210.0, 120.0)
        );
        let back = mapper.to_data(Point::new(110.0, 70.0)).expect("data");
        assert_eq!(back, DataAnchor::new(50.0, 25.0));
    }
}
