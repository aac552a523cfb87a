use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plotting bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid anchor count: {count} (expected 1..={max})")]
    InvalidAnchorCount { count: usize, max: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
