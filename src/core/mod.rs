pub mod anchor;
pub mod clip;
pub mod scale;
pub mod types;

pub use anchor::{AnchorMapper, DataAnchor};
pub use clip::{clip_ray_by_rect, clip_segment_by_rect};
pub use scale::LinearScale;
pub use types::{Bounds, Point, Segment};
