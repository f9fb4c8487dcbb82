//! Pure geometry data for the scale slider
//!
//! Points, rectangles and insets in logical pixels. Nothing here
//! knows about scales or selection.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect};
}
