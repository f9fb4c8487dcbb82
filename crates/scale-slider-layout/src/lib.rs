//! Reference layout for the scale slider strip

mod arrangement;
mod slot_strip;

pub use arrangement::*;
pub use slot_strip::*;

pub mod prelude {
    pub use crate::arrangement::{Arrangement, EqualCentering};
    pub use crate::slot_strip::SlotStrip;
}
