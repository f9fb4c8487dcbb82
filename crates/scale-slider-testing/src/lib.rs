//! Testing utilities and harness for the scale slider

pub mod assertions;
pub mod rule;

pub use assertions::*;
pub use rule::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::rule::{RecordingHaptics, SliderRecord, SliderTestRule};
}
