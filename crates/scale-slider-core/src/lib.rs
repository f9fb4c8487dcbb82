//! Headless interaction core for a discrete scale slider.
//!
//! A [`Configuration`] is validated once and expanded into labeled
//! [`ScalePoint`]s. The presentation layer reports slot geometry after
//! layout and forwards raw pointer x coordinates; the [`ScaleSlider`]
//! resolves them to a point, keeps exactly one point selected and reports
//! changes back.

mod config;
mod error;
mod geometry;
mod haptics;
mod hit_region;
mod options;
mod pointer;
mod scale;
mod selection;
mod slider;
mod task_queue;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use haptics::{HapticFeedback, ImpactStyle, NoHaptics};
pub use hit_region::*;
pub use options::*;
pub use pointer::*;
pub use scale::*;
pub use selection::*;
pub use slider::*;
pub use task_queue::*;

pub mod prelude {
    pub use crate::config::Configuration;
    pub use crate::geometry::{GeometrySnapshot, GeometrySource, SlotFrame, SlotKind};
    pub use crate::haptics::{HapticFeedback, ImpactStyle};
    pub use crate::pointer::{PointerEvent, PointerEventKind};
    pub use crate::scale::ScalePoint;
    pub use crate::selection::{ScaleSelection, SelectionTransition};
    pub use crate::slider::{HandleRequest, PointerOutcome, ScaleSlider};
}
