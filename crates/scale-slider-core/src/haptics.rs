//! Optional tactile feedback capability.
//!
//! The slider fires an impact on every effective selection change. The call
//! is fire-and-forget: failures are logged at trace level and dropped.

use crate::error::HapticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpactStyle {
    Light,
    #[default]
    Medium,
    Heavy,
}

pub trait HapticFeedback {
    fn impact(&self, style: ImpactStyle) -> Result<(), HapticError>;
}

/// Capability for platforms without a haptic engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn impact(&self, _style: ImpactStyle) -> Result<(), HapticError> {
        Err(HapticError::Unavailable)
    }
}

pub(crate) fn fire_impact(haptics: Option<&dyn HapticFeedback>, style: ImpactStyle) {
    let Some(haptics) = haptics else {
        return;
    };
    if let Err(err) = haptics.impact(style) {
        log::trace!("ignoring haptic failure: {err}");
    }
}
