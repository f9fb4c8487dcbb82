use crate::haptics::ImpactStyle;
use std::time::Duration;

/// Handle animation used for pointer-driven moves.
pub const DEFAULT_HANDLE_ANIMATION: Duration = Duration::from_millis(100);

/// Behavioural options for a [`ScaleSlider`](crate::ScaleSlider).
#[derive(Debug, Clone, PartialEq)]
pub struct SliderOptions {
    /// Animation attached to handle requests caused by pointer input.
    /// Layout-driven requests are never animated.
    pub handle_animation: Option<Duration>,
    pub impact_style: ImpactStyle,
    pub haptics_enabled: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            handle_animation: Some(DEFAULT_HANDLE_ANIMATION),
            impact_style: ImpactStyle::Medium,
            haptics_enabled: true,
        }
    }
}

impl SliderOptions {
    pub fn without_animation(mut self) -> Self {
        self.handle_animation = None;
        self
    }

    pub fn with_impact_style(mut self, style: ImpactStyle) -> Self {
        self.impact_style = style;
        self
    }

    pub fn with_haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }
}
