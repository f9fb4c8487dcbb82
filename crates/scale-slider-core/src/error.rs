use crate::config::MAX_SCALE_POINTS;

/// Reasons a [`Configuration`](crate::Configuration) cannot describe a scale.
///
/// Checked in declaration order; the first violated rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    ZeroInterval,
    EmptyRange { minimum: i64, maximum: i64 },
    Overflow { minimum: i64, maximum: i64 },
    UnevenInterval { span: i64, interval: i64 },
    TooFewPoints { count: i64 },
    TooManyPoints { count: i64, limit: usize },
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructionError::ZeroInterval => write!(f, "scale interval must be nonzero"),
            ConstructionError::EmptyRange { minimum, maximum } => {
                write!(f, "maximum {maximum} must be greater than minimum {minimum}")
            }
            ConstructionError::Overflow { minimum, maximum } => {
                write!(f, "scale {minimum}..={maximum} overflows")
            }
            ConstructionError::UnevenInterval { span, interval } => {
                write!(f, "span {span} is not divisible by interval {interval}")
            }
            ConstructionError::TooFewPoints { count } => {
                write!(f, "scale needs at least two points, got {count}")
            }
            ConstructionError::TooManyPoints { count, limit } => {
                write!(f, "scale has {count} points; limit is {limit}")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

impl ConstructionError {
    pub(crate) fn too_many(count: i64) -> Self {
        ConstructionError::TooManyPoints {
            count,
            limit: MAX_SCALE_POINTS,
        }
    }
}

/// Failure reported by a haptic capability. Never surfaced past the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticError {
    Unavailable,
    Rejected { reason: &'static str },
}

impl std::fmt::Display for HapticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticError::Unavailable => write!(f, "haptic feedback unavailable"),
            HapticError::Rejected { reason } => write!(f, "haptic impact rejected: {reason}"),
        }
    }
}

impl std::error::Error for HapticError {}
