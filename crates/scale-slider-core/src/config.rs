//! Scale configuration and its validation rules.

use crate::error::ConstructionError;

/// Upper bound on generated scale points. A slider with more discrete
/// points than this is no longer usable as a tap target.
pub const MAX_SCALE_POINTS: usize = 4096;

/// Validated description of an evenly spaced integer scale.
///
/// Instances only exist if every rule in [`Configuration::new`] holds, so
/// downstream code never re-checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    minimum_scale: i64,
    maximum_scale: i64,
    scale_interval: i64,
    default_value: i64,
    point_count: usize,
}

impl Configuration {
    /// Validates a scale. `default_value` falls back to `minimum_scale`.
    ///
    /// Rules, in order: the interval is nonzero, the maximum exceeds the
    /// minimum, the span fits in an `i64`, the span divides evenly by the
    /// interval, and the resulting point count is within `2..=MAX_SCALE_POINTS`.
    pub fn new(
        minimum_scale: i64,
        maximum_scale: i64,
        scale_interval: i64,
        default_value: Option<i64>,
    ) -> Result<Self, ConstructionError> {
        if scale_interval == 0 {
            return Err(ConstructionError::ZeroInterval);
        }
        if maximum_scale <= minimum_scale {
            return Err(ConstructionError::EmptyRange {
                minimum: minimum_scale,
                maximum: maximum_scale,
            });
        }
        let overflow = ConstructionError::Overflow {
            minimum: minimum_scale,
            maximum: maximum_scale,
        };
        let span = maximum_scale
            .checked_sub(minimum_scale)
            .ok_or_else(|| overflow.clone())?;
        if span % scale_interval != 0 {
            return Err(ConstructionError::UnevenInterval {
                span,
                interval: scale_interval,
            });
        }
        let count = (span / scale_interval).checked_add(1).ok_or(overflow)?;
        if count <= 1 {
            return Err(ConstructionError::TooFewPoints { count });
        }
        let point_count = usize::try_from(count)
            .ok()
            .filter(|count| *count <= MAX_SCALE_POINTS)
            .ok_or_else(|| ConstructionError::too_many(count))?;

        Ok(Self {
            minimum_scale,
            maximum_scale,
            scale_interval,
            default_value: default_value.unwrap_or(minimum_scale),
            point_count,
        })
    }

    pub fn minimum_scale(&self) -> i64 {
        self.minimum_scale
    }

    pub fn maximum_scale(&self) -> i64 {
        self.maximum_scale
    }

    pub fn scale_interval(&self) -> i64 {
        self.scale_interval
    }

    pub fn default_value(&self) -> i64 {
        self.default_value
    }

    /// Number of discrete points, always at least two.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Numeric value of the point at `index`.
    pub fn value_at(&self, index: usize) -> Option<i64> {
        if index >= self.point_count {
            return None;
        }
        // In range by construction: the result never passes maximum_scale.
        Some(self.minimum_scale + index as i64 * self.scale_interval)
    }

    /// Index of the point whose value is exactly `value`.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        let offset = value.checked_sub(self.minimum_scale)?;
        if offset % self.scale_interval != 0 {
            return None;
        }
        let index = usize::try_from(offset / self.scale_interval).ok()?;
        (index < self.point_count).then_some(index)
    }

    /// Whether the default value lands exactly on a generated point.
    pub fn default_on_grid(&self) -> bool {
        self.index_of(self.default_value).is_some()
    }
}

/// Free-function form of [`Configuration::new`].
pub fn validate(
    minimum_scale: i64,
    maximum_scale: i64,
    scale_interval: i64,
    default_value: Option<i64>,
) -> Result<Configuration, ConstructionError> {
    Configuration::new(minimum_scale, maximum_scale, scale_interval, default_value)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
