//! Expands a [`Configuration`] into labeled scale points.

use crate::config::Configuration;

/// One discrete, selectable value on the scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalePoint {
    value: i64,
    label: String,
    selected: bool,
}

impl ScalePoint {
    fn new(value: i64, selected: bool) -> Self {
        Self {
            value,
            label: value.to_string(),
            selected,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Display form of the value.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Output of [`generate`]: ordered points with exactly one selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScale {
    points: Vec<ScalePoint>,
    selected_index: usize,
    fallback_applied: bool,
}

impl GeneratedScale {
    pub fn points(&self) -> &[ScalePoint] {
        &self.points
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// True when the default value missed the grid and the fallback picked the selection.
    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    pub(crate) fn into_parts(self) -> (Vec<ScalePoint>, usize) {
        (self.points, self.selected_index)
    }
}

/// Index selected when the default value is not on the grid: the point right
/// after the middle of the sequence, clamped to the last point.
pub fn fallback_index(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let middle = if len > 1 { (len - 1) / 2 } else { 0 };
    Some((middle + 1).min(len - 1))
}

pub fn generate(configuration: &Configuration) -> GeneratedScale {
    let default_value = configuration.default_value();
    let mut points: Vec<ScalePoint> = (0..configuration.point_count())
        .filter_map(|index| configuration.value_at(index))
        .map(|value| ScalePoint::new(value, value == default_value))
        .collect();

    if let Some(selected_index) = points.iter().position(ScalePoint::is_selected) {
        return GeneratedScale {
            points,
            selected_index,
            fallback_applied: false,
        };
    }

    // A configuration always has at least two points.
    let selected_index = fallback_index(points.len()).unwrap_or(0);
    points[selected_index].set_selected(true);
    log::debug!(
        "default value {default_value} is off the grid; selecting {} instead",
        points[selected_index].label()
    );
    GeneratedScale {
        points,
        selected_index,
        fallback_applied: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(scale: &GeneratedScale) -> Vec<&str> {
        scale.points.iter().map(ScalePoint::label).collect()
    }

    #[test]
    fn generates_every_point_in_order() {
        let config = Configuration::new(1, 5, 1, None).unwrap();
        let scale = generate(&config);
        assert_eq!(labels(&scale), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(scale.selected_index, 0);
        assert!(!scale.fallback_applied);
    }

    #[test]
    fn values_step_by_interval() {
        let config = Configuration::new(-20, 20, 10, Some(10)).unwrap();
        let scale = generate(&config);
        let values: Vec<i64> = scale.points.iter().map(ScalePoint::value).collect();
        assert_eq!(values, vec![-20, -10, 0, 10, 20]);
        assert_eq!(labels(&scale), vec!["-20", "-10", "0", "10", "20"]);
        assert_eq!(scale.selected_index, 3);
    }

    #[test]
    fn exactly_one_point_selected() {
        for default in -2..8 {
            let config = Configuration::new(1, 5, 2, Some(default)).unwrap();
            let scale = generate(&config);
            let selected = scale.points.iter().filter(|p| p.is_selected()).count();
            assert_eq!(selected, 1, "default {default}");
            assert!(scale.points[scale.selected_index].is_selected());
        }
    }

    #[test]
    fn off_grid_default_selects_point_after_middle() {
        let config = Configuration::new(1, 5, 2, Some(2)).unwrap();
        let scale = generate(&config);
        assert!(scale.fallback_applied);
        assert_eq!(scale.selected_index, 2);
        assert_eq!(scale.points[2].label(), "5");

        let config = Configuration::new(1, 5, 1, Some(42)).unwrap();
        let scale = generate(&config);
        assert_eq!(scale.selected_index, 3);
    }

    #[test]
    fn two_point_scale_falls_back_to_last() {
        let config = Configuration::new(0, 1, 1, Some(7)).unwrap();
        let scale = generate(&config);
        assert_eq!(scale.selected_index, 1);
    }

    #[test]
    fn fallback_index_clamps_short_sequences() {
        assert_eq!(fallback_index(0), None);
        assert_eq!(fallback_index(1), Some(0));
        assert_eq!(fallback_index(2), Some(1));
        assert_eq!(fallback_index(3), Some(2));
        assert_eq!(fallback_index(4), Some(2));
        assert_eq!(fallback_index(6), Some(3));
    }
}
