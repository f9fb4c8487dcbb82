//! Assertion helpers for slider tests.

use scale_slider_core::ScalePoint;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that exactly one point is selected and it is the one at `expected`.
pub fn assert_single_selection(points: &[ScalePoint], expected: usize) {
    let selected: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.is_selected())
        .map(|(index, _)| index)
        .collect();
    assert_eq!(
        selected,
        vec![expected],
        "expected only point {} selected, got {:?}",
        expected,
        selected
    );
}

/// Assert the labels of `points` in order.
pub fn assert_labels(points: &[ScalePoint], expected: &[&str]) {
    let labels: Vec<&str> = points.iter().map(ScalePoint::label).collect();
    assert_eq!(labels, expected, "scale labels");
}
