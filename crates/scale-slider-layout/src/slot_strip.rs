//! Horizontal strip of point slots separated by thin separator slots.
//!
//! Mirrors the usual presentation of a scale slider: one label slot per
//! point, a 1 px separator between neighbors, centers spaced evenly inside
//! the slider bounds minus a small horizontal inset.

use crate::arrangement::{Arrangement, EqualCentering};
use scale_slider_core::{GeometrySnapshot, GeometrySource, ScalePoint, SlotFrame, SlotKind};
use scale_slider_graphics::{EdgeInsets, Rect};

pub const DEFAULT_STRIP_INSET: f32 = 6.0;
pub const DEFAULT_SEPARATOR_WIDTH: f32 = 1.0;
/// Approximate advance of one label glyph at the default label size.
pub const DEFAULT_GLYPH_WIDTH: f32 = 7.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SlotStrip {
    pub point_widths: Vec<f32>,
    pub separator_width: f32,
    pub insets: EdgeInsets,
}

impl SlotStrip {
    pub fn new(point_widths: Vec<f32>) -> Self {
        Self {
            point_widths,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            insets: EdgeInsets::horizontal(DEFAULT_STRIP_INSET),
        }
    }

    pub fn uniform(point_count: usize, point_width: f32) -> Self {
        Self::new(vec![point_width; point_count])
    }

    /// Sizes each point slot to its label.
    pub fn for_points(points: &[ScalePoint], glyph_width: f32) -> Self {
        Self::new(
            points
                .iter()
                .map(|point| point.label().chars().count() as f32 * glyph_width)
                .collect(),
        )
    }

    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_separator_width(mut self, width: f32) -> Self {
        self.separator_width = width;
        self
    }

    pub fn point_count(&self) -> usize {
        self.point_widths.len()
    }

    fn slot_sizes(&self) -> Vec<f32> {
        (0..SlotKind::slot_count(self.point_count()))
            .map(|index| match SlotKind::at(index) {
                SlotKind::Point(point) => self.point_widths[point],
                SlotKind::Separator => self.separator_width,
            })
            .collect()
    }

    /// Lays the strip out inside `bounds`. Coordinates are in the same space as `bounds`.
    pub fn layout(&self, bounds: Rect) -> GeometrySnapshot {
        let inner = bounds.inset(self.insets);
        let sizes = self.slot_sizes();
        let mut positions = vec![0.0; sizes.len()];
        EqualCentering.arrange(inner.width, &sizes, &mut positions);

        let slots = sizes
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(index, (width, x))| SlotFrame::new(SlotKind::at(index), inner.x + x, *width))
            .collect();
        GeometrySnapshot::new(bounds, slots)
    }
}

impl GeometrySource for SlotStrip {
    fn capture(&self, bounds: Rect) -> Option<GeometrySnapshot> {
        if self.point_widths.is_empty() || bounds.width <= 0.0 {
            log::debug!("slot strip cannot lay out {bounds:?}");
            return None;
        }
        Some(self.layout(bounds))
    }
}

#[cfg(test)]
#[path = "tests/slot_strip_tests.rs"]
mod tests;
