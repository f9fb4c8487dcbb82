//! Geometry snapshot captured from the presentation layer after layout.
//!
//! The strip is an ordered list of visual slots. Point slots and thin
//! separator slots alternate, starting and ending with a point, so a scale
//! of `n` points occupies `2n - 1` slots. All x coordinates are in the
//! slider's own coordinate space, the same space pointer input arrives in.

use scale_slider_graphics::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Point(usize),
    Separator,
}

impl SlotKind {
    /// Kind of the slot at `slot_index` in an alternating strip.
    pub fn at(slot_index: usize) -> Self {
        if slot_index % 2 == 0 {
            SlotKind::Point(slot_index / 2)
        } else {
            SlotKind::Separator
        }
    }

    /// Slot index holding the given point.
    pub fn slot_of_point(point_index: usize) -> usize {
        point_index * 2
    }

    /// Number of slots needed for `point_count` points.
    pub fn slot_count(point_count: usize) -> usize {
        (point_count * 2).saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotFrame {
    pub kind: SlotKind,
    /// Leading edge.
    pub x: f32,
    pub width: f32,
}

impl SlotFrame {
    pub fn new(kind: SlotKind, x: f32, width: f32) -> Self {
        Self { kind, x, width }
    }

    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometrySnapshot {
    bounds: Rect,
    slots: Vec<SlotFrame>,
}

impl GeometrySnapshot {
    pub fn new(bounds: Rect, slots: Vec<SlotFrame>) -> Self {
        Self { bounds, slots }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn slots(&self) -> &[SlotFrame] {
        &self.slots
    }

    /// Leading edges of every slot, in order.
    pub fn edges(&self) -> Vec<f32> {
        self.slots.iter().map(|slot| slot.x).collect()
    }

    pub fn point_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot.kind, SlotKind::Point(_)))
            .count()
    }

    /// Whether the slots alternate point/separator and hold exactly `point_count` points.
    pub fn matches_scale(&self, point_count: usize) -> bool {
        self.slots.len() == SlotKind::slot_count(point_count)
            && self
                .slots
                .iter()
                .enumerate()
                .all(|(index, slot)| slot.kind == SlotKind::at(index))
    }

    pub fn point_frame(&self, point_index: usize) -> Option<&SlotFrame> {
        self.slots
            .get(SlotKind::slot_of_point(point_index))
            .filter(|slot| slot.kind == SlotKind::Point(point_index))
    }

    pub fn point_width(&self, point_index: usize) -> Option<f32> {
        self.point_frame(point_index).map(|slot| slot.width)
    }

    pub fn point_center(&self, point_index: usize) -> Option<f32> {
        self.point_frame(point_index).map(SlotFrame::center)
    }
}

/// Presentation-layer hook that reports slot frames once layout settled.
pub trait GeometrySource {
    /// Returns `None` if the layout has not produced frames for `bounds` yet.
    fn capture(&self, bounds: Rect) -> Option<GeometrySnapshot>;
}
