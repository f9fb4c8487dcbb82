//! Selection state machine over the generated points.
//!
//! Exactly one point is selected at any time; [`ScaleSelection::select`] is
//! the only code path that flips selection flags after generation.

use crate::config::Configuration;
use crate::scale::{generate, GeneratedScale, ScalePoint};

/// Result of a [`ScaleSelection::select`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTransition {
    /// The requested point was already selected; nothing changed.
    Unchanged { index: usize },
    /// Selection moved; exactly two flags flipped.
    Changed { previous: usize, current: usize },
    OutOfBounds { index: usize, len: usize },
}

impl SelectionTransition {
    pub fn is_change(&self) -> bool {
        matches!(self, SelectionTransition::Changed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleSelection {
    points: Vec<ScalePoint>,
    selected: usize,
}

impl ScaleSelection {
    pub fn new(configuration: &Configuration) -> Self {
        Self::from_generated(generate(configuration))
    }

    /// Takes over a scale produced by [`generate`], which always carries
    /// exactly one flag at its selected index.
    pub fn from_generated(scale: GeneratedScale) -> Self {
        let (points, selected) = scale.into_parts();
        Self { points, selected }
    }

    pub fn select(&mut self, index: usize) -> SelectionTransition {
        let len = self.points.len();
        if index >= len {
            return SelectionTransition::OutOfBounds { index, len };
        }
        if index == self.selected {
            return SelectionTransition::Unchanged { index };
        }
        let previous = std::mem::replace(&mut self.selected, index);
        self.points[previous].set_selected(false);
        self.points[index].set_selected(true);
        SelectionTransition::Changed {
            previous,
            current: index,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_point(&self) -> &ScalePoint {
        &self.points[self.selected]
    }

    pub fn points(&self) -> &[ScalePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn position_of_value(&self, value: i64) -> Option<usize> {
        self.points.iter().position(|point| point.value() == value)
    }
}
