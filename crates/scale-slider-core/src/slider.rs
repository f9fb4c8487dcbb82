//! The slider controller.
//!
//! `ScaleSlider` owns the configuration, the selection state machine and the
//! hit-region resolver, and is driven entirely by the presentation layer:
//! bounds changes, deferred geometry capture and raw pointer coordinates go
//! in; selection notifications and handle offset requests come out. It is
//! single-threaded and never blocks.

use crate::config::Configuration;
use crate::error::ConstructionError;
use crate::geometry::{GeometrySnapshot, GeometrySource, SlotKind};
use crate::haptics::{fire_impact, HapticFeedback};
use crate::hit_region::{Hit, HitRegionResolver};
use crate::options::SliderOptions;
use crate::pointer::{PointerEvent, PointerEventKind, PointerId};
use crate::scale::ScalePoint;
use crate::selection::{ScaleSelection, SelectionTransition};
use crate::task_queue::{SliderTask, TaskQueue};
use scale_slider_graphics::Rect;
use std::time::Duration;

type ValueChangedCallback = Box<dyn FnMut(&ScaleSelection)>;
type HandleRequestCallback = Box<dyn FnMut(HandleRequest)>;

/// Where the presentation layer should place the center of the drag handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRequest {
    pub x: f32,
    pub animation: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Selection moved to `index`.
    Selected { index: usize, handle: HandleRequest },
    /// Pointer resolved to the already selected point.
    Unchanged { index: usize, handle: HandleRequest },
    /// Coordinate outside every range; selection kept.
    NoHit { x: f32 },
    /// No geometry has been captured yet.
    GeometryPending,
    /// Press released.
    Released,
    /// Event not relevant to the current gesture.
    Ignored,
}

pub struct ScaleSlider {
    configuration: Configuration,
    options: SliderOptions,
    selection: ScaleSelection,
    resolver: HitRegionResolver,
    geometry: Option<GeometrySnapshot>,
    cached_bounds: Option<Rect>,
    tasks: TaskQueue,
    active_pointer: Option<PointerId>,
    haptics: Option<Box<dyn HapticFeedback>>,
    on_value_changed: Option<ValueChangedCallback>,
    on_handle_request: Option<HandleRequestCallback>,
}

impl std::fmt::Debug for ScaleSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaleSlider")
            .field("configuration", &self.configuration)
            .field("selected_index", &self.selection.selected_index())
            .field("cached_bounds", &self.cached_bounds)
            .field("pending_tasks", &self.tasks.len())
            .field("active_pointer", &self.active_pointer)
            .finish_non_exhaustive()
    }
}

impl ScaleSlider {
    pub fn new(configuration: Configuration) -> Self {
        Self::with_options(configuration, SliderOptions::default())
    }

    pub fn with_options(configuration: Configuration, options: SliderOptions) -> Self {
        Self {
            selection: ScaleSelection::new(&configuration),
            configuration,
            options,
            resolver: HitRegionResolver::new(),
            geometry: None,
            cached_bounds: None,
            tasks: TaskQueue::new(),
            active_pointer: None,
            haptics: None,
            on_value_changed: None,
            on_handle_request: None,
        }
    }

    /// Validates the scale and builds a slider from it.
    pub fn try_new(
        minimum_scale: i64,
        maximum_scale: i64,
        scale_interval: i64,
        default_value: Option<i64>,
    ) -> Result<Self, ConstructionError> {
        let configuration =
            Configuration::new(minimum_scale, maximum_scale, scale_interval, default_value)?;
        Ok(Self::new(configuration))
    }

    pub fn with_haptics(mut self, haptics: impl HapticFeedback + 'static) -> Self {
        self.set_haptics(Some(Box::new(haptics)));
        self
    }

    pub fn set_haptics(&mut self, haptics: Option<Box<dyn HapticFeedback>>) {
        self.haptics = haptics;
    }

    /// Registers the observer fired once per effective selection change.
    pub fn on_value_changed(&mut self, callback: impl FnMut(&ScaleSelection) + 'static) {
        self.on_value_changed = Some(Box::new(callback));
    }

    pub fn on_handle_request(&mut self, callback: impl FnMut(HandleRequest) + 'static) {
        self.on_handle_request = Some(Box::new(callback));
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn selection(&self) -> &ScaleSelection {
        &self.selection
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    pub fn selected_point(&self) -> &ScalePoint {
        self.selection.selected_point()
    }

    pub fn points(&self) -> &[ScalePoint] {
        self.selection.points()
    }

    pub fn geometry(&self) -> Option<&GeometrySnapshot> {
        self.geometry.as_ref()
    }

    pub fn resolver(&self) -> &HitRegionResolver {
        &self.resolver
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn is_pressed(&self) -> bool {
        self.active_pointer.is_some()
    }

    /// Records new bounds and posts a geometry capture for the next turn.
    ///
    /// Returns `false` when the bounds match the cached ones. Current ranges
    /// stay live until the capture runs.
    pub fn on_bounds_changed(&mut self, bounds: Rect) -> bool {
        if self.cached_bounds == Some(bounds) {
            return false;
        }
        self.cached_bounds = Some(bounds);
        self.tasks.push(SliderTask::CaptureGeometry { bounds });
        true
    }

    /// Runs posted tasks. Several bounds changes in one turn collapse into a
    /// single capture of the latest bounds. Returns whether geometry was applied.
    ///
    /// A failed capture forgets the cached bounds, so the next bounds
    /// notification posts again even when the bounds are the same.
    pub fn run_pending(&mut self, source: &dyn GeometrySource) -> bool {
        let mut latest = None;
        self.tasks.drain(|task| match task {
            SliderTask::CaptureGeometry { bounds } => latest = Some(bounds),
        });
        let Some(bounds) = latest else {
            return false;
        };
        match source.capture(bounds) {
            Some(snapshot) => self.apply_geometry(snapshot),
            None => {
                log::debug!("no slot frames available for {bounds:?}");
                self.cached_bounds = None;
                false
            }
        }
    }

    /// Replaces the geometry snapshot and rebuilds hit ranges.
    ///
    /// A snapshot whose slots do not match the scale is rejected and leaves
    /// the slider without geometry until a valid one arrives.
    pub fn apply_geometry(&mut self, snapshot: GeometrySnapshot) -> bool {
        let point_count = self.selection.len();
        if !snapshot.matches_scale(point_count) {
            log::warn!(
                "geometry has {} slots, expected {} alternating slots for {point_count} points",
                snapshot.slots().len(),
                SlotKind::slot_count(point_count),
            );
            self.resolver.clear();
            self.geometry = None;
            self.cached_bounds = None;
            return false;
        }

        self.resolver.rebuild_ranges(&snapshot.edges());
        let center = snapshot.point_center(self.selection.selected_index());
        self.geometry = Some(snapshot);
        if let Some(x) = center {
            self.emit_handle(HandleRequest { x, animation: None });
        }
        true
    }

    pub fn on_pointer_down(&mut self, x: f32) -> PointerOutcome {
        self.track(x)
    }

    pub fn on_pointer_moved(&mut self, x: f32) -> PointerOutcome {
        self.track(x)
    }

    /// Routes a raw pointer event. Moves only count while a press is active
    /// and only for the pointer that started it.
    pub fn dispatch_pointer(&mut self, event: &PointerEvent) -> PointerOutcome {
        match event.kind {
            PointerEventKind::Down => {
                if self.active_pointer.is_some_and(|id| id != event.id) {
                    return PointerOutcome::Ignored;
                }
                self.active_pointer = Some(event.id);
                self.on_pointer_down(event.position.x)
            }
            PointerEventKind::Move => {
                if self.active_pointer == Some(event.id) {
                    self.on_pointer_moved(event.position.x)
                } else {
                    PointerOutcome::Ignored
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.active_pointer == Some(event.id) {
                    self.active_pointer = None;
                    PointerOutcome::Released
                } else {
                    PointerOutcome::Ignored
                }
            }
        }
    }

    /// Programmatic selection. Follows the same notification rules as input.
    pub fn select_index(&mut self, index: usize) -> SelectionTransition {
        let transition = self.commit(index);
        if transition.is_change() {
            if let Some(x) = self
                .geometry
                .as_ref()
                .and_then(|geometry| geometry.point_center(index))
            {
                self.emit_handle(HandleRequest { x, animation: None });
            }
        }
        transition
    }

    /// Selects the point carrying `value`; `None` if the value is off the scale.
    pub fn select_value(&mut self, value: i64) -> Option<SelectionTransition> {
        let index = self.selection.position_of_value(value)?;
        Some(self.select_index(index))
    }

    fn track(&mut self, x: f32) -> PointerOutcome {
        if self.resolver.is_empty() {
            return PointerOutcome::GeometryPending;
        }
        let Some(hit) = self.resolver.resolve(x) else {
            log::trace!("x={x} is outside every hit range");
            return PointerOutcome::NoHit { x };
        };
        let Some(handle) = self.handle_for(&hit) else {
            return PointerOutcome::NoHit { x };
        };

        match self.commit(hit.point_index) {
            SelectionTransition::Changed { current, .. } => {
                self.emit_handle(handle);
                PointerOutcome::Selected {
                    index: current,
                    handle,
                }
            }
            SelectionTransition::Unchanged { index } => PointerOutcome::Unchanged { index, handle },
            SelectionTransition::OutOfBounds { index, len } => {
                log::warn!("hit resolved to point {index} but the scale has {len}");
                PointerOutcome::NoHit { x }
            }
        }
    }

    fn handle_for(&self, hit: &Hit) -> Option<HandleRequest> {
        let width = self.geometry.as_ref()?.point_width(hit.point_index)?;
        Some(HandleRequest {
            x: hit.anchor_x + width / 2.0,
            animation: self.options.handle_animation,
        })
    }

    /// Applies a selection change, then fires haptics and the observer.
    fn commit(&mut self, index: usize) -> SelectionTransition {
        let transition = self.selection.select(index);
        if let SelectionTransition::Changed { previous, current } = transition {
            log::debug!(
                "selection {} -> {}",
                self.selection.points()[previous].label(),
                self.selection.points()[current].label()
            );
            if self.options.haptics_enabled {
                fire_impact(self.haptics.as_deref(), self.options.impact_style);
            }
            if let Some(callback) = self.on_value_changed.as_mut() {
                callback(&self.selection);
            }
        }
        transition
    }

    fn emit_handle(&mut self, request: HandleRequest) {
        if let Some(callback) = self.on_handle_request.as_mut() {
            callback(request);
        }
    }
}

#[cfg(test)]
#[path = "tests/slider_tests.rs"]
mod tests;
