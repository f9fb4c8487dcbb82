//! Headless presentation layer for driving a slider in tests.
//!
//! `SliderTestRule` plays the part of the platform view: it owns bounds,
//! lays out a [`SlotStrip`], pumps deferred work and records everything the
//! slider reports back.
//!
//! ```
//! use scale_slider_core::Configuration;
//! use scale_slider_testing::SliderTestRule;
//!
//! let configuration = Configuration::new(1, 5, 1, None).unwrap();
//! let mut rule = SliderTestRule::new(configuration);
//! rule.set_width(312.0);
//! rule.click_point(3);
//! assert_eq!(rule.selected_label(), "4");
//! ```

use scale_slider_core::{
    Configuration, HandleRequest, HapticError, HapticFeedback, ImpactStyle, PointerEvent,
    PointerOutcome, ScaleSlider, SliderOptions,
};
use scale_slider_graphics::Rect;
use scale_slider_layout::SlotStrip;
use std::cell::RefCell;
use std::rc::Rc;

pub const DEFAULT_POINT_WIDTH: f32 = 10.0;
pub const DEFAULT_HEIGHT: f32 = 50.0;

/// Everything the slider reported since the last [`SliderTestRule::clear_records`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SliderRecord {
    /// Selected label at each change notification.
    pub changes: Vec<String>,
    pub handle_requests: Vec<HandleRequest>,
    pub impacts: Vec<ImpactStyle>,
}

/// Haptic capability that appends to a shared record.
#[derive(Clone)]
pub struct RecordingHaptics {
    record: Rc<RefCell<SliderRecord>>,
}

impl HapticFeedback for RecordingHaptics {
    fn impact(&self, style: ImpactStyle) -> Result<(), HapticError> {
        self.record.borrow_mut().impacts.push(style);
        Ok(())
    }
}

pub struct SliderTestRule {
    slider: ScaleSlider,
    strip: SlotStrip,
    bounds: Rect,
    record: Rc<RefCell<SliderRecord>>,
}

impl SliderTestRule {
    pub fn new(configuration: Configuration) -> Self {
        Self::with_options(configuration, SliderOptions::default())
    }

    pub fn with_options(configuration: Configuration, options: SliderOptions) -> Self {
        let strip = SlotStrip::uniform(configuration.point_count(), DEFAULT_POINT_WIDTH);
        let record = Rc::new(RefCell::new(SliderRecord::default()));
        let mut slider =
            ScaleSlider::with_options(configuration, options).with_haptics(RecordingHaptics {
                record: record.clone(),
            });

        let changes = record.clone();
        slider.on_value_changed(move |selection| {
            changes
                .borrow_mut()
                .changes
                .push(selection.selected_point().label().to_string());
        });
        let handles = record.clone();
        slider.on_handle_request(move |request| {
            handles.borrow_mut().handle_requests.push(request);
        });

        Self {
            slider,
            strip,
            bounds: Rect::default(),
            record,
        }
    }

    /// Replaces the strip used for geometry capture.
    pub fn with_strip(mut self, strip: SlotStrip) -> Self {
        self.strip = strip;
        self
    }

    pub fn slider(&self) -> &ScaleSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut ScaleSlider {
        &mut self.slider
    }

    pub fn strip(&self) -> &SlotStrip {
        &self.strip
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Simulates a layout pass that gives the slider `bounds`, without
    /// running the deferred capture.
    pub fn layout(&mut self, bounds: Rect) -> bool {
        self.bounds = bounds;
        self.slider.on_bounds_changed(bounds)
    }

    /// Lays out and then runs the next event-loop turn.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.layout(bounds);
        self.wait_for_idle();
    }

    pub fn set_width(&mut self, width: f32) {
        self.set_bounds(Rect::new(0.0, 0.0, width, DEFAULT_HEIGHT));
    }

    /// Runs deferred slider work until none is left.
    pub fn wait_for_idle(&mut self) {
        while self.slider.has_pending_tasks() {
            self.slider.run_pending(&self.strip);
        }
    }

    pub fn click_at(&mut self, x: f32) -> PointerOutcome {
        let outcome = self.slider.dispatch_pointer(&PointerEvent::down(x));
        self.slider.dispatch_pointer(&PointerEvent::up(x));
        outcome
    }

    /// Clicks the center of the point's slot.
    ///
    /// The last point is clicked on its leading edge: ranges end there.
    pub fn click_point(&mut self, index: usize) -> PointerOutcome {
        let x = self.point_target(index);
        self.click_at(x)
    }

    /// Presses at `from_x`, moves in `steps` equal increments to `to_x`, releases.
    pub fn drag(&mut self, from_x: f32, to_x: f32, steps: usize) -> Vec<PointerOutcome> {
        let steps = steps.max(1);
        let mut outcomes = vec![self.slider.dispatch_pointer(&PointerEvent::down(from_x))];
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            outcomes.push(self.slider.dispatch_pointer(&PointerEvent::moved(x)));
        }
        self.slider.dispatch_pointer(&PointerEvent::up(to_x));
        outcomes
    }

    /// A coordinate that resolves to the given point under the current geometry.
    pub fn point_target(&self, index: usize) -> f32 {
        let Some(geometry) = self.slider.geometry() else {
            panic!("no geometry captured; call set_bounds first");
        };
        let Some(frame) = geometry.point_frame(index) else {
            panic!("point {index} has no slot");
        };
        if index + 1 == self.slider.points().len() {
            frame.x
        } else {
            frame.center()
        }
    }

    pub fn point_center(&self, index: usize) -> Option<f32> {
        self.slider.geometry()?.point_center(index)
    }

    pub fn selected_index(&self) -> usize {
        self.slider.selected_index()
    }

    pub fn selected_label(&self) -> &str {
        self.slider.selected_point().label()
    }

    pub fn record(&self) -> SliderRecord {
        self.record.borrow().clone()
    }

    pub fn changes(&self) -> Vec<String> {
        self.record.borrow().changes.clone()
    }

    pub fn handle_requests(&self) -> Vec<HandleRequest> {
        self.record.borrow().handle_requests.clone()
    }

    pub fn last_handle(&self) -> Option<HandleRequest> {
        self.record.borrow().handle_requests.last().copied()
    }

    pub fn clear_records(&mut self) {
        *self.record.borrow_mut() = SliderRecord::default();
    }
}
