//! End-to-end interaction tests: layout → deferred geometry capture →
//! pointer input → selection notifications and handle requests.

use scale_slider_core::{
    generate, validate, Configuration, ImpactStyle, PointerOutcome, SliderOptions,
};
use scale_slider_graphics::Rect;
use scale_slider_layout::SlotStrip;
use scale_slider_testing::prelude::*;

fn one_to_five() -> Configuration {
    Configuration::new(1, 5, 1, None).expect("valid scale")
}

#[test]
fn generated_scales_match_their_configuration() {
    for (min, max, interval) in [(1, 5, 1), (1, 5, 2), (-10, 10, 5), (0, 100, 25), (3, 4, 1)] {
        let configuration = validate(min, max, interval, None).expect("valid scale");
        let scale = generate(&configuration);
        let expected = ((max - min) / interval + 1) as usize;
        assert_eq!(scale.points().len(), expected);
        for (index, point) in scale.points().iter().enumerate() {
            assert_eq!(point.value(), min + index as i64 * interval);
            assert_eq!(point.label(), point.value().to_string());
        }
        assert_single_selection(scale.points(), scale.selected_index());
    }
}

#[test]
fn two_step_scale_has_three_labels() {
    let scale = generate(&validate(1, 5, 2, None).unwrap());
    assert_labels(scale.points(), &["1", "3", "5"]);
}

#[test]
fn off_grid_default_uses_fallback_selection() {
    let rule = SliderTestRule::new(validate(1, 5, 2, Some(2)).unwrap());
    assert_eq!(rule.selected_label(), "5");
    assert_single_selection(rule.slider().points(), 2);
}

#[test]
fn layout_recenters_handle_on_default() {
    let mut rule = SliderTestRule::new(validate(1, 5, 1, Some(3)).unwrap());
    rule.set_width(312.0);

    let handle = rule.last_handle().expect("handle request after layout");
    assert!(handle.animation.is_none());
    assert_approx_eq(
        handle.x,
        rule.point_center(2).unwrap(),
        1e-4,
        "handle centerd on selected point",
    );
    assert!(rule.changes().is_empty());
}

#[test]
fn geometry_capture_is_deferred_until_idle() {
    let mut rule = SliderTestRule::new(one_to_five());
    assert!(rule.layout(Rect::new(0.0, 0.0, 312.0, 50.0)));
    assert_eq!(rule.click_at(150.0), PointerOutcome::GeometryPending);

    rule.wait_for_idle();
    assert!(matches!(rule.click_at(150.0), PointerOutcome::Selected { index: 2, .. }));
}

#[test]
fn clicking_every_point_selects_it() {
    let mut rule = SliderTestRule::new(one_to_five());
    rule.set_width(312.0);

    for index in [4, 0, 3, 1, 2] {
        rule.click_point(index);
        assert_eq!(rule.selected_index(), index);
        assert_single_selection(rule.slider().points(), index);
    }
    assert_eq!(rule.changes(), vec!["5", "1", "4", "2", "3"]);
    assert_eq!(rule.record().impacts, vec![ImpactStyle::Medium; 5]);
}

#[test]
fn clicking_selected_point_does_not_notify() {
    let mut rule = SliderTestRule::new(one_to_five());
    rule.set_width(312.0);
    rule.clear_records();

    assert!(matches!(rule.click_point(0), PointerOutcome::Unchanged { index: 0, .. }));
    assert_eq!(rule.record(), SliderRecord::default());
}

#[test]
fn drag_across_the_track_notifies_each_point_once() {
    let mut rule = SliderTestRule::new(one_to_five());
    rule.set_width(312.0);
    rule.clear_records();

    let start = rule.point_target(0);
    let end = rule.point_target(4);
    rule.drag(start, end, 120);

    assert_eq!(rule.changes(), vec!["2", "3", "4", "5"]);
    let handles = rule.handle_requests();
    assert_eq!(handles.len(), 4);
    for (request, index) in handles.iter().zip(1..) {
        assert_approx_eq(request.x, rule.point_center(index).unwrap(), 1e-3, "handle");
        assert_eq!(request.animation, SliderOptions::default().handle_animation);
    }
}

#[test]
fn drag_back_and_forth_within_one_point_is_silent() {
    let mut rule = SliderTestRule::new(one_to_five());
    rule.set_width(312.0);
    rule.click_point(2);
    rule.clear_records();

    let center = rule.point_center(2).unwrap();
    rule.drag(center - 3.0, center + 3.0, 12);
    rule.drag(center + 3.0, center - 3.0, 12);
    assert!(rule.changes().is_empty());
}

#[test]
fn pointer_outside_the_track_keeps_selection() {
    let mut rule = SliderTestRule::new(one_to_five());
    rule.set_width(312.0);
    rule.click_point(1);

    assert_eq!(rule.click_at(-20.0), PointerOutcome::NoHit { x: -20.0 });
    assert_eq!(rule.click_at(1000.0), PointerOutcome::NoHit { x: 1000.0 });
    assert_eq!(rule.selected_label(), "2");
}

#[test]
fn resizing_rebuilds_geometry() {
    let mut rule = SliderTestRule::new(one_to_five());
    rule.set_width(312.0);
    let narrow_target = rule.point_target(3);

    rule.set_width(612.0);
    assert_ne!(rule.point_target(3), narrow_target);
    rule.click_point(3);
    assert_eq!(rule.selected_label(), "4");

    // Same bounds again: no capture is posted.
    assert!(!rule.layout(Rect::new(0.0, 0.0, 612.0, 50.0)));
    assert!(!rule.slider().has_pending_tasks());
}

#[test]
fn label_sized_strip_resolves_wide_labels() {
    let configuration = validate(0, 1000, 250, Some(500)).unwrap();
    let points = generate(&configuration).points().to_vec();
    let mut rule =
        SliderTestRule::new(configuration).with_strip(SlotStrip::for_points(&points, 7.0));
    rule.set_width(400.0);

    assert_eq!(rule.selected_label(), "500");
    rule.click_point(4);
    assert_eq!(rule.selected_label(), "1000");
    rule.click_point(0);
    assert_eq!(rule.selected_label(), "0");
}

#[test]
fn unanimated_options_produce_unanimated_requests() {
    let mut rule =
        SliderTestRule::with_options(one_to_five(), SliderOptions::default().without_animation());
    rule.set_width(312.0);
    rule.click_point(4);
    assert_eq!(rule.last_handle().and_then(|h| h.animation), None);
}
