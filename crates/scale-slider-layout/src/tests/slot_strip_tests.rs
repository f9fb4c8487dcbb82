use super::*;
use scale_slider_core::Configuration;

const BOUNDS: Rect = Rect::new(0.0, 0.0, 312.0, 50.0);

#[test]
fn interleaves_separators_between_points() {
    let snapshot = SlotStrip::uniform(3, 10.0).layout(BOUNDS);
    let kinds: Vec<SlotKind> = snapshot.slots().iter().map(|slot| slot.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SlotKind::Point(0),
            SlotKind::Separator,
            SlotKind::Point(1),
            SlotKind::Separator,
            SlotKind::Point(2),
        ]
    );
    assert!(snapshot.matches_scale(3));
}

#[test]
fn centers_are_evenly_spaced_inside_insets() {
    let snapshot = SlotStrip::uniform(5, 10.0).layout(BOUNDS);
    let slots = snapshot.slots();
    assert_eq!(slots.first().map(|slot| slot.x), Some(6.0));
    assert_eq!(slots.last().map(|slot| slot.x + slot.width), Some(306.0));

    let centers: Vec<f32> = slots.iter().map(SlotFrame::center).collect();
    let step = centers[1] - centers[0];
    for pair in centers.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < 1e-3);
    }
}

#[test]
fn label_widths_follow_glyph_count() {
    let configuration = Configuration::new(5, 15, 5, None).unwrap();
    let points = scale_slider_core::generate(&configuration).points().to_vec();
    let strip = SlotStrip::for_points(&points, 7.0);
    assert_eq!(strip.point_widths, vec![7.0, 14.0, 14.0]);
}

#[test]
fn capture_requires_points_and_width() {
    assert!(SlotStrip::new(Vec::new()).capture(BOUNDS).is_none());
    assert!(SlotStrip::uniform(3, 10.0)
        .capture(Rect::new(0.0, 0.0, 0.0, 50.0))
        .is_none());
    assert!(SlotStrip::uniform(3, 10.0).capture(BOUNDS).is_some());
}

#[test]
fn custom_insets_shift_the_strip() {
    let snapshot = SlotStrip::uniform(2, 10.0)
        .with_insets(EdgeInsets::horizontal(0.0))
        .with_separator_width(2.0)
        .layout(Rect::new(100.0, 0.0, 50.0, 20.0));
    let edges = snapshot.edges();
    assert_eq!(edges, vec![100.0, 124.0, 140.0]);
}
