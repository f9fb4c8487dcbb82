use super::{HitRegionResolver, HitSource, RangeEdge};

// P0 at 0, separator at 20, P1 at 40, separator at 60, P2 at 80.
const EDGES: [f32; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

fn resolver() -> HitRegionResolver {
    let mut resolver = HitRegionResolver::new();
    resolver.rebuild_ranges(&EDGES);
    resolver
}

#[test]
fn builds_one_range_per_adjacent_pair() {
    let mut resolver = HitRegionResolver::new();
    let ranges = resolver.rebuild_ranges(&EDGES);
    assert_eq!(ranges.len(), 4);

    let targets: Vec<(usize, RangeEdge)> = ranges.iter().map(|r| (r.target, r.edge)).collect();
    assert_eq!(
        targets,
        vec![
            (0, RangeEdge::Lower),
            (1, RangeEdge::Upper),
            (1, RangeEdge::Lower),
            (2, RangeEdge::Upper),
        ]
    );
    assert!(!ranges[0].is_closed());
    assert!(ranges[3].is_closed());
}

#[test]
fn separator_ranges_target_the_following_point() {
    let edges: Vec<f32> = (0..13).map(|slot| slot as f32 * 10.0).collect();
    let mut resolver = HitRegionResolver::new();
    let ranges = resolver.rebuild_ranges(&edges);
    assert_eq!(ranges.len(), 12);
    for (index, range) in ranges.iter().enumerate() {
        if index % 2 == 0 {
            assert_eq!((range.target, range.edge), (index / 2, RangeEdge::Lower));
        } else {
            assert_eq!((range.target, range.edge), (index / 2 + 1, RangeEdge::Upper));
            assert_eq!(range.anchor(), range.end);
        }
    }
}

#[test]
fn anchor_is_the_target_point_edge() {
    let resolver = resolver();
    let anchors: Vec<f32> = resolver.ranges().iter().map(|r| r.anchor()).collect();
    assert_eq!(anchors, vec![0.0, 40.0, 40.0, 80.0]);
}

#[test]
fn left_of_separator_picks_left_point() {
    let mut resolver = resolver();
    let hit = resolver.resolve(19.0).expect("hit");
    assert_eq!(hit.point_index, 0);
    assert_eq!(hit.anchor_x, 0.0);

    let hit = resolver.resolve(21.0).expect("hit");
    assert_eq!(hit.point_index, 1);
    assert_eq!(hit.anchor_x, 40.0);
}

#[test]
fn point_positions_round_trip() {
    let mut resolver = resolver();
    for (index, x) in [0.0, 40.0, 80.0].into_iter().enumerate() {
        assert_eq!(resolver.resolve(x).map(|hit| hit.point_index), Some(index));
    }
}

#[test]
fn repeated_resolve_uses_memo() {
    let mut resolver = resolver();
    let first = resolver.resolve(45.0).expect("hit");
    let second = resolver.resolve(45.0).expect("hit");
    assert_eq!(first.source, HitSource::Scan);
    assert_eq!(second.source, HitSource::Memo);
    assert_eq!(first.point_index, second.point_index);
    assert_eq!(first.range_index, second.range_index);
}

#[test]
fn nearby_drag_samples_stay_on_memo() {
    let mut resolver = resolver();
    resolver.resolve(41.0);
    for x in [42.0, 48.5, 55.0, 59.9] {
        assert_eq!(resolver.resolve(x).map(|hit| hit.source), Some(HitSource::Memo));
    }
    let moved = resolver.resolve(61.0).expect("hit");
    assert_eq!(moved.source, HitSource::Scan);
    assert_eq!(moved.point_index, 2);
    assert_eq!(resolver.memoized_range(), Some(3));
}

#[test]
fn outside_all_ranges_is_no_hit() {
    let mut resolver = resolver();
    assert!(resolver.resolve(-0.5).is_none());
    assert!(resolver.resolve(80.5).is_none());
    assert!(resolver.resolve(f32::NAN).is_none());
}

#[test]
fn no_hit_keeps_previous_memo() {
    let mut resolver = resolver();
    resolver.resolve(5.0);
    assert!(resolver.resolve(500.0).is_none());
    assert_eq!(resolver.memoized_range(), Some(0));
}

#[test]
fn rebuild_invalidates_memo() {
    let mut resolver = resolver();
    assert_eq!(resolver.resolve(5.0).map(|hit| hit.point_index), Some(0));
    assert_eq!(resolver.memoized_range(), Some(0));

    // The old memo range [0, 20) still covers x = 5, but the new geometry
    // puts x = 5 inside the second point's lower range.
    resolver.rebuild_ranges(&[-100.0, 0.0, 2.0, 30.0, 50.0]);
    assert_eq!(resolver.memoized_range(), None);

    let hit = resolver.resolve(5.0).expect("hit");
    assert_eq!(hit.source, HitSource::Scan);
    assert_eq!(hit.point_index, 1);
    assert_eq!(hit.range_index, 2);
}

#[test]
fn degenerate_edges_build_no_ranges() {
    let mut resolver = HitRegionResolver::new();
    assert!(resolver.rebuild_ranges(&[]).is_empty());
    assert!(resolver.rebuild_ranges(&[10.0]).is_empty());
    assert!(resolver.resolve(10.0).is_none());
}

#[test]
fn clear_drops_ranges_and_memo() {
    let mut resolver = resolver();
    resolver.resolve(5.0);
    resolver.clear();
    assert!(resolver.is_empty());
    assert_eq!(resolver.memoized_range(), None);
    assert!(resolver.resolve(5.0).is_none());
}
