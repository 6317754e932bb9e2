//! Property-style checks for the integer line rasterizers.

use scanflow::{NormalizedLine, OrderedLine, Vec2i};

fn endpoint_cases() -> Vec<(Vec2i, Vec2i)> {
    vec![
        (Vec2i::new(0, 0), Vec2i::new(10, 0)),
        (Vec2i::new(0, 0), Vec2i::new(0, 10)),
        (Vec2i::new(0, 0), Vec2i::new(10, 10)),
        (Vec2i::new(0, 0), Vec2i::new(10, 3)),
        (Vec2i::new(0, 0), Vec2i::new(3, 10)),
        (Vec2i::new(5, 7), Vec2i::new(-6, -2)),
        (Vec2i::new(-3, 4), Vec2i::new(9, -8)),
        (Vec2i::new(2, 2), Vec2i::new(2, 2)),
        (Vec2i::new(1, 1), Vec2i::new(2, 1)),
    ]
}

#[test]
fn step_count_matches_dominant_axis() {
    for (start, end) in endpoint_cases() {
        let expected = (end.x - start.x).abs().max((end.y - start.y).abs()) as usize;
        let ordered = OrderedLine::new(start, end).count();
        let normalized = NormalizedLine::new(start, end).count();
        assert!(
            ordered.abs_diff(expected) <= 1,
            "ordered {start:?} -> {end:?}: {ordered} vs {expected}"
        );
        assert!(
            normalized.abs_diff(expected) <= 1,
            "normalized {start:?} -> {end:?}: {normalized} vs {expected}"
        );
    }
}

#[test]
fn consecutive_points_never_skip_cells() {
    for (start, end) in endpoint_cases() {
        let points: Vec<_> = OrderedLine::new(start, end).collect();
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1, "{start:?} -> {end:?}");
            assert!((pair[1].y - pair[0].y).abs() <= 1, "{start:?} -> {end:?}");
        }
    }
}

#[test]
fn normalized_output_is_independent_of_argument_order() {
    for (start, end) in endpoint_cases() {
        let forward: Vec<_> = NormalizedLine::new(start, end).collect();
        let backward: Vec<_> = NormalizedLine::new(end, start).collect();
        assert_eq!(forward, backward, "{start:?} <-> {end:?}");
    }
}

#[test]
fn normalized_major_axis_is_monotonic() {
    for (start, end) in endpoint_cases() {
        let steep = (end.y - start.y).abs() > (end.x - start.x).abs();
        let points: Vec<_> = NormalizedLine::new(start, end).collect();
        for pair in points.windows(2) {
            if steep {
                assert_eq!(pair[1].y - pair[0].y, 1);
            } else {
                assert_eq!(pair[1].x - pair[0].x, 1);
            }
        }
    }
}

#[test]
fn ordered_output_follows_caller_direction() {
    let start = Vec2i::new(12, 3);
    let end = Vec2i::new(2, 6);

    let forward: Vec<_> = OrderedLine::new(start, end).collect();
    let backward: Vec<_> = OrderedLine::new(end, start).collect();

    assert_eq!(forward.first().copied(), Some(start));
    assert_eq!(backward.first().copied(), Some(end));
    assert!(forward.windows(2).all(|w| w[1].x < w[0].x));
    assert!(backward.windows(2).all(|w| w[1].x > w[0].x));
}

#[test]
fn all_points_stay_within_the_segment_bounds() {
    for (start, end) in endpoint_cases() {
        let min_x = start.x.min(end.x) - 1;
        let max_x = start.x.max(end.x) + 1;
        let min_y = start.y.min(end.y) - 1;
        let max_y = start.y.max(end.y) + 1;
        for point in OrderedLine::new(start, end) {
            assert!(point.x >= min_x && point.x <= max_x, "{start:?} -> {end:?}");
            assert!(point.y >= min_y && point.y <= max_y, "{start:?} -> {end:?}");
        }
    }
}
