//! Property tests for the rasterizers over arbitrary segments.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;
use tui_raster::{rasterize, Algorithm, GridPoint, Segment};

fn coord() -> impl Strategy<Value = i32> {
    -200i32..200
}

fn segment() -> impl Strategy<Value = Segment> {
    (coord(), coord(), coord(), coord()).prop_map(|(x0, y0, x1, y1)| Segment::new((x0, y0), (x1, y1)))
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Dda),
        Just(Algorithm::Bresenham),
        Just(Algorithm::Wu),
    ]
}

fn connected(a: GridPoint, b: GridPoint) -> bool {
    (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
}

proptest! {
    #[test]
    fn degenerate_is_single_pixel(x in any::<i32>(), y in any::<i32>(), algorithm in algorithm()) {
        let stroke = rasterize(Segment::new((x, y), (x, y)), algorithm);
        prop_assert_eq!(stroke.len(), 1);
        prop_assert_eq!(stroke.pixels[0].point(), GridPoint::new(x, y));
        prop_assert_eq!(stroke.pixels[0].intensity, 1.0);
    }

    #[test]
    fn never_empty_and_intensity_in_range(segment in segment(), algorithm in algorithm()) {
        let stroke = rasterize(segment, algorithm);
        prop_assert!(!stroke.is_empty());
        for p in &stroke {
            prop_assert!(p.intensity > 0.0 && p.intensity <= 1.0);
        }
    }

    #[test]
    fn bresenham_is_eight_connected(segment in segment()) {
        let points: Vec<_> = rasterize(segment, Algorithm::Bresenham).points().collect();
        for pair in points.windows(2) {
            prop_assert!(connected(pair[0], pair[1]));
            prop_assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn bresenham_endpoints_and_length(segment in segment()) {
        let points: Vec<_> = rasterize(segment, Algorithm::Bresenham).points().collect();
        prop_assert_eq!(points.len() as u64, segment.steps() + 1);
        prop_assert_eq!(points[0], segment.start);
        prop_assert_eq!(points[points.len() - 1], segment.end);
        prop_assert_eq!(points.iter().filter(|&&p| p == segment.start).count(), 1);
        prop_assert_eq!(points.iter().filter(|&&p| p == segment.end).count(), 1);
    }

    #[test]
    fn bresenham_symmetric_under_swap(segment in segment()) {
        let forward: HashSet<_> = rasterize(segment, Algorithm::Bresenham).points().collect();
        let backward: HashSet<_> = rasterize(segment.reversed(), Algorithm::Bresenham).points().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn dda_length_is_steps(segment in segment()) {
        prop_assume!(!segment.is_degenerate());
        let stroke = rasterize(segment, Algorithm::Dda);
        prop_assert_eq!(stroke.len() as u64, segment.steps());
        prop_assert_eq!(stroke.pixels[stroke.len() - 1].point(), segment.end);
    }

    #[test]
    fn dda_is_eight_connected(segment in segment()) {
        let points: Vec<_> = rasterize(segment, Algorithm::Dda).points().collect();
        prop_assert!(connected(segment.start, points[0]));
        for pair in points.windows(2) {
            prop_assert!(connected(pair[0], pair[1]));
        }
    }

    #[test]
    fn wu_pairs_sum_to_one(segment in segment()) {
        let (dx, dy) = (segment.end.x - segment.start.x, segment.end.y - segment.start.y);
        let steep = dy.abs() >= dx.abs();

        let mut sums: BTreeMap<i32, f32> = BTreeMap::new();
        for p in &rasterize(segment, Algorithm::Wu) {
            let major = if steep { p.y } else { p.x };
            *sums.entry(major).or_insert(0.0) += p.intensity;
        }

        for (_, sum) in sums {
            prop_assert!((sum - 1.0).abs() < 1e-5, "sum {}", sum);
        }
    }

    #[test]
    fn wu_covers_both_endpoints(segment in segment()) {
        let points: HashSet<_> = rasterize(segment, Algorithm::Wu).points().collect();
        prop_assert!(points.contains(&segment.start));
        prop_assert!(points.contains(&segment.end));
    }

    #[test]
    fn wu_axis_aligned_is_solid(x0 in coord(), x1 in coord(), y in coord()) {
        for segment in [Segment::new((x0, y), (x1, y)), Segment::new((y, x0), (y, x1))] {
            let wu = rasterize(segment, Algorithm::Wu);
            prop_assert_eq!(&wu.pixels, &rasterize(segment, Algorithm::Bresenham).pixels);
        }
    }
}

#[test]
fn scenario_bresenham_shallow() {
    let points: Vec<_> = rasterize(Segment::new((0, 0), (4, 2)), Algorithm::Bresenham)
        .points()
        .collect();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], GridPoint::new(0, 0));
    assert!(points[1] == GridPoint::new(1, 1) || points[1] == GridPoint::new(1, 0));
    assert_eq!(points[4], GridPoint::new(4, 2));
    for pair in points.windows(2) {
        assert_eq!(pair[1].x, pair[0].x + 1);
    }
}

#[test]
fn scenario_dda_half_slope() {
    let stroke = rasterize(Segment::new((0, 0), (10, 5)), Algorithm::Dda);
    assert_eq!(stroke.len(), 10);
    for (i, pair) in stroke.pixels.windows(2).enumerate() {
        assert_eq!(pair[1].x, pair[0].x + 1, "step {i}");
    }
    for (i, p) in stroke.iter().enumerate() {
        assert_eq!(p.y, (0.5 + 0.5 * i as f64).round() as i32);
    }
}
