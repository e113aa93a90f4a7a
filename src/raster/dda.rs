use glam::DVec2;

use super::{PlottedPixel, Segment};

/// Rasterize a segment with the floating-point Digital Differential Analyzer.
///
/// The accumulator advances one unit along the dominant axis per step and the
/// nearest cell to each sample is plotted. The start cell is not re-plotted, so
/// a non-degenerate segment yields exactly `max(|dx|, |dy|)` pixels ending on
/// `end`. A degenerate segment yields its single point.
pub fn dda(segment: Segment) -> Vec<PlottedPixel> {
    if segment.is_degenerate() {
        return vec![PlottedPixel::solid(segment.start.x, segment.start.y)];
    }

    let (dx, dy) = segment.deltas();
    let steps = segment.steps();
    let inc = DVec2::new(dx as f64, dy as f64) / steps as f64;

    let origin = DVec2::new(f64::from(segment.start.x), f64::from(segment.start.y));
    // Midpoint of the first step; each sample sits half an increment beyond it
    let half = inc * 0.5;
    let mut mid = origin + half;

    let mut pixels = Vec::with_capacity(steps as usize);
    for _ in 0..steps {
        let cell = (mid + half).round();
        pixels.push(PlottedPixel::solid(cell.x as i32, cell.y as i32));
        // Float accumulation: on very long lines an interior minor-axis cell can
        // land one off from exact rounding. Length and endpoint are unaffected.
        mid += inc;
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(segment: Segment) -> Vec<(i32, i32)> {
        dda(segment).iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_half_slope_line() {
        let pts = points(Segment::new((0, 0), (10, 5)));
        assert_eq!(pts.len(), 10);
        for (i, &(x, y)) in pts.iter().enumerate() {
            assert_eq!(x, i as i32 + 1);
            assert_eq!(y, (0.5 + 0.5 * i as f64).round() as i32);
        }
    }

    #[test]
    fn test_length_is_dominant_delta() {
        assert_eq!(points(Segment::new((0, 0), (3, 11))).len(), 11);
        assert_eq!(points(Segment::new((5, 5), (-20, 1))).len(), 25);
    }

    #[test]
    fn test_ends_on_end_point() {
        for end in [(9, 4), (-9, 4), (9, -4), (-9, -4), (4, 9), (-4, -9)] {
            let pts = points(Segment::new((0, 0), end));
            assert_eq!(pts.last(), Some(&end));
        }
    }

    #[test]
    fn test_connected() {
        let pts = points(Segment::new((-3, 7), (14, -2)));
        for pair in pts.windows(2) {
            assert!((pair[1].0 - pair[0].0).abs() <= 1);
            assert!((pair[1].1 - pair[0].1).abs() <= 1);
        }
    }

    #[test]
    fn test_long_line_keeps_length_and_end() {
        let segment = Segment::new((0, 0), (100_000, 33_331));
        let pixels = dda(segment);
        assert_eq!(pixels.len(), 100_000);
        assert_eq!(pixels.last().map(PlottedPixel::point), Some(segment.end));
        for pair in pixels.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(points(Segment::new((4, 4), (4, 4))), vec![(4, 4)]);
    }
}
