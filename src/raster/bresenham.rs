use super::{PlottedPixel, Segment};

/// Rasterize a segment with Bresenham's integer algorithm.
///
/// The path is 8-connected, includes both endpoints exactly once and has
/// `max(|dx|, |dy|) + 1` pixels, all at full intensity.
pub fn bresenham(segment: Segment) -> Vec<PlottedPixel> {
    let (x0, y0) = (i64::from(segment.start.x), i64::from(segment.start.y));
    let (x1, y1) = (i64::from(segment.end.x), i64::from(segment.end.y));

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x0;
    let mut y = y0;

    let steps = segment.steps();
    let mut pixels = Vec::with_capacity(steps as usize + 1);

    // Bounded so a broken exit condition can't spin forever
    for _ in 0..=steps {
        // x and y never leave the endpoints' bounding box, so they fit in i32
        pixels.push(PlottedPixel::solid(x as i32, y as i32));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x += sx;
        }

        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    pixels
}
