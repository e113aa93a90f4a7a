use super::{bresenham, PlottedPixel, Segment};

/// Rasterize a segment with Xiaolin Wu's antialiased algorithm.
///
/// Each interior step along the dominant axis emits the two pixels that
/// straddle the ideal line, weighted by coverage so their intensities sum to
/// one. When the line passes exactly through a pixel centre only that pixel is
/// emitted. Both endpoints are grid points and are capped at full intensity.
///
/// Axis-aligned and degenerate segments have no meaningful gradient and fall
/// back to the solid Bresenham path.
pub fn wu(segment: Segment) -> Vec<PlottedPixel> {
    let (dx, dy) = segment.deltas();
    if dx == 0 || dy == 0 {
        return bresenham(segment);
    }

    let steep = dy.abs() >= dx.abs();

    // Walk in increasing order along the major axis; both endpoints swap together
    let segment = if (steep && dy < 0) || (!steep && dx < 0) {
        segment.reversed()
    } else {
        segment
    };

    let (x0, y0) = (i64::from(segment.start.x), i64::from(segment.start.y));
    let (dx, dy) = segment.deltas();
    let (major0, minor0, dmajor, dminor) = if steep {
        (y0, x0, dy, dx)
    } else {
        (x0, y0, dx, dy)
    };

    let mut pixels = Vec::with_capacity(2 * dmajor as usize);
    let mut plot = |major: i64, minor: i64, intensity: f32| {
        // Every plotted coordinate lies between the endpoints, so it fits in i32
        let (x, y) = if steep { (minor, major) } else { (major, minor) };
        pixels.push(PlottedPixel {
            x: x as i32,
            y: y as i32,
            intensity,
        });
    };

    plot(major0, minor0, 1.0);

    // Minor coordinate at step k is minor0 + k * dminor / dmajor, exact in i128
    let (wide_minor, wide_major) = (i128::from(dminor), i128::from(dmajor));
    for k in 1..dmajor {
        let num = i128::from(k) * wide_minor;
        let ipart = minor0 + num.div_euclid(wide_major) as i64;
        let rem = num.rem_euclid(wide_major);

        if rem == 0 {
            plot(major0 + k, ipart, 1.0);
            continue;
        }

        let fpart = rem as f64 / dmajor as f64;
        plot(major0 + k, ipart, (1.0 - fpart) as f32);
        plot(major0 + k, ipart + 1, fpart as f32);
    }

    plot(major0 + dmajor, minor0 + dminor, 1.0);

    pixels
}
