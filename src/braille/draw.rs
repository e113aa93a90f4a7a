use super::BrailleCanvas;
use crate::grid::Grid;
use crate::raster::{GridPoint, Stroke};

/// Paint every pixel of a stroke, keeping its intensity
pub fn paint_stroke(canvas: &mut BrailleCanvas, stroke: &Stroke) {
    for p in stroke {
        canvas.plot_signed(p.x, p.y, p.intensity);
    }
}

/// Draw a point marker (small cross)
pub fn draw_marker(canvas: &mut BrailleCanvas, at: GridPoint, size: i32) {
    for i in -size..=size {
        canvas.set_pixel_signed(at.x.saturating_add(i), at.y);
        canvas.set_pixel_signed(at.x, at.y.saturating_add(i));
    }
}

/// Draw the lattice as dotted lines: every other dot along each line
pub fn draw_grid(canvas: &mut BrailleCanvas, grid: &Grid) {
    let (width, height) = canvas.dot_size();

    for x in grid.lines(width) {
        for y in (0..height).step_by(2) {
            canvas.plot(x as usize, y, 1.0);
        }
    }

    for y in grid.lines(height) {
        for x in (0..width).step_by(2) {
            canvas.plot(x, y as usize, 1.0);
        }
    }
}
