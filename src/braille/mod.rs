mod canvas;
mod draw;

pub use canvas::BrailleCanvas;
pub use draw::{draw_grid, draw_marker, paint_stroke};
