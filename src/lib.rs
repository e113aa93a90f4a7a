//! Line rasterization with DDA, Bresenham and Wu's antialiased algorithm,
//! plus the Braille canvas and grid used by the terminal editor.

pub mod braille;
pub mod error;
pub mod grid;
pub mod raster;

pub use error::{Error, Result};
pub use grid::Grid;
pub use raster::{rasterize, rasterize_batch, Algorithm, GridPoint, PlottedPixel, Segment, Stroke};
