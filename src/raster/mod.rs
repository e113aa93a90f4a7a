//! Line rasterization: DDA, Bresenham and Wu.
//!
//! Every function here is pure. A call maps a [`Segment`] and an [`Algorithm`]
//! to a [`Stroke`] and never fails, whatever integers the endpoints hold.

mod bresenham;
mod dda;
mod wu;

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use rayon::prelude::*;

use crate::error::Error;

pub use bresenham::bresenham;
pub use dda::dda;
pub use wu::wu;

/// A location on the pixel grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<IVec2> for GridPoint {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<GridPoint> for IVec2 {
    fn from(p: GridPoint) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered pair of endpoints to rasterize. `start == end` is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl Segment {
    pub fn new(start: impl Into<GridPoint>, end: impl Into<GridPoint>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Same segment walked the other way
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Signed deltas, widened so no pair of `i32` endpoints can overflow
    #[inline]
    pub(crate) fn deltas(&self) -> (i64, i64) {
        (
            i64::from(self.end.x) - i64::from(self.start.x),
            i64::from(self.end.y) - i64::from(self.start.y),
        )
    }

    /// Number of unit steps along the dominant axis: `max(|dx|, |dy|)`
    pub fn steps(&self) -> u64 {
        let (dx, dy) = self.deltas();
        dx.unsigned_abs().max(dy.unsigned_abs())
    }
}

/// A pixel emitted by a rasterizer.
///
/// `intensity` is in `(0.0, 1.0]`; 1.0 is a solid pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlottedPixel {
    pub x: i32,
    pub y: i32,
    pub intensity: f32,
}

impl PlottedPixel {
    #[inline]
    pub const fn solid(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            intensity: 1.0,
        }
    }

    #[inline]
    pub fn point(&self) -> GridPoint {
        GridPoint::new(self.x, self.y)
    }
}

/// Line drawing algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Dda,
    Bresenham,
    Wu,
}

impl Algorithm {
    /// All algorithms in selector order
    pub const ALL: [Algorithm; 3] = [Algorithm::Dda, Algorithm::Bresenham, Algorithm::Wu];

    /// Stable lowercase name, accepted back by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dda => "dda",
            Algorithm::Bresenham => "bresenham",
            Algorithm::Wu => "wu",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dda => "DDA",
            Algorithm::Bresenham => "Bresenham",
            Algorithm::Wu => "Wu",
        }
    }

    /// Next algorithm in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Algorithm::Dda => Algorithm::Bresenham,
            Algorithm::Bresenham => Algorithm::Wu,
            Algorithm::Wu => Algorithm::Dda,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// The pixels produced by rasterizing one segment with one algorithm
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub segment: Segment,
    pub algorithm: Algorithm,
    pub pixels: Vec<PlottedPixel>,
}

impl Stroke {
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlottedPixel> {
        self.pixels.iter()
    }

    /// Pixel locations in emission order
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.pixels.iter().map(PlottedPixel::point)
    }
}

impl<'a> IntoIterator for &'a Stroke {
    type Item = &'a PlottedPixel;
    type IntoIter = std::slice::Iter<'a, PlottedPixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

/// Rasterize `segment` with `algorithm`
pub fn rasterize(segment: Segment, algorithm: Algorithm) -> Stroke {
    let pixels = match algorithm {
        Algorithm::Dda => dda(segment),
        Algorithm::Bresenham => bresenham(segment),
        Algorithm::Wu => wu(segment),
    };

    Stroke {
        segment,
        algorithm,
        pixels,
    }
}

/// Rasterize many independent segments in parallel, preserving input order
pub fn rasterize_batch(jobs: &[(Segment, Algorithm)]) -> Vec<Stroke> {
    jobs.par_iter()
        .map(|&(segment, algorithm)| rasterize(segment, algorithm))
        .collect()
}
