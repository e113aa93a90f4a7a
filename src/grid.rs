use glam::IVec2;

use crate::error::{Error, Result};
use crate::raster::GridPoint;

/// Fixed-pitch lattice that input points snap to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pitch: i32,
}

impl Grid {
    /// Create a grid with `pitch` dots between lattice lines
    pub fn new(pitch: i32) -> Result<Self> {
        if pitch < 1 {
            return Err(Error::InvalidPitch(pitch));
        }
        Ok(Self { pitch })
    }

    #[inline]
    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    /// Round a single coordinate to the nearest lattice line (ties go up)
    #[inline(always)]
    pub fn snap_coord(&self, c: i32) -> i32 {
        let c = i64::from(c) + i64::from(self.pitch / 2);
        let pitch = i64::from(self.pitch);
        // Outermost lattice lines that still fit in i32
        let hi = i64::from(i32::MAX) / pitch * pitch;
        let lo = -(-i64::from(i32::MIN) / pitch * pitch);
        (c.div_euclid(pitch) * pitch).clamp(lo, hi) as i32
    }

    /// Snap a raw position to the nearest lattice point
    pub fn snap(&self, p: impl Into<IVec2>) -> GridPoint {
        let p = p.into();
        GridPoint::new(self.snap_coord(p.x), self.snap_coord(p.y))
    }

    /// Lattice coordinates in `0..len` along one axis
    pub fn lines(&self, len: usize) -> impl Iterator<Item = i32> {
        let len = i32::try_from(len).unwrap_or(i32::MAX);
        (0..len).step_by(self.pitch as usize)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self { pitch: 8 }
    }
}
