use tracing::{debug, info};
use tui_raster::{rasterize, rasterize_batch, Algorithm, Grid, GridPoint, Segment, Stroke};

/// Editor state. The rasterizer stores nothing; everything mutable lives here.
pub struct App {
    pub grid: Grid,
    pub show_grid: bool,
    pub algorithm: Algorithm,
    /// Clicked points, snapped to the grid, in click order
    pub points: Vec<GridPoint>,
    /// Built lines, oldest first
    pub strokes: Vec<Stroke>,
    /// Canvas size in Braille dots
    pub width: usize,
    pub height: usize,
    pub should_quit: bool,
    /// Current mouse position for cursor marker
    pub mouse_pos: Option<(u16, u16)>,
}

impl App {
    pub fn new(width: usize, height: usize, grid: Grid, algorithm: Algorithm, show_grid: bool) -> Self {
        let (width, height) = Self::dot_size(width, height);
        Self {
            grid,
            show_grid,
            algorithm,
            points: Vec::new(),
            strokes: Vec::new(),
            width,
            height,
            should_quit: false,
            mouse_pos: None,
        }
    }

    /// Braille gives 2x4 resolution per character.
    /// Account for border (2 chars horizontal, 2 chars vertical plus status bar)
    fn dot_size(width: usize, height: usize) -> (usize, usize) {
        let inner_width = width.saturating_sub(2);
        let inner_height = height.saturating_sub(3);
        (inner_width * 2, inner_height * 4)
    }

    /// Update canvas size when terminal resizes
    pub fn resize(&mut self, width: usize, height: usize) {
        (self.width, self.height) = Self::dot_size(width, height);
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Convert terminal coords to Braille dot coords.
    /// Each terminal cell is 2 dots wide, 4 tall; the border is a 1 cell offset
    fn to_dots(col: u16, row: u16) -> (i32, i32) {
        let px = (col.saturating_sub(1) as i32) * 2;
        let py = (row.saturating_sub(1) as i32) * 4;
        (px, py)
    }

    /// Place a point at a terminal position, snapped to the grid.
    /// Clicks outside the canvas are ignored.
    pub fn place_point(&mut self, col: u16, row: u16) -> Option<GridPoint> {
        if col == 0 || row == 0 {
            return None;
        }
        let (px, py) = Self::to_dots(col, row);
        if px as usize >= self.width || py as usize >= self.height {
            return None;
        }

        let point = self.grid.snap((px, py));
        self.points.push(point);
        debug!(x = point.x, y = point.y, "point placed");
        Some(point)
    }

    /// Segment between the last two placed points
    pub fn pending_segment(&self) -> Option<Segment> {
        match self.points.as_slice() {
            [.., a, b] => Some(Segment::new(*a, *b)),
            _ => None,
        }
    }

    /// Rasterize the last two points with the current algorithm
    pub fn build_line(&mut self) -> Option<&Stroke> {
        let Some(segment) = self.pending_segment() else {
            debug!(points = self.points.len(), "build requested with fewer than two points");
            return None;
        };

        let stroke = rasterize(segment, self.algorithm);
        info!(
            algorithm = stroke.algorithm.name(),
            start = %segment.start,
            end = %segment.end,
            pixels = stroke.len(),
            "line built"
        );
        self.strokes.push(stroke);
        self.strokes.last()
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        if self.algorithm != algorithm {
            info!(from = self.algorithm.name(), to = algorithm.name(), "algorithm selected");
            self.algorithm = algorithm;
        }
    }

    pub fn cycle_algorithm(&mut self) {
        self.select_algorithm(self.algorithm.next());
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        debug!(visible = self.show_grid, "grid toggled");
    }

    /// Redraw every stored line with the current algorithm
    pub fn rerasterize_all(&mut self) {
        let jobs: Vec<(Segment, Algorithm)> = self
            .strokes
            .iter()
            .map(|s| (s.segment, self.algorithm))
            .collect();
        self.strokes = rasterize_batch(&jobs);
        info!(strokes = self.strokes.len(), algorithm = self.algorithm.name(), "history re-rasterized");
    }

    /// Drop all points and lines
    pub fn clear(&mut self) {
        info!(points = self.points.len(), strokes = self.strokes.len(), "canvas cleared");
        self.points.clear();
        self.strokes.clear();
    }

    /// Update mouse cursor position
    pub fn set_mouse_pos(&mut self, col: u16, row: u16) {
        self.mouse_pos = Some((col, row));
    }

    /// Snapped point under the mouse, in dot coordinates
    pub fn hover_point(&self) -> Option<GridPoint> {
        self.mouse_pos
            .filter(|&(col, row)| col > 0 && row > 0)
            .map(|(col, row)| self.grid.snap(Self::to_dots(col, row)))
    }
}
