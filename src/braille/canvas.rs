/// Braille Unicode canvas for high-resolution terminal graphics.
/// Each character cell represents a 2x4 dot grid (8 dots).
/// Unicode Braille patterns: U+2800 to U+28FF
pub struct BrailleCanvas {
    width: usize,  // Characters
    height: usize, // Characters
    pixels: Vec<Vec<u8>>, // Bit patterns per char
    /// Brightest intensity plotted into each char
    peak: Vec<Vec<f32>>,
}

impl BrailleCanvas {
    /// Create a new canvas with the given character dimensions.
    /// Effective dot resolution: width*2 x height*4
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![vec![0u8; width]; height],
            peak: vec![vec![0.0; width]; height],
        }
    }

    /// Dot resolution as (width, height)
    pub fn dot_size(&self) -> (usize, usize) {
        (self.width * 2, self.height * 4)
    }

    /// Set a dot at full intensity.
    /// Braille dot layout per character:
    /// ```text
    /// (0,0) (1,0)   bits: 0x01 0x08
    /// (0,1) (1,1)   bits: 0x02 0x10
    /// (0,2) (1,2)   bits: 0x04 0x20
    /// (0,3) (1,3)   bits: 0x40 0x80
    /// ```
    pub fn set_pixel(&mut self, x: usize, y: usize) {
        self.plot(x, y, 1.0);
    }

    /// Set a dot and record its intensity for the owning char
    pub fn plot(&mut self, x: usize, y: usize, intensity: f32) {
        let cx = x / 2;
        let cy = y / 4;

        if cx >= self.width || cy >= self.height || intensity <= 0.0 {
            return;
        }

        let bit = match (x % 2, y % 4) {
            (0, 0) => 0x01,
            (1, 0) => 0x08,
            (0, 1) => 0x02,
            (1, 1) => 0x10,
            (0, 2) => 0x04,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => 0,
        };

        self.pixels[cy][cx] |= bit;
        let peak = &mut self.peak[cy][cx];
        *peak = peak.max(intensity.min(1.0));
    }

    /// Set a dot using signed coordinates (ignores negative values)
    pub fn set_pixel_signed(&mut self, x: i32, y: i32) {
        self.plot_signed(x, y, 1.0);
    }

    /// Plot using signed coordinates (ignores negative values)
    pub fn plot_signed(&mut self, x: i32, y: i32, intensity: f32) {
        if x >= 0 && y >= 0 {
            self.plot(x as usize, y as usize, intensity);
        }
    }

    /// Brightest intensity plotted into the char at (col, row), 0.0 if empty
    pub fn intensity(&self, col: usize, row: usize) -> f32 {
        self.peak
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0.0)
    }

    /// Convert the canvas to a string of Braille characters
    #[cfg(test)]
    pub fn to_string(&self) -> String {
        self.rows().collect::<Vec<_>>().join("\n")
    }

    /// Get a specific row as a string (for line-by-line rendering)
    pub fn row_to_string(&self, row: usize) -> String {
        if row >= self.height {
            return String::new();
        }
        self.pixels[row]
            .iter()
            .map(|&b| char::from_u32(0x2800 + b as u32).unwrap_or(' '))
            .collect()
    }

    /// Get all rows as an iterator of strings
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|i| self.row_to_string(i))
    }
}
