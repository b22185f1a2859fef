pub type Rgb = [u8; 3];

/// Braille canvas for high-resolution terminal rendering
/// Each terminal cell contains a 2×4 grid of Braille dots
/// This gives us 2× horizontal and 4× vertical resolution
pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // 2D array of dot patterns (0-255)
    colors: Vec<Vec<Rgb>>, // Foreground color per cell (last pen wins)
    pen: Rgb,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            colors: vec![vec![[255, 255, 255]; width]; height],
            pen: [255, 255, 255],
        }
    }

    /// Clear all dots
    pub fn clear(&mut self) {
        for row in &mut self.dots {
            for cell in row {
                *cell = 0;
            }
        }
    }

    /// Color used by subsequent pixel writes
    pub fn set_pen(&mut self, color: Rgb) {
        self.pen = color;
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        self.dots[cell_y][cell_x] |= dot_bit(pixel_x, pixel_y);
        self.colors[cell_y][cell_x] = self.pen;
    }

    /// Whether the dot at pixel coordinates is set
    #[cfg(test)]
    pub fn is_set(&self, pixel_x: usize, pixel_y: usize) -> bool {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;
        if cell_x >= self.width || cell_y >= self.height {
            return false;
        }
        self.dots[cell_y][cell_x] & dot_bit(pixel_x, pixel_y) != 0
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    pub fn color_at(&self, cell_x: usize, cell_y: usize) -> Rgb {
        self.colors
            .get(cell_y)
            .and_then(|row| row.get(cell_x))
            .copied()
            .unwrap_or([255, 255, 255])
    }

    /// Width in terminal cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in terminal cells
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Bit for a pixel within its cell
fn dot_bit(pixel_x: usize, pixel_y: usize) -> u8 {
    let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
    let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

    // Braille dot numbering:
    // 1 4
    // 2 5
    // 3 6
    // 7 8
    let dot_index = match (dot_x, dot_y) {
        (0, 0) => 0, // dot 1
        (0, 1) => 1, // dot 2
        (0, 2) => 2, // dot 3
        (0, 3) => 6, // dot 7
        (1, 0) => 3, // dot 4
        (1, 1) => 4, // dot 5
        (1, 2) => 5, // dot 6
        (1, 3) => 7, // dot 8
        _ => unreachable!(),
    };

    1 << dot_index
}
