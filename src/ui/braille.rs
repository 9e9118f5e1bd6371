/// Braille canvas for high-resolution terminal rendering
/// Each terminal cell contains a 2×4 grid of Braille dots
/// This gives us 2× horizontal and 4× vertical resolution

// 3×5 bitmap font, one row per byte, bit 2 is the leftmost column
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Pixel size of one font cell
const DIGIT_SCALE_X: usize = 2;
const DIGIT_SCALE_Y: usize = 3;
pub const DIGIT_WIDTH: usize = 3 * DIGIT_SCALE_X;
pub const DIGIT_HEIGHT: usize = 5 * DIGIT_SCALE_Y;
const DIGIT_SPACING: usize = 2;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // 2D array of dot patterns (0-255)
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
        }
    }

    /// Clear all dots
    pub fn clear(&mut self) {
        for row in &mut self.dots {
            row.fill(0);
        }
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    /// Anything outside the canvas is ignored.
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (pixel_x % 2, pixel_y % 4) {
            (0, 3) => 6,
            (1, 3) => 7,
            (0, row) => row,
            (_, row) => row + 3,
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Solid line across the full canvas width
    pub fn draw_horizontal_line(&mut self, pixel_y: usize) {
        for px in 0..self.pixel_width() {
            self.set_pixel(px, pixel_y);
        }
    }

    /// Vertical line with `on` pixels drawn out of every `period`
    pub fn draw_dashed_vertical_line(
        &mut self,
        pixel_x: usize,
        from_y: usize,
        to_y: usize,
        on: usize,
        period: usize,
    ) {
        for py in (from_y..to_y).step_by(period.max(1)) {
            for dy in 0..on.min(to_y - py) {
                self.set_pixel(pixel_x, py + dy);
            }
        }
    }

    /// Draw a single digit (0-9) with its top-left corner at (x, y)
    pub fn draw_digit(&mut self, digit: u32, x: usize, y: usize) {
        let Some(rows) = DIGITS.get(digit as usize) else {
            return;
        };

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..3 {
                if bits & (0b100 >> col) != 0 {
                    self.fill_rect(
                        x + col * DIGIT_SCALE_X,
                        y + row * DIGIT_SCALE_Y,
                        DIGIT_SCALE_X,
                        DIGIT_SCALE_Y,
                    );
                }
            }
        }
    }

    /// Draw a number of any length, horizontally centered on `center_x`
    pub fn draw_number(&mut self, value: u32, center_x: usize, y: usize) {
        let digits: Vec<u32> = value
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect();
        let total = Self::number_width(digits.len());
        let mut x = center_x.saturating_sub(total / 2);

        for digit in digits {
            self.draw_digit(digit, x, y);
            x += DIGIT_WIDTH + DIGIT_SPACING;
        }
    }

    fn number_width(count: usize) -> usize {
        count * DIGIT_WIDTH + count.saturating_sub(1) * DIGIT_SPACING
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

    /// One row of cells as text
    pub fn row_string(&self, cell_y: usize) -> String {
        (0..self.width).map(|x| self.to_char(x, cell_y)).collect()
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}
