// Drawing surface for the scene, in arena coordinates.
//
// The frame loop hands an explicit surface to the scene renderer each frame;
// `ArenaSurface` maps arena units onto a Braille canvas sized to the terminal.

use crate::game::arena::{Point, Rect, ARENA_HEIGHT, ARENA_WIDTH};

use super::braille::{BrailleCanvas, Rgb};
use super::font;

/// Smallest terminal (cells) the arena is still readable in
pub const MIN_COLS: u16 = 48;
pub const MIN_ROWS: u16 = 16;

/// Draw calls used by the scene renderer. Coordinates are arena units.
pub trait Surface {
    fn fill_background(&mut self, color: Rgb);

    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Rgb);

    fn draw_rect(&mut self, rect: Rect, color: Rgb);

    /// Ring between `radius - thickness` and `radius`; filled when
    /// thickness >= radius
    fn draw_circle(&mut self, center: Point, radius: f32, thickness: f32, color: Rgb);

    /// Bitmap text with its top-left at `position`; `size` is the glyph
    /// height in arena units
    fn draw_text(&mut self, text: &str, position: Point, size: f32, color: Rgb) {
        let unit = size / font::GLYPH_HEIGHT as f32;
        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = font::glyph(ch) else {
                continue;
            };
            let origin_x = position.x + (i * font::ADVANCE) as f32 * unit;
            for (col, row) in font::lit_cells(rows) {
                let rect = Rect::new(
                    origin_x + col as f32 * unit,
                    position.y + row as f32 * unit,
                    unit,
                    unit,
                );
                self.draw_rect(rect, color);
            }
        }
    }
}

/// Mapping between arena units and the pixels/cells of a terminal area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaViewport {
    scale_x: f32,
    scale_y: f32,
}

impl ArenaViewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            scale_x: (cols as f32 * 2.0) / ARENA_WIDTH,
            scale_y: (rows as f32 * 4.0) / ARENA_HEIGHT,
        }
    }

    pub fn fits(cols: u16, rows: u16) -> bool {
        cols >= MIN_COLS && rows >= MIN_ROWS
    }

    pub fn scale(&self) -> (f32, f32) {
        (self.scale_x, self.scale_y)
    }

    /// Arena point to (fractional) canvas pixel
    pub fn to_pixel(&self, p: Point) -> (f32, f32) {
        (p.x * self.scale_x, p.y * self.scale_y)
    }

    /// Arena point at the center of a canvas pixel
    pub fn pixel_center(&self, px: usize, py: usize) -> Point {
        Point::new(
            (px as f32 + 0.5) / self.scale_x,
            (py as f32 + 0.5) / self.scale_y,
        )
    }

    /// Arena y under a terminal row (pointer input)
    pub fn row_to_arena_y(&self, row: u16) -> f32 {
        let pixel_y = row as f32 * 4.0 + 2.0;
        (pixel_y / self.scale_y).clamp(0.0, ARENA_HEIGHT)
    }

    /// Pixel span [start, end) covering the arena interval [from, to)
    fn span(from: f32, to: f32, scale: f32) -> (usize, usize) {
        let start = (from * scale).floor().max(0.0) as usize;
        let end = ((to * scale).ceil().max(0.0) as usize).max(start + 1);
        (start, end)
    }
}

/// Surface drawing onto a Braille canvas
pub struct ArenaSurface<'a> {
    canvas: &'a mut BrailleCanvas,
    viewport: ArenaViewport,
    background: Rgb,
}

impl<'a> ArenaSurface<'a> {
    pub fn new(canvas: &'a mut BrailleCanvas, viewport: ArenaViewport) -> Self {
        Self {
            canvas,
            viewport,
            background: [0, 0, 0],
        }
    }

    /// Color set by the last `fill_background`
    pub fn background(&self) -> Rgb {
        self.background
    }
}

impl Surface for ArenaSurface<'_> {
    fn fill_background(&mut self, color: Rgb) {
        self.canvas.clear();
        self.background = color;
    }

    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Rgb) {
        self.canvas.set_pen(color);
        let (sx, sy) = self.viewport.scale();
        let (x0, y0) = self.viewport.to_pixel(from);
        let (x1, y1) = self.viewport.to_pixel(to);
        let pen_w = (thickness * sx).round().max(1.0) as usize;
        let pen_h = (thickness * sy).round().max(1.0) as usize;

        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let px = (x0 + (x1 - x0) * t).round() - (pen_w / 2) as f32;
            let py = (y0 + (y1 - y0) * t).round() - (pen_h / 2) as f32;
            if px < 0.0 || py < 0.0 {
                continue;
            }
            self.canvas.fill_rect(px as usize, py as usize, pen_w, pen_h);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.canvas.set_pen(color);
        let (sx, sy) = self.viewport.scale();
        let (x0, x1) = ArenaViewport::span(rect.left(), rect.right(), sx);
        let (y0, y1) = ArenaViewport::span(rect.top(), rect.bottom(), sy);
        self.canvas.fill_rect(x0, y0, x1 - x0, y1 - y0);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, thickness: f32, color: Rgb) {
        self.canvas.set_pen(color);
        let (sx, sy) = self.viewport.scale();
        let (x0, x1) = ArenaViewport::span(center.x - radius, center.x + radius, sx);
        let (y0, y1) = ArenaViewport::span(center.y - radius, center.y + radius, sy);
        let inner = (radius - thickness).max(0.0);

        let mut drawn = false;
        for py in y0..y1 {
            for px in x0..x1 {
                let p = self.viewport.pixel_center(px, py);
                let dist = (p.x - center.x).hypot(p.y - center.y);
                if dist <= radius && dist >= inner {
                    self.canvas.set_pixel(px, py);
                    drawn = true;
                }
            }
        }

        // Smaller than a pixel: keep the ball visible
        if !drawn {
            let (px, py) = self.viewport.to_pixel(center);
            self.canvas
                .set_pixel(px.round().max(0.0) as usize, py.round().max(0.0) as usize);
        }
    }
}
