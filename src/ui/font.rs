// 3×5 bitmap font for the score and countdown digits

pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 5;

/// Horizontal advance per character, in glyph pixels (glyph + 1 gap)
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

/// Rows of a glyph, top to bottom; bit 2 is the leftmost column.
/// Characters without a glyph (space included) render blank.
pub fn glyph(ch: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        _ => return None,
    };
    Some(rows)
}

/// Iterate the lit (column, row) cells of a glyph
pub fn lit_cells(rows: [u8; GLYPH_HEIGHT]) -> impl Iterator<Item = (usize, usize)> {
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        (0..GLYPH_WIDTH)
            .filter(move |col| rows[row] & (0b100 >> col) != 0)
            .map(move |col| (col, row))
    })
}

/// Width of `text` in glyph pixels, without the trailing gap
pub fn text_width(text: &str) -> usize {
    let chars = text.chars().count();
    if chars == 0 {
        0
    } else {
        chars * ADVANCE - 1
    }
}
