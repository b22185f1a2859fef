use ratatui::{
    layout::Rect as CellRect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;
use crate::game::arena::{
    Point, ARENA_HEIGHT, ARENA_WIDTH, BALL_THICKNESS, CENTER_LINE_THICKNESS,
};
use crate::game::GameState;

use super::braille::{BrailleCanvas, Rgb};
use super::font;
use super::surface::{ArenaSurface, ArenaViewport, Surface};

// Text placement in arena units (glyph height and top edge)
const SCORE_SIZE: f32 = 30.0;
const SCORE_TOP: f32 = 25.0;
const COUNTDOWN_SIZE: f32 = 100.0;
const COUNTDOWN_TOP: f32 = 55.0;

/// Colors used by the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub center_line: Rgb,
    pub score: Rgb,
}

impl From<&DisplayConfig> for Palette {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            background: display.background_color,
            foreground: display.foreground_color,
            center_line: display.center_line_color,
            score: display.score_color,
        }
    }
}

/// Draw one frame of the match onto `surface`.
///
/// Order: background, center line, paddles, ball, countdown (while
/// counting), score. Paddles are clamped by the game state before this runs.
pub fn draw_scene(surface: &mut dyn Surface, state: &GameState, palette: &Palette) {
    surface.fill_background(palette.background);

    surface.draw_line(
        Point::new(ARENA_WIDTH / 2.0, 0.0),
        Point::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT),
        CENTER_LINE_THICKNESS,
        palette.center_line,
    );

    surface.draw_rect(state.human.rect, palette.foreground);
    surface.draw_rect(state.opponent.rect, palette.foreground);

    surface.draw_circle(
        Point::new(state.ball.x, state.ball.y),
        state.ball.radius,
        BALL_THICKNESS,
        palette.foreground,
    );

    if let Some(seconds) = state.countdown.remaining() {
        draw_centered_text(
            surface,
            &seconds.to_string(),
            COUNTDOWN_TOP,
            COUNTDOWN_SIZE,
            palette.score,
        );
    }

    draw_centered_text(
        surface,
        &state.score.display_text(),
        SCORE_TOP,
        SCORE_SIZE,
        palette.score,
    );
}

fn draw_centered_text(surface: &mut dyn Surface, text: &str, top: f32, size: f32, color: Rgb) {
    let unit = size / font::GLYPH_HEIGHT as f32;
    let width = font::text_width(text) as f32 * unit;
    let position = Point::new(ARENA_WIDTH / 2.0 - width / 2.0, top);
    surface.draw_text(text, position, size, color);
}

/// Render the match into the whole terminal frame
pub fn render(frame: &mut Frame, state: &GameState, palette: &Palette) {
    let area = frame.area();

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let viewport = ArenaViewport::new(area.width, area.height);
    let background = {
        let mut surface = ArenaSurface::new(&mut canvas, viewport);
        draw_scene(&mut surface, state, palette);
        surface.background()
    };

    // Draw background (true RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(rgb(background)));
    frame.render_widget(bg, area);

    render_braille_canvas(frame, &canvas, area, background);
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

fn render_braille_canvas(
    frame: &mut Frame,
    canvas: &BrailleCanvas,
    area: CellRect,
    background: Rgb,
) {
    // Render each row of the Braille canvas
    for y in 0..canvas.height() {
        let spans: Vec<Span> = (0..canvas.width())
            .map(|x| {
                Span::styled(
                    canvas.to_char(x, y).to_string(),
                    Style::default()
                        .fg(rgb(canvas.color_at(x, y)))
                        .bg(rgb(background)),
                )
            })
            .collect();

        let row_area = CellRect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}
