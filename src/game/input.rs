use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use super::paddle::Paddle;
use super::profile::PointerMode;

/// Discrete events consumed by the frame loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Quit,
    /// Pointer moved over the terminal; `row` is the terminal cell row
    PointerMoved { row: u16 },
    /// Terminal resized to `width` × `height` cells
    Resize { width: u16, height: u16 },
    /// One second elapsed on the countdown timer
    TimerFired,
}

/// Map a terminal event to a game event, dropping everything else
pub fn translate(event: Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(MouseEvent { kind, row, .. }) => match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(GameEvent::PointerMoved { row })
            }
            _ => None,
        },
        Event::Resize(width, height) => Some(GameEvent::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let quit = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::F(4) => key.modifiers.contains(KeyModifiers::ALT),
        _ => false,
    };

    quit.then_some(GameEvent::Quit)
}

/// Drain all pending terminal events without blocking
pub fn poll_input() -> Result<Vec<GameEvent>, std::io::Error> {
    let mut events = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Some(game_event) = translate(event::read()?) {
            events.push(game_event);
        }
    }

    Ok(events)
}

/// Turns pointer positions into human paddle positions.
///
/// Relative mode adds the vertical delta since the previous pointer sample;
/// the first sample only primes the tracker. Absolute mode assigns the
/// pointer y to the paddle top. The paddle is clamped either way.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    mode: PointerMode,
    last_y: Option<f32>,
}

impl PointerTracker {
    pub fn new(mode: PointerMode) -> Self {
        Self { mode, last_y: None }
    }

    /// Apply a pointer sample at arena height `y`
    pub fn apply(&mut self, y: f32, paddle: &mut Paddle) {
        match self.mode {
            PointerMode::Absolute => paddle.set_top(y),
            PointerMode::Relative => {
                if let Some(last) = self.last_y {
                    paddle.shift(y - last);
                }
            }
        }
        self.last_y = Some(y);
    }

    /// Forget the previous sample (the cell-to-arena mapping changed)
    pub fn reset(&mut self) {
        self.last_y = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::arena::{ARENA_HEIGHT, PADDLE_SIZE};
    use crate::game::score::Side;
    use crossterm::event::{KeyEventState, MouseButton};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 10,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        let quit = Some(GameEvent::Quit);
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), quit);
        assert_eq!(translate(key(KeyCode::Char('q'), KeyModifiers::NONE)), quit);
        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), quit);
        assert_eq!(translate(key(KeyCode::F(4), KeyModifiers::ALT)), quit);

        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(translate(key(KeyCode::F(4), KeyModifiers::NONE)), None);
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_pointer_events() {
        assert_eq!(
            translate(mouse(MouseEventKind::Moved, 7)),
            Some(GameEvent::PointerMoved { row: 7 })
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left), 9)),
            Some(GameEvent::PointerMoved { row: 9 })
        );
        assert_eq!(translate(mouse(MouseEventKind::ScrollUp, 9)), None);
        assert_eq!(
            translate(Event::Resize(80, 24)),
            Some(GameEvent::Resize { width: 80, height: 24 })
        );
    }

    #[test]
    fn test_absolute_assigns_top() {
        let mut paddle = Paddle::new(Side::Left);
        let mut tracker = PointerTracker::new(PointerMode::Absolute);

        tracker.apply(40.0, &mut paddle);
        assert_eq!(paddle.top(), 40.0);

        tracker.apply(ARENA_HEIGHT, &mut paddle);
        assert_eq!(paddle.top(), ARENA_HEIGHT - PADDLE_SIZE);
    }

    #[test]
    fn test_relative_adds_delta() {
        let mut paddle = Paddle::new(Side::Left);
        let mut tracker = PointerTracker::new(PointerMode::Relative);

        // First sample primes only
        tracker.apply(200.0, &mut paddle);
        assert_eq!(paddle.top(), 125.0);

        tracker.apply(210.0, &mut paddle);
        assert_eq!(paddle.top(), 135.0);

        tracker.apply(10.0, &mut paddle);
        assert_eq!(paddle.top(), 0.0);

        tracker.reset();
        tracker.apply(100.0, &mut paddle);
        assert_eq!(paddle.top(), 0.0);
        tracker.apply(130.0, &mut paddle);
        assert_eq!(paddle.top(), 30.0);
    }
}
