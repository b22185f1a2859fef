use super::arena::{Rect, ARENA_HEIGHT, ARENA_WIDTH, LINE_THICKNESS, PADDLE_OFFSET, PADDLE_SIZE};
use super::score::Side;

/// One unit step requested by a bot for its paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// Vertical paddle; only `rect.y` changes during a match
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle at its starting position for `side`: inset from the side wall,
    /// vertically centered
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_OFFSET,
            Side::Right => ARENA_WIDTH - PADDLE_OFFSET - LINE_THICKNESS,
        };
        let y = (ARENA_HEIGHT - PADDLE_SIZE) / 2.0;

        Self {
            rect: Rect::new(x, y, LINE_THICKNESS, PADDLE_SIZE),
        }
    }

    #[cfg(test)]
    pub fn top(&self) -> f32 {
        self.rect.y
    }

    pub fn center_y(&self) -> f32 {
        self.rect.center_y()
    }

    /// Direct assignment of the top edge (absolute pointer input)
    pub fn set_top(&mut self, y: f32) {
        self.rect.y = y;
        self.clamp();
    }

    /// Relative move (pointer delta input)
    pub fn shift(&mut self, dy: f32) {
        self.rect.y += dy;
        self.clamp();
    }

    /// Single unit step. Not clamped here, the frame step clamps afterwards.
    pub fn step(&mut self, mv: PaddleMove) {
        match mv {
            PaddleMove::Up => self.rect.y -= 1.0,
            PaddleMove::Down => self.rect.y += 1.0,
        }
    }

    /// Keep the paddle inside the arena: top >= 0 and bottom <= height
    pub fn clamp(&mut self) {
        let max_y = ARENA_HEIGHT - self.rect.height;
        if self.rect.y > max_y {
            self.rect.y = max_y;
        } else if self.rect.y < 0.0 {
            self.rect.y = 0.0;
        }
    }
}
