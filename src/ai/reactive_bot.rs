// Reactive bot - one-unit-per-frame tracker for the right paddle

use super::Bot;
use crate::game::arena::ARENA_HEIGHT;
use crate::game::{GameState, PaddleMove};

/// Opponent that reacts to the ball's current heading and height.
///
/// - Ball heading away (towards the human): drift back to the arena's
///   vertical center
/// - Otherwise: follow the ball's current y
///
/// No prediction, one unit per frame, so fast balls get past it.
pub struct ReactiveBot {
    name: String,
}

impl ReactiveBot {
    pub fn new() -> Self {
        Self {
            name: "Reactive".to_string(),
        }
    }
}

impl Default for ReactiveBot {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an angle in degrees into [-360, 360] by whole turns
pub fn normalize_degrees(mut degrees: f32) -> f32 {
    while degrees > 360.0 || degrees < -360.0 {
        if degrees > 360.0 {
            degrees -= 360.0;
        } else {
            degrees += 360.0;
        }
    }
    degrees
}

/// True when a normalized heading points away from the right paddle
pub fn is_moving_away(degrees: f32) -> bool {
    (-179.0..=-1.0).contains(&degrees) || (181.0..=359.0).contains(&degrees)
}

/// One step toward `target_y`, down when the paddle center is above it
fn step_toward(center_y: f32, target_y: f32) -> Option<PaddleMove> {
    if center_y < target_y {
        Some(PaddleMove::Down)
    } else if center_y > target_y {
        Some(PaddleMove::Up)
    } else {
        None
    }
}

impl Bot for ReactiveBot {
    fn decide(&mut self, game_state: &GameState) -> Option<PaddleMove> {
        let degrees = normalize_degrees(game_state.ball.angle_degrees());
        let center_y = game_state.opponent.center_y();

        if is_moving_away(degrees) {
            step_toward(center_y, ARENA_HEIGHT / 2.0)
        } else if center_y < game_state.ball.y {
            Some(PaddleMove::Down)
        } else {
            // Ties step up: tracking never holds still
            Some(PaddleMove::Up)
        }
    }

    fn reset(&mut self) {
        // Stateless
    }

    fn name(&self) -> &str {
        &self.name
    }
}
