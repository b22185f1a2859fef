// Bot trait for the computer-controlled paddle

use crate::game::{GameState, PaddleMove};

/// Trait for opponent implementations
///
/// A bot looks at the current game state once per frame and decides whether
/// to nudge its paddle. The game state applies the move and clamps it.
pub trait Bot {
    /// Decide the paddle move for this frame
    ///
    /// # Returns
    /// * `Some(PaddleMove)` - Move the right paddle one unit
    /// * `None` - Stay put this frame
    fn decide(&mut self, game_state: &GameState) -> Option<PaddleMove>;

    /// Reset bot internal state (called when a new match starts)
    fn reset(&mut self);

    /// Bot name for logging
    fn name(&self) -> &str;
}
