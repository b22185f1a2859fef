pub mod arena;
pub mod ball;
pub mod countdown;
pub mod input;
pub mod paddle;
pub mod profile;
pub mod score;
pub mod state;

pub use input::{poll_input, GameEvent, PointerTracker};
pub use paddle::PaddleMove;
pub use state::{GameState, PhysicsEvents};
