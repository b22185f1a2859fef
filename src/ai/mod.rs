// AI module for the opponent paddle

mod bot;
mod reactive_bot;

pub use bot::Bot;
pub use reactive_bot::ReactiveBot;

/// Create the opponent used for a match
pub fn create_bot() -> Box<dyn Bot> {
    Box::new(ReactiveBot::new())
}
