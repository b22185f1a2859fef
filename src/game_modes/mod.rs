mod common;
mod vs_bot;

pub use vs_bot::run_game_vs_bot;
