pub mod braille;
pub mod font;
pub mod render;
pub mod surface;

pub use render::{render, Palette};
pub use surface::ArenaViewport;
