//! Core value types shared across the loader.

mod colour;
mod rect;
mod sprite;

pub use colour::Colour;
pub use rect::Rect;
pub use sprite::{SpriteId, SpriteImage, SpriteMap};
