pub mod color;
pub mod item;

pub use color::Color;
pub use item::{ItemKind, ItemRecord};
