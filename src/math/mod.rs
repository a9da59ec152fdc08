pub mod rect;

pub use rect::{IRect, Rect};
