mod flex;
mod rect;

pub use flex::{layout, Layout};
pub use rect::Rect;
