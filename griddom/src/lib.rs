pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use element::{find_element, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{find_scrollable_at, hit_test, hit_test_any, hit_test_draggable};
pub use layout::{layout, Layout, Rect};
pub use scroll::{ScrollOffset, ScrollState};
pub use terminal::Terminal;
pub use types::*;
