use std::collections::HashMap;

use crate::element::Element;
use crate::event::Event;
use crate::hit::find_scrollable_at;
use crate::layout::Layout;

/// Scroll offset for a scrollable element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// User-managed scroll state, persisting across frames. The owner reads the
/// offsets back into `Element::scroll_offset` when rebuilding the tree.
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, ScrollOffset>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> ScrollOffset {
        self.offsets.get(id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: &str, x: u16, y: u16) {
        self.offsets.insert(id.to_string(), ScrollOffset::new(x, y));
    }

    /// Process wheel events against the last layout, scrolling the innermost
    /// scroll container under the pointer. Returns true when any offset
    /// changed (the tree should be rebuilt).
    pub fn process_events(&mut self, events: &[Event], root: &Element, layout: &Layout) -> bool {
        let mut changed = false;

        for event in events {
            let Event::Scroll {
                x,
                y,
                delta_x,
                delta_y,
            } = event
            else {
                continue;
            };

            let Some(id) = find_scrollable_at(root, layout, *x, *y) else {
                continue;
            };
            let Some((content_w, content_h)) = layout.content_size(&id) else {
                continue;
            };
            let Some((viewport_w, viewport_h)) = layout.viewport_size(&id) else {
                continue;
            };

            let max_x = content_w.saturating_sub(viewport_w);
            let max_y = content_h.saturating_sub(viewport_h);

            let current = self.get(&id);
            let new_x = clamp_offset(current.x, *delta_x, max_x);
            let new_y = clamp_offset(current.y, *delta_y, max_y);

            if new_x != current.x || new_y != current.y {
                log::debug!(
                    "scroll {id}: ({}, {}) -> ({new_x}, {new_y})",
                    current.x,
                    current.y
                );
                self.offsets.insert(id, ScrollOffset::new(new_x, new_y));
                changed = true;
            }
        }

        changed
    }

    /// Clamp stored offsets against the sizes from the last layout. Call
    /// after a re-render that may have shrunk the content.
    pub fn clamp_to(&mut self, layout: &Layout) {
        for (id, offset) in self.offsets.iter_mut() {
            let (Some((content_w, content_h)), Some((viewport_w, viewport_h))) =
                (layout.content_size(id), layout.viewport_size(id))
            else {
                continue;
            };
            offset.x = offset.x.min(content_w.saturating_sub(viewport_w));
            offset.y = offset.y.min(content_h.saturating_sub(viewport_h));
        }
    }
}

fn clamp_offset(current: u16, delta: i16, max: u16) -> u16 {
    (current as i32 + delta as i32).clamp(0, max as i32) as u16
}
