use griddom::{find_element, hit_test_draggable, Element, Event, Layout, MouseButton};

use crate::model::ColumnKey;

use super::{head_cell_id, COL_KEY_DATA};

/// Emitted once per completed resize gesture; the host writes it back into
/// its persisted [`WidthState`](crate::state::WidthState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthChange {
    pub key: ColumnKey,
    pub width: u16,
}

#[derive(Debug)]
struct DragSession {
    key: ColumnKey,
    start_x: i32,
    start_width: u16,
    current_width: u16,
}

/// Per-gesture drag tracker for column resize handles.
///
/// A strict three-state machine per gesture: idle → dragging → idle. A
/// pointer-down on a handle arms it, drags move the live width, release
/// emits exactly one [`WidthChange`]. Movement outside an active drag is a
/// no-op, and only one gesture can be in flight at a time.
#[derive(Debug)]
pub struct ResizeState {
    min_width: u16,
    drag: Option<DragSession>,
}

impl ResizeState {
    pub fn new(min_width: u16) -> Self {
        Self {
            min_width,
            drag: None,
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The in-flight width for a column mid-gesture, overriding persisted
    /// and auto widths until release.
    pub fn live_width(&self, key: &ColumnKey) -> Option<u16> {
        self.drag
            .as_ref()
            .filter(|d| &d.key == key)
            .map(|d| d.current_width)
    }

    /// Process input events against the last frame's tree and layout.
    /// Returns the resizes completed by these events.
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        layout: &Layout,
    ) -> Vec<WidthChange> {
        let mut completed = Vec::new();

        for event in events {
            match *event {
                Event::Down {
                    x,
                    y,
                    button: MouseButton::Left,
                } => {
                    if self.drag.is_none() {
                        self.begin_drag(root, layout, x, y);
                    }
                }
                Event::Drag {
                    x,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(drag) = &mut self.drag {
                        drag.current_width = resolve_width(drag, x, self.min_width);
                    }
                }
                Event::Release {
                    x,
                    button: MouseButton::Left,
                    ..
                } => {
                    if let Some(mut drag) = self.drag.take() {
                        drag.current_width = resolve_width(&drag, x, self.min_width);
                        log::debug!("resize complete: {} -> {}", drag.key, drag.current_width);
                        completed.push(WidthChange {
                            key: drag.key,
                            width: drag.current_width,
                        });
                    }
                }
                _ => {}
            }
        }

        completed
    }

    fn begin_drag(&mut self, root: &Element, layout: &Layout, x: i32, y: i32) {
        let Some(handle) =
            hit_test_draggable(layout, root, x, y).and_then(|id| find_element(root, &id))
        else {
            return;
        };
        let Some(key) = handle.get_data(COL_KEY_DATA) else {
            return;
        };

        let key = ColumnKey::new(key.clone());
        let start_width = layout
            .get(&head_cell_id(&key))
            .map(|r| r.width)
            .unwrap_or(self.min_width);

        log::debug!("resize start: {key} at width {start_width}");
        self.drag = Some(DragSession {
            key,
            start_x: x,
            start_width,
            current_width: start_width,
        });
    }
}

impl Default for ResizeState {
    fn default() -> Self {
        Self::new(super::GridMetrics::default().min_col_width)
    }
}

fn resolve_width(drag: &DragSession, pointer_x: i32, min_width: u16) -> u16 {
    let delta = pointer_x - drag.start_x;
    (drag.start_width as i32 + delta).clamp(min_width as i32, u16::MAX as i32) as u16
}
