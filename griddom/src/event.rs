/// High-level input events. Coordinates are screen cells; consumers resolve
/// them against the last layout with the hit-testing helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed.
    Down { x: i32, y: i32, button: MouseButton },
    /// Mouse moved with a button held.
    Drag { x: i32, y: i32, button: MouseButton },
    /// Mouse button released.
    Release { x: i32, y: i32, button: MouseButton },
    /// Mouse moved with no button held.
    MouseMove { x: i32, y: i32 },
    /// Mouse wheel.
    Scroll {
        x: i32,
        y: i32,
        delta_x: i16,
        delta_y: i16,
    },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(m: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: m.contains(KeyModifiers::SHIFT),
            ctrl: m.contains(KeyModifiers::CONTROL),
            alt: m.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(b: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as Ct;
        match b {
            Ct::Left => Self::Left,
            Ct::Right => Self::Right,
            Ct::Middle => Self::Middle,
        }
    }
}

/// Translate a raw crossterm event; returns None for events we do not model
/// (focus changes, key releases, paste, ...).
pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Event> {
    use crossterm::event::{Event as Ct, KeyCode, KeyEventKind, MouseEventKind};

    match event {
        Ct::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let mapped = match key.code {
                KeyCode::Char(c) => Key::Char(c),
                KeyCode::Enter => Key::Enter,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Tab => Key::Tab,
                KeyCode::Esc => Key::Escape,
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::PageUp => Key::PageUp,
                KeyCode::PageDown => Key::PageDown,
                _ => return None,
            };
            Some(Event::Key {
                key: mapped,
                modifiers: key.modifiers.into(),
            })
        }
        Ct::Mouse(mouse) => {
            let x = mouse.column as i32;
            let y = mouse.row as i32;
            match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Down {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Drag(button) => Some(Event::Drag {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Up(button) => Some(Event::Release {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Moved => Some(Event::MouseMove { x, y }),
                MouseEventKind::ScrollUp => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: 0,
                    delta_y: -1,
                }),
                MouseEventKind::ScrollDown => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: 0,
                    delta_y: 1,
                }),
                MouseEventKind::ScrollLeft => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: -1,
                    delta_y: 0,
                }),
                MouseEventKind::ScrollRight => Some(Event::Scroll {
                    x,
                    y,
                    delta_x: 1,
                    delta_y: 0,
                }),
            }
        }
        Ct::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
