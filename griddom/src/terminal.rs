use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::event::{from_crossterm, Event};
use crate::layout::{layout, Layout, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode terminal driver: owns the double buffer, performs
/// layout + render + diff flush per frame, and restores the terminal on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: Layout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: Layout::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Poll for input, translating raw crossterm events into [`Event`]s.
    /// `None` blocks until at least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut raw = Vec::new();

        match timeout {
            Some(dur) => {
                if event::poll(dur)? {
                    raw.push(event::read()?);
                }
            }
            None => raw.push(event::read()?),
        }

        // Drain whatever else is already pending.
        while event::poll(Duration::ZERO)? {
            raw.push(event::read()?);
        }

        Ok(raw.iter().filter_map(from_crossterm).collect())
    }

    pub fn render(&mut self, root: &Element) -> io::Result<&Layout> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            log::debug!("terminal resized to {width}x{height}, rebuilding buffers");
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
        }

        self.current.clear();

        let available = Rect::from_size(width, height);
        self.last_layout = layout(root, available);

        render_to_buffer(root, &self.last_layout, &mut self.current);
        self.flush_diff()?;

        std::mem::swap(&mut self.current, &mut self.previous);

        Ok(&self.last_layout)
    }

    /// Layout from the last render.
    pub fn layout(&self) -> &Layout {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            // The wide char to the left already covers this cell.
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x + last_char_width {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.style.bold != last_style.bold {
                let attr = if cell.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            if cell.style.dim != last_style.dim {
                let attr = if cell.style.dim {
                    Attribute::Dim
                } else {
                    Attribute::NormalIntensity
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            if cell.style.italic != last_style.italic {
                let attr = if cell.style.italic {
                    Attribute::Italic
                } else {
                    Attribute::NoItalic
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            if cell.style.underline != last_style.underline {
                let attr = if cell.style.underline {
                    Attribute::Underlined
                } else {
                    Attribute::NoUnderline
                };
                execute!(self.stdout, SetAttribute(attr))?;
            }
            last_style = cell.style;

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
