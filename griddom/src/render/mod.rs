use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{Layout, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb};

const SCROLLBAR_TRACK: Rgb = Rgb::new(60, 60, 60);
const SCROLLBAR_THUMB: Rgb = Rgb::new(150, 150, 150);

pub fn render_to_buffer(root: &Element, layout: &Layout, buf: &mut Buffer) {
    let screen = Rect::from_size(buf.width(), buf.height());
    render_element(root, layout, buf, screen);
}

fn render_element(element: &Element, layout: &Layout, buf: &mut Buffer, clip: Rect) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let Some(visible) = rect.intersect(clip) else {
        return;
    };

    if let Some(bg) = &element.style.background {
        fill_rect(buf, visible, bg.to_rgb());
    }

    render_border(element, rect, visible, buf);

    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            if let Some(text_clip) = inner.intersect(visible) {
                render_text(text, element, inner, text_clip, buf);
            }
        }
        Content::Children(children) => {
            // Anything other than Visible clips children to the inner box.
            let child_clip = if element.overflow_x.scrolls()
                || element.overflow_y.scrolls()
                || element.overflow_x == crate::types::Overflow::Hidden
                || element.overflow_y == crate::types::Overflow::Hidden
            {
                match inner.intersect(visible) {
                    Some(c) => c,
                    None => return,
                }
            } else {
                clip
            };

            for child in children {
                render_element(child, layout, buf, child_clip);
            }

            render_scrollbars(element, rect, visible, layout, buf);
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y.max(0)..rect.bottom() {
        for x in rect.x.max(0)..rect.right() {
            if let Some(cell) = buf.get_mut(x as u16, y as u16) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, inner: Rect, clip: Rect, buf: &mut Buffer) {
    if inner.is_empty() {
        return;
    }

    let fg = element
        .style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = element.style.background.map(|c| c.to_rgb());

    for (i, raw_line) in text.lines().enumerate() {
        let y = inner.y + i as i32;
        if y >= inner.bottom() {
            break;
        }
        if y < clip.y || y >= clip.bottom() || y < 0 {
            continue;
        }

        let line = truncate_to_width(raw_line, inner.width as usize);
        let start = inner.x
            + align_offset(display_width(&line), inner.width as usize, element.text_align) as i32;

        let mut x = start;
        for ch in line.chars() {
            let w = char_width(ch).max(1) as i32;
            if x + w > inner.right() {
                break;
            }
            if x >= clip.x && x < clip.right() && x >= 0 {
                // Keep whatever background is already painted unless the
                // element sets its own.
                let bg = explicit_bg.unwrap_or_else(|| {
                    buf.get(x as u16, y as u16)
                        .map(|c| c.bg)
                        .unwrap_or(Rgb::new(0, 0, 0))
                });

                buf.set(
                    x as u16,
                    y as u16,
                    Cell::new(ch)
                        .with_fg(fg)
                        .with_bg(bg)
                        .with_style(element.style.text_style),
                );

                if w == 2 {
                    if let Some(cell) = buf.get_mut(x as u16 + 1, y as u16) {
                        cell.char = ' ';
                        cell.wide_continuation = true;
                        cell.bg = bg;
                    }
                }
            }
            x += w;
        }
    }
}

fn render_border(element: &Element, rect: Rect, clip: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    let mut put = |x: i32, y: i32, ch: char| {
        if clip.contains(x, y) && x >= 0 && y >= 0 {
            let bg = buf
                .get(x as u16, y as u16)
                .map(|c| c.bg)
                .unwrap_or(Rgb::new(0, 0, 0));
            buf.set(x as u16, y as u16, Cell::new(ch).with_fg(fg).with_bg(bg));
        }
    };

    put(rect.x, rect.y, tl);
    put(rect.right() - 1, rect.y, tr);
    put(rect.x, rect.bottom() - 1, bl);
    put(rect.right() - 1, rect.bottom() - 1, br);

    for x in rect.x + 1..rect.right() - 1 {
        put(x, rect.y, h);
        put(x, rect.bottom() - 1, h);
    }
    for y in rect.y + 1..rect.bottom() - 1 {
        put(rect.x, y, v);
        put(rect.right() - 1, y, v);
    }
}

fn render_scrollbars(element: &Element, rect: Rect, clip: Rect, layout: &Layout, buf: &mut Buffer) {
    if !element.scrollable() {
        return;
    }

    let Some((content_w, content_h)) = layout.content_size(&element.id) else {
        return;
    };
    let Some((viewport_w, viewport_h)) = layout.viewport_size(&element.id) else {
        return;
    };

    let (scroll_x, scroll_y) = element.scroll_offset;

    if element.overflow_y.scrolls() && content_h > viewport_h && rect.width > 0 {
        let x = rect.right() - 1;
        draw_track(
            buf,
            clip,
            TrackGeometry {
                start: rect.y,
                length: rect.height,
                fixed: x,
                vertical: true,
            },
            content_h,
            viewport_h,
            scroll_y,
        );
    }

    if element.overflow_x.scrolls() && content_w > viewport_w && rect.height > 0 {
        let y = rect.bottom() - 1;
        draw_track(
            buf,
            clip,
            TrackGeometry {
                start: rect.x,
                length: rect.width,
                fixed: y,
                vertical: false,
            },
            content_w,
            viewport_w,
            scroll_x,
        );
    }
}

struct TrackGeometry {
    start: i32,
    length: u16,
    fixed: i32,
    vertical: bool,
}

fn draw_track(
    buf: &mut Buffer,
    clip: Rect,
    geom: TrackGeometry,
    content: u16,
    viewport: u16,
    offset: u16,
) {
    if geom.length == 0 || content == 0 {
        return;
    }

    let thumb_size = ((viewport as u32 * geom.length as u32) / content as u32)
        .clamp(1, geom.length as u32) as u16;

    let max_scroll = content.saturating_sub(viewport);
    let travel = geom.length.saturating_sub(thumb_size);
    let thumb_pos = if max_scroll > 0 && travel > 0 {
        ((offset as u32 * travel as u32) / max_scroll as u32).min(travel as u32) as u16
    } else {
        0
    };

    for i in 0..geom.length {
        let pos = geom.start + i as i32;
        let (x, y) = if geom.vertical {
            (geom.fixed, pos)
        } else {
            (pos, geom.fixed)
        };
        if !clip.contains(x, y) || x < 0 || y < 0 {
            continue;
        }

        let in_thumb = i >= thumb_pos && i < thumb_pos + thumb_size;
        let (ch, fg) = if in_thumb {
            ('█', SCROLLBAR_THUMB)
        } else {
            ('░', SCROLLBAR_TRACK)
        };
        if let Some(cell) = buf.get_mut(x as u16, y as u16) {
            cell.char = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    }
}
