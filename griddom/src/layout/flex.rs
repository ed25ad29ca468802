use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

/// Result of a layout pass: one rect per element id, plus content/viewport
/// extents for scroll containers (used for clamping and scrollbars).
#[derive(Debug, Default)]
pub struct Layout {
    rects: HashMap<String, Rect>,
    content_sizes: HashMap<String, (u16, u16)>,
    viewport_sizes: HashMap<String, (u16, u16)>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Total extent of a scroll container's children, pre-translation.
    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content_sizes.get(id).copied()
    }

    /// Inner (padding/border-adjusted) size of a scroll container.
    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.viewport_sizes.get(id).copied()
    }

    pub fn set_content_size(&mut self, id: impl Into<String>, size: (u16, u16)) {
        self.content_sizes.insert(id.into(), size);
    }

    pub fn set_viewport_size(&mut self, id: impl Into<String>, size: (u16, u16)) {
        self.viewport_sizes.insert(id.into(), size);
    }
}

pub fn layout(element: &Element, available: Rect) -> Layout {
    let mut result = Layout::new();
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut Layout) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let border = border_size(element);
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // Scroll containers let children overflow on the scrolled axis instead
    // of clamping them to the viewport.
    let main_scrolls = if is_row {
        element.overflow_x.scrolls()
    } else {
        element.overflow_y.scrolls()
    };
    let cross_scrolls = if is_row {
        element.overflow_y.scrolls()
    } else {
        element.overflow_x.scrolls()
    };

    // Main-axis totals accumulate in u32: a few thousand fixed-height rows
    // overflow u16 long before they overflow the canvas.
    let gap_total = element.gap as u32 * children.len().saturating_sub(1) as u32;

    // First pass: fixed/auto sizes and fill count.
    let mut fixed_total = 0u32;
    let mut fill_count = 0u32;

    for child in children {
        let main = if is_row { child.width } else { child.height };
        match main {
            Size::Fixed(n) => fixed_total += clamp_main(child, n, is_row) as u32,
            Size::Auto => {
                fixed_total += clamp_main(child, estimate_size(child, is_row), is_row) as u32;
            }
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = (main_size as u32).saturating_sub(fixed_total + gap_total);
    let fill_size = if fill_count > 0 {
        (remaining / fill_count) as u16
    } else {
        0
    };

    // Resolved main sizes per child.
    let mut child_mains: Vec<u16> = Vec::with_capacity(children.len());
    let mut total_main = 0u32;
    let mut max_cross = 0u16;

    for child in children {
        let main = if is_row { child.width } else { child.height };
        let main = match main {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };
        let main = clamp_main(child, main, is_row);
        child_mains.push(main);
        total_main += main as u32;
    }

    // Justify offset only matters when the content actually fits.
    let extra = (main_size as u32).saturating_sub(total_main + gap_total) as u16;
    let start = match element.justify {
        Justify::Start => 0,
        Justify::Center => extra / 2,
        Justify::End => extra,
    };

    let (scroll_x, scroll_y) = element.scroll_offset;
    let (main_shift, cross_shift) = if is_row {
        (scroll_x, scroll_y)
    } else {
        (scroll_y, scroll_x)
    };
    let main_shift = if main_scrolls { main_shift as i32 } else { 0 };
    let cross_shift = if cross_scrolls { cross_shift as i32 } else { 0 };

    let mut offset = start as u32;

    for (i, child) in children.iter().enumerate() {
        let mut main = child_mains[i];

        // Clamp to the space left in the viewport unless this axis scrolls.
        if !main_scrolls {
            let used = offset.min(main_size as u32) as u16;
            main = main.min(main_size - used);
        }

        let child_align = element.align;
        let cross_spec = if is_row { child.height } else { child.width };
        let cross = match cross_spec {
            Size::Fixed(n) => n,
            Size::Fill => cross_size,
            Size::Auto => {
                if child_align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row)
                }
            }
        };
        let mut cross = clamp_cross(child, cross, is_row);
        if !cross_scrolls {
            cross = cross.min(cross_size);
        }
        max_cross = max_cross.max(cross);

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => 0,
            Align::Center => (cross_size.saturating_sub(cross) / 2) as i32,
            Align::End => cross_size.saturating_sub(cross) as i32,
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset as i32 - main_shift,
                inner.y + cross_offset - cross_shift,
                main,
                cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset - cross_shift,
                inner.y + offset as i32 - main_shift,
                cross,
                main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += child_mains[i] as u32 + element.gap as u32;
    }

    if element.overflow_x.scrolls() || element.overflow_y.scrolls() {
        let content_main = saturate(total_main + gap_total);
        let (content_w, content_h) = if is_row {
            (content_main, max_cross)
        } else {
            (max_cross, content_main)
        };
        result.set_content_size(element.id.clone(), (content_w, content_h));
        result.set_viewport_size(element.id.clone(), (inner.width, inner.height));
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width),
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };

    let base = min.map_or(base, |m| base.max(m));
    let base = max.map_or(base, |m| base.min(m));

    base.min(available)
}

fn clamp_main(child: &Element, main: u16, is_row: bool) -> u16 {
    let (min, max) = if is_row {
        (child.min_width, child.max_width)
    } else {
        (child.min_height, child.max_height)
    };
    let main = min.map_or(main, |m| main.max(m));
    max.map_or(main, |m| main.min(m))
}

fn clamp_cross(child: &Element, cross: u16, is_row: bool) -> u16 {
    let (min, max) = if is_row {
        (child.min_height, child.max_height)
    } else {
        (child.min_width, child.max_width)
    };
    let cross = min.map_or(cross, |m| cross.max(m));
    max.map_or(cross, |m| cross.min(m))
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };
    let border = border_size(element) * 2;

    let content: u32 = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                text.lines()
                    .map(|l| display_width(l) as u32)
                    .max()
                    .unwrap_or(0)
            } else {
                text.lines().count().max(1) as u32
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Main axis: children plus gaps, summed wide so deep lists
                // cannot overflow.
                let gap_total = element.gap as u32 * children.len().saturating_sub(1) as u32;
                children
                    .iter()
                    .map(|c| sized_estimate(c, is_width) as u32)
                    .sum::<u32>()
                    + gap_total
            } else {
                // Cross axis: widest child.
                children
                    .iter()
                    .map(|c| sized_estimate(c, is_width) as u32)
                    .max()
                    .unwrap_or(0)
            }
        }
    };

    let estimate = saturate(content + padding as u32 + border as u32);
    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };
    let estimate = min.map_or(estimate, |m| estimate.max(m));
    max.map_or(estimate, |m| estimate.min(m))
}

/// Estimate honoring an explicit Fixed size on the child itself.
fn sized_estimate(element: &Element, is_width: bool) -> u16 {
    let spec = if is_width {
        element.width
    } else {
        element.height
    };
    match spec {
        Size::Fixed(n) => clamp_main_axis(element, n, is_width),
        _ => estimate_size(element, is_width),
    }
}

fn saturate(value: u32) -> u16 {
    value.min(u16::MAX as u32) as u16
}

fn clamp_main_axis(element: &Element, value: u16, is_width: bool) -> u16 {
    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };
    let value = min.map_or(value, |m| value.max(m));
    max.map_or(value, |m| value.min(m))
}
