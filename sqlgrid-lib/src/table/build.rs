use griddom::text::display_width;
use griddom::{Color, Edges, Element, Overflow, ScrollState, Size, Style};

use crate::model::{json_text, Column, Row};

use super::{
    cell_id, handle_id, head_cell_id, row_id, ResizeState, TableView, BODY_ID, COL_KEY_DATA,
    GRID_ID, HEADER_ID,
};

const HEADER_BG: Color = Color::Rgb {
    r: 38,
    g: 41,
    b: 50,
};
const ROW_BG: Color = Color::Rgb {
    r: 24,
    g: 24,
    b: 28,
};
const TEXT_FG: Color = Color::Rgb {
    r: 212,
    g: 212,
    b: 212,
};
const HANDLE_FG: Color = Color::Rgb {
    r: 110,
    g: 110,
    b: 120,
};

/// Widest an auto-sized column will grow from its content.
const AUTO_MAX_WIDTH: u16 = 48;

pub(super) fn build(view: &TableView, resize: &ResizeState, scroll: &ScrollState) -> Element {
    let widths: Vec<u16> = view
        .model()
        .columns
        .iter()
        .map(|column| column_width(view, resize, column))
        .collect();
    let pinned: Vec<bool> = view
        .model()
        .columns
        .iter()
        .map(|column| has_explicit_width(view, resize, column))
        .collect();

    let header = header_row(view, resize, &widths, &pinned);
    let body = body(view, scroll, &widths);

    let grid_offset = scroll.get(GRID_ID);
    let mut wrapper = Element::col()
        .id(GRID_ID)
        .overflow_x(Overflow::Auto)
        .scroll_offset(grid_offset.x, 0)
        .child(header)
        .child(body);

    if let Some(cap) = view.row_cap() {
        wrapper = wrapper.max_height(cap);
    }

    wrapper
}

fn header_row(
    view: &TableView,
    _resize: &ResizeState,
    widths: &[u16],
    pinned: &[bool],
) -> Element {
    Element::row()
        .id(HEADER_ID)
        .height(Size::Fixed(view.metrics().header_height))
        .children(
            view.model()
                .columns
                .iter()
                .enumerate()
                .map(|(i, column)| header_cell(column, widths[i], pinned[i])),
        )
}

fn header_cell(column: &Column, width: u16, pinned: bool) -> Element {
    let mut cell = Element::row()
        .id(head_cell_id(&column.key))
        .width(Size::Fixed(width))
        .height(Size::Fill)
        .padding(Edges::horizontal(1))
        .style(Style::new().background(HEADER_BG));

    // A persisted or in-drag width is pinned: min = max = width.
    if pinned {
        cell = cell.min_width(width).max_width(width);
    }

    cell = cell.child(
        Element::text(&column.header)
            .width(Size::Fill)
            .style(Style::new().foreground(TEXT_FG).bold()),
    );

    if let Some(label) = &column.type_label {
        cell = cell.child(Element::text(label).style(Style::new().foreground(TEXT_FG).dim()));
    }

    cell.child(
        Element::text("┃")
            .id(handle_id(&column.key))
            .width(Size::Fixed(1))
            .height(Size::Fill)
            .draggable(true)
            .data(COL_KEY_DATA, column.key.as_str())
            .style(Style::new().foreground(HANDLE_FG).background(HEADER_BG)),
    )
}

fn body(view: &TableView, scroll: &ScrollState, widths: &[u16]) -> Element {
    let offset = scroll.get(BODY_ID);

    Element::col()
        .id(BODY_ID)
        .overflow_y(Overflow::Auto)
        .scroll_offset(0, offset.y)
        .children(
            view.model()
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| body_row(view, i, row, widths)),
        )
}

fn body_row(view: &TableView, index: usize, row: &Row, widths: &[u16]) -> Element {
    let background = if index % 2 == 1 {
        ROW_BG.lighten(0.04)
    } else {
        ROW_BG
    };

    let element = Element::row()
        .id(row_id(index))
        .height(Size::Fixed(view.metrics().row_height))
        .style(Style::new().background(background));

    match row {
        Row::Cells(cells) => element.children(cells.iter().enumerate().map(|(col, cell)| {
            Element::text(cell.display_text())
                .id(cell_id(index, col))
                .width(Size::Fixed(widths[col]))
                .padding(Edges::horizontal(1))
                .style(Style::new().foreground(TEXT_FG))
        })),
        // Malformed source row: one cell spanning the whole row. Summed wide
        // and saturated; many pinned columns can exceed u16.
        Row::Opaque(value) => {
            let total: u32 = widths.iter().map(|w| *w as u32).sum();
            let total = total.min(u16::MAX as u32) as u16;
            element.child(
                Element::text(json_text(value))
                    .id(cell_id(index, 0))
                    .width(Size::Fixed(total.max(1)))
                    .padding(Edges::horizontal(1))
                    .style(Style::new().foreground(TEXT_FG).italic()),
            )
        }
    }
}

fn column_width(view: &TableView, resize: &ResizeState, column: &Column) -> u16 {
    if let Some(width) = resize.live_width(&column.key) {
        return width;
    }
    if let Some(width) = view.widths().width(&column.key) {
        if width >= view.metrics().min_col_width {
            return width;
        }
    }
    auto_width(view, column)
}

fn has_explicit_width(view: &TableView, resize: &ResizeState, column: &Column) -> bool {
    resize.live_width(&column.key).is_some()
        || view
            .widths()
            .width(&column.key)
            .is_some_and(|w| w >= view.metrics().min_col_width)
}

/// Content-driven width: widest of header (plus type badge and handle) and
/// cell text, padded, bounded so one long value cannot blow up the layout.
fn auto_width(view: &TableView, column: &Column) -> u16 {
    let badge = column
        .type_label
        .as_deref()
        .map(|l| display_width(l) + 1)
        .unwrap_or(0);
    let mut widest = display_width(&column.header) + badge + 1;

    for row in &view.model().rows {
        if let Some(cell) = row.cell(column.index) {
            widest = widest.max(display_width(&cell.display_text()));
        }
    }

    ((widest + 2).min(AUTO_MAX_WIDTH as usize) as u16).max(4)
}
