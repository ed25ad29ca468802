use griddom::element::Content;
use griddom::{
    find_element, layout, Element, Event, Layout, MouseButton, Rect, ScrollState, Size,
};
use serde_json::{json, Value};
use sqlgrid_lib::table::{BODY_ID, GRID_ID, HEADER_ID};
use sqlgrid_lib::{
    normalize, ColumnKey, GridMetrics, OutputView, ResizeState, TableView, WidthChange, WidthState,
};

fn grid_payload(rows: usize) -> Value {
    Value::Array((0..rows).map(|i| json!([i, format!("row {i}")])).collect())
}

fn compact_view(rows: usize) -> TableView {
    TableView::new(normalize(&grid_payload(rows)).unwrap(), WidthState::new())
        .with_metrics(GridMetrics::compact())
}

fn render(view: &TableView, resize: &ResizeState, scroll: &ScrollState) -> (Element, Layout) {
    let root = view.element(resize, scroll);
    let rects = layout(&root, Rect::from_size(200, 100));
    (root, rects)
}

// ============================================================================
// Scroll Cap
// ============================================================================

#[test]
fn test_over_threshold_model_gets_capped() {
    let mut view = compact_view(30);
    let resize = ResizeState::new(6);
    let scroll = ScrollState::new();

    let (_, rects) = render(&view, &resize, &scroll);
    assert_eq!(view.row_cap(), None, "no cap before the measure pass");

    view.measure(&rects);
    // header 1 + 20 rows of 1 + 1 slack
    assert_eq!(view.row_cap(), Some(22));

    // Next frame: the wrapper height is capped and the body scrolls.
    let (_, rects) = render(&view, &resize, &scroll);
    assert_eq!(rects.get(GRID_ID).unwrap().height, 22);

    let (_, content_h) = rects.content_size(BODY_ID).unwrap();
    let (_, viewport_h) = rects.viewport_size(BODY_ID).unwrap();
    assert_eq!(content_h, 30);
    assert!(viewport_h < content_h);
}

#[test]
fn test_at_threshold_model_never_capped() {
    let mut view = compact_view(20);
    let resize = ResizeState::new(6);
    let scroll = ScrollState::new();

    let (_, rects) = render(&view, &resize, &scroll);
    view.measure(&rects);
    assert_eq!(view.row_cap(), None);

    let (_, rects) = render(&view, &resize, &scroll);
    // All rows visible: header plus 20 rows.
    assert_eq!(rects.get(GRID_ID).unwrap().height, 21);
}

#[test]
fn test_measurement_failure_uses_default_metrics() {
    let mut view = TableView::new(normalize(&grid_payload(25)).unwrap(), WidthState::new());

    // An empty layout has no header or row rects to measure.
    view.measure(&Layout::new());
    assert_eq!(view.row_cap(), Some(32 + 20 * 28 + 8));
}

#[test]
fn test_cap_follows_measured_heights() {
    let mut view = compact_view(25);

    let mut rects = Layout::new();
    rects.insert(HEADER_ID, Rect::new(0, 0, 10, 2));
    rects.insert("sql-grid-row-0", Rect::new(0, 2, 10, 3));

    view.measure(&rects);
    assert_eq!(view.row_cap(), Some(2 + 20 * 3 + 1));
}

#[test]
fn test_large_result_set_lays_out() {
    // 3000 rows at default metrics (28-high rows) total well past u16::MAX
    // of content height; layout saturates instead of overflowing.
    let mut view = TableView::new(normalize(&grid_payload(3000)).unwrap(), WidthState::new());
    let resize = ResizeState::default();
    let scroll = ScrollState::new();

    let (_, rects) = render(&view, &resize, &scroll);

    assert!(rects.get(GRID_ID).unwrap().height <= 100);
    let (_, content_h) = rects.content_size(BODY_ID).unwrap();
    assert_eq!(content_h, u16::MAX);

    view.measure(&rects);
    assert_eq!(view.row_cap(), Some(32 + 20 * 28 + 8));
}

// ============================================================================
// Column Widths
// ============================================================================

#[test]
fn test_persisted_width_pins_column() {
    let mut widths = WidthState::new();
    widths.set_width(ColumnKey::new("c0"), 30);
    let view = TableView::new(normalize(&grid_payload(3)).unwrap(), widths)
        .with_metrics(GridMetrics::compact());

    let (root, rects) = render(&view, &ResizeState::new(6), &ScrollState::new());

    assert_eq!(rects.get("sql-grid-head-c0").unwrap().width, 30);
    assert_eq!(rects.get("sql-grid-cell-0-0").unwrap().width, 30);

    let head = find_element(&root, "sql-grid-head-c0").unwrap();
    assert_eq!(head.min_width, Some(30));
    assert_eq!(head.max_width, Some(30));
}

#[test]
fn test_sub_minimum_persisted_width_ignored() {
    let mut widths = WidthState::new();
    widths.set_width(ColumnKey::new("c0"), 3);
    let view = TableView::new(normalize(&grid_payload(3)).unwrap(), widths)
        .with_metrics(GridMetrics::compact());

    let (root, rects) = render(&view, &ResizeState::new(6), &ScrollState::new());

    // Falls back to the content-driven width ("col_1" header plus padding).
    assert_eq!(rects.get("sql-grid-head-c0").unwrap().width, 8);
    let head = find_element(&root, "sql-grid-head-c0").unwrap();
    assert_eq!(head.min_width, None);
}

#[test]
fn test_auto_width_bounded_by_long_values() {
    let payload = json!([["x".repeat(100)]]);
    let view = TableView::new(normalize(&payload).unwrap(), WidthState::new())
        .with_metrics(GridMetrics::compact());

    let (_, rects) = render(&view, &ResizeState::new(6), &ScrollState::new());
    assert_eq!(rects.get("sql-grid-head-c0").unwrap().width, 48);
}

#[test]
fn test_opaque_row_spans_all_columns() {
    let payload = json!({
        "schema": {"fields": [{"name": "a"}, {"name": "b"}]},
        "data": [[1, 2], "bad"],
    });
    let view = TableView::new(normalize(&payload).unwrap(), WidthState::new())
        .with_metrics(GridMetrics::compact());

    let (_, rects) = render(&view, &ResizeState::new(6), &ScrollState::new());

    let total = rects.get("sql-grid-head-a").unwrap().width
        + rects.get("sql-grid-head-b").unwrap().width;
    assert_eq!(rects.get("sql-grid-cell-1-0").unwrap().width, total);
}

#[test]
fn test_opaque_span_saturates_on_wide_grids() {
    let payload = json!({
        "schema": {"fields": [{"name": "a"}, {"name": "b"}]},
        "data": ["bad"],
    });
    let mut widths = WidthState::new();
    widths.set_width(ColumnKey::new("a"), 40_000);
    widths.set_width(ColumnKey::new("b"), 40_000);
    let view = TableView::new(normalize(&payload).unwrap(), widths)
        .with_metrics(GridMetrics::compact());

    let root = view.element(&ResizeState::new(6), &ScrollState::new());
    let cell = find_element(&root, "sql-grid-cell-0-0").unwrap();
    assert_eq!(cell.width, Size::Fixed(u16::MAX));
}

// ============================================================================
// Resize Gestures
// ============================================================================

#[test]
fn test_drag_emits_single_width_change() {
    let view = compact_view(3);
    let mut resize = ResizeState::new(6);
    let scroll = ScrollState::new();

    let (root, rects) = render(&view, &resize, &scroll);
    let handle = rects.get("sql-grid-handle-c0").unwrap();
    let start_width = rects.get("sql-grid-head-c0").unwrap().width;

    let events = [
        Event::Down {
            x: handle.x,
            y: handle.y,
            button: MouseButton::Left,
        },
        Event::Drag {
            x: handle.x + 3,
            y: handle.y,
            button: MouseButton::Left,
        },
        Event::Drag {
            x: handle.x + 5,
            y: handle.y,
            button: MouseButton::Left,
        },
        Event::Release {
            x: handle.x + 5,
            y: handle.y,
            button: MouseButton::Left,
        },
    ];

    let changes = resize.process_events(&events, &root, &rects);
    assert_eq!(
        changes,
        vec![WidthChange {
            key: ColumnKey::new("c0"),
            width: start_width + 5,
        }]
    );
    assert!(!resize.dragging());
}

#[test]
fn test_live_width_overrides_during_drag() {
    let mut view = compact_view(3);
    let mut resize = ResizeState::new(6);
    let scroll = ScrollState::new();

    let (root, rects) = render(&view, &resize, &scroll);
    let handle = rects.get("sql-grid-handle-c0").unwrap();
    let start_width = rects.get("sql-grid-head-c0").unwrap().width;

    let events = [
        Event::Down {
            x: handle.x,
            y: handle.y,
            button: MouseButton::Left,
        },
        Event::Drag {
            x: handle.x + 4,
            y: handle.y,
            button: MouseButton::Left,
        },
    ];

    let changes = resize.process_events(&events, &root, &rects);
    assert!(changes.is_empty(), "no change until release");
    assert!(resize.dragging());
    assert_eq!(
        resize.live_width(&ColumnKey::new("c0")),
        Some(start_width + 4)
    );

    // Mid-drag rebuild picks up the live width.
    let (_, rects) = render(&view, &resize, &scroll);
    assert_eq!(
        rects.get("sql-grid-head-c0").unwrap().width,
        start_width + 4
    );

    // Release completes the gesture; the width survives the next rebuild.
    let release = [Event::Release {
        x: handle.x + 4,
        y: handle.y,
        button: MouseButton::Left,
    }];
    let (root, rects) = render(&view, &resize, &scroll);
    let changes = resize.process_events(&release, &root, &rects);
    assert_eq!(changes.len(), 1);

    view.apply_width(&changes[0]);
    let (_, rects) = render(&view, &resize, &scroll);
    assert_eq!(
        rects.get("sql-grid-head-c0").unwrap().width,
        start_width + 4
    );
}

#[test]
fn test_drag_clamps_at_minimum_width() {
    let view = compact_view(3);
    let mut resize = ResizeState::new(6);
    let scroll = ScrollState::new();

    let (root, rects) = render(&view, &resize, &scroll);
    let handle = rects.get("sql-grid-handle-c0").unwrap();

    let events = [
        Event::Down {
            x: handle.x,
            y: handle.y,
            button: MouseButton::Left,
        },
        Event::Release {
            x: handle.x - 1000,
            y: handle.y,
            button: MouseButton::Left,
        },
    ];

    let changes = resize.process_events(&events, &root, &rects);
    assert_eq!(changes[0].width, 6);
}

#[test]
fn test_down_outside_handle_is_noop() {
    let view = compact_view(3);
    let mut resize = ResizeState::new(6);
    let scroll = ScrollState::new();

    let (root, rects) = render(&view, &resize, &scroll);
    let row = rects.get("sql-grid-row-1").unwrap();

    let events = [
        Event::Down {
            x: row.x + 1,
            y: row.y,
            button: MouseButton::Left,
        },
        Event::Drag {
            x: row.x + 20,
            y: row.y,
            button: MouseButton::Left,
        },
        Event::Release {
            x: row.x + 20,
            y: row.y,
            button: MouseButton::Left,
        },
    ];

    let changes = resize.process_events(&events, &root, &rects);
    assert!(changes.is_empty());
    assert!(!resize.dragging());
}

#[test]
fn test_movement_without_down_is_noop() {
    let view = compact_view(3);
    let mut resize = ResizeState::new(6);
    let scroll = ScrollState::new();

    let (root, rects) = render(&view, &resize, &scroll);
    let events = [
        Event::Drag {
            x: 5,
            y: 0,
            button: MouseButton::Left,
        },
        Event::Release {
            x: 5,
            y: 0,
            button: MouseButton::Left,
        },
    ];

    assert!(resize.process_events(&events, &root, &rects).is_empty());
}

// ============================================================================
// Width Persistence
// ============================================================================

#[test]
fn test_width_state_round_trips_through_json() {
    let mut state = WidthState::new();
    state.set_width(ColumnKey::new("id"), 40);
    state.set_width(ColumnKey::new("c3"), 24);

    let raw = serde_json::to_string(&state).unwrap();
    let restored: WidthState = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_width_state_tolerates_missing_field() {
    let restored: WidthState = serde_json::from_str("{}").unwrap();
    assert!(restored.is_empty());
}

// ============================================================================
// Output Fallbacks
// ============================================================================

#[test]
fn test_malformed_payload_renders_diagnostic() {
    let output = OutputView::from_raw("not json{", WidthState::new());
    assert!(output.as_table().is_none());

    let root = output.element(&ResizeState::new(6), &ScrollState::new());
    assert_eq!(root.id, "sql-output-error");
    match &root.content {
        Content::Text(text) => assert!(text.starts_with("Unable to parse output as JSON")),
        other => panic!("expected text content, got {other:?}"),
    }
}

#[test]
fn test_empty_payload_renders_diagnostic() {
    let output = OutputView::from_raw("", WidthState::new());
    let root = output.element(&ResizeState::new(6), &ScrollState::new());
    assert_eq!(root.id, "sql-output-error");
}

#[test]
fn test_non_tabular_payload_renders_pretty_dump() {
    let output = OutputView::from_raw(r#"{"hello": "world"}"#, WidthState::new());
    assert!(output.as_table().is_none());

    let root = output.element(&ResizeState::new(6), &ScrollState::new());
    assert_eq!(root.id, "sql-output-raw");
    match &root.content {
        Content::Text(text) => assert!(text.contains(r#""hello": "world""#)),
        other => panic!("expected text content, got {other:?}"),
    }
}

#[test]
fn test_tabular_payload_renders_grid() {
    let output = OutputView::from_raw(r#"[{"a": 1}, {"a": 2}]"#, WidthState::new());
    assert!(output.as_table().is_some());

    let root = output.element(&ResizeState::new(6), &ScrollState::new());
    assert_eq!(root.id, GRID_ID);
}
