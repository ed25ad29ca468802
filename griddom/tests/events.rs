use griddom::{
    hit_test, hit_test_any, hit_test_draggable, layout, Element, Event, Overflow, Rect,
    ScrollState, Size,
};

fn button(id: &str, width: u16) -> Element {
    Element::text(id)
        .id(id)
        .width(Size::Fixed(width))
        .height(Size::Fixed(1))
        .clickable(true)
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_finds_clickable() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(30))
        .height(Size::Fixed(1))
        .child(button("left", 10))
        .child(button("right", 10));

    let layout = layout(&root, Rect::from_size(30, 1));

    assert_eq!(hit_test(&layout, &root, 5, 0).as_deref(), Some("left"));
    assert_eq!(hit_test(&layout, &root, 15, 0).as_deref(), Some("right"));
    assert_eq!(hit_test(&layout, &root, 25, 0), None, "gap is not clickable");
    assert_eq!(hit_test(&layout, &root, 40, 0), None, "outside root");
}

#[test]
fn test_hit_test_prefers_deepest() {
    let root = Element::box_()
        .id("outer")
        .width(Size::Fixed(20))
        .height(Size::Fixed(5))
        .clickable(true)
        .child(button("inner", 10));

    let layout = layout(&root, Rect::from_size(20, 5));

    assert_eq!(hit_test(&layout, &root, 3, 0).as_deref(), Some("inner"));
    assert_eq!(hit_test(&layout, &root, 3, 3).as_deref(), Some("outer"));
}

#[test]
fn test_hit_test_draggable_ignores_clickable() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(1))
        .child(button("click", 10))
        .child(
            Element::text("┃")
                .id("handle")
                .width(Size::Fixed(1))
                .height(Size::Fixed(1))
                .draggable(true),
        );

    let layout = layout(&root, Rect::from_size(20, 1));

    assert_eq!(hit_test_draggable(&layout, &root, 5, 0), None);
    assert_eq!(
        hit_test_draggable(&layout, &root, 10, 0).as_deref(),
        Some("handle")
    );
}

#[test]
fn test_hit_test_any_returns_plain_elements() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1));

    let layout = layout(&root, Rect::from_size(10, 1));
    assert_eq!(hit_test_any(&layout, &root, 2, 0).as_deref(), Some("root"));
}

// ============================================================================
// Wheel Scrolling
// ============================================================================

fn scroll_fixture() -> Element {
    Element::col()
        .id("list")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .overflow_y(Overflow::Auto)
        .children((0..20).map(|i| {
            Element::text(format!("row {i}"))
                .id(format!("row-{i}"))
                .width(Size::Fixed(8))
                .height(Size::Fixed(1))
        }))
}

#[test]
fn test_wheel_scrolls_container_under_pointer() {
    let root = scroll_fixture();
    let layout = layout(&root, Rect::from_size(10, 5));
    let mut scroll = ScrollState::new();

    let changed = scroll.process_events(
        &[Event::Scroll {
            x: 2,
            y: 2,
            delta_x: 0,
            delta_y: 3,
        }],
        &root,
        &layout,
    );

    assert!(changed);
    assert_eq!(scroll.get("list").y, 3);
}

#[test]
fn test_wheel_clamps_at_content_end() {
    let root = scroll_fixture();
    let layout = layout(&root, Rect::from_size(10, 5));
    let mut scroll = ScrollState::new();

    scroll.process_events(
        &[Event::Scroll {
            x: 2,
            y: 2,
            delta_x: 0,
            delta_y: 100,
        }],
        &root,
        &layout,
    );

    // 20 rows in a 5-row viewport: max offset is 15.
    assert_eq!(scroll.get("list").y, 15);
}

#[test]
fn test_wheel_up_at_top_is_noop() {
    let root = scroll_fixture();
    let layout = layout(&root, Rect::from_size(10, 5));
    let mut scroll = ScrollState::new();

    let changed = scroll.process_events(
        &[Event::Scroll {
            x: 2,
            y: 2,
            delta_x: 0,
            delta_y: -1,
        }],
        &root,
        &layout,
    );

    assert!(!changed);
    assert_eq!(scroll.get("list").y, 0);
}

#[test]
fn test_wheel_outside_container_is_ignored() {
    let root = scroll_fixture();
    let layout = layout(&root, Rect::from_size(10, 5));
    let mut scroll = ScrollState::new();

    let changed = scroll.process_events(
        &[Event::Scroll {
            x: 50,
            y: 50,
            delta_x: 0,
            delta_y: 1,
        }],
        &root,
        &layout,
    );

    assert!(!changed);
}

#[test]
fn test_clamp_to_shrunken_content() {
    let root = scroll_fixture();
    let layout = layout(&root, Rect::from_size(10, 5));
    let mut scroll = ScrollState::new();
    scroll.set("list", 0, 40);

    scroll.clamp_to(&layout);
    assert_eq!(scroll.get("list").y, 15);
}
