use griddom::{layout, Edges, Element, Justify, Overflow, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> griddom::Layout {
    layout(root, Rect::from_size(width, height))
}

// ============================================================================
// Stacking & Spacing
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("a")
                .width(Size::Fixed(10))
                .height(Size::Fixed(20)),
        )
        .child(
            Element::box_()
                .id("b")
                .width(Size::Fixed(10))
                .height(Size::Fixed(30)),
        );

    let layout = layout_root(&root, 100, 100);

    let a = layout.get("a").unwrap();
    assert_eq!((a.x, a.y, a.width, a.height), (0, 0, 10, 20));

    let b = layout.get("b").unwrap();
    assert_eq!((b.x, b.y), (0, 20));
    assert_eq!(b.height, 30);
}

#[test]
fn test_gap_between_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(50))
        .gap(2)
        .child(Element::box_().id("a").height(Size::Fixed(10)).width(Size::Fixed(5)))
        .child(Element::box_().id("b").height(Size::Fixed(10)).width(Size::Fixed(5)));

    let layout = layout_root(&root, 50, 50);
    assert_eq!(layout.get("b").unwrap().y, 12, "gap after first child");
}

#[test]
fn test_padding_shrinks_inner_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(50))
        .padding(Edges::all(5))
        .child(
            Element::box_()
                .id("child")
                .width(Size::Fill)
                .height(Size::Fill),
        );

    let layout = layout_root(&root, 100, 100);
    let child = layout.get("child").unwrap();

    assert_eq!((child.x, child.y), (5, 5));
    assert_eq!((child.width, child.height), (40, 40));
}

// ============================================================================
// Size Resolution
// ============================================================================

#[test]
fn test_fill_splits_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .child(Element::box_().id("fixed").width(Size::Fixed(30)).height(Size::Fill))
        .child(Element::box_().id("f1").width(Size::Fill).height(Size::Fill))
        .child(Element::box_().id("f2").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("f1").unwrap().width, 35);
    assert_eq!(layout.get("f2").unwrap().width, 35);
    assert_eq!(layout.get("f1").unwrap().x, 30);
    assert_eq!(layout.get("f2").unwrap().x, 65);
}

#[test]
fn test_min_width_overrides_fixed() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(20))
        .min_width(50)
        .height(Size::Fixed(10));

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("root").unwrap().width, 50);
}

#[test]
fn test_max_height_caps_auto_content() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .max_height(25)
        .children((0..30).map(|i| {
            Element::box_()
                .id(format!("row-{i}"))
                .width(Size::Fixed(10))
                .height(Size::Fixed(1))
        }));

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("root").unwrap().height, 25, "auto height clamped by max");
}

#[test]
fn test_auto_width_from_text() {
    let root = Element::text("hello").id("root").height(Size::Fixed(1));
    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("root").unwrap().width, 5);
}

// ============================================================================
// Justify
// ============================================================================

#[test]
fn test_justify_center() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .justify(Justify::Center)
        .child(Element::box_().id("child").width(Size::Fixed(20)).height(Size::Fill));

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("child").unwrap().x, 40);
}

#[test]
fn test_justify_end() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .justify(Justify::End)
        .child(Element::box_().id("child").width(Size::Fixed(20)).height(Size::Fill));

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("child").unwrap().x, 80);
}

// ============================================================================
// Scroll Containers
// ============================================================================

#[test]
fn test_scroll_container_records_content_and_viewport() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .overflow_y(Overflow::Auto)
        .children((0..30).map(|i| {
            Element::box_()
                .id(format!("row-{i}"))
                .width(Size::Fixed(5))
                .height(Size::Fixed(1))
        }));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.content_size("root"), Some((5, 30)));
    assert_eq!(layout.viewport_size("root"), Some((20, 10)));
}

#[test]
fn test_scroll_offset_shifts_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .overflow_y(Overflow::Auto)
        .scroll_offset(0, 7)
        .children((0..30).map(|i| {
            Element::box_()
                .id(format!("row-{i}"))
                .width(Size::Fixed(5))
                .height(Size::Fixed(1))
        }));

    let layout = layout_root(&root, 100, 100);

    // Row 0 scrolled above the viewport; row 7 at the top.
    assert_eq!(layout.get("row-0").unwrap().y, -7);
    assert_eq!(layout.get("row-7").unwrap().y, 0);
}

#[test]
fn test_scrolled_axis_does_not_clamp_children() {
    // A horizontally scrolling column: its child row keeps its full content
    // width even though the container is narrower.
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .overflow_x(Overflow::Auto)
        .child(
            Element::row()
                .id("wide")
                .height(Size::Fixed(1))
                .children((0..5).map(|i| {
                    Element::box_()
                        .id(format!("cell-{i}"))
                        .width(Size::Fixed(10))
                        .height(Size::Fixed(1))
                })),
        );

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("wide").unwrap().width, 50);
    assert_eq!(layout.content_size("root"), Some((50, 1)));
}

#[test]
fn test_deep_scroll_column_saturates_content_height() {
    // 3000 rows of 28 cells total 84000, past u16::MAX. The container keeps
    // its own size, content height saturates, and far rows stay laid out.
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(50))
        .overflow_y(Overflow::Auto)
        .children((0..3000).map(|i| {
            Element::box_()
                .id(format!("row-{i}"))
                .width(Size::Fixed(10))
                .height(Size::Fixed(28))
        }));

    let layout = layout_root(&root, 200, 100);

    assert_eq!(layout.get("root").unwrap().height, 50);
    let (_, content_h) = layout.content_size("root").unwrap();
    assert_eq!(content_h, u16::MAX);

    let last = layout.get("row-2999").unwrap();
    assert_eq!(last.height, 28);
    assert_eq!(last.y, 2999 * 28);
}

#[test]
fn test_auto_height_estimate_saturates() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .children((0..3000).map(|i| {
            Element::box_()
                .id(format!("row-{i}"))
                .width(Size::Fixed(10))
                .height(Size::Fixed(28))
        }));

    let layout = layout_root(&root, 200, 100);
    assert_eq!(layout.get("root").unwrap().height, 100);
}

#[test]
fn test_unscrolled_children_clamp_to_viewport() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(
            Element::box_()
                .id("tall")
                .width(Size::Fixed(5))
                .height(Size::Fixed(50)),
        );

    let layout = layout_root(&root, 100, 100);
    assert_eq!(layout.get("tall").unwrap().height, 10);
}
