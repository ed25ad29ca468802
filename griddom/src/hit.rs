use crate::element::{Content, Element};
use crate::layout::Layout;

/// Find the deepest clickable element at the given coordinates.
pub fn hit_test(layout: &Layout, root: &Element, x: i32, y: i32) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.clickable)
}

/// Find the deepest draggable element at the given coordinates.
pub fn hit_test_draggable(layout: &Layout, root: &Element, x: i32, y: i32) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.draggable)
}

/// Find the deepest element of any kind at the given coordinates.
pub fn hit_test_any(layout: &Layout, root: &Element, x: i32, y: i32) -> Option<String> {
    hit_test_by(layout, root, x, y, &|_| true)
}

fn hit_test_by(
    layout: &Layout,
    element: &Element,
    x: i32,
    y: i32,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Children in reverse order: last rendered is on top.
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_by(layout, child, x, y, accept) {
                return Some(id);
            }
        }
    }

    accept(element).then(|| element.id.clone())
}

/// Find the innermost scroll container at the given coordinates.
pub fn find_scrollable_at(root: &Element, layout: &Layout, x: i32, y: i32) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    if let Content::Children(children) = &root.content {
        for child in children.iter().rev() {
            if let Some(id) = find_scrollable_at(child, layout, x, y) {
                return Some(id);
            }
        }
    }

    root.scrollable().then(|| root.id.clone())
}
