use crate::element::{find_element, Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
///
/// Children are checked before the element itself, in reverse order (last
/// rendered = on top), and descent does not prune on the parent's rect:
/// absolutely positioned children (the open dropdown list) may extend
/// beyond their parent's bounds.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, false)
}

/// Find any element (clickable or not) at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, true)
}

/// Find the deepest focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.focusable)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    any: bool,
) -> Option<String> {
    if any {
        hit_test_by(layout, element, x, y, &|_| true)
    } else {
        hit_test_by(layout, element, x, y, &|el| el.clickable)
    }
}

fn hit_test_by(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accepts: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_by(layout, child, x, y, accepts) {
                return Some(id);
            }
        }
    }

    let rect = layout.get(&element.id)?;
    if rect.contains(x, y) && accepts(element) {
        Some(element.id.clone())
    } else {
        None
    }
}

/// Whether `target_id` names an element inside the subtree rooted at
/// `ancestor_id`. The terminal analogue of `node.contains(target)`:
/// a click whose target fails this test is an outside interaction.
pub fn is_within(root: &Element, ancestor_id: &str, target_id: &str) -> bool {
    find_element(root, ancestor_id).is_some_and(|subtree| find_element(subtree, target_id).is_some())
}
