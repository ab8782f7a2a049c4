use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Position, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left + right);
        let height = self.height.saturating_sub(top + bottom);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

pub type LayoutResult = HashMap<String, Rect>;

/// Compute a rect for every element in the tree. Static children stack
/// vertically inside their parent; absolute children are placed in screen
/// coordinates, sized against the full screen.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, available, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, screen: Rect, result: &mut LayoutResult) {
    let rect = if element.position == Position::Absolute {
        let x = element.left.unwrap_or(0).max(0) as u16;
        let y = element.top.unwrap_or(0).max(0) as u16;
        let width = resolve_width(element, screen.width);
        let height = resolve_height(element, screen.height);
        Rect::new(x, y, width, height)
    } else {
        let width = resolve_width(element, available.width);
        let height = resolve_height(element, available.height);
        Rect::new(available.x, available.y, width, height)
    };

    result.insert(element.id.clone(), rect);
    layout_children(element, rect, screen, result);
}

fn layout_children(element: &Element, rect: Rect, screen: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let border = border_size(element);
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let mut y = inner.y;

    for child in children {
        if child.position == Position::Absolute {
            layout_element(child, inner, screen, result);
            continue;
        }

        let remaining = inner.bottom().saturating_sub(y);
        let available = Rect::new(inner.x, y, inner.width, remaining);
        layout_element(child, available, screen, result);

        let advance = result
            .get(&child.id)
            .map(|r| r.height)
            .unwrap_or(0);
        y = y.saturating_add(advance + element.gap);
    }
}

fn resolve_width(element: &Element, available: u16) -> u16 {
    match element.width {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => preferred_width(element).min(available),
    }
}

fn resolve_height(element: &Element, available: u16) -> u16 {
    match element.height {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => preferred_height(element).min(available),
    }
}

fn preferred_width(element: &Element) -> u16 {
    if let Size::Fixed(n) = element.width {
        return n;
    }

    let chrome = element.padding.horizontal_total() + border_size(element) * 2;
    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => display_width(text) as u16,
        Content::Children(children) => children
            .iter()
            .filter(|c| c.position == Position::Static)
            .map(preferred_width)
            .max()
            .unwrap_or(0),
    };
    content + chrome
}

fn preferred_height(element: &Element) -> u16 {
    if let Size::Fixed(n) = element.height {
        return n;
    }

    let chrome = element.padding.vertical_total() + border_size(element) * 2;
    let content = match &element.content {
        Content::None => 0,
        Content::Text(_) => 1,
        Content::Children(children) => {
            let flow: Vec<u16> = children
                .iter()
                .filter(|c| c.position == Position::Static)
                .map(preferred_height)
                .collect();
            let gaps = element.gap * (flow.len().saturating_sub(1)) as u16;
            flow.iter().sum::<u16>() + gaps
        }
    };
    content + chrome
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}
