use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Edges, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the UI tree. Built fresh every frame; layout and rendering
/// address nodes by `id`, so interactive elements should carry stable ids.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,

    // Layout
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub gap: u16,

    // Positioning. Absolute elements are placed in screen coordinates and
    // do not participate in their parent's column flow.
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub z_index: i16,

    // Visual
    pub style: Style,
    /// Style override applied while this element holds focus.
    pub style_focused: Option<Style>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Set by `apply_focus` before rendering, not by the caller.
    pub focused: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            gap: 0,
            position: Position::Static,
            top: None,
            left: None,
            z_index: 0,
            style: Style::default(),
            style_focused: None,
            focusable: false,
            clickable: false,
            focused: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// The style in effect for rendering, honoring the focus override.
    pub fn effective_style(&self) -> &Style {
        match (&self.style_focused, self.focused) {
            (Some(style), true) => style,
            _ => &self.style,
        }
    }

    /// Mark the element holding focus throughout the tree. Call after
    /// building the frame's tree and before rendering it.
    pub fn apply_focus(&mut self, focused: Option<&str>) {
        self.focused = focused == Some(self.id.as_str());
        if let Content::Children(children) = &mut self.content {
            for child in children {
                child.apply_focus(focused);
            }
        }
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}
