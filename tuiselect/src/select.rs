//! Dropdown select widget: a one-line trigger plus an overlay option list.
//!
//! The widget owns exactly one piece of transient state (whether the list is
//! open). The embedder owns the selected value, passes it back in through
//! [`SelectProps`], and learns about user decisions from the [`SelectEvent`]s
//! returned by [`SelectState::process_events`].

use crate::element::Element;
use crate::event::{Event, Key};
use crate::focus::FocusState;
use crate::hit::is_within;
use crate::layout::{LayoutResult, Rect};
use crate::types::{Color, Edges, Position, Size, Status, Style};

/// One selectable entry: a display title and the value reported when the
/// entry is chosen. Values are assumed unique within a list; they key the
/// option rows and drive lookup, and duplicates are not detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub title: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Per-frame inputs to [`SelectState::view`]. The embedder owns all of
/// these; the widget never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct SelectProps<'a> {
    /// Options shown while open, in display order.
    pub options: &'a [SelectOption],
    /// The currently chosen option, or None to show the placeholder.
    pub selected: Option<&'a SelectOption>,
    /// Trigger text while nothing is selected.
    pub placeholder: &'a str,
    /// Visual state of the trigger. No behavioral effect.
    pub status: Status,
}

impl<'a> SelectProps<'a> {
    pub fn new(options: &'a [SelectOption], placeholder: &'a str) -> Self {
        Self {
            options,
            selected: None,
            placeholder,
            status: Status::Default,
        }
    }

    pub fn selected(mut self, selected: Option<&'a SelectOption>) -> Self {
        self.selected = selected;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// What the user did with the select, reported upward in the order it
/// happened. The embedder's analogue of change/close callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// An option was activated. Emitted exactly once per confirmed
    /// selection, with that option's value. The list closes; no `Close`
    /// accompanies this.
    Change { value: String },
    /// The open list was dismissed by an interaction outside the control's
    /// subtree. Not emitted when the list closes via the trigger toggle or
    /// via choosing an option.
    Close,
}

/// Open/closed state machine for one dropdown instance.
///
/// Interaction contract, with `Closed` the initial state:
/// - trigger click or Enter on the focused trigger toggles open/closed
///   (neither direction emits an event);
/// - while open, activating an option row (click, or Enter while the row is
///   focused) emits [`SelectEvent::Change`] and closes;
/// - while open, a click outside the control's subtree emits
///   [`SelectEvent::Close`] and closes;
/// - while open, Escape closes silently and Up/Down move row focus.
#[derive(Debug)]
pub struct SelectState {
    root_id: String,
    trigger_id: String,
    list_id: String,
    is_open: bool,
    /// Trigger rect from the most recent layout pass; positions the overlay.
    anchor: Option<Rect>,
    /// (row element id, option value) pairs captured while building the
    /// view, in display order. Maps click/key targets back to values.
    rows: Vec<(String, String)>,
}

impl SelectState {
    pub fn new(id: impl Into<String>) -> Self {
        let root_id = id.into();
        let trigger_id = format!("{root_id}-trigger");
        let list_id = format!("{root_id}-list");
        Self {
            root_id,
            trigger_id,
            list_id,
            is_open: false,
            anchor: None,
            rows: Vec::new(),
        }
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        if !self.is_open {
            self.is_open = true;
            log::debug!("[select {}] opened", self.root_id);
        }
    }

    pub fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            log::debug!("[select {}] closed", self.root_id);
        }
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Build this frame's element subtree for the control. The trigger and
    /// (while open) the overlay list are both children of the control's
    /// root element, so subtree containment defines "inside the control".
    pub fn view(&mut self, props: &SelectProps) -> Element {
        self.rows = props
            .options
            .iter()
            .map(|option| (self.row_id(option), option.value.clone()))
            .collect();

        let mut root = Element::col()
            .id(self.root_id.clone())
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .clickable(true)
            .child(self.trigger(props));

        if self.is_open {
            if let Some(anchor) = self.anchor {
                root = root.child(self.list(props, anchor));
            } else {
                // The overlay needs the trigger's rect, which only exists
                // after a layout pass; the list appears on the next frame.
                log::trace!("[select {}] open before first layout", self.root_id);
            }
        }

        root
    }

    fn trigger(&self, props: &SelectProps) -> Element {
        let label = props
            .selected
            .map(|option| option.title.as_str())
            .unwrap_or(props.placeholder);
        let indicator = if self.is_open { '▴' } else { '▾' };

        let mut style = match props.status {
            Status::Default => Style::new().background(Color::oklch(0.28, 0.03, 250.0)),
            Status::Invalid => Style::new().background(Color::oklch(0.32, 0.12, 25.0)),
        };
        if props.selected.is_none() {
            style = style.dim();
        }

        Element::text(format!("{label} {indicator}"))
            .id(self.trigger_id.clone())
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::symmetric(0, 1))
            .clickable(true)
            .focusable(true)
            .style(style)
            .style_focused(style.bold())
    }

    fn list(&self, props: &SelectProps, anchor: Rect) -> Element {
        let rows = props
            .options
            .iter()
            .map(|option| option_row(option, self.row_id(option)));

        Element::col()
            .id(self.list_id.clone())
            .position(Position::Absolute)
            .left(anchor.x as i16)
            .top(anchor.bottom() as i16)
            .z_index(10)
            .width(Size::Fixed(anchor.width))
            .height(Size::Fixed(props.options.len() as u16))
            .style(Style::new().background(Color::oklch(0.2, 0.02, 250.0)))
            .children(rows)
    }

    fn row_id(&self, option: &SelectOption) -> String {
        format!("{}-opt-{}", self.root_id, option.value)
    }

    fn row_value(&self, id: &str) -> Option<String> {
        self.rows
            .iter()
            .find(|(row_id, _)| row_id == id)
            .map(|(_, value)| value.clone())
    }

    /// Run the state machine over this frame's events. `root` and `layout`
    /// must be the tree and layout the events were resolved against, so the
    /// subtree test and the anchor always see the current frame, never a
    /// stale one.
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &Element,
        layout: &LayoutResult,
        focus: &mut FocusState,
    ) -> Vec<SelectEvent> {
        if let Some(rect) = layout.get(&self.trigger_id) {
            self.anchor = Some(*rect);
        }

        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Click { target, .. } => {
                    self.handle_click(target.as_deref(), root, focus, &mut output);
                }
                Event::Key {
                    target,
                    key,
                    modifiers,
                } if modifiers.none() => {
                    self.handle_key(target.as_deref(), *key, focus, &mut output);
                }
                _ => {}
            }
        }

        output
    }

    fn handle_click(
        &mut self,
        target: Option<&str>,
        root: &Element,
        focus: &mut FocusState,
        output: &mut Vec<SelectEvent>,
    ) {
        if target == Some(self.trigger_id.as_str()) {
            self.toggle();
            return;
        }

        if let Some(value) = target.and_then(|t| self.row_value(t)) {
            if self.is_open {
                log::debug!("[select {}] option {value} chosen", self.root_id);
                output.push(SelectEvent::Change { value });
                self.is_open = false;
                // The rows are gone from the next frame's tree; focus must
                // not be left pointing at one.
                focus.focus(&self.trigger_id);
            }
            return;
        }

        let inside = target.is_some_and(|t| is_within(root, &self.root_id, t));
        if !inside && self.is_open {
            // Outside interaction: notify first, then leave the open state.
            log::debug!("[select {}] dismissed by outside click", self.root_id);
            output.push(SelectEvent::Close);
            self.is_open = false;
            if self.focus_on_row(focus) {
                focus.focus(&self.trigger_id);
            }
        }
    }

    fn handle_key(
        &mut self,
        target: Option<&str>,
        key: Key,
        focus: &mut FocusState,
        output: &mut Vec<SelectEvent>,
    ) {
        match key {
            Key::Enter => {
                if target == Some(self.trigger_id.as_str()) {
                    self.toggle();
                } else if let Some(value) = target.and_then(|t| self.row_value(t)) {
                    if self.is_open {
                        log::debug!("[select {}] option {value} chosen via keyboard", self.root_id);
                        output.push(SelectEvent::Change { value });
                        self.is_open = false;
                        focus.focus(&self.trigger_id);
                    }
                }
            }
            Key::Escape if self.is_open => {
                // Keyboard dismissal closes without Change or Close.
                self.is_open = false;
                if self.focus_on_row(focus) {
                    focus.focus(&self.trigger_id);
                }
            }
            Key::Down if self.is_open => self.move_row_focus(target, 1, focus),
            Key::Up if self.is_open => self.move_row_focus(target, -1, focus),
            _ => {}
        }
    }

    fn focus_on_row(&self, focus: &FocusState) -> bool {
        focus
            .focused()
            .is_some_and(|id| self.rows.iter().any(|(row_id, _)| row_id == id))
    }

    fn move_row_focus(&self, target: Option<&str>, delta: i32, focus: &mut FocusState) {
        if self.rows.is_empty() {
            return;
        }

        let next = match target.and_then(|t| self.rows.iter().position(|(id, _)| id == t)) {
            Some(index) => {
                let last = (self.rows.len() - 1) as i32;
                (index as i32 + delta).clamp(0, last) as usize
            }
            // Entering the list from the trigger.
            None => 0,
        };

        focus.focus(&self.rows[next].0);
    }
}

/// One selectable row in the open list: stateless, re-rendered purely as a
/// function of its option. Activation (click, or Enter while focused) is
/// resolved by the owning [`SelectState`] from the row's id.
pub fn option_row(option: &SelectOption, id: impl Into<String>) -> Element {
    Element::text(option.title.clone())
        .id(id)
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .padding(Edges::symmetric(0, 1))
        .clickable(true)
        .focusable(true)
        .style_focused(Style::new().background(Color::oklch(0.45, 0.1, 250.0)).bold())
}
