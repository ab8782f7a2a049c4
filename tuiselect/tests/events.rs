use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use tuiselect::{
    collect_focusable, hit_test, hit_test_any, hit_test_focusable, is_within, Element, Event,
    FocusState, Key, LayoutResult, MouseButton, Position, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

/// A page holding one dropdown: clickable trigger line, plus a static label
/// that takes clicks for the page itself.
fn page_tree() -> Element {
    Element::box_()
        .id("page")
        .clickable(true)
        .child(Element::text("Pick a month").id("label"))
        .child(Element::text("trigger").id("trigger").clickable(true))
}

fn page_layout() -> LayoutResult {
    create_layout(&[
        ("page", Rect::new(0, 0, 40, 12)),
        ("label", Rect::new(0, 0, 40, 1)),
        ("trigger", Rect::new(0, 2, 40, 1)),
    ])
}

#[test]
fn test_hit_test_resolves_click_target() {
    let root = page_tree();
    let layout = page_layout();

    // On the trigger line.
    assert_eq!(hit_test(&layout, &root, 5, 2), Some("trigger".to_string()));

    // On the page but off the trigger.
    assert_eq!(hit_test(&layout, &root, 5, 8), Some("page".to_string()));

    // Off the page entirely.
    assert_eq!(hit_test(&layout, &root, 60, 20), None);
}

#[test]
fn test_hit_test_prefers_the_later_sibling() {
    // An open list drawn after the page content wins where they overlap.
    let root = Element::box_()
        .id("page")
        .child(Element::box_().id("content").clickable(true))
        .child(Element::box_().id("list").clickable(true));

    let layout = create_layout(&[
        ("page", Rect::new(0, 0, 40, 12)),
        ("content", Rect::new(0, 0, 40, 12)),
        ("list", Rect::new(0, 1, 20, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 5, 2), Some("list".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 8), Some("content".to_string()));
}

#[test]
fn test_hit_test_skips_inert_elements() {
    let root = page_tree();
    let layout = page_layout();

    // The label is not clickable, so the click falls through to the page;
    // hit_test_any still sees it.
    assert_eq!(hit_test(&layout, &root, 5, 0), Some("page".to_string()));
    assert_eq!(
        hit_test_any(&layout, &root, 5, 0),
        Some("label".to_string())
    );
}

#[test]
fn test_hit_test_focusable_ignores_plain_text() {
    let root = Element::box_()
        .id("page")
        .child(Element::text("trigger").id("trigger").focusable(true))
        .child(Element::text("Selected: (none)").id("chosen"));

    let layout = create_layout(&[
        ("page", Rect::new(0, 0, 40, 12)),
        ("trigger", Rect::new(0, 2, 40, 1)),
        ("chosen", Rect::new(0, 4, 40, 1)),
    ]);

    assert_eq!(
        hit_test_focusable(&layout, &root, 5, 2),
        Some("trigger".to_string())
    );
    assert_eq!(hit_test_focusable(&layout, &root, 5, 4), None);
}

#[test]
fn test_hit_test_reaches_overlay_beyond_parent_rect() {
    // An absolutely positioned child (a dropdown list) extends past its
    // parent's one-line rect; descent must not prune on the parent bounds.
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(
            Element::box_()
                .id("overlay")
                .position(Position::Absolute)
                .clickable(true),
        );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 1)),
        ("overlay", Rect::new(0, 1, 40, 5)),
    ]);

    assert_eq!(hit_test(&layout, &root, 5, 3), Some("overlay".to_string()));
}

#[test]
fn test_is_within() {
    let root = Element::box_()
        .id("page")
        .child(
            Element::box_()
                .id("select")
                .child(Element::text("row").id("row")),
        )
        .child(Element::text("elsewhere").id("elsewhere"));

    assert!(is_within(&root, "select", "row"));
    assert!(is_within(&root, "select", "select"));
    assert!(!is_within(&root, "select", "elsewhere"));
    assert!(!is_within(&root, "select", "missing"));
}

// ============================================================================
// Focus State
// ============================================================================

/// A trigger plus an open list of rows, the focus ring a dropdown presents.
fn focus_tree() -> Element {
    Element::box_()
        .id("page")
        .child(Element::text("trigger").id("trigger").focusable(true))
        .child(
            Element::box_()
                .id("list")
                .child(Element::text("January").id("row-01").focusable(true))
                .child(Element::text("February").id("row-02").focusable(true)),
        )
}

#[test]
fn test_collect_focusable_in_tree_order() {
    let root = focus_tree();
    assert_eq!(collect_focusable(&root), vec!["trigger", "row-01", "row-02"]);
}

#[test]
fn test_focus_next_wraps_past_the_last_row() {
    let root = focus_tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("trigger".to_string()));
    assert_eq!(focus.focus_next(&root), Some("row-01".to_string()));
    assert_eq!(focus.focus_next(&root), Some("row-02".to_string()));
    assert_eq!(focus.focus_next(&root), Some("trigger".to_string()));
}

#[test]
fn test_focus_prev_wraps_to_the_last_row() {
    let root = focus_tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("row-02".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("row-01".to_string()));
}

#[test]
fn test_focus_and_blur() {
    let mut focus = FocusState::new();

    assert!(focus.focus("trigger"));
    assert!(!focus.focus("trigger"), "refocusing is a no-op");
    assert_eq!(focus.focused(), Some("trigger"));
    assert!(focus.blur());
    assert!(!focus.blur());
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Raw event translation
// ============================================================================

#[test]
fn test_tab_emits_focus_events() {
    let root = focus_tree();
    let layout = create_layout(&[("page", Rect::new(0, 0, 40, 10))]);
    let mut focus = FocusState::new();

    let raw = vec![CrosstermEvent::Key(KeyEvent::new(
        KeyCode::Tab,
        KeyModifiers::NONE,
    ))];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(
        events,
        vec![Event::Focus {
            target: "trigger".to_string()
        }]
    );

    let raw = vec![CrosstermEvent::Key(KeyEvent::new(
        KeyCode::Tab,
        KeyModifiers::NONE,
    ))];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "trigger".to_string()
            },
            Event::Focus {
                target: "row-01".to_string()
            },
        ]
    );
}

#[test]
fn test_key_event_targets_focused_element() {
    let root = focus_tree();
    let layout = create_layout(&[("page", Rect::new(0, 0, 40, 10))]);
    let mut focus = FocusState::new();
    focus.focus("trigger");

    let raw = vec![CrosstermEvent::Key(KeyEvent::new(
        KeyCode::Enter,
        KeyModifiers::NONE,
    ))];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        Event::Key {
            target: Some(t),
            key: Key::Enter,
            ..
        } if t == "trigger"
    ));
}

#[test]
fn test_mouse_down_emits_click_and_focuses() {
    let root = Element::box_().id("page").child(
        Element::text("trigger")
            .id("trigger")
            .clickable(true)
            .focusable(true),
    );

    let layout = create_layout(&[
        ("page", Rect::new(0, 0, 40, 10)),
        ("trigger", Rect::new(0, 0, 10, 1)),
    ]);
    let mut focus = FocusState::new();

    let raw = vec![CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: 5,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(
        events,
        vec![
            Event::Focus {
                target: "trigger".to_string()
            },
            Event::Click {
                target: Some("trigger".to_string()),
                x: 5,
                y: 0,
                button: MouseButton::Left,
            },
        ]
    );
    assert_eq!(focus.focused(), Some("trigger"));
}

#[test]
fn test_click_on_empty_space_has_no_target() {
    let root = focus_tree();
    let layout = create_layout(&[("page", Rect::new(0, 0, 40, 10))]);
    let mut focus = FocusState::new();

    let raw = vec![CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: 30,
        row: 8,
        modifiers: KeyModifiers::NONE,
    })];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(
        events,
        vec![Event::Click {
            target: None,
            x: 30,
            y: 8,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_resize_passes_through() {
    let root = focus_tree();
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();

    let raw = vec![CrosstermEvent::Resize(80, 24)];
    let events = focus.process_events(&raw, &root, &layout);

    assert_eq!(
        events,
        vec![Event::Resize {
            width: 80,
            height: 24
        }]
    );
}
