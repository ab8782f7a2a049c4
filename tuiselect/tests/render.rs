use tuiselect::layout::layout;
use tuiselect::render::render_to_buffer;
use tuiselect::{
    Border, Buffer, Color, Edges, Element, FocusState, Position, Rect, Rgb, SelectOption,
    SelectProps, SelectState, Size, Style,
};

fn buffer_text(buf: &Buffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len)
        .map(|ix| buf.get(ix, y).map(|c| c.char).unwrap_or(' '))
        .collect()
}

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

// ============================================================================
// Text and padding
// ============================================================================

#[test]
fn test_text_painted_at_rect() {
    let root = Element::text("hello").id("t");
    let buf = render(&root, 20, 5);
    assert_eq!(buffer_text(&buf, 0, 0, 5), "hello");
}

#[test]
fn test_text_respects_padding() {
    let root = Element::text("hi")
        .id("t")
        .width(Size::Fixed(4))
        .height(Size::Fixed(1))
        .padding(Edges::symmetric(0, 1));
    let buf = render(&root, 20, 5);
    assert_eq!(buffer_text(&buf, 0, 0, 4), " hi ");
}

#[test]
fn test_long_text_truncated_with_ellipsis() {
    let root = Element::text("September")
        .id("t")
        .width(Size::Fixed(5))
        .height(Size::Fixed(1));
    let buf = render(&root, 20, 5);
    assert_eq!(buffer_text(&buf, 0, 0, 5), "Sept…");
}

#[test]
fn test_wide_char_marks_continuation_cell() {
    let root = Element::text("你a").id("t");
    let buf = render(&root, 20, 5);

    let wide = buf.get(0, 0).unwrap();
    assert_eq!(wide.char, '你');
    assert!(!wide.wide_continuation);

    // The column the wide glyph spills into must never be written to the
    // terminal on its own, or everything after it shifts right.
    let cont = buf.get(1, 0).unwrap();
    assert!(cont.wide_continuation);
    assert_eq!(cont.char, ' ');

    let next = buf.get(2, 0).unwrap();
    assert_eq!(next.char, 'a');
    assert!(!next.wide_continuation);
}

// ============================================================================
// Border
// ============================================================================

#[test]
fn test_rounded_border_glyphs() {
    let root = Element::box_()
        .id("b")
        .width(Size::Fixed(6))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));
    let buf = render(&root, 20, 5);

    assert_eq!(buf.get(0, 0).unwrap().char, '╭');
    assert_eq!(buf.get(5, 0).unwrap().char, '╮');
    assert_eq!(buf.get(0, 2).unwrap().char, '╰');
    assert_eq!(buf.get(5, 2).unwrap().char, '╯');
    assert_eq!(buf.get(2, 0).unwrap().char, '─');
    assert_eq!(buf.get(0, 1).unwrap().char, '│');
}

// ============================================================================
// Z-order
// ============================================================================

#[test]
fn test_higher_z_paints_over_flow_content() {
    // The overlay comes first in the tree but carries a higher z-index,
    // so it must still paint on top.
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .child(
            Element::text("BBBB")
                .id("overlay")
                .position(Position::Absolute)
                .left(0)
                .top(0)
                .z_index(10),
        )
        .child(Element::text("AAAAAAAA").id("flow").height(Size::Fixed(1)));

    let buf = render(&root, 20, 5);
    assert_eq!(buffer_text(&buf, 0, 0, 8), "BBBBAAAA");
}

// ============================================================================
// Focus styling
// ============================================================================

#[test]
fn test_focused_style_override() {
    let focused_bg = Rgb::new(10, 20, 30);
    let mut root = Element::text("row")
        .id("row")
        .focusable(true)
        .style_focused(Style::new().background(Color::rgb(10, 20, 30)).bold());

    root.apply_focus(Some("row"));
    let buf = render(&root, 20, 5);
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.bg, focused_bg);
    assert!(cell.style.bold);

    root.apply_focus(None);
    let buf = render(&root, 20, 5);
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.bg, Rgb::new(0, 0, 0));
    assert!(!cell.style.bold);
}

// ============================================================================
// Select end-to-end
// ============================================================================

#[test]
fn test_select_paints_trigger_and_open_list() {
    let options = vec![
        SelectOption::new("January", "01"),
        SelectOption::new("February", "02"),
    ];
    let mut select = SelectState::new("month");
    let mut focus = FocusState::new();
    let props = SelectProps::new(&options, "Select month");

    // First frame: closed; the layout pass gives the widget its anchor.
    let root = select.view(&props);
    let result = layout(&root, Rect::from_size(40, 6));
    select.process_events(&[], &root, &result, &mut focus);

    let mut buf = Buffer::new(40, 6);
    render_to_buffer(&root, &result, &mut buf);
    assert_eq!(buffer_text(&buf, 1, 0, 14), "Select month ▾");
    assert_eq!(buffer_text(&buf, 1, 1, 7), "       ", "no list while closed");

    // Second frame: open; rows hang below the trigger.
    select.open();
    let root = select.view(&props);
    let result = layout(&root, Rect::from_size(40, 6));
    let mut buf = Buffer::new(40, 6);
    render_to_buffer(&root, &result, &mut buf);

    assert_eq!(buffer_text(&buf, 1, 0, 14), "Select month ▴");
    assert_eq!(buffer_text(&buf, 1, 1, 7), "January");
    assert_eq!(buffer_text(&buf, 1, 2, 8), "February");
}
