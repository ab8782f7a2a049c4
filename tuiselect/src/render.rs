use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, Style};

/// Paint the tree into the buffer. Elements are painted in z-index order
/// (tree order within the same z), so absolutely positioned overlays with a
/// higher z-index cover the flow content beneath them.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut items = Vec::new();
    collect(root, 0, &mut items);
    items.sort_by_key(|item| item.z_index);

    for item in items {
        paint(item.element, layout, buf);
    }
}

struct RenderItem<'a> {
    element: &'a Element,
    z_index: i16,
}

fn collect<'a>(element: &'a Element, inherited_z: i16, items: &mut Vec<RenderItem<'a>>) {
    // Children inherit their parent's z-index unless they set their own.
    let z_index = if element.z_index != 0 {
        element.z_index
    } else {
        inherited_z
    };

    items.push(RenderItem { element, z_index });

    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, z_index, items);
        }
    }
}

fn paint(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = element.effective_style();

    if let Some(bg) = &style.background {
        fill_rect(buf, *rect, bg.to_rgb());
    }

    render_border(style, *rect, buf);

    if let Content::Text(text) = &element.content {
        render_text(text, element, style, *rect, buf);
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell::new(' ').with_bg(bg).with_fg(cell.fg);
            }
        }
    }
}

fn render_text(text: &str, element: &Element, style: &Style, rect: Rect, buf: &mut Buffer) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    let border = if style.border == Border::None { 0 } else { 1 };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    let visible = truncate_to_width(text, inner.width as usize);

    let mut x = inner.x;
    let y = inner.y;

    for ch in visible.chars() {
        if x >= inner.right() {
            break;
        }

        // Preserve the existing background when the element has none.
        let bg = explicit_bg
            .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));

        buf.set(
            x,
            y,
            Cell::new(ch)
                .with_fg(fg)
                .with_bg(bg)
                .with_style(style.text_style),
        );

        let ch_width = char_width(ch).max(1) as u16;

        // Wide (CJK) chars occupy the next column too; mark it so the diff
        // flush never writes into it.
        if ch_width == 2 && x + 1 < inner.right() {
            let mut continuation = Cell::new(' ')
                .with_fg(fg)
                .with_bg(bg)
                .with_style(style.text_style);
            continuation.wide_continuation = true;
            buf.set(x + 1, y, continuation);
        }

        x += ch_width;
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}
