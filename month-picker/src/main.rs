//! Month picker: a minimal host for the tuiselect dropdown.
//!
//! Owns the single piece of durable state (the selected month value),
//! supplies a fixed option list, and derives the selected option by value
//! lookup each frame. Click the trigger or press Enter on it to open,
//! pick a month, `q` quits.

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tuiselect::{
    Border, Color, Edges, Element, FocusState, SelectEvent, SelectOption, SelectProps,
    SelectState, Size, Style, Terminal,
};

fn months() -> Vec<SelectOption> {
    [
        ("January", "01"),
        ("February", "02"),
        ("March", "03"),
        ("April", "04"),
        ("May", "05"),
        ("June", "06"),
        ("July", "07"),
        ("August", "08"),
        ("September", "09"),
        ("October", "10"),
        ("November", "11"),
        ("December", "12"),
    ]
    .into_iter()
    .map(|(title, value)| SelectOption::new(title, value))
    .collect()
}

fn main() -> io::Result<()> {
    if let Ok(log_file) = File::create("month-picker.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let months = months();
    let mut month: Option<String> = None;
    let mut select = SelectState::new("month");
    let mut focus = FocusState::new();
    let mut term = Terminal::new()?;

    focus.focus(select.trigger_id());

    loop {
        // A value missing from the list silently renders as the placeholder.
        let selected = month
            .as_deref()
            .and_then(|value| months.iter().find(|m| m.value == value));
        let props = SelectProps::new(&months, "Select month").selected(selected);

        let mut root = page(&mut select, &props, selected);
        root.apply_focus(focus.focused());

        term.render(&root)?;

        let raw = term.poll(Some(Duration::from_millis(100)))?;

        for event in &raw {
            if let CrosstermEvent::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let quit = key.code == KeyCode::Char('q')
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL));
                if quit {
                    return Ok(());
                }
            }
        }

        let events = focus.process_events(&raw, &root, term.layout());
        for event in select.process_events(&events, &root, term.layout(), &mut focus) {
            match event {
                SelectEvent::Change { value } => {
                    log::info!("month changed to {value}");
                    month = Some(value);
                }
                SelectEvent::Close => log::debug!("dropdown dismissed"),
            }
        }
    }
}

fn page(
    select: &mut SelectState,
    props: &SelectProps,
    selected: Option<&SelectOption>,
) -> Element {
    let chosen = selected
        .map(|m| m.title.clone())
        .unwrap_or_else(|| "(none)".to_string());

    Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .gap(1)
        .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
        .child(
            Element::text("Month picker")
                .id("title")
                .style(Style::new().bold()),
        )
        .child(
            Element::text("Click or Tab+Enter to open, q to quit")
                .id("help")
                .style(Style::new().dim()),
        )
        .child(
            Element::col()
                .id("panel")
                .width(Size::Fixed(30))
                .height(Size::Fixed(3))
                .style(Style::new().border(Border::Rounded))
                .child(select.view(props)),
        )
        .child(Element::text(format!("Selected: {chosen}")).id("chosen"))
}
