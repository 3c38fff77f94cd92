//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function returns
//! a `String` so output can be asserted on; the `print_*` wrappers write it to
//! stdout. Color follows `colored`'s own detection (`NO_COLOR`, `CLICOLOR`,
//! tty), while the `*_internal` variants take it explicitly for tests.

use colored::{ColoredString, Colorize};
use phonedir::api::{CmdMessage, MessageLevel};
use phonedir::config::ConfigKey;
use phonedir::model::{Field, Record};
use phonedir::page::{DisplayRecord, Page};

fn use_color() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

fn paint(text: &str, use_color: bool, style: fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_page(page: &Page<DisplayRecord>) -> String {
    render_page_internal(page, use_color())
}

fn render_page_internal(page: &Page<DisplayRecord>, use_color: bool) -> String {
    let mut out = String::new();
    for item in &page.items {
        let id = format!("ID {}", item.index);
        out.push_str(&paint(&id, use_color, |s| s.yellow().bold()));
        out.push('\n');
        out.push_str(&render_record_internal(&item.record, use_color));
    }
    let footer = format!("Page {}/{}", page.number, page.total_pages);
    out.push_str(&paint(&footer, use_color, |s| s.dimmed()));
    out.push('\n');
    out
}

/// One `Label: value` line per field, in field order.
pub fn render_record(record: &Record) -> String {
    render_record_internal(record, use_color())
}

fn render_record_internal(record: &Record, use_color: bool) -> String {
    record
        .fields()
        .map(|(field, value)| {
            let label = format!("{}:", field.label());
            format!("{} {}\n", paint(&label, use_color, |s| s.dimmed()), value)
        })
        .collect()
}

/// The numbered menu shown by `edit`.
pub fn render_field_menu() -> String {
    Field::ALL
        .into_iter()
        .map(|field| format!("{}. {}\n", field.position(), field.label()))
        .collect()
}

pub fn render_config_entries(entries: &[(ConfigKey, String)]) -> String {
    render_config_entries_internal(entries, use_color())
}

fn render_config_entries_internal(entries: &[(ConfigKey, String)], use_color: bool) -> String {
    entries
        .iter()
        .map(|(key, value)| {
            format!(
                "{} = {}\n",
                paint(key.as_str(), use_color, |s| s.bold()),
                value
            )
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => paint(&message.content, use_color, |s| s.normal()),
                MessageLevel::Success => paint(&message.content, use_color, |s| s.green()),
                MessageLevel::Error => paint(&message.content, use_color, |s| s.red()),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// A recoverable failure, shown like an error message.
pub fn print_failure(text: &str) {
    print_messages(&[CmdMessage::error(text)]);
}
