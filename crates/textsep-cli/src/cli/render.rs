//! Turns `CmdResult` pieces into terminal text.
//!
//! Every `render_*` function returns a `String` so layouts can be tested
//! without a terminal; `commands.rs` does the printing.

use super::styles;
use chrono::{DateTime, Utc};
use textsep::commands::{CmdMessage, ListedPage, MessageLevel};
use textsep::config::{TextsepConfig, CONFIG_KEYS};
use textsep::model::{ContentItem, Folder};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const INDEX_WIDTH: usize = 6;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        out.push_str(&style.apply_to(&message.content).to_string());
        out.push('\n');
    }
    out
}

/// One page of a folder: heading, one line per item, and a page footer when
/// there is more than one page.
pub fn render_page(page: &ListedPage) -> String {
    let mut out = format!(
        "{} {}\n",
        page.folder.icon,
        styles::HEADING.apply_to(format!("{} ({})", page.folder.label, page.total_items))
    );

    for entry in &page.items {
        let idx = format!("{:>4}. ", entry.index + 1);
        let time = format_time_ago(entry.item.timestamp);
        let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH + TIME_WIDTH);
        let text = truncate_to_width(&single_line(&entry.item.content), available);
        let padding = available.saturating_sub(text.width());

        out.push_str(&format!(
            "{}{}{} {}\n",
            styles::INDEX.apply_to(idx),
            text,
            " ".repeat(padding),
            styles::TIME.apply_to(time)
        ));
    }

    if page.total_pages > 1 {
        out.push_str(&format!(
            "{}\n",
            styles::FAINT.apply_to(format!("Page {} of {}", page.page, page.total_pages))
        ));
    }
    out
}

/// Items found by `detect`, with their labels and full content.
pub fn render_detected(items: &[ContentItem]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{} {}\n",
            styles::INDEX.apply_to(format!("{:>4}.", i + 1)),
            styles::KIND.apply_to(&item.kind)
        ));
        for line in item.content.lines() {
            out.push_str(&format!("      {}\n", line));
        }
    }
    out
}

pub fn render_folders(folders: &[Folder]) -> String {
    let label_width = folders
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for folder in folders {
        let padding = label_width.saturating_sub(folder.label.width());
        out.push_str(&format!(
            "{} {}{}  {:>4}  {}\n",
            folder.icon,
            folder.label,
            " ".repeat(padding),
            folder.count,
            styles::FAINT.apply_to(&folder.id)
        ));
    }
    out
}

pub fn render_config(config: &TextsepConfig) -> String {
    let mut out = String::new();
    for key in CONFIG_KEYS {
        if let Ok(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

fn single_line(content: &str) -> String {
    content.lines().collect::<Vec<_>>().join(" ⏎ ")
}

fn truncate_to_width(text: &str, limit: usize) -> String {
    if text.width() <= limit {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = limit.saturating_sub(1);
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let text = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", text, width = TIME_WIDTH - 1)
}
