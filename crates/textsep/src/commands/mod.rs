use crate::config::TextsepConfig;
use crate::model::{ContentItem, Folder};

pub mod clear;
pub mod config;
pub mod copy;
pub mod dedupe;
pub mod edit;
pub mod folders;
pub mod list;
pub mod prefix;
pub mod process;
pub mod remove;
pub mod separator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An item together with its 0-based position in its folder.
#[derive(Debug, Clone)]
pub struct IndexedItem {
    pub index: usize,
    pub item: ContentItem,
}

/// One page of a folder, ready for display.
#[derive(Debug, Clone)]
pub struct ListedPage {
    pub folder: Folder,
    pub items: Vec<IndexedItem>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<ContentItem>,
    pub listed: Option<ListedPage>,
    pub folders: Vec<Folder>,
    pub config: Option<TextsepConfig>,
    pub value: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<ContentItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed(mut self, page: ListedPage) -> Self {
        self.listed = Some(page);
        self
    }

    pub fn with_folders(mut self, folders: Vec<Folder>) -> Self {
        self.folders = folders;
        self
    }

    pub fn with_config(mut self, config: TextsepConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Short single-line excerpt of an item for messages.
pub(crate) fn excerpt(content: &str) -> String {
    const MAX: usize = 40;
    let flat: String = content
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() > MAX {
        let cut: String = flat.chars().take(MAX - 1).collect();
        format!("{}…", cut)
    } else {
        flat
    }
}
