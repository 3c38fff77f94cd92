use crate::config::ConfigKey;
use crate::page::{DisplayRecord, Page};

pub mod add;
pub mod config;
pub mod display;
pub mod edit;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Option<Page<DisplayRecord>>,
    pub config_entries: Vec<(ConfigKey, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, page: Page<DisplayRecord>) -> Self {
        self.listed = Some(page);
        self
    }

    pub fn with_config_entries(mut self, entries: Vec<(ConfigKey, String)>) -> Self {
        self.config_entries = entries;
        self
    }
}
