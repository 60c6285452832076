/// Type definitions for the summarizer web interface
///
/// Shared data structures for history entries, example prompts, and row identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed sample text offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleEntry {
    pub title: &'static str,
    pub text: &'static str,
}

/// One previously created summary session, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ChatHistoryEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Rendering identity: the entry's id, or its position when it has none.
    pub fn key(&self, index: usize) -> ChatKey {
        match &self.id {
            Some(id) => ChatKey::Id(id.clone()),
            None => ChatKey::Position(index),
        }
    }
}

/// Identity of a rendered history row.
///
/// `Position` is only as stable as the host's ordering: it does not survive a
/// reorder or filter of the history between render and activation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatKey {
    Id(String),
    Position(usize),
}
