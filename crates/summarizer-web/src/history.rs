/// In-memory chat history for the summarizer page
///
/// Holds the drafts archived with "New chat" until the daily retention cutoff.
/// The sidebar only ever sees `entries()` snapshots of this list.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::types::ChatHistoryEntry;
use crate::utils::format::derive_title;
use crate::utils::time::is_expired;

/// An archived draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    /// Archive `text`, or `None` if it is blank.
    pub fn from_draft(text: &str, created_at: DateTime<Utc>) -> Option<Self> {
        let title = derive_title(text)?;
        Some(Self {
            id: Uuid::new_v4(),
            title,
            text: text.to_string(),
            created_at,
        })
    }

    pub fn to_entry(&self) -> ChatHistoryEntry {
        ChatHistoryEntry::new(self.title.clone())
            .with_id(self.id.to_string())
            .with_created_at(self.created_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatHistory {
    sessions: Vec<ChatSession>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session at the top of the list.
    pub fn push(&mut self, session: ChatSession) {
        log::debug!("archiving chat {} ({})", session.id, session.title);
        self.sessions.insert(0, session);
    }

    /// Archive a draft unless it is blank or already in the history.
    pub fn archive(&mut self, text: &str, now: DateTime<Utc>) -> bool {
        if self.sessions.iter().any(|s| s.text == text) {
            return false;
        }
        match ChatSession::from_draft(text, now) {
            Some(session) => {
                self.push(session);
                true
            }
            None => false,
        }
    }

    /// Session at display position `index`.
    pub fn get(&self, index: usize) -> Option<&ChatSession> {
        self.sessions.get(index)
    }

    /// Display-ordered snapshot for the sidebar.
    pub fn entries(&self) -> Vec<ChatHistoryEntry> {
        self.sessions.iter().map(ChatSession::to_entry).collect()
    }

    /// Drop every session past its retention deadline; returns how many went.
    pub fn purge_expired<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|s| !is_expired(s.created_at, now));
        let removed = before - self.sessions.len();
        if removed > 0 {
            log::info!("purged {} expired chat(s) from history", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatKey;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, d, h, 0, 0).unwrap()
    }

    fn session(text: &str, created_at: DateTime<Utc>) -> ChatSession {
        ChatSession::from_draft(text, created_at).unwrap()
    }

    #[test]
    fn test_blank_draft_is_not_archived() {
        assert!(ChatSession::from_draft("   ", at(1, 9)).is_none());
    }

    #[test]
    fn test_push_puts_newest_first() {
        let mut history = ChatHistory::new();
        history.push(session("Weather Report for Monday", at(1, 9)));
        history.push(session("Quarterly earnings call", at(1, 10)));

        let titles: Vec<_> = history.entries().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Quarterly earnings call", "Weather Report for Monday"]);
        assert_eq!(history.get(1).unwrap().text, "Weather Report for Monday");
        assert!(history.get(2).is_none());
    }

    #[test]
    fn test_archive_skips_blank_and_duplicates() {
        let mut history = ChatHistory::new();
        assert!(history.archive("Weather Report for Monday", at(1, 9)));
        assert!(!history.archive("Weather Report for Monday", at(1, 10)));
        assert!(!history.archive("  \n", at(1, 10)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_entries_carry_stable_ids() {
        let mut history = ChatHistory::new();
        let s = session("Weather Report", at(1, 9));
        let id = s.id.to_string();
        history.push(s);

        let entries = history.entries();
        assert_eq!(entries[0].key(0), ChatKey::Id(id));
        assert_eq!(entries[0].created_at, Some(at(1, 9)));
    }

    #[test]
    fn test_purge_expired() {
        let mut history = ChatHistory::new();
        history.push(session("Yesterday's notes", at(1, 9)));
        history.push(session("This morning's notes", at(2, 8)));

        assert_eq!(history.purge_expired(&at(2, 12)), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().title, "This morning's notes");

        assert_eq!(history.purge_expired(&at(2, 13)), 0);
        assert_eq!(history.purge_expired(&at(3, 0)), 1);
        assert!(history.is_empty());
    }
}
