use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::page::PageId;

/// Payload the router stores on every history entry it writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub page: PageId,
}

impl HistoryEntry {
    pub fn new(page: PageId) -> Self {
        Self { page }
    }

    pub fn encode(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads a payload handed back by the host. Entries written by someone
    /// else, or not written at all, yield `None`.
    pub fn decode(payload: Option<&str>) -> Option<Self> {
        let value: Value = serde_json::from_str(payload?).ok()?;
        let page = value.get("page")?.as_str()?.parse().ok()?;
        Some(Self { page })
    }

    pub fn url(&self) -> String {
        self.page.fragment()
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("no browser window available")]
    NoWindow,

    #[error("host rejected history update: {0}")]
    Host(String),

    #[error("failed to encode history entry: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The host's back/forward stack. The router writes to it; the host reports
/// back/forward moves separately through `PageRouter::on_history_change`.
pub trait History {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload of the entry the host is currently showing.
    fn current_payload(&self) -> Option<String>;

    fn push(&mut self, payload: &str, url: &str) -> Result<(), HistoryError>;

    fn replace(&mut self, payload: &str, url: &str) -> Result<(), HistoryError>;
}

impl<H: History + ?Sized> History for Box<H> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn current_payload(&self) -> Option<String> {
        (**self).current_payload()
    }

    fn push(&mut self, payload: &str, url: &str) -> Result<(), HistoryError> {
        (**self).push(payload, url)
    }

    fn replace(&mut self, payload: &str, url: &str) -> Result<(), HistoryError> {
        (**self).replace(payload, url)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct MemoryEntry {
    payload: Option<String>,
    url: String,
}

/// In-process history stack with browser push/replace/back/forward semantics.
/// Used off the web and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<MemoryEntry>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack holding one entry with no payload, like a freshly opened tab.
    pub fn with_blank_entry(url: impl Into<String>) -> Self {
        Self {
            entries: vec![MemoryEntry {
                payload: None,
                url: url.into(),
            }],
            cursor: 0,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(|e| e.url.as_str())
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Moves one entry back and returns the payload the host would deliver
    /// with the resulting popstate, or `None` at the start of the stack.
    pub fn back(&mut self) -> Option<Option<String>> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].payload.clone())
    }

    pub fn forward(&mut self) -> Option<Option<String>> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].payload.clone())
    }
}

impl History for MemoryHistory {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn current_payload(&self) -> Option<String> {
        self.entries.get(self.cursor)?.payload.clone()
    }

    fn push(&mut self, payload: &str, url: &str) -> Result<(), HistoryError> {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(MemoryEntry {
            payload: Some(payload.to_string()),
            url: url.to_string(),
        });
        self.cursor = self.entries.len() - 1;
        Ok(())
    }

    fn replace(&mut self, payload: &str, url: &str) -> Result<(), HistoryError> {
        let entry = MemoryEntry {
            payload: Some(payload.to_string()),
            url: url.to_string(),
        };
        match self.entries.get_mut(self.cursor) {
            Some(slot) => *slot = entry,
            None => {
                self.entries.push(entry);
                self.cursor = 0;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn entry_encodes_as_page_object() {
        let payload = HistoryEntry::new(PageId::Projects).encode().unwrap();
        assert_eq!(payload, r#"{"page":"projects"}"#);
        assert_eq!(
            HistoryEntry::decode(Some(&payload)),
            Some(HistoryEntry::new(PageId::Projects))
        );
        assert_eq!(HistoryEntry::new(PageId::Projects).url(), "#projects");
    }

    #[test]
    fn decode_ignores_extra_fields() {
        let entry = HistoryEntry::decode(Some(r#"{"page":"about","scroll":120}"#));
        assert_eq!(entry, Some(HistoryEntry::new(PageId::About)));
    }

    #[test_case(None ; "absent")]
    #[test_case(Some("null") ; "null_state")]
    #[test_case(Some("") ; "empty")]
    #[test_case(Some("{not json") ; "invalid_json")]
    #[test_case(Some("{}") ; "missing_page")]
    #[test_case(Some(r#"{"page":3}"#) ; "page_not_a_string")]
    #[test_case(Some(r#"{"page":"blog"}"#) ; "unknown_page")]
    #[test_case(Some(r#""about""#) ; "bare_string")]
    fn decode_rejects_malformed_payloads(payload: Option<&str>) {
        assert_eq!(HistoryEntry::decode(payload), None);
    }

    #[test]
    fn memory_history_starts_empty() {
        let history = MemoryHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.current_payload(), None);
        assert_eq!(history.url(), None);
    }

    #[test]
    fn replace_on_empty_creates_first_entry() {
        let mut history = MemoryHistory::new();
        history.replace("a", "#a").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_payload().as_deref(), Some("a"));
    }

    #[test]
    fn replace_overwrites_current_entry() {
        let mut history = MemoryHistory::with_blank_entry("/");
        history.replace("a", "#a").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.url(), Some("#a"));
    }

    #[test]
    fn back_and_forward_keep_length() {
        let mut history = MemoryHistory::new();
        history.push("a", "#a").unwrap();
        history.push("b", "#b").unwrap();
        assert_eq!(history.back(), Some(Some("a".to_string())));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(Some("b".to_string())));
        assert_eq!(history.forward(), None);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push("a", "#a").unwrap();
        history.push("b", "#b").unwrap();
        history.push("c", "#c").unwrap();
        history.back();
        history.back();
        history.push("d", "#d").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.index(), 1);
        assert_eq!(history.forward(), None);
        assert_eq!(history.current_payload().as_deref(), Some("d"));
    }

    #[test]
    fn back_onto_blank_entry_yields_no_payload() {
        let mut history = MemoryHistory::with_blank_entry("/");
        history.push("a", "#a").unwrap();
        assert_eq!(history.back(), Some(None));
    }

    #[test]
    fn boxed_history_delegates() {
        let mut history: Box<dyn History> = Box::new(MemoryHistory::new());
        history.push("a", "#a").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_payload().as_deref(), Some("a"));
    }
}
