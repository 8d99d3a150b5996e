use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Fixed enumeration of action log event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    LinkCreated,
    LinkDeleted,
    LinkClick,
    RedirectFailNotFound,
    RedirectFailExpired,
    RedirectSuccess,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::LinkCreated => "LINK_CREATED",
            EventKind::LinkDeleted => "LINK_DELETED",
            EventKind::LinkClick => "LINK_CLICK",
            EventKind::RedirectFailNotFound => "REDIRECT_FAIL_NOT_FOUND",
            EventKind::RedirectFailExpired => "REDIRECT_FAIL_EXPIRED",
            EventKind::RedirectSuccess => "REDIRECT_SUCCESS",
        }
    }
}

/// One append-only action log entry. Entries are never mutated after append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub ts: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub payload: Value,
}

impl LogEntry {
    /// Build a new entry with a fresh id and the current timestamp.
    pub fn new(kind: EventKind, payload: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now().to_rfc3339(),
            kind,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_kind_round_trips_screaming_snake_case() {
        let json = serde_json::to_string(&EventKind::RedirectFailNotFound).unwrap();
        assert_eq!(json, "\"REDIRECT_FAIL_NOT_FOUND\"");

        let kind: EventKind = serde_json::from_str("\"LINK_CLICK\"").unwrap();
        assert_eq!(kind, EventKind::LinkClick);
    }

    #[test]
    fn log_entry_kind_serializes_under_type_key() {
        let entry = LogEntry::new(EventKind::LinkCreated, json!({ "code": "promo" }));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "LINK_CREATED");
        assert_eq!(value["payload"]["code"], "promo");
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn fresh_entries_get_distinct_ids() {
        let a = LogEntry::new(EventKind::LinkDeleted, json!({}));
        let b = LogEntry::new(EventKind::LinkDeleted, json!({}));
        assert_ne!(a.id, b.id);
    }
}
