use serde::{Deserialize, Serialize};

/// A stored short link mapping.
///
/// Serialized camelCase to match the persisted blob layout. `created_at` and
/// `expires_at` are immutable after creation; `clicks` is only ever bumped by
/// a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub code: String,
    pub url: String,
    pub created_at: i64,
    pub expires_at: i64,
    pub clicks: u64,
}

impl LinkRecord {
    /// Whether the record is past its validity window at the given instant.
    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis > self.expires_at
    }
}

/// One row of a creation batch, as submitted by the user.
///
/// Fields carry raw form input; empty strings mean "not supplied".
#[derive(Debug, Clone, Default)]
pub struct CreateLinkRequest {
    pub url: String,
    pub custom_code: Option<String>,
    pub validity_minutes: Option<String>,
}
