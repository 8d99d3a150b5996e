pub mod event;
pub mod link;

pub use event::{EventKind, LogEntry};
pub use link::{CreateLinkRequest, LinkRecord};

use chrono::Utc;

/// Time source abstraction so creation and expiry logic stay testable.
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Production clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
