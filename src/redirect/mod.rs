//! Redirect resolution: code lookup, expiry check, click write-through.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::journal::Journal;
use crate::links::{LinkService, ServiceError};
use crate::models::{Clock, EventKind};

/// Terminal outcome of one resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code maps to a live record; navigate to `url`.
    Success { url: String },
    /// No record exists for the code.
    NotFound,
    /// The record exists but its validity window has passed. The record
    /// stays in the store.
    Expired,
}

pub struct RedirectResolver {
    service: Arc<LinkService>,
    journal: Arc<dyn Journal>,
    clock: Arc<dyn Clock>,
}

impl RedirectResolver {
    pub fn new(
        service: Arc<LinkService>,
        journal: Arc<dyn Journal>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            service,
            journal,
            clock,
        }
    }

    /// Resolve a short code. Every attempt is journaled, and each successful
    /// attempt counts a fresh click; nothing is cached between attempts.
    pub fn resolve(&self, code: &str) -> Result<Resolution, ServiceError> {
        let record = match self.service.get(code) {
            Some(record) => record,
            None => {
                self.journal
                    .append(EventKind::RedirectFailNotFound, json!({ "code": code }))?;
                return Ok(Resolution::NotFound);
            }
        };

        if record.is_expired(self.clock.now_millis()) {
            self.journal
                .append(EventKind::RedirectFailExpired, json!({ "code": code }))?;
            return Ok(Resolution::Expired);
        }

        self.service.register_click(code)?;
        self.journal.append(
            EventKind::RedirectSuccess,
            json!({ "code": code, "to": record.url }),
        )?;
        debug!(code = %code, to = %record.url, "resolved short link");
        Ok(Resolution::Success { url: record.url })
    }
}
