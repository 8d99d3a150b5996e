//! Reducer-style mutation dispatch for the link map.
//!
//! Every mutation is a tagged [`Command`] processed by the pure [`apply`]
//! function, which touches only the in-memory map and returns the side
//! effects the caller still owes (persist the snapshot, append a log entry).

use serde_json::{json, Value};

use crate::models::{EventKind, LinkRecord};
use crate::storage::LinkMap;

/// A single mutation of the link map.
#[derive(Debug, Clone)]
pub enum Command {
    Insert(LinkRecord),
    Remove { code: String },
    Click { code: String },
}

/// Side effect owed after a command has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the full snapshot to the link store.
    Persist,
    /// Append an entry to the action log.
    Log { kind: EventKind, payload: Value },
}

/// Apply a command to the in-memory map, returning the effects to run.
///
/// Effect order is significant: persistence always precedes the log append.
pub fn apply(links: &mut LinkMap, command: Command) -> Vec<Effect> {
    match command {
        Command::Insert(record) => {
            let payload = json!({
                "code": record.code,
                "url": record.url,
                "expiresAt": record.expires_at,
            });
            links.insert(record.code.clone(), record);
            vec![
                Effect::Persist,
                Effect::Log {
                    kind: EventKind::LinkCreated,
                    payload,
                },
            ]
        }
        Command::Remove { code } => {
            // Removing an absent code still persists and logs; deletion is
            // idempotent rather than an error.
            links.remove(&code);
            vec![
                Effect::Persist,
                Effect::Log {
                    kind: EventKind::LinkDeleted,
                    payload: json!({ "code": code }),
                },
            ]
        }
        Command::Click { code } => match links.get_mut(&code) {
            Some(record) => {
                record.clicks += 1;
                vec![
                    Effect::Persist,
                    Effect::Log {
                        kind: EventKind::LinkClick,
                        payload: json!({ "code": code }),
                    },
                ]
            }
            // Unknown codes are a silent no-op; the resolver checks
            // existence on the read path.
            None => Vec::new(),
        },
    }
}
