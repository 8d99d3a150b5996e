pub mod commands;
pub mod validate;

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::journal::{Journal, JournalError};
use crate::models::{Clock, CreateLinkRequest, LinkRecord};
use crate::storage::{LinkMap, LinkStore, StoreError};

use commands::{apply, Command, Effect};
use validate::{generate_code, is_valid_code, is_valid_url, parse_validity_minutes};

/// Maximum number of rows processed per creation batch.
pub const MAX_BATCH: usize = 5;

/// Generation attempts before a batch gives up on finding a free code.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Failure writing a mutation through to the store or the action log.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Journal(#[from] JournalError),
}

/// Why a creation batch was rejected. Row indices are zero-based positions
/// in the submitted batch, for inline reporting.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("row {row}: not a valid absolute URL")]
    InvalidUrl { row: usize },
    #[error("row {row}: codes may only contain letters, digits and hyphens")]
    InvalidCode { row: usize },
    #[error("row {row}: code '{code}' is already taken")]
    DuplicateCode { row: usize, code: String },
    #[error("row {row}: could not find a free generated code")]
    CodeSpaceExhausted { row: usize },
    #[error("row {row}: validity must be a positive number of minutes")]
    InvalidValidity { row: usize },
    #[error("nothing to create")]
    NothingToCreate,
    #[error(transparent)]
    Write(#[from] ServiceError),
}

/// Orchestrates the link record lifecycle over the injected store, action
/// log, and clock.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    journal: Arc<dyn Journal>,
    clock: Arc<dyn Clock>,
}

impl LinkService {
    pub fn new(
        store: Arc<dyn LinkStore>,
        journal: Arc<dyn Journal>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            journal,
            clock,
        }
    }

    /// Validate and create a batch of links, returning how many were made.
    ///
    /// The whole batch is validated before anything is written; the first
    /// invalid row aborts it with the store untouched. Rows with no URL are
    /// skipped, and a batch that stages nothing fails outright.
    pub fn create(&self, requests: &[CreateLinkRequest]) -> Result<usize, CreateError> {
        let mut links = self.store.load();
        let mut staged: Vec<LinkRecord> = Vec::new();

        for (row, request) in requests.iter().take(MAX_BATCH).enumerate() {
            let url = request.url.trim();
            if url.is_empty() {
                continue;
            }
            if !is_valid_url(url) {
                return Err(CreateError::InvalidUrl { row });
            }

            let custom = request
                .custom_code
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty());

            let code = match custom {
                Some(code) => {
                    if !is_valid_code(code) {
                        return Err(CreateError::InvalidCode { row });
                    }
                    // Custom codes are never silently replaced on collision.
                    if is_taken(&links, &staged, code) {
                        return Err(CreateError::DuplicateCode {
                            row,
                            code: code.to_string(),
                        });
                    }
                    code.to_string()
                }
                None => pick_free_code(&links, &staged)
                    .ok_or(CreateError::CodeSpaceExhausted { row })?,
            };

            let minutes = parse_validity_minutes(request.validity_minutes.as_deref())
                .ok_or(CreateError::InvalidValidity { row })?;

            let created_at = self.clock.now_millis();
            staged.push(LinkRecord {
                code,
                url: url.to_string(),
                created_at,
                expires_at: created_at.saturating_add(minutes.saturating_mul(60_000)),
                clicks: 0,
            });
        }

        if staged.is_empty() {
            return Err(CreateError::NothingToCreate);
        }

        let created = staged.len();
        for record in staged {
            debug!(code = %record.code, url = %record.url, "creating link");
            self.run(&mut links, Command::Insert(record))
                .map_err(CreateError::Write)?;
        }
        Ok(created)
    }

    /// Delete a link. Removing an absent code is an idempotent no-op that is
    /// still journaled.
    pub fn delete(&self, code: &str) -> Result<(), ServiceError> {
        let mut links = self.store.load();
        self.run(
            &mut links,
            Command::Remove {
                code: code.to_string(),
            },
        )
    }

    /// Count a successful resolution against a link. Unknown codes are a
    /// silent no-op.
    pub fn register_click(&self, code: &str) -> Result<(), ServiceError> {
        let mut links = self.store.load();
        self.run(
            &mut links,
            Command::Click {
                code: code.to_string(),
            },
        )
    }

    /// Point lookup through a fresh snapshot.
    pub fn get(&self, code: &str) -> Option<LinkRecord> {
        self.store.load().get(code).cloned()
    }

    /// All records, newest first.
    pub fn list(&self) -> Vec<LinkRecord> {
        let mut records: Vec<LinkRecord> = self.store.load().into_values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Apply a command and execute its effects in order: store mutation,
    /// then full persistence, then the log append.
    fn run(&self, links: &mut LinkMap, command: Command) -> Result<(), ServiceError> {
        for effect in apply(links, command) {
            match effect {
                Effect::Persist => self.store.save(links)?,
                Effect::Log { kind, payload } => {
                    self.journal.append(kind, payload)?;
                }
            }
        }
        Ok(())
    }
}

fn is_taken(links: &LinkMap, staged: &[LinkRecord], code: &str) -> bool {
    links.contains_key(code) || staged.iter().any(|record| record.code == code)
}

fn pick_free_code(links: &LinkMap, staged: &[LinkRecord]) -> Option<String> {
    (0..MAX_CODE_ATTEMPTS)
        .map(|_| generate_code())
        .find(|code| !is_taken(links, staged, code))
}
