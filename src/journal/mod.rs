pub mod json_file;
pub mod memory;
pub mod trait_def;

pub use json_file::JsonFileJournal;
pub use memory::MemoryJournal;
pub use trait_def::{Journal, JournalError, JournalResult};
