//! Entry persistence
//!
//! - **backend**: `KeyValueBackend` trait with memory and directory implementations
//! - **repository**: `EntryRepository`, the single owner of the persisted payloads
//! - **error**: Error types
//!
//! # Layout
//!
//! ```text
//! weightEntries  → JSON array of every submitted Entry (full snapshot per write)
//! weightData     → JSON object of the unsubmitted form draft
//! ```

pub mod backend;
pub mod error;
pub mod repository;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::{StoreError, StoreResult, SubmitError};
pub use repository::{EntryRepository, DRAFT_KEY, ENTRIES_KEY};
