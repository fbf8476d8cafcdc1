//! # Unlock.fit Weight Tracker
//!
//! Weight and height measurements, classified by BMI category, persisted as whole-list
//! snapshots in a key-value store and summarized on a dashboard.
//!
//! ## Modules
//!
//! - [`tracker`]: Entry types, BMI classification, ideal weight, form validation
//! - [`store`]: Key-value backends and the entry repository
//! - [`chart`]: Table rows and the weight-over-time series
//! - [`dashboard`]: Category counts, filtering and detail cards
//! - `config` / `csv_io`: native-only configuration and CSV import/export
//!
//! ## Quick Start
//!
//! ```rust
//! use unlockfit::dashboard::CategoryCounts;
//! use unlockfit::store::{EntryRepository, MemoryBackend};
//! use unlockfit::tracker::{DraftField, EntryDraft};
//!
//! let repo = EntryRepository::new(MemoryBackend::new());
//!
//! for (name, weight) in [("Ana", "50"), ("Ben", "70"), ("Cy", "95")] {
//!     let draft = EntryDraft::default()
//!         .with(DraftField::Name, name)
//!         .with(DraftField::Date, "2024-01-15")
//!         .with(DraftField::Weight, weight)
//!         .with(DraftField::Height, "170");
//!     repo.submit(&draft).unwrap();
//! }
//!
//! let counts = CategoryCounts::tally(&repo.load().unwrap());
//! assert_eq!((counts.green, counts.orange, counts.red), (1, 1, 1));
//! ```

pub mod chart;
pub mod dashboard;
pub mod store;
pub mod tracker;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod csv_io;

// Re-export top-level types for convenience
pub use tracker::{
    classify, ideal_weight, ideal_weight_for, Category, DraftField, Entry, EntryDraft,
    IdealWeightRule, ValidationError, WeightUnit,
};

pub use store::{
    EntryRepository, FileBackend, KeyValueBackend, MemoryBackend, StoreError, StoreResult,
    SubmitError,
};

pub use chart::{EntryOrder, TableRow, WeightSeries};

pub use dashboard::{details_for, filter_by_category, CategoryCounts, CustomerDetail};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
