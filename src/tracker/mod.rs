//! Weight tracker domain
//!
//! - **types**: `Entry`, `Category`, `WeightUnit`
//! - **bmi**: BMI classification and the ideal weight formulas
//! - **validate**: the form draft and its parse-and-validate step
//!
//! # Example
//!
//! ```rust
//! use unlockfit::tracker::{Category, DraftField, EntryDraft};
//!
//! let entry = EntryDraft::default()
//!     .with(DraftField::Name, "Ana")
//!     .with(DraftField::Date, "2024-01-15")
//!     .with(DraftField::Weight, "95")
//!     .with(DraftField::Height, "170")
//!     .validate()
//!     .unwrap();
//!
//! assert_eq!(entry.category, Category::Overweight);
//! ```

pub mod bmi;
pub mod types;
pub mod validate;

pub use bmi::{bmi, classify, classify_bmi, ideal_weight, ideal_weight_for, IdealWeightRule};
pub use types::{Category, Entry, WeightUnit};
pub use validate::{DraftField, EntryDraft, ValidationError, ValidationResult};
