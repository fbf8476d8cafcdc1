//! UI Components
//!
//! Reusable Leptos components for the tracker pages.

pub mod entry_table;
pub mod header;
pub mod toast;
pub mod weight_chart;

pub use entry_table::EntryTable;
pub use header::Header;
pub use toast::Toast;
pub use weight_chart::WeightChart;
