//! Dashboard aggregation
//!
//! Tallies entries into colour buckets and builds the detail cards for one selected bucket.

use serde::Serialize;

use crate::tracker::{ideal_weight_for, Category, Entry};

/// Entry counts per colour bucket
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CategoryCounts {
    /// Normal
    pub green: usize,
    /// Overweight
    pub orange: usize,
    /// Underweight
    pub red: usize,
}

impl CategoryCounts {
    /// Count every entry in a single pass
    pub fn tally(entries: &[Entry]) -> Self {
        entries.iter().fold(Self::default(), |mut counts, entry| {
            match entry.category {
                Category::Normal => counts.green += 1,
                Category::Overweight => counts.orange += 1,
                Category::Underweight => counts.red += 1,
            }
            counts
        })
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Normal => self.green,
            Category::Overweight => self.orange,
            Category::Underweight => self.red,
        }
    }

    pub fn total(&self) -> usize {
        self.green + self.orange + self.red
    }
}

/// Entries belonging to one bucket, in submission order
pub fn filter_by_category(entries: &[Entry], category: Category) -> Vec<&Entry> {
    entries.iter().filter(|e| e.category == category).collect()
}

/// One dashboard detail card
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerDetail {
    pub name: String,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Ideal weight in kilograms at the category's target BMI
    pub ideal_weight: f64,
    pub category: Category,
    pub advice: &'static str,
}

impl CustomerDetail {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            weight_kg: entry.weight_kg(),
            ideal_weight: ideal_weight_for(entry.category, entry.height),
            category: entry.category,
            advice: entry.category.advice(),
        }
    }
}

/// Detail cards for the selected bucket; nothing selected yields no cards
pub fn details_for(entries: &[Entry], selection: Option<Category>) -> Vec<CustomerDetail> {
    match selection {
        Some(category) => filter_by_category(entries, category)
            .into_iter()
            .map(CustomerDetail::from_entry)
            .collect(),
        None => Vec::new(),
    }
}
