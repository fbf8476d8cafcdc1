//! Entry table rows and the weight-over-time series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tracker::{Category, Entry, IdealWeightRule, WeightUnit};

/// Order in which the table and chart present entries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// As submitted
    #[default]
    Submission,
    /// By entry date; same-date entries keep submission order
    Date,
}

impl std::str::FromStr for EntryOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "submission" | "submitted" => Ok(EntryOrder::Submission),
            "date" => Ok(EntryOrder::Date),
            other => Err(format!("unknown entry order: {}", other)),
        }
    }
}

impl std::fmt::Display for EntryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryOrder::Submission => write!(f, "submission"),
            EntryOrder::Date => write!(f, "date"),
        }
    }
}

/// Borrow entries in the requested order
pub fn ordered(entries: &[Entry], order: EntryOrder) -> Vec<&Entry> {
    let mut rows: Vec<&Entry> = entries.iter().collect();
    if order == EntryOrder::Date {
        rows.sort_by_key(|e| e.date);
    }
    rows
}

/// One rendered row of the entries table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub date: NaiveDate,
    pub weight: f64,
    pub unit: WeightUnit,
    pub height: f64,
    /// Kilograms, under the configured rule
    pub ideal_weight: f64,
    pub category: Category,
    pub row_class: &'static str,
}

impl TableRow {
    pub fn from_entry(entry: &Entry, rule: IdealWeightRule) -> Self {
        Self {
            name: entry.name.clone(),
            date: entry.date,
            weight: entry.weight,
            unit: entry.unit,
            height: entry.height,
            ideal_weight: rule.ideal_weight(entry.category, entry.height),
            category: entry.category,
            row_class: entry.category.row_class(),
        }
    }
}

/// Table rows in the requested order
pub fn table_rows(entries: &[Entry], order: EntryOrder, rule: IdealWeightRule) -> Vec<TableRow> {
    ordered(entries, order)
        .into_iter()
        .map(|e| TableRow::from_entry(e, rule))
        .collect()
}

/// A single chart point
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub weight: f64,
}

/// Weight against date, ready to plot
///
/// Points are connected in the order they appear, so with [`EntryOrder::Submission`] an
/// out-of-order date makes the line double back.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeightSeries {
    pub points: Vec<SeriesPoint>,
    pub unit: WeightUnit,
    /// Lowest loaded weight, `None` when there are no points
    pub y_min: Option<f64>,
    /// Highest loaded weight, `None` when there are no points
    pub y_max: Option<f64>,
}

impl WeightSeries {
    pub fn build(entries: &[Entry], order: EntryOrder, unit: WeightUnit) -> Self {
        let points: Vec<SeriesPoint> = ordered(entries, order)
            .into_iter()
            .map(|e| SeriesPoint {
                date: e.date,
                weight: e.weight_in(unit),
            })
            .collect();

        let (y_min, y_max) = if points.is_empty() {
            (None, None)
        } else {
            let min = points.iter().map(|p| p.weight).fold(f64::INFINITY, f64::min);
            let max = points
                .iter()
                .map(|p| p.weight)
                .fold(f64::NEG_INFINITY, f64::max);
            (Some(min), Some(max))
        };

        Self {
            points,
            unit,
            y_min,
            y_max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Y bounds widened so a flat series still has a visible range
    pub fn display_bounds(&self) -> Option<(f64, f64)> {
        let (min, max) = (self.y_min?, self.y_max?);
        if (max - min).abs() < f64::EPSILON {
            Some((min - 1.0, max + 1.0))
        } else {
            Some((min, max))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, date: (i32, u32, u32), weight: f64, category: Category) -> Entry {
        Entry {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            weight,
            unit: WeightUnit::Kg,
            height: 170.0,
            category,
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("a", (2024, 3, 1), 72.0, Category::Normal),
            entry("b", (2024, 1, 1), 80.0, Category::Overweight),
            entry("c", (2024, 3, 1), 70.0, Category::Normal),
            entry("d", (2024, 2, 1), 75.0, Category::Overweight),
        ]
    }

    #[test]
    fn test_submission_order_is_default() {
        let entries = sample();
        let names: Vec<_> = ordered(&entries, EntryOrder::default())
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_date_order_is_stable() {
        let entries = sample();
        let names: Vec<_> = ordered(&entries, EntryOrder::Date)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_series_bounds() {
        let series = WeightSeries::build(&sample(), EntryOrder::Submission, WeightUnit::Kg);
        assert_eq!(series.points.len(), 4);
        assert_eq!(series.y_min, Some(70.0));
        assert_eq!(series.y_max, Some(80.0));
        assert_eq!(series.points[1].weight, 80.0);
    }

    #[test]
    fn test_series_converts_units() {
        let mut entries = sample();
        entries[0].unit = WeightUnit::Lbs;
        entries[0].weight = 154.0;

        let series = WeightSeries::build(&entries, EntryOrder::Submission, WeightUnit::Kg);
        assert!((series.points[0].weight - 69.853).abs() < 0.001);
        assert!((series.y_min.unwrap() - 69.853).abs() < 0.001);
    }

    #[test]
    fn test_empty_series() {
        let series = WeightSeries::build(&[], EntryOrder::Date, WeightUnit::Kg);
        assert!(series.is_empty());
        assert_eq!(series.display_bounds(), None);
    }

    #[test]
    fn test_flat_series_bounds() {
        let entries = vec![entry("a", (2024, 1, 1), 70.0, Category::Normal)];
        let series = WeightSeries::build(&entries, EntryOrder::Submission, WeightUnit::Kg);
        assert_eq!(series.display_bounds(), Some((69.0, 71.0)));
    }

    #[test]
    fn test_table_rows() {
        let rows = table_rows(&sample(), EntryOrder::Date, IdealWeightRule::CategoryTarget);
        assert_eq!(rows[0].name, "b");
        assert_eq!(rows[0].row_class, "overweight");
        assert_eq!(rows[0].ideal_weight, 71.96);
    }
}
