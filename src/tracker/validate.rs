//! Form draft and the parse-and-validate step
//!
//! The draft holds exactly what the user typed. Nothing reaches classification without going
//! through [`EntryDraft::validate`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bmi::{bmi, classify_bmi};
use super::types::{Entry, WeightUnit};

/// Date format accepted by the form (the value of an HTML date input)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a draft cannot become an entry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Name is required")]
    EmptyName,

    #[error("Date is required")]
    MissingDate,

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("Weight and height do not give a usable BMI")]
    ImpossibleMeasurement,
}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The in-progress, unsubmitted form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EntryDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub unit: WeightUnit,
}

/// Form fields addressable by name, the way an input's `name` attribute addresses them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Date,
    Weight,
    Height,
}

impl std::str::FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(DraftField::Name),
            "date" => Ok(DraftField::Date),
            "weight" => Ok(DraftField::Weight),
            "height" => Ok(DraftField::Height),
            other => Err(format!("unknown form field: {}", other)),
        }
    }
}

impl EntryDraft {
    /// Empty draft keeping the given unit selection
    pub fn cleared(unit: WeightUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Set one field from raw input text
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Date => self.date = value,
            DraftField::Weight => self.weight = value,
            DraftField::Height => self.height = value,
        }
    }

    /// Builder method: set a field
    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder method: set the unit
    pub fn unit(mut self, unit: WeightUnit) -> Self {
        self.unit = unit;
        self
    }

    /// True when no text field has been filled in
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.date, &self.weight, &self.height]
            .iter()
            .all(|s| s.trim().is_empty())
    }

    /// Parse and validate into an entry, deriving the category
    pub fn validate(&self) -> ValidationResult<Entry> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let date = parse_date(&self.date)?;
        let weight = parse_positive("Weight", &self.weight)?;
        let height = parse_positive("Height", &self.height)?;

        let bmi = bmi(self.unit.to_kg(weight), height);
        if !bmi.is_finite() {
            return Err(ValidationError::ImpossibleMeasurement);
        }

        Ok(Entry {
            name: name.to_string(),
            date,
            weight,
            unit: self.unit,
            height,
            category: classify_bmi(bmi),
        })
    }
}

/// Parse a form date
pub fn parse_date(raw: &str) -> ValidationResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Parse a strictly positive, finite number
pub fn parse_positive(field: &'static str, raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let value: f64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Category;

    fn draft(weight: &str, height: &str) -> EntryDraft {
        EntryDraft::default()
            .with(DraftField::Name, "Ana")
            .with(DraftField::Date, "2024-01-15")
            .with(DraftField::Weight, weight)
            .with(DraftField::Height, height)
    }

    #[test]
    fn test_valid_draft() {
        let entry = draft("70", "170").validate().unwrap();
        assert_eq!(entry.name, "Ana");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(entry.weight, 70.0);
        assert_eq!(entry.height, 170.0);
        assert_eq!(entry.category, Category::Normal);
    }

    #[test]
    fn test_pounds_are_normalized_for_classification() {
        // 154 lbs is about 69.9 kg
        let entry = draft("154", "170").unit(WeightUnit::Lbs).validate().unwrap();
        assert_eq!(entry.unit, WeightUnit::Lbs);
        assert_eq!(entry.weight, 154.0);
        assert_eq!(entry.category, Category::Normal);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut d = draft("70", "170");
        d.name = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::EmptyName));

        let d = draft("70", "170").with(DraftField::Date, "15/01/2024");
        assert!(matches!(d.validate(), Err(ValidationError::InvalidDate(_))));

        assert_eq!(
            draft("seventy", "170").validate(),
            Err(ValidationError::NotANumber {
                field: "Weight",
                value: "seventy".to_string()
            })
        );
        assert_eq!(
            draft("70", "0").validate(),
            Err(ValidationError::NotPositive { field: "Height" })
        );
        assert_eq!(
            draft("-5", "170").validate(),
            Err(ValidationError::NotPositive { field: "Weight" })
        );
        assert!(matches!(
            draft("NaN", "170").validate(),
            Err(ValidationError::NotANumber { .. })
        ));
        assert_eq!(
            draft("", "170").validate(),
            Err(ValidationError::Missing { field: "Weight" })
        );
    }

    #[test]
    fn test_rejects_measurement_without_finite_bmi() {
        assert_eq!(
            draft("70", "1e-200").validate(),
            Err(ValidationError::ImpossibleMeasurement)
        );
        assert_eq!(
            draft("1e308", "0.001").validate(),
            Err(ValidationError::ImpossibleMeasurement)
        );
        // Tiny but representable values still classify
        assert_eq!(
            draft("70", "0.0001").validate().unwrap().category,
            Category::Overweight
        );
    }

    #[test]
    fn test_cleared_keeps_unit() {
        let d = draft("70", "170").unit(WeightUnit::Lbs);
        let cleared = EntryDraft::cleared(d.unit);
        assert!(cleared.is_blank());
        assert_eq!(cleared.unit, WeightUnit::Lbs);
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::NotPositive { field: "Height" };
        assert_eq!(err.to_string(), "Height must be greater than zero");
    }
}
