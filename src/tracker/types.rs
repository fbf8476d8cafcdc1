//! Core data types for the weight tracker
//!
//! - `Entry`: one submitted measurement
//! - `Category`: BMI classification buckets
//! - `WeightUnit`: the unit a weight was entered in

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592_37;

/// BMI classification bucket
///
/// Closed set: anything else found in storage is rejected at load time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
}

impl Category {
    /// All categories in dashboard order: green, orange, red
    pub fn all() -> &'static [Category] {
        &[Category::Normal, Category::Overweight, Category::Underweight]
    }

    /// Dashboard bucket colour
    pub fn color(&self) -> &'static str {
        match self {
            Category::Normal => "green",
            Category::Overweight => "orange",
            Category::Underweight => "red",
        }
    }

    /// CSS class for table rows
    pub fn row_class(&self) -> &'static str {
        match self {
            Category::Underweight => "underweight",
            Category::Normal => "normal",
            Category::Overweight => "overweight",
        }
    }

    /// Target BMI used when computing an ideal weight for this bucket
    pub fn target_bmi(&self) -> f64 {
        match self {
            Category::Underweight => 18.5,
            Category::Normal | Category::Overweight => 24.9,
        }
    }

    /// Canned advice shown on dashboard detail cards
    pub fn advice(&self) -> &'static str {
        match self {
            Category::Underweight => "You should focus on gaining weight in a healthy way.",
            Category::Normal => {
                "Maintain a healthy lifestyle with balanced diet and regular exercise."
            }
            Category::Overweight => {
                "It is recommended to lose weight gradually through a combination of diet and exercise."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
        })
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "underweight" | "red" => Ok(Category::Underweight),
            "normal" | "green" => Ok(Category::Normal),
            "overweight" | "orange" => Ok(Category::Overweight),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// Unit a weight value was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Flip between kilograms and pounds
    pub fn toggle(self) -> Self {
        match self {
            WeightUnit::Kg => WeightUnit::Lbs,
            WeightUnit::Lbs => WeightUnit::Kg,
        }
    }

    /// Convert a value in this unit to kilograms
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }

    /// Convert a value in kilograms to this unit
    pub fn from_kg(self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / KG_PER_LB,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(WeightUnit::Kg),
            "lb" | "lbs" | "pounds" => Ok(WeightUnit::Lbs),
            other => Err(format!("unknown weight unit: {}", other)),
        }
    }
}

/// One submitted measurement record
///
/// Created only through [`EntryDraft::validate`](super::EntryDraft::validate), so the category
/// always agrees with the weight and height it was derived from. Entries are never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub name: String,
    pub date: NaiveDate,
    /// Weight as entered, in `unit`
    pub weight: f64,
    #[serde(default)]
    pub unit: WeightUnit,
    /// Height in centimeters
    pub height: f64,
    pub category: Category,
}

impl Entry {
    /// Weight normalized to kilograms
    pub fn weight_kg(&self) -> f64 {
        self.unit.to_kg(self.weight)
    }

    /// Weight converted to an arbitrary display unit
    pub fn weight_in(&self, unit: WeightUnit) -> f64 {
        unit.from_kg(self.weight_kg())
    }

    /// Body mass index computed from the stored measurement
    pub fn bmi(&self) -> f64 {
        super::bmi::bmi(self.weight_kg(), self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(weight: f64, unit: WeightUnit) -> Entry {
        Entry {
            name: "ana".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            weight,
            unit,
            height: 170.0,
            category: Category::Normal,
        }
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(Category::Normal.color(), "green");
        assert_eq!(Category::Overweight.color(), "orange");
        assert_eq!(Category::Underweight.color(), "red");
    }

    #[test]
    fn test_dashboard_order() {
        let colors: Vec<_> = Category::all().iter().map(|c| c.color()).collect();
        assert_eq!(colors, ["green", "orange", "red"]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Normal".parse::<Category>(), Ok(Category::Normal));
        assert_eq!("orange".parse::<Category>(), Ok(Category::Overweight));
        assert!("Obese".parse::<Category>().is_err());
    }

    #[test]
    fn test_unit_conversion() {
        let e = entry(100.0, WeightUnit::Lbs);
        assert!((e.weight_kg() - 45.359237).abs() < 1e-9);
        assert!((e.weight_in(WeightUnit::Lbs) - 100.0).abs() < 1e-9);
        assert_eq!(WeightUnit::Kg.toggle(), WeightUnit::Lbs);
        assert_eq!(WeightUnit::Lbs.toggle(), WeightUnit::Kg);
    }

    #[test]
    fn test_entry_bmi_uses_kilograms() {
        let kg = entry(72.25, WeightUnit::Kg);
        assert!((kg.bmi() - 25.0).abs() < 1e-9);

        let lbs = entry(72.25 / KG_PER_LB, WeightUnit::Lbs);
        assert!((lbs.bmi() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_entry_serialization() {
        let e = entry(70.0, WeightUnit::Kg);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"date\":\"2024-01-15\""));
        assert!(json.contains("\"category\":\"Normal\""));
        assert!(json.contains("\"unit\":\"kg\""));

        let restored: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, restored);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"name":"x","date":"2024-01-15","weight":70,"unit":"kg","height":170,"category":"Obese"}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }
}
