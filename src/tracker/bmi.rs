//! BMI classification and ideal weight formulas

use serde::{Deserialize, Serialize};

use super::types::Category;

/// Upper bound (exclusive) of the underweight bucket
pub const UNDERWEIGHT_BELOW: f64 = 18.5;

/// Upper bound (inclusive) of the normal bucket
pub const NORMAL_UP_TO: f64 = 24.9;

/// Target BMI of the fixed-target ideal weight formula
pub const IDEAL_BMI: f64 = 22.5;

/// Body mass index: `weight / (height/100)^2`
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value
pub fn classify_bmi(bmi: f64) -> Category {
    if bmi < UNDERWEIGHT_BELOW {
        Category::Underweight
    } else if (UNDERWEIGHT_BELOW..=NORMAL_UP_TO).contains(&bmi) {
        Category::Normal
    } else {
        Category::Overweight
    }
}

/// Classify a measurement
pub fn classify(weight_kg: f64, height_cm: f64) -> Category {
    classify_bmi(bmi(weight_kg, height_cm))
}

/// Ideal weight (kg) at the fixed target BMI of 22.5, rounded to 2 decimals
pub fn ideal_weight(height_cm: f64) -> f64 {
    weight_at_bmi(IDEAL_BMI, height_cm)
}

/// Ideal weight (kg) at the target BMI of the given category, rounded to 2 decimals
pub fn ideal_weight_for(category: Category, height_cm: f64) -> f64 {
    weight_at_bmi(category.target_bmi(), height_cm)
}

fn weight_at_bmi(target: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(target * height_m * height_m)
}

/// Round half away from zero to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Which ideal weight formula the views display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdealWeightRule {
    /// Target BMI depends on the entry's category (18.5 or 24.9)
    #[default]
    CategoryTarget,
    /// Target BMI is always 22.5
    FixedTarget,
}

impl IdealWeightRule {
    /// Ideal weight in kilograms under this rule
    pub fn ideal_weight(&self, category: Category, height_cm: f64) -> f64 {
        match self {
            IdealWeightRule::CategoryTarget => ideal_weight_for(category, height_cm),
            IdealWeightRule::FixedTarget => ideal_weight(height_cm),
        }
    }
}

impl std::str::FromStr for IdealWeightRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category-target" | "category" => Ok(IdealWeightRule::CategoryTarget),
            "fixed-target" | "fixed" => Ok(IdealWeightRule::FixedTarget),
            other => Err(format!("unknown ideal weight rule: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        // 100 cm keeps bmi == weight
        assert_eq!(classify(18.49, 100.0), Category::Underweight);
        assert_eq!(classify(18.5, 100.0), Category::Normal);
        assert_eq!(classify(24.9, 100.0), Category::Normal);
        assert_eq!(classify(24.91, 100.0), Category::Overweight);
    }

    #[test]
    fn test_example_measurements() {
        assert!((bmi(50.0, 170.0) - 17.30).abs() < 0.01);
        assert_eq!(classify(50.0, 170.0), Category::Underweight);

        assert!((bmi(70.0, 170.0) - 24.22).abs() < 0.01);
        assert_eq!(classify(70.0, 170.0), Category::Normal);

        assert!((bmi(95.0, 170.0) - 32.87).abs() < 0.01);
        assert_eq!(classify(95.0, 170.0), Category::Overweight);
    }

    #[test]
    fn test_ideal_weight_fixed_target() {
        assert_eq!(ideal_weight(180.0), 72.9);
        assert_eq!(ideal_weight(160.0), 57.6);
        assert_eq!(ideal_weight(200.0), 90.0);
    }

    #[test]
    fn test_ideal_weight_per_category() {
        assert_eq!(ideal_weight_for(Category::Underweight, 200.0), 74.0);
        assert_eq!(ideal_weight_for(Category::Normal, 200.0), 99.6);
        assert_eq!(ideal_weight_for(Category::Overweight, 200.0), 99.6);
    }

    #[test]
    fn test_rule_selection() {
        let rule = IdealWeightRule::default();
        assert_eq!(rule, IdealWeightRule::CategoryTarget);
        assert_eq!(rule.ideal_weight(Category::Underweight, 200.0), 74.0);
        assert_eq!(
            IdealWeightRule::FixedTarget.ideal_weight(Category::Underweight, 200.0),
            90.0
        );
        assert_eq!("fixed".parse(), Ok(IdealWeightRule::FixedTarget));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(72.9), 72.9);
    }
}
