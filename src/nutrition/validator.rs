//! Ingredient plausibility checks
//!
//! Flags negative macros, calorie totals that disagree with the Atwater
//! estimate, and energy densities above that of pure fat. Checks only
//! observe; they never modify the ingredient.

use std::fmt;

use serde::Serialize;

use super::reconciler::round_to_tenth;
use super::units::WeightParsing;
use super::weight::weight_in_grams;
use crate::models::Ingredient;

/// Energy per gram of protein (kcal)
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
/// Energy per gram of carbohydrate (kcal)
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
/// Energy per gram of fat (kcal)
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Allowed gap between reported and Atwater-estimated calories
pub const CALORIE_TOLERANCE: f64 = 5.0;

/// Highest plausible energy density: pure fat
pub const MAX_KCAL_PER_GRAM: f64 = FAT_KCAL_PER_GRAM;

/// Ingredient field a negativity check applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroField {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl MacroField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacroField::Calories => "calories",
            MacroField::Protein => "protein",
            MacroField::Carbs => "carbs",
            MacroField::Fat => "fat",
        }
    }
}

/// A single implausible value found on an ingredient
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    Negative {
        ingredient: String,
        field: MacroField,
    },
    CalorieMismatch {
        ingredient: String,
        reported: f64,
        calculated: f64,
    },
    UnrealisticDensity {
        ingredient: String,
        calories_per_gram: f64,
    },
}

impl ValidationIssue {
    /// Short machine-readable kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationIssue::Negative { .. } => "negative_value",
            ValidationIssue::CalorieMismatch { .. } => "energy_mismatch",
            ValidationIssue::UnrealisticDensity { .. } => "energy_density",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Negative { ingredient, field } => {
                write!(f, "Negative {} for {}", field.as_str(), ingredient)
            }
            ValidationIssue::CalorieMismatch {
                ingredient,
                reported,
                calculated,
            } => write!(
                f,
                "Calorie mismatch for {}: reported {}, calculated {:.1}",
                ingredient,
                reported,
                round_to_tenth(*calculated)
            ),
            ValidationIssue::UnrealisticDensity {
                ingredient,
                calories_per_gram,
            } => write!(
                f,
                "Unrealistic calories per gram for {}: {:.1}",
                ingredient,
                round_to_tenth(*calories_per_gram)
            ),
        }
    }
}

/// Outcome of validating one ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl From<Vec<ValidationIssue>> for IngredientValidation {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Calories implied by the macros under the Atwater factors
pub fn atwater_calories(protein_grams: f64, carb_grams: f64, fat_grams: f64) -> f64 {
    protein_grams * PROTEIN_KCAL_PER_GRAM
        + carb_grams * CARB_KCAL_PER_GRAM
        + fat_grams * FAT_KCAL_PER_GRAM
}

/// Collect every issue on an ingredient, in check order
pub fn check_ingredient(ingredient: &Ingredient, mode: WeightParsing) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let name = &ingredient.name;

    let fields = [
        (MacroField::Calories, ingredient.calories),
        (MacroField::Protein, ingredient.protein_grams),
        (MacroField::Carbs, ingredient.carb_grams),
        (MacroField::Fat, ingredient.fat_grams),
    ];
    for (field, value) in fields {
        if value < 0.0 {
            issues.push(ValidationIssue::Negative {
                ingredient: name.clone(),
                field,
            });
        }
    }

    let calculated = atwater_calories(
        ingredient.protein_grams,
        ingredient.carb_grams,
        ingredient.fat_grams,
    );
    if (calculated - ingredient.calories).abs() > CALORIE_TOLERANCE {
        issues.push(ValidationIssue::CalorieMismatch {
            ingredient: name.clone(),
            reported: ingredient.calories,
            calculated,
        });
    }

    let grams = weight_in_grams(&ingredient.weight, mode);
    if grams > 0.0 && ingredient.calories > 0.0 {
        let calories_per_gram = ingredient.calories / grams;
        if calories_per_gram > MAX_KCAL_PER_GRAM {
            issues.push(ValidationIssue::UnrealisticDensity {
                ingredient: name.clone(),
                calories_per_gram,
            });
        }
    }

    issues
}

/// Validate an ingredient using strict weight parsing
pub fn validate_ingredient(ingredient: &Ingredient) -> IngredientValidation {
    validate_ingredient_with(ingredient, WeightParsing::Strict)
}

/// Validate an ingredient with the given weight parsing mode
pub fn validate_ingredient_with(ingredient: &Ingredient, mode: WeightParsing) -> IngredientValidation {
    check_ingredient(ingredient, mode).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(weight: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Ingredient {
        Ingredient::new("Test", weight, calories, protein, carbs, fat)
    }

    #[test]
    fn test_consistent_ingredient_is_valid() {
        // 4*4 + 20*4 + 1*9 = 105
        let result = validate_ingredient(&ingredient("100g", 105.0, 4.0, 20.0, 1.0));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_within_tolerance() {
        let result = validate_ingredient(&ingredient("100g", 110.0, 4.0, 20.0, 1.0));
        assert!(result.is_valid);
    }

    #[test]
    fn test_negative_fields_each_reported() {
        let result = validate_ingredient(&Ingredient::new("Sugar", "10g", -40.0, -1.0, -10.0, -2.0));
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"Negative calories for Sugar".to_string()));
        assert!(result.errors.contains(&"Negative protein for Sugar".to_string()));
        assert!(result.errors.contains(&"Negative carbs for Sugar".to_string()));
        assert!(result.errors.contains(&"Negative fat for Sugar".to_string()));
    }

    #[test]
    fn test_calorie_mismatch() {
        let result = validate_ingredient(&Ingredient::new("Chicken", "", 100.0, 10.0, 0.0, 0.0));
        assert_eq!(result.errors.len(), 1);
        let message = &result.errors[0];
        assert!(message.starts_with("Calorie mismatch for Chicken"));
        assert!(message.contains("100"));
        assert!(message.contains("40.0"));
    }

    #[test]
    fn test_message_values_round_half_up() {
        // 0.25 * 9 = 2.25, same rounding as the corrected totals
        let result = validate_ingredient(&Ingredient::new("Oil", "", 10.0, 0.0, 0.0, 0.25));
        assert_eq!(
            result.errors,
            vec!["Calorie mismatch for Oil: reported 10, calculated 2.3".to_string()]
        );

        // 37 kcal over 4g = 9.25 kcal/g
        let result = validate_ingredient(&Ingredient::new("Lard", "4g", 37.0, 0.0, 0.0, 4.0));
        assert_eq!(
            result.errors,
            vec!["Unrealistic calories per gram for Lard: 9.3".to_string()]
        );
    }

    #[test]
    fn test_unrealistic_density() {
        let result = validate_ingredient(&ingredient("10g", 200.0, 0.0, 0.0, 0.0));
        let density: Vec<&String> = result
            .errors
            .iter()
            .filter(|e| e.contains("Unrealistic calories per gram"))
            .collect();
        assert_eq!(density.len(), 1);
        assert!(density[0].contains("20.0"));
    }

    #[test]
    fn test_density_at_ceiling_is_allowed() {
        // Pure fat: 10g at 90 kcal is exactly 9 kcal/g
        let result = validate_ingredient(&ingredient("10g", 90.0, 0.0, 0.0, 10.0));
        assert!(result.is_valid);
    }

    #[test]
    fn test_density_skipped_without_weight() {
        let issues = check_ingredient(&ingredient("a handful", 200.0, 0.0, 50.0, 0.0), WeightParsing::Strict);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_extended_mode_catches_decimal_weights() {
        let item = ingredient("12.5g", 200.0, 0.0, 50.0, 0.0);
        assert!(validate_ingredient_with(&item, WeightParsing::Strict).is_valid);

        let extended = check_ingredient(&item, WeightParsing::Extended);
        assert_eq!(extended.len(), 1);
        assert_eq!(extended[0].kind(), "energy_density");
        assert_eq!(extended[0].to_string(), "Unrealistic calories per gram for Test: 16.0");
    }

    #[test]
    fn test_checks_accumulate_in_order() {
        let issues = check_ingredient(&ingredient("5g", 300.0, -1.0, 0.0, 0.0), WeightParsing::Strict);
        let kinds: Vec<&str> = issues.iter().map(ValidationIssue::kind).collect();
        assert_eq!(kinds, vec!["negative_value", "energy_mismatch", "energy_density"]);
    }
}
