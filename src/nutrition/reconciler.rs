//! Meal total reconciliation
//!
//! Recomputes meal-level totals from the ingredient list instead of trusting
//! the totals an upstream analysis reported.

use serde::Serialize;

use super::units::WeightParsing;
use super::validator::check_ingredient;
use crate::models::{MacroTotals, MealNutrition};

/// Result of reconciling a meal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub is_valid: bool,
    /// Validation messages for every ingredient, in ingredient order
    pub errors: Vec<String>,
    pub corrected_meal: MealNutrition,
}

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reconcile a meal using strict weight parsing
pub fn reconcile_and_recalculate(meal: &MealNutrition) -> Reconciliation {
    reconcile_with(meal, WeightParsing::Strict)
}

/// Validate every ingredient and rebuild the meal totals from them
///
/// Negative ingredient values contribute zero to the totals. Calories are
/// rounded to a whole number and macros to one decimal place; fiber, the
/// ingredient list and the health fields are copied through unchanged.
pub fn reconcile_with(meal: &MealNutrition, mode: WeightParsing) -> Reconciliation {
    let errors: Vec<String> = meal
        .ingredients
        .iter()
        .flat_map(|ingredient| check_ingredient(ingredient, mode))
        .map(|issue| issue.to_string())
        .collect();

    let totals: MacroTotals = meal
        .ingredients
        .iter()
        .map(MacroTotals::clamped_from)
        .sum();

    let corrected_meal = MealNutrition {
        total_calories: totals.calories.round(),
        protein_grams: round_to_tenth(totals.protein),
        carb_grams: round_to_tenth(totals.carbs),
        fat_grams: round_to_tenth(totals.fat),
        ..meal.clone()
    };

    Reconciliation {
        is_valid: errors.is_empty(),
        errors,
        corrected_meal,
    }
}
