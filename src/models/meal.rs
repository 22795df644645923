//! Meal nutrition model
//!
//! Aggregate nutrition record for one logged meal.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::Ingredient;

/// Priority of a suggested improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[serde(alias = "high")]
    High,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
}

/// A suggested change to make a meal healthier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Improvement {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Nutrition totals and ingredient breakdown for a meal
///
/// Accepts both the camelCase record shape and the snake_case shape the
/// analysis model returns (`total_calories`, `protein_content`, ...).
/// Missing numbers default to 0, missing lists to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealNutrition {
    #[serde(default, alias = "total_calories")]
    pub total_calories: f64,
    #[serde(default, alias = "protein_content", alias = "protein_grams")]
    pub protein_grams: f64,
    #[serde(default, alias = "carbohydrate_content", alias = "carb_grams")]
    pub carb_grams: f64,
    #[serde(default, alias = "fat_content", alias = "fat_grams")]
    pub fat_grams: f64,
    #[serde(default, alias = "fiber_content", alias = "fiber_grams")]
    pub fiber_grams: f64,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Health score from 0 to 100, when the analysis provided one
    #[serde(default, alias = "score", alias = "health_score", skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, alias = "health_notes", skip_serializing_if = "Vec::is_empty")]
    pub health_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub improvements: Vec<Improvement>,
}

impl MealNutrition {
    /// Meal with the given ingredients and all totals at zero
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients,
            ..Self::default()
        }
    }
}
