//! Ingredient model
//!
//! One food component of a meal as proposed by an upstream analysis.

use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};

/// A single ingredient with its reported weight and macros
///
/// Field aliases accept the snake_case shape produced by the meal analysis
/// model (`ingredient`, `protein`, `carbohydrates`, `fat`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Display label
    #[serde(default, alias = "ingredient")]
    pub name: String,
    /// Quantity with embedded unit, e.g. "100g"
    #[serde(default, deserialize_with = "weight_text")]
    #[schemars(with = "String")]
    pub weight: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default, alias = "protein", alias = "protein_grams")]
    pub protein_grams: f64,
    #[serde(default, alias = "carbohydrates", alias = "carbs", alias = "carb_grams")]
    pub carb_grams: f64,
    #[serde(default, alias = "fat", alias = "fat_grams")]
    pub fat_grams: f64,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        weight: impl Into<String>,
        calories: f64,
        protein_grams: f64,
        carb_grams: f64,
        fat_grams: f64,
    ) -> Self {
        Self {
            name: name.into(),
            weight: weight.into(),
            calories,
            protein_grams,
            carb_grams,
            fat_grams,
        }
    }
}

/// Accept a string ("100g"), a bare number read as grams, or null
fn weight_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WeightValue {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<WeightValue>::deserialize(deserializer)? {
        Some(WeightValue::Text(s)) => s,
        Some(WeightValue::Number(n)) => format!("{}g", n),
        None => String::new(),
    })
}
