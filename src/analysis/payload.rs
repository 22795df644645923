//! Meal analysis payload parsing
//!
//! Converts the raw JSON text returned by a meal analysis model into a
//! typed `MealNutrition`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MealNutrition;

/// Payload parsing errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No analysis generated")]
    Empty,

    #[error("Failed to parse nutrition data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Envelope returned by the voice analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceAnalysis {
    #[serde(default)]
    pub description: String,
    pub nutrition: MealNutrition,
    #[serde(default, alias = "was_edited")]
    pub was_edited: bool,
}

/// Parse a bare nutrition object
pub fn parse_meal_nutrition(json: &str) -> Result<MealNutrition, ParseError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Parse the `{description, nutrition, wasEdited}` envelope
pub fn parse_voice_response(json: &str) -> Result<VoiceAnalysis, ParseError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}
