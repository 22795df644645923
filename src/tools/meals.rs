//! Meal MCP Tools
//!
//! Validation, reconciliation and request checks exposed to MCP clients.

use serde::Serialize;

use crate::analysis::{
    parse_meal_nutrition, parse_voice_response, MealAnalysisRequest, ParseError, RequestError,
    VoiceEditRequest,
};
use crate::config::Config;
use crate::models::{HealthScoreSummary, Ingredient, MealNutrition};
use crate::nutrition::{reconcile_with, validate_ingredient_with, IngredientValidation, Reconciliation};

/// Response for reconcile_meal_json
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcilePayloadResponse {
    /// Meal description from the voice envelope, when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_edited: Option<bool>,
    #[serde(flatten)]
    pub reconciliation: Reconciliation,
    /// Health score rating, when the analysis included a score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthScoreSummary>,
}

/// Response for check_meal_request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckMealRequestResponse {
    pub request: MealAnalysisRequest,
    pub has_preferences: bool,
    pub description_chars: usize,
}

/// Validate a single ingredient with the configured weight parsing
pub fn validate_ingredient(config: &Config, ingredient: &Ingredient) -> IngredientValidation {
    let result = validate_ingredient_with(ingredient, config.weight_parsing);
    tracing::debug!(
        ingredient = %ingredient.name,
        valid = result.is_valid,
        "Validated ingredient"
    );
    result
}

/// Reconcile a typed meal and log any validation issues
pub fn reconcile_meal(config: &Config, meal: &MealNutrition) -> Reconciliation {
    let result = reconcile_with(meal, config.weight_parsing);
    log_reconciliation(meal, &result);
    result
}

/// Parse a raw analysis payload and reconcile it
///
/// With `envelope` set the payload is the voice endpoint's
/// `{description, nutrition, wasEdited}` wrapper.
pub fn reconcile_meal_json(
    config: &Config,
    payload: &str,
    envelope: bool,
) -> Result<ReconcilePayloadResponse, ParseError> {
    let (meal, description, was_edited) = if envelope {
        let voice = parse_voice_response(payload)?;
        (voice.nutrition, Some(voice.description), Some(voice.was_edited))
    } else {
        (parse_meal_nutrition(payload)?, None, None)
    };

    let reconciliation = reconcile_meal(config, &meal);
    let health = reconciliation
        .corrected_meal
        .health_score
        .map(HealthScoreSummary::from_score);

    Ok(ReconcilePayloadResponse {
        description,
        was_edited,
        reconciliation,
        health,
    })
}

/// Validate and clean an analysis request
pub fn check_meal_request(request: &MealAnalysisRequest) -> Result<CheckMealRequestResponse, RequestError> {
    let cleaned = request.validated()?;
    Ok(CheckMealRequestResponse {
        has_preferences: !cleaned.user_preferences.is_empty(),
        description_chars: cleaned.meal_description.chars().count(),
        request: cleaned,
    })
}

/// Validate and clean a voice analysis or edit request
pub fn check_voice_request(request: &VoiceEditRequest) -> Result<VoiceEditRequest, RequestError> {
    request.validated()
}

/// Rating and colour band for a health score
pub fn rate_health_score(score: f64) -> HealthScoreSummary {
    HealthScoreSummary::from_score(score)
}

fn log_reconciliation(meal: &MealNutrition, result: &Reconciliation) {
    for error in &result.errors {
        tracing::warn!(error = %error, "Ingredient failed validation");
    }

    let corrected = &result.corrected_meal;
    if (corrected.total_calories - meal.total_calories).abs() >= 1.0 {
        tracing::info!(
            reported = meal.total_calories,
            recalculated = corrected.total_calories,
            "Replaced reported meal calories"
        );
    }

    tracing::debug!(
        ingredients = meal.ingredients.len(),
        errors = result.errors.len(),
        "Reconciled meal"
    );
}
