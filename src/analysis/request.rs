//! Inbound meal analysis requests
//!
//! Length limits and cleanup applied before a meal description is handed to
//! an analysis model.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserPreferences;

/// Longest accepted meal name, in characters
pub const MAX_MEAL_NAME_CHARS: usize = 200;
/// Longest accepted meal description, in characters
pub const MAX_MEAL_DESCRIPTION_CHARS: usize = 1000;

/// Request validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("No meal description provided")]
    MissingDescription,

    #[error("Original meal is required when editing")]
    MissingOriginalMeal,

    #[error("{field} must be between {min} and {max} characters (got {actual})")]
    FieldLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Trim and flatten a spoken or typed description onto one line
pub fn clean_description(description: &str) -> String {
    description.trim().replace("\r\n", " ").replace('\n', " ")
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), RequestError> {
    let actual = value.chars().count();
    if actual == 0 || actual > max {
        return Err(RequestError::FieldLength {
            field,
            min: 1,
            max,
            actual,
        });
    }
    Ok(())
}

/// Request to analyse a named meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysisRequest {
    #[serde(alias = "meal_name")]
    pub meal_name: String,
    #[serde(alias = "meal_description")]
    pub meal_description: String,
    #[serde(default, alias = "user_preferences")]
    pub user_preferences: UserPreferences,
}

impl MealAnalysisRequest {
    /// Cleaned copy of the request, or the first limit it breaks
    pub fn validated(&self) -> Result<Self, RequestError> {
        let meal_name = self.meal_name.trim().to_string();
        let meal_description = clean_description(&self.meal_description);

        check_length("mealName", &meal_name, MAX_MEAL_NAME_CHARS)?;
        check_length("mealDescription", &meal_description, MAX_MEAL_DESCRIPTION_CHARS)?;

        Ok(Self {
            meal_name,
            meal_description,
            user_preferences: self.user_preferences.normalized(),
        })
    }
}

/// Request to analyse a new spoken meal or edit an existing analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoiceEditRequest {
    #[serde(default, alias = "meal_description")]
    pub meal_description: Option<String>,
    #[serde(default, alias = "is_editing")]
    pub is_editing: bool,
    /// Previous analysis, serialized, when editing
    #[serde(default, alias = "original_meal")]
    pub original_meal: Option<String>,
}

impl VoiceEditRequest {
    pub fn validated(&self) -> Result<Self, RequestError> {
        let description = self
            .meal_description
            .as_deref()
            .map(clean_description)
            .filter(|d| !d.is_empty())
            .ok_or(RequestError::MissingDescription)?;

        let original_meal = self
            .original_meal
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        if self.is_editing && original_meal.is_none() {
            return Err(RequestError::MissingOriginalMeal);
        }

        Ok(Self {
            meal_description: Some(description),
            is_editing: self.is_editing,
            original_meal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_request(name: &str, description: &str) -> MealAnalysisRequest {
        MealAnalysisRequest {
            meal_name: name.to_string(),
            meal_description: description.to_string(),
            user_preferences: UserPreferences::default(),
        }
    }

    #[test]
    fn test_clean_description() {
        assert_eq!(clean_description("  two eggs\non toast\r\nwith butter "), "two eggs on toast with butter");
    }

    #[test]
    fn test_valid_analysis_request() {
        let request = analysis_request(" Breakfast ", "Oats\nwith honey");
        let cleaned = request.validated().unwrap();
        assert_eq!(cleaned.meal_name, "Breakfast");
        assert_eq!(cleaned.meal_description, "Oats with honey");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = analysis_request("   ", "Oats").validated().unwrap_err();
        assert_eq!(
            err,
            RequestError::FieldLength { field: "mealName", min: 1, max: 200, actual: 0 }
        );
    }

    #[test]
    fn test_long_description_rejected() {
        let err = analysis_request("Lunch", &"a".repeat(1001)).validated().unwrap_err();
        assert!(matches!(err, RequestError::FieldLength { field: "mealDescription", actual: 1001, .. }));

        assert!(analysis_request("Lunch", &"a".repeat(1000)).validated().is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        // 200 multi-byte characters fit even though they exceed 200 bytes
        let name = "é".repeat(200);
        assert!(analysis_request(&name, "soup").validated().is_ok());
    }

    #[test]
    fn test_deserialize_with_preferences() {
        let json = r#"{"mealName": "Dinner", "mealDescription": "Salmon",
                       "userPreferences": {"dietaryRestrictions": ["Gluten-Free"]}}"#;
        let request: MealAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_preferences.dietary_restrictions, vec!["Gluten-Free".to_string()]);
    }

    #[test]
    fn test_voice_request_needs_description() {
        let request = VoiceEditRequest {
            meal_description: Some(" \n ".into()),
            is_editing: false,
            original_meal: None,
        };
        assert_eq!(request.validated().unwrap_err(), RequestError::MissingDescription);
        assert_eq!(
            RequestError::MissingDescription.to_string(),
            "No meal description provided"
        );
    }

    #[test]
    fn test_voice_edit_needs_original() {
        let request = VoiceEditRequest {
            meal_description: Some("change flour to 50g".into()),
            is_editing: true,
            original_meal: None,
        };
        assert_eq!(request.validated().unwrap_err(), RequestError::MissingOriginalMeal);

        let request = VoiceEditRequest {
            original_meal: Some("{\"total_calories\": 120}".into()),
            ..request
        };
        let cleaned = request.validated().unwrap();
        assert_eq!(cleaned.meal_description.as_deref(), Some("change flour to 50g"));
    }
}
