//! User dietary preferences
//!
//! Optional context a client may attach to a meal analysis request.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Goals, restrictions and focus areas collected during onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, alias = "primary_goals")]
    pub primary_goals: Vec<String>,
    #[serde(default, alias = "dietary_restrictions")]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, alias = "health_focus")]
    pub health_focus: Vec<String>,
    #[serde(default, alias = "meal_preferences")]
    pub meal_preferences: Vec<String>,
    #[serde(default, alias = "custom_notes")]
    pub custom_notes: Option<String>,
}

impl UserPreferences {
    /// True when nothing has been selected
    pub fn is_empty(&self) -> bool {
        self.primary_goals.is_empty()
            && self.dietary_restrictions.is_empty()
            && self.health_focus.is_empty()
            && self.meal_preferences.is_empty()
            && self
                .custom_notes
                .as_deref()
                .map_or(true, |n| n.trim().is_empty())
    }

    /// Copy with entries trimmed and blanks dropped
    pub fn normalized(&self) -> Self {
        fn clean(values: &[String]) -> Vec<String> {
            values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect()
        }

        Self {
            primary_goals: clean(&self.primary_goals),
            dietary_restrictions: clean(&self.dietary_restrictions),
            health_focus: clean(&self.health_focus),
            meal_preferences: clean(&self.meal_preferences),
            custom_notes: self
                .custom_notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }
}
