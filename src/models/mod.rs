//! Data models
//!
//! Rust structs representing meals, ingredients and user context.

mod health_score;
mod ingredient;
mod meal;
mod nutrition;
mod preferences;

pub use health_score::{HealthRating, HealthScoreSummary, ScoreBand};
pub use ingredient::Ingredient;
pub use meal::{Improvement, MealNutrition, Priority};
pub use nutrition::MacroTotals;
pub use preferences::UserPreferences;
