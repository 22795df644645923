//! Spork Library
//!
//! Meal nutrition validation and reconciliation for the Spork diet tracker.

pub mod analysis;
pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use config::Config;
pub use models::{Ingredient, MealNutrition};
pub use nutrition::{reconcile_and_recalculate, validate_ingredient, Reconciliation};
