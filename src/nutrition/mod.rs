//! Nutrition calculation module
//!
//! Ingredient validation, weight extraction and meal total reconciliation.

pub mod reconciler;
pub mod units;
pub mod validator;
pub mod weight;

pub use reconciler::{reconcile_and_recalculate, reconcile_with, round_to_tenth, Reconciliation};
pub use units::{grams_per_unit, WeightParsing};
pub use validator::{
    atwater_calories, check_ingredient, validate_ingredient, validate_ingredient_with,
    IngredientValidation, MacroField, ValidationIssue, CALORIE_TOLERANCE, MAX_KCAL_PER_GRAM,
};
pub use weight::weight_in_grams;
