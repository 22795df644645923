//! Shared macro totals structure
//!
//! Accumulator used when summing ingredient contributions into a meal.

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// Calorie and macronutrient totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl MacroTotals {
    /// Create totals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Contribution of a single ingredient, negative values clamped to zero
    pub fn clamped_from(ingredient: &Ingredient) -> Self {
        Self {
            calories: ingredient.calories.max(0.0),
            protein: ingredient.protein_grams.max(0.0),
            carbs: ingredient.carb_grams.max(0.0),
            fat: ingredient.fat_grams.max(0.0),
        }
    }

    /// Add another set of totals to this one
    pub fn add(&self, other: &MacroTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals::add(&self, &other)
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::zero(), |acc, n| acc + n)
    }
}
