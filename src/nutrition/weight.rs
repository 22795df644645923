//! Ingredient weight extraction
//!
//! Turns free-text weights such as "100g" into a gram magnitude.

use super::units::{grams_per_unit, WeightParsing};

/// Extract the gram magnitude of a weight string
///
/// Returns 0.0 for anything the selected mode does not recognise, including
/// negative quantities and volume or count units.
///
/// Examples (strict):
/// - "100g" -> 100.0
/// - "100g flour" -> 100.0
/// - "12.5g" -> 0.0
/// - "2 oz" -> 0.0
pub fn weight_in_grams(weight: &str, mode: WeightParsing) -> f64 {
    match mode {
        WeightParsing::Strict => strict_grams(weight),
        WeightParsing::Extended => extended_grams(weight),
    }
}

/// Leading integer immediately followed by "g"
fn strict_grams(weight: &str) -> f64 {
    let trimmed = weight.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    if digits_end == 0 || !trimmed[digits_end..].starts_with('g') {
        return 0.0;
    }

    trimmed[..digits_end].parse::<f64>().unwrap_or(0.0)
}

/// Decimal quantity followed by an optional space and a weight unit
fn extended_grams(weight: &str) -> f64 {
    let lower = weight.trim().to_lowercase();
    let number_end = lower
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(lower.len());

    let quantity = match lower[..number_end].parse::<f64>() {
        Ok(q) if q.is_finite() => q,
        _ => return 0.0,
    };

    let unit = match lower[number_end..].split_whitespace().next() {
        Some(u) => u,
        None => return 0.0,
    };

    grams_per_unit(unit).map_or(0.0, |factor| quantity * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::units::G_PER_OZ;

    #[test]
    fn test_strict_integer_grams() {
        assert_eq!(weight_in_grams("100g", WeightParsing::Strict), 100.0);
        assert_eq!(weight_in_grams("  10g ", WeightParsing::Strict), 10.0);
        assert_eq!(weight_in_grams("250g cooked rice", WeightParsing::Strict), 250.0);
        assert_eq!(weight_in_grams("0g", WeightParsing::Strict), 0.0);
    }

    #[test]
    fn test_strict_rejects_other_shapes() {
        assert_eq!(weight_in_grams("12.5g", WeightParsing::Strict), 0.0);
        assert_eq!(weight_in_grams("1 cup", WeightParsing::Strict), 0.0);
        assert_eq!(weight_in_grams("2 oz", WeightParsing::Strict), 0.0);
        assert_eq!(weight_in_grams("100 g", WeightParsing::Strict), 0.0);
        assert_eq!(weight_in_grams("-10g", WeightParsing::Strict), 0.0);
        assert_eq!(weight_in_grams("100", WeightParsing::Strict), 0.0);
        assert_eq!(weight_in_grams("", WeightParsing::Strict), 0.0);
    }

    #[test]
    fn test_extended_decimals_and_units() {
        assert_eq!(weight_in_grams("12.5g", WeightParsing::Extended), 12.5);
        assert_eq!(weight_in_grams("100 g", WeightParsing::Extended), 100.0);
        assert_eq!(weight_in_grams("1.5kg", WeightParsing::Extended), 1500.0);
        assert_eq!(weight_in_grams("250 grams of pasta", WeightParsing::Extended), 250.0);

        let oz = weight_in_grams("2 oz", WeightParsing::Extended);
        assert!((oz - 2.0 * G_PER_OZ).abs() < 0.001);
    }

    #[test]
    fn test_extended_rejects_volume_and_negatives() {
        assert_eq!(weight_in_grams("1 cup", WeightParsing::Extended), 0.0);
        assert_eq!(weight_in_grams("2 tbsp", WeightParsing::Extended), 0.0);
        assert_eq!(weight_in_grams("-10g", WeightParsing::Extended), 0.0);
        assert_eq!(weight_in_grams("100", WeightParsing::Extended), 0.0);
        assert_eq!(weight_in_grams("1.2.3g", WeightParsing::Extended), 0.0);
    }
}
