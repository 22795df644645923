//! Spork Status Tool
//!
//! Provides runtime status information about the Spork service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::nutrition::WeightParsing;

/// Meal reconciliation instructions for AI assistants
pub const MEAL_INSTRUCTIONS: &str = r#"
# Spork Meal Reconciliation Instructions

This guide explains how to check a meal analysis before showing or saving it.

## Overview

A meal analysis proposes a list of ingredients, each with a weight and its
calories, protein, carbohydrates and fat. The totals an analysis reports for
the whole meal are NOT trusted. Spork rebuilds them from the ingredients.

---

## Recommended Workflow

1. Produce the meal analysis as JSON (either shape below is accepted)
2. Call `reconcile_meal_json` with the raw JSON as `payload`
   - Set `envelope: true` when the JSON is wrapped as
     `{"description": ..., "nutrition": {...}, "wasEdited": ...}`
3. Show the user `correctedMeal`, never the original totals
4. If `errors` is not empty, mention the problems to the user. The meal can
   still be logged.

---

## Accepted Shapes

**Analysis model shape:**
```json
{
  "total_calories": 350,
  "protein_content": 25,
  "carbohydrate_content": 45,
  "fat_content": 12,
  "fiber_content": 3,
  "ingredients": [
    {"ingredient": "Plain Flour", "weight": "100g", "calories": 120,
     "protein": 4, "carbohydrates": 20, "fat": 1}
  ]
}
```

**Record shape:** `totalCalories`, `proteinGrams`, `carbGrams`, `fatGrams`,
`fiberGrams`, `ingredients[]` with `name`, `weight`, `calories`,
`proteinGrams`, `carbGrams`, `fatGrams`.

---

## What Gets Checked

For every ingredient:

| Check | Rule |
|-------|------|
| Negative values | calories, protein, carbs and fat must be 0 or more |
| Calorie consistency | calories must be within 5 kcal of protein*4 + carbs*4 + fat*9 |
| Energy density | calories per gram must not exceed 9 (pure fat) |

The energy density check only runs when the weight can be read as grams.
Write weights as whole grams, e.g. `"100g"`. Decimal or non-gram weights are
only understood when the service runs with `SPORK_WEIGHT_PARSING=extended`.

---

## How Totals Are Rebuilt

- Each ingredient's negative values count as 0
- `totalCalories` is rounded to a whole number
- `proteinGrams`, `carbGrams`, `fatGrams` are rounded to one decimal place
- `fiberGrams`, the ingredient list and any health score fields are kept as given

---

## Other Tools

- `validate_ingredient` - check a single ingredient
- `reconcile_meal` - same as `reconcile_meal_json` but takes a typed meal
- `check_meal_request` - validate a meal name (1-200 chars) and description (1-1000 chars)
- `check_voice_request` - validate a spoken meal or edit request
- `rate_health_score` - turn a 0-100 score into a rating label and colour band
"#;

/// Runtime status of the Spork service
#[derive(Debug, Clone, Serialize)]
pub struct SporkStatus {
    #[serde(flatten)]
    pub build: BuildInfo,

    /// Active configuration
    pub weight_parsing: WeightParsing,

    /// Process information
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    started_at: DateTime<Utc>,
    config: Arc<Config>,
}

impl StatusTracker {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            started_at: Utc::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> SporkStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        let uptime = Utc::now().signed_duration_since(self.started_at);

        SporkStatus {
            build: BuildInfo::current(),
            weight_parsing: self.config.weight_parsing,
            started_at: self.started_at,
            uptime_seconds: uptime.num_seconds().max(0) as u64,
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config_and_pid() {
        let tracker = StatusTracker::new(Arc::new(Config::default()));
        let status = tracker.get_status();
        assert_eq!(status.weight_parsing, WeightParsing::Strict);
        assert_eq!(status.process_id, std::process::id());
        assert!(status.started_at <= Utc::now());
    }

    #[test]
    fn test_status_serializes_flat() {
        let tracker = StatusTracker::new(Arc::new(Config::default()));
        let value = serde_json::to_value(tracker.get_status()).unwrap();
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["name"], "spork");
        assert_eq!(value["weight_parsing"], "strict");
        assert!(value["started_at"].is_string());
    }

    #[test]
    fn test_instructions_name_every_tool() {
        for tool in [
            "reconcile_meal_json",
            "validate_ingredient",
            "reconcile_meal",
            "check_meal_request",
            "check_voice_request",
            "rate_health_score",
        ] {
            assert!(MEAL_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
