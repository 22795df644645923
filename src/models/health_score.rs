//! Health score rating
//!
//! Maps a 0-100 meal health score to a rating label and a colour band.

use serde::Serialize;

/// Qualitative rating for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    Exceptional,
    Excellent,
    Good,
    AboveAverage,
    Average,
    NeedsImprovement,
}

impl HealthRating {
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 90.0 {
            HealthRating::Exceptional
        } else if score >= 80.0 {
            HealthRating::Excellent
        } else if score >= 70.0 {
            HealthRating::Good
        } else if score >= 60.0 {
            HealthRating::AboveAverage
        } else if score >= 50.0 {
            HealthRating::Average
        } else {
            HealthRating::NeedsImprovement
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            HealthRating::Exceptional => "Exceptional",
            HealthRating::Excellent => "Excellent",
            HealthRating::Good => "Good",
            HealthRating::AboveAverage => "Above Average",
            HealthRating::Average => "Average",
            HealthRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Colour band used when displaying a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= 80.0 {
            ScoreBand::Green
        } else if score >= 60.0 {
            ScoreBand::Yellow
        } else {
            ScoreBand::Red
        }
    }
}

/// Score with its rating and band, as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct HealthScoreSummary {
    pub score: f64,
    pub rating: HealthRating,
    pub label: &'static str,
    pub band: ScoreBand,
}

impl HealthScoreSummary {
    pub fn from_score(score: f64) -> Self {
        let rating = HealthRating::from_score(score);
        Self {
            score: clamp_score(score),
            rating,
            label: rating.label(),
            band: ScoreBand::from_score(score),
        }
    }
}

// NaN reads as 0
fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}
