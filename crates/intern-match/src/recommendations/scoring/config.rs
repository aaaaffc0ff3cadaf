use serde::{Deserialize, Serialize};

/// Weights and ranking knobs for the recommendation rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub sector_weight: f64,
    pub skill_weight: f64,
    pub education_weight: f64,
    pub location_weight: f64,
    pub experience_bonus: f64,
    /// Running score an experienced candidate must exceed to earn the bonus.
    pub experienced_threshold: f64,
    /// Running score a candidate without experience must exceed to earn the bonus.
    pub entry_level_threshold: f64,
    pub recommendation_limit: usize,
    /// Upper bound applied after rounding. `None` leaves scores above 100 untouched.
    pub max_score: Option<u16>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sector_weight: 40.0,
            skill_weight: 30.0,
            education_weight: 20.0,
            location_weight: 10.0,
            experience_bonus: 5.0,
            experienced_threshold: 50.0,
            entry_level_threshold: 30.0,
            recommendation_limit: 5,
            max_score: None,
        }
    }
}
