use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;

pub const EXCELLENT_MATCH_THRESHOLD: u16 = 70;
pub const GOOD_MATCH_THRESHOLD: u16 = 50;

/// Display tier derived from a final match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    Excellent,
    Good,
    Suitable,
}

impl MatchQuality {
    pub const fn from_score(score: u16) -> Self {
        if score >= EXCELLENT_MATCH_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_MATCH_THRESHOLD {
            Self::Good
        } else {
            Self::Suitable
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Suitable => "Suitable Match",
        }
    }
}

/// Round half away from zero, then apply the optional cap.
pub(crate) fn finalize_score(raw: f64, config: &ScoringConfig) -> u16 {
    let rounded = if raw.is_finite() {
        raw.round().clamp(0.0, u16::MAX as f64) as u16
    } else {
        0
    };

    match config.max_score {
        Some(cap) => rounded.min(cap),
        None => rounded,
    }
}
