use chrono::{DateTime, Utc};
use serde::Serialize;

use super::scoring::{MatchQuality, ScoredListing};

/// One ranked listing with its display tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub scored: ScoredListing,
    pub match_quality: MatchQuality,
    pub match_label: &'static str,
}

/// Ranked recommendations for a single candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub candidate_name: String,
    pub generated_at: DateTime<Utc>,
    pub catalog_size: usize,
    pub recommendations: Vec<RecommendationEntry>,
}

impl RecommendationReport {
    pub fn new(
        candidate_name: impl Into<String>,
        catalog_size: usize,
        ranked: Vec<ScoredListing>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let recommendations = ranked
            .into_iter()
            .enumerate()
            .map(|(index, scored)| {
                let match_quality = scored.quality();
                RecommendationEntry {
                    rank: index + 1,
                    scored,
                    match_quality,
                    match_label: match_quality.label(),
                }
            })
            .collect();

        Self {
            candidate_name: candidate_name.into(),
            generated_at,
            catalog_size,
            recommendations,
        }
    }

    pub fn headline(&self) -> String {
        let name = self.candidate_name.trim();
        if name.is_empty() {
            "Recommended Internships".to_string()
        } else {
            format!("Recommended Internships for {name}")
        }
    }

    pub fn summary(&self) -> String {
        if self.recommendations.is_empty() {
            "No internships matched your profile.".to_string()
        } else {
            format!(
                "Here are the top {} internships matched to your profile",
                self.recommendations.len()
            )
        }
    }
}
