mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::{MatchQuality, EXCELLENT_MATCH_THRESHOLD, GOOD_MATCH_THRESHOLD};

use super::catalog::ListingCatalog;
use super::domain::{CandidateProfile, Listing};
use policy::finalize_score;
use serde::{Deserialize, Serialize};

/// Stateless scorer that applies the rubric to every listing of a catalog.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, profile: &CandidateProfile, listing: &Listing) -> ScoredListing {
        let (components, raw_score) = rules::score_listing(profile, listing, &self.config);

        ScoredListing {
            listing: listing.clone(),
            match_score: finalize_score(raw_score, &self.config),
            components,
        }
    }

    /// Score every listing and order them by descending score. Ties keep catalog order.
    pub fn rank(&self, profile: &CandidateProfile, listings: &[Listing]) -> Vec<ScoredListing> {
        let mut scored: Vec<ScoredListing> = listings
            .iter()
            .map(|listing| self.score(profile, listing))
            .collect();
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored
    }

    /// Top `recommendation_limit` listings of the catalog for the profile.
    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        catalog: &ListingCatalog,
    ) -> Vec<ScoredListing> {
        let mut ranked = self.rank(profile, catalog.listings());
        ranked.truncate(self.config.recommendation_limit);
        ranked
    }
}

/// Rubric dimension a score component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Sector,
    Skills,
    Education,
    Location,
    ExperienceBonus,
}

/// Discrete contribution to a match score, kept so results can be explained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: f64,
    pub notes: String,
}

/// A catalog listing annotated with its match score for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub match_score: u16,
    pub components: Vec<ScoreComponent>,
}

impl ScoredListing {
    pub fn quality(&self) -> MatchQuality {
        MatchQuality::from_score(self.match_score)
    }

    pub fn points_for(&self, factor: MatchFactor) -> f64 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}
