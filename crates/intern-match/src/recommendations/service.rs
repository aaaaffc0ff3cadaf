use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::catalog::ListingCatalog;
use super::domain::CandidateProfile;
use super::intake::{IntakeError, ProfileIntake};
use super::report::RecommendationReport;
use super::scoring::{ScoringConfig, ScoringEngine};

/// Service composing the intake gate, the listing catalog, and the scoring rubric.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Arc<ListingCatalog>,
    engine: Arc<ScoringEngine>,
}

impl RecommendationService {
    pub fn new(catalog: ListingCatalog, config: ScoringConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            engine: Arc::new(ScoringEngine::new(config)),
        }
    }

    pub fn standard() -> Self {
        Self::new(ListingCatalog::standard(), ScoringConfig::default())
    }

    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Rank the catalog for a profile as-is. Never fails, even for an empty profile.
    pub fn recommend(&self, profile: &CandidateProfile) -> RecommendationReport {
        let ranked = self.engine.recommend(profile, &self.catalog);

        for scored in &ranked {
            debug!(
                listing = %scored.listing.id,
                score = scored.match_score,
                "scored listing"
            );
        }
        info!(
            catalog_size = self.catalog.len(),
            returned = ranked.len(),
            top_score = ?ranked.first().map(|scored| scored.match_score),
            "generated recommendations"
        );

        RecommendationReport::new(profile.name.clone(), self.catalog.len(), ranked, Utc::now())
    }

    /// Run the draft through the intake steps first, then rank.
    pub fn submit(
        &self,
        draft: CandidateProfile,
    ) -> Result<RecommendationReport, RecommendationServiceError> {
        let profile = ProfileIntake::collect(draft)?;
        Ok(self.recommend(&profile))
    }
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::standard()
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
}
