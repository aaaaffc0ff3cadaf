//! Candidate intake and rule-based internship recommendations.
//!
//! The scorer is a pure function over a profile and a read-only catalog; the service and
//! router only add the intake gate, logging, and an HTTP surface on top of it.

pub mod catalog;
pub mod domain;
pub mod intake;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod taxonomy;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, ListingCatalog};
pub use domain::{
    CandidateProfile, Education, ExperienceLevel, Listing, ListingId, UnknownOption,
};
pub use intake::{IntakeError, IntakeStep, ProfileIntake, TOTAL_STEPS};
pub use report::{RecommendationEntry, RecommendationReport};
pub use router::recommendation_router;
pub use scoring::{
    MatchFactor, MatchQuality, ScoreComponent, ScoredListing, ScoringConfig, ScoringEngine,
};
pub use service::{RecommendationService, RecommendationServiceError};
pub use taxonomy::{SkillCategory, Taxonomy, SECTORS, SKILL_CATEGORIES, STATES};
