use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::recommendations::domain::{
    CandidateProfile, Education, ExperienceLevel, Listing, ListingId,
};
use crate::recommendations::{
    recommendation_router, ListingCatalog, RecommendationService, ScoringConfig, ScoringEngine,
};

pub(super) fn scenario_profile() -> CandidateProfile {
    CandidateProfile {
        name: "Asha Patil".to_string(),
        age: "21".to_string(),
        education: Some(Education::Graduation),
        state: "Maharashtra".to_string(),
        district: "Pune".to_string(),
        skills: vec!["Digital Marketing".to_string(), "Computer Basics".to_string()],
        sectors: vec!["Information Technology".to_string()],
        experience: Some(ExperienceLevel::NoExperience),
    }
}

/// Profile that earns no experience bonus, so scores are the plain weighted sum.
pub(super) fn retail_profile() -> CandidateProfile {
    CandidateProfile {
        name: "Ravi Kumar".to_string(),
        age: "19".to_string(),
        education: Some(Education::Twelfth),
        state: "Goa".to_string(),
        district: "North Goa".to_string(),
        skills: vec!["Sales".to_string()],
        sectors: vec!["Retail".to_string()],
        experience: Some(ExperienceLevel::Basic),
    }
}

pub(super) fn listing(
    id: &str,
    sector: &str,
    skills: &[&str],
    education: &[Education],
    location: &str,
    is_remote: bool,
) -> Listing {
    Listing {
        id: ListingId(id.to_string()),
        title: format!("Listing {id}"),
        company: "Test Org".to_string(),
        location: location.to_string(),
        sector: sector.to_string(),
        duration: "3 months".to_string(),
        stipend: "₹5,000/month".to_string(),
        description: "Test listing".to_string(),
        required_skills: skills.iter().map(|skill| skill.to_string()).collect(),
        education_levels: education.to_vec(),
        is_remote,
    }
}

/// Eight listings whose scores under `retail_profile` are 50, 100, 30, 80, 40, 90, 60, 70.
pub(super) fn eight_listing_catalog() -> ListingCatalog {
    let twelfth = &[Education::Twelfth];
    let tenth = &[Education::Tenth];
    ListingCatalog::from_listings(vec![
        listing("s50", "Retail", &["Teaching"], tenth, "Goa", false),
        listing("s100", "Retail", &["Sales"], twelfth, "Goa", false),
        listing("s30", "Healthcare", &["Sales"], tenth, "Delhi", false),
        listing("s80", "Retail", &["Sales"], tenth, "Goa", false),
        listing("s40", "Retail", &["Teaching"], tenth, "Delhi", false),
        listing("s90", "Retail", &["Sales"], twelfth, "Delhi", false),
        listing("s60", "Retail", &["Teaching"], twelfth, "Delhi", false),
        listing("s70", "Retail", &["Sales"], tenth, "Delhi", false),
    ])
    .expect("valid catalog")
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

pub(super) fn capped_engine(cap: u16) -> ScoringEngine {
    ScoringEngine::new(ScoringConfig {
        max_score: Some(cap),
        ..ScoringConfig::default()
    })
}

pub(super) fn standard_router() -> axum::Router {
    recommendation_router(Arc::new(RecommendationService::standard()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
