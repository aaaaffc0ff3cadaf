use super::common::*;
use crate::recommendations::domain::CandidateProfile;
use crate::recommendations::{
    IntakeError, IntakeStep, ListingCatalog, MatchQuality, RecommendationService,
    RecommendationServiceError, ScoringConfig,
};

#[test]
fn recommend_builds_labelled_report() {
    let service = RecommendationService::standard();

    let report = service.recommend(&scenario_profile());

    assert_eq!(report.candidate_name, "Asha Patil");
    assert_eq!(report.catalog_size, 10);
    assert_eq!(report.headline(), "Recommended Internships for Asha Patil");
    assert_eq!(
        report.summary(),
        "Here are the top 5 internships matched to your profile"
    );
    let first = &report.recommendations[0];
    assert_eq!(first.rank, 1);
    assert_eq!(first.match_quality, MatchQuality::Excellent);
    assert_eq!(first.match_label, "Excellent Match");
    assert!(report
        .recommendations
        .iter()
        .skip(1)
        .all(|entry| entry.match_quality == MatchQuality::Suitable));
}

#[test]
fn submit_rejects_incomplete_draft() {
    let service = RecommendationService::standard();

    let error = service
        .submit(CandidateProfile {
            name: String::new(),
            ..scenario_profile()
        })
        .expect_err("name missing");

    match error {
        RecommendationServiceError::Intake(IntakeError::IncompleteStep { step, missing }) => {
            assert_eq!(step, IntakeStep::PersonalInformation);
            assert_eq!(missing, vec!["name"]);
        }
        other => panic!("expected intake error, got {other:?}"),
    }
}

#[test]
fn submit_ranks_complete_draft() {
    let service = RecommendationService::standard();

    let report = service.submit(scenario_profile()).expect("draft complete");

    assert_eq!(report.recommendations[0].scored.match_score, 95);
}

#[test]
fn empty_catalog_produces_empty_report() {
    let catalog = ListingCatalog::from_listings(Vec::new()).expect("empty catalog");
    let service = RecommendationService::new(catalog, ScoringConfig::default());

    let report = service.recommend(&scenario_profile());

    assert!(report.recommendations.is_empty());
    assert_eq!(report.summary(), "No internships matched your profile.");
}

#[test]
fn anonymous_report_uses_generic_headline() {
    let service = RecommendationService::standard();

    let report = service.recommend(&CandidateProfile::default());

    assert_eq!(report.headline(), "Recommended Internships");
}

#[test]
fn service_uses_configured_limit() {
    let service = RecommendationService::new(
        eight_listing_catalog(),
        ScoringConfig {
            recommendation_limit: 3,
            ..ScoringConfig::default()
        },
    );

    let report = service.recommend(&retail_profile());

    let ranks: Vec<usize> = report.recommendations.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert_eq!(report.recommendations[2].scored.match_score, 80);
}
