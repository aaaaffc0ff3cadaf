use intern_match::config::RecommendationConfig;
use intern_match::error::AppError;
use intern_match::recommendations::{
    Education, ExperienceLevel, ListingCatalog, RecommendationService, ScoringConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog from the given CSV export, or the built-in listings when none is set.
pub(crate) fn load_catalog(catalog_csv: Option<&PathBuf>) -> Result<ListingCatalog, AppError> {
    match catalog_csv {
        Some(path) => {
            let catalog = ListingCatalog::from_csv_path(path)?;
            info!(path = %path.display(), listings = catalog.len(), "loaded listing catalog");
            Ok(catalog)
        }
        None => Ok(ListingCatalog::standard()),
    }
}

/// Command-line overrides layered over the environment settings.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecommendationOverrides {
    pub(crate) catalog_csv: Option<PathBuf>,
    pub(crate) limit: Option<usize>,
    pub(crate) score_cap: Option<u16>,
}

impl RecommendationOverrides {
    pub(crate) fn apply(self, config: &RecommendationConfig) -> RecommendationConfig {
        RecommendationConfig {
            limit: self.limit.unwrap_or(config.limit),
            score_cap: self.score_cap.or(config.score_cap),
            catalog_csv: self.catalog_csv.or_else(|| config.catalog_csv.clone()),
        }
    }
}

pub(crate) fn build_service(
    config: &RecommendationConfig,
) -> Result<RecommendationService, AppError> {
    let catalog = load_catalog(config.catalog_csv.as_ref())?;
    let scoring: ScoringConfig = config.scoring();
    Ok(RecommendationService::new(catalog, scoring))
}

pub(crate) fn parse_education(raw: &str) -> Result<Education, String> {
    raw.trim().parse::<Education>().map_err(|err| {
        let accepted: Vec<&str> = Education::ALL.iter().map(|level| level.code()).collect();
        format!("{err} (expected one of: {})", accepted.join(", "))
    })
}

pub(crate) fn parse_experience(raw: &str) -> Result<ExperienceLevel, String> {
    raw.trim().parse::<ExperienceLevel>().map_err(|err| {
        let accepted: Vec<&str> = ExperienceLevel::ALL
            .iter()
            .map(|level| level.code())
            .collect();
        format!("{err} (expected one of: {})", accepted.join(", "))
    })
}

pub(crate) fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(err) => Err(format!("failed to parse '{raw}' as a count ({err})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_education_lists_accepted_codes() {
        assert_eq!(parse_education(" diploma "), Ok(Education::Diploma));

        let error = parse_education("phd").expect_err("unknown level");
        assert!(error.contains("10th, 12th, diploma, graduation, postgraduation"));
    }

    #[test]
    fn parse_limit_rejects_zero() {
        assert_eq!(parse_limit("3"), Ok(3));
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("many").is_err());
    }

    #[test]
    fn overrides_take_precedence_over_environment() {
        let environment = RecommendationConfig {
            limit: 5,
            score_cap: Some(100),
            catalog_csv: Some(PathBuf::from("listings.csv")),
        };

        let merged = RecommendationOverrides {
            catalog_csv: None,
            limit: Some(2),
            score_cap: None,
        }
        .apply(&environment);

        assert_eq!(merged.limit, 2);
        assert_eq!(merged.score_cap, Some(100));
        assert_eq!(merged.catalog_csv, Some(PathBuf::from("listings.csv")));
    }
}
