use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::CandidateProfile;
use super::intake::IntakeError;
use super::service::{RecommendationService, RecommendationServiceError};
use super::taxonomy::Taxonomy;

/// Router builder exposing the catalog, taxonomy, and ranking endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/intake", post(submit_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .route("/api/v1/taxonomy", get(taxonomy_handler))
        .with_state(service)
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(profile): Json<CandidateProfile>,
) -> Response {
    let report = service.recommend(&profile);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(draft): Json<CandidateProfile>,
) -> Response {
    match service.submit(draft) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(RecommendationServiceError::Intake(error)) => {
            warn!(%error, "rejected incomplete intake");
            let payload = match &error {
                IntakeError::IncompleteStep { step, missing } => json!({
                    "error": error.to_string(),
                    "step": step.number(),
                    "missing": missing,
                }),
                IntakeError::NotAtFinalStep { current } => json!({
                    "error": error.to_string(),
                    "step": current.number(),
                }),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler(
    State(service): State<Arc<RecommendationService>>,
) -> Response {
    let listings = service.catalog().listings().to_vec();
    (StatusCode::OK, Json(listings)).into_response()
}

pub(crate) async fn taxonomy_handler() -> Response {
    (StatusCode::OK, Json(Taxonomy::standard())).into_response()
}
