use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::recommendations::domain::CandidateProfile;
use crate::recommendations::router::{recommend_handler, submit_handler};
use crate::recommendations::RecommendationService;

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn recommend_handler_returns_ranked_report() {
    let service = Arc::new(RecommendationService::standard());

    let response = recommend_handler(State(service), Json(scenario_profile())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["candidateName"], "Asha Patil");
    assert_eq!(body["catalogSize"], 10);
    let recommendations = body["recommendations"].as_array().expect("array");
    assert_eq!(recommendations.len(), 5);
    assert_eq!(recommendations[0]["id"], "1");
    assert_eq!(recommendations[0]["rank"], 1);
    assert_eq!(recommendations[0]["matchScore"], 95);
    assert_eq!(recommendations[0]["matchLabel"], "Excellent Match");
    assert_eq!(recommendations[0]["isRemote"], true);
    assert_eq!(recommendations[1]["matchLabel"], "Suitable Match");
}

#[tokio::test]
async fn recommend_route_accepts_browser_payload() {
    let router = standard_router();
    let payload = json!({
        "name": "Asha Patil",
        "age": "21",
        "education": "graduation",
        "state": "Maharashtra",
        "district": "Pune",
        "skills": ["Digital Marketing", "Computer Basics"],
        "sectors": ["Information Technology"],
        "experience": "none"
    });

    let response = router
        .oneshot(json_request("/api/v1/recommendations", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["recommendations"][0]["matchScore"], 95);
}

#[tokio::test]
async fn recommend_route_scores_empty_profile() {
    let router = standard_router();

    let response = router
        .oneshot(json_request("/api/v1/recommendations", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let recommendations = body["recommendations"].as_array().expect("array");
    assert_eq!(recommendations.len(), 5);
    assert_eq!(recommendations[0]["matchScore"], 10);
    assert_eq!(recommendations[2]["matchScore"], 0);
}

#[tokio::test]
async fn recommend_route_accepts_any_age_text() {
    for age in [json!("21.5"), json!(-1), json!(300), json!("twenty")] {
        let response = standard_router()
            .oneshot(json_request(
                "/api/v1/recommendations",
                json!({ "age": age, "sectors": ["Retail"] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "age {age}");
        let body = read_json_body(response).await;
        assert_eq!(body["recommendations"][0]["title"], "Retail Sales Assistant");
    }
}

#[tokio::test]
async fn submit_handler_rejects_incomplete_intake() {
    let service = Arc::new(RecommendationService::standard());
    let draft = CandidateProfile {
        skills: Vec::new(),
        ..scenario_profile()
    };

    let response = submit_handler(State(service), Json(draft)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["step"], 3);
    assert_eq!(body["missing"], json!(["skills"]));
}

#[tokio::test]
async fn intake_route_accepts_complete_draft() {
    let router = standard_router();

    let response = router
        .oneshot(json_request(
            "/api/v1/intake",
            serde_json::to_value(scenario_profile()).unwrap(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_route_lists_every_listing() {
    let router = standard_router();

    let response = router
        .oneshot(
            Request::get("/api/v1/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let listings = body.as_array().expect("array");
    assert_eq!(listings.len(), 10);
    assert_eq!(listings[1]["educationLevels"], json!(["10th", "12th", "diploma"]));
}

#[tokio::test]
async fn taxonomy_route_lists_options() {
    let router = standard_router();

    let response = router
        .oneshot(
            Request::get("/api/v1/taxonomy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["sectors"].as_array().map(Vec::len), Some(12));
    assert_eq!(body["skillCategories"][0]["name"], "Technical Skills");
    assert_eq!(body["educationLevels"][4]["label"], "Post Graduation");
}
