//! Integration tests for the Observer API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic, routing, and the
//! bearer gate without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fleetline_observer::router::build_router;
use fleetline_observer::state::AppState;
use fleetline_sim::create_starting_engine;
use serde_json::Value;
use tower::ServiceExt;

const TEST_TOKEN: &str = "test-token";

fn make_test_router() -> Router {
    let engine = Arc::new(create_starting_engine().unwrap());
    let state = Arc::new(AppState::new(engine, TEST_TOKEN));
    build_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn authed_get(path: &str) -> Request<Body> {
    Request::get(path)
        .header("authorization", format!("Bearer {TEST_TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html_without_auth() {
    let router = make_test_router();

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Fleetline Observer"));
}

#[tokio::test]
async fn test_positions_without_token_is_unauthorized() {
    let router = make_test_router();

    let response = router
        .oneshot(
            Request::get("/api/vehicles/positions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 401);
    assert!(json["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_positions_with_wrong_token_is_unauthorized() {
    let router = make_test_router();

    let response = router
        .oneshot(
            Request::get("/api/vehicles/positions")
                .header("authorization", "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("invalid"));
}

#[tokio::test]
async fn test_positions_with_malformed_header_is_unauthorized() {
    let router = make_test_router();

    // No "Bearer " prefix at all.
    let response = router
        .oneshot(
            Request::get("/api/vehicles/positions")
                .header("authorization", TEST_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_positions_returns_all_vehicles() {
    let router = make_test_router();

    let response = router
        .oneshot(authed_get("/api/vehicles/positions"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let vehicles = json["vehicles"].as_array().unwrap();
    assert_eq!(vehicles.len(), 4);

    for vehicle in vehicles {
        assert!(vehicle["id"].is_string());
        assert!(vehicle["route_id"].is_string());
        assert!(vehicle["route_display_name"].is_string());
        assert!(vehicle["latitude"].is_number());
        assert!(vehicle["longitude"].is_number());
        assert_eq!(vehicle["status"], "in_service");
        assert!(vehicle["progress"].is_number());
        assert!(vehicle["direction"].is_string());
        assert!(vehicle["speed"].is_number());
        assert!(vehicle["last_update"].is_string());
    }
}

#[tokio::test]
async fn test_each_positions_request_advances_one_tick() {
    // Ticks are request-driven: two polls must yield different progress
    // for a moving vehicle.
    let router = make_test_router();

    let first = router
        .clone()
        .oneshot(authed_get("/api/vehicles/positions"))
        .await
        .unwrap();
    let second = router
        .oneshot(authed_get("/api/vehicles/positions"))
        .await
        .unwrap();

    let first = body_to_json(first.into_body()).await;
    let second = body_to_json(second.into_body()).await;

    // Vehicle "1" starts at progress 0 with speed 0.1.
    let p1 = first["vehicles"][0]["progress"].as_f64().unwrap();
    let p2 = second["vehicles"][0]["progress"].as_f64().unwrap();
    assert!((p1 - 0.1).abs() < 1e-12);
    assert!((p2 - 0.2).abs() < 1e-12);
}

#[tokio::test]
async fn test_routes_returns_polylines() {
    let router = make_test_router();

    let response = router.oneshot(authed_get("/api/routes")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let routes = json["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 4);

    for route in routes {
        assert!(route["id"].is_string());
        assert!(route["display_name"].is_string());
        assert!(route["points"].as_array().unwrap().len() >= 2);
    }
}

#[tokio::test]
async fn test_routes_requires_token() {
    let router = make_test_router();

    let response = router
        .oneshot(Request::get("/api/routes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let router = make_test_router();

    let response = router
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
