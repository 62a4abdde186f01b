//! Integration tests for the RecipeBox favorites API
//!
//! These tests verify the complete request/response cycle for all endpoints
//! against an in-memory store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use recipebox_server::routes::api_router;
use recipebox_server::{AppState, Config};

// =============================================================================
// Test Helpers
// =============================================================================

/// Create a test configuration
fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0, // Random port
        database_url: "sqlite::memory:".to_string(),
        allowed_origins: vec!["http://localhost:8081".to_string()],
        environment: "test".to_string(),
        mealdb_base_url: "http://127.0.0.1:0".to_string(),
        keep_alive_url: None,
    }
}

/// Create a test app backed by a fresh in-memory database
async fn create_test_app() -> Router {
    // A single connection keeps every statement on the same :memory: database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    api_router(AppState::new(pool, test_config()))
}

/// POST a JSON body to the given path
async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, response_json(response).await)
}

/// PUT a JSON body to the given path
async fn put_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, response_json(response).await)
}

/// GET the given path
async fn get_path(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    (status, response_json(response).await)
}

/// DELETE the given path
async fn delete_path(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, response_json(response).await)
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

fn sample_favorite(user_id: &str, recipe_id: i64) -> Value {
    json!({
        "userId": user_id,
        "recipeId": recipe_id,
        "title": "Teriyaki Chicken Casserole",
        "image": "https://example.test/teriyaki.jpg",
        "cookTime": "30 minutes",
        "servings": "4",
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let (status, body) = get_path(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_favorite_returns_created_row() {
    let app = create_test_app().await;

    let (status, body) = post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["userId"], "user_1");
    assert_eq!(body["recipeId"], 52772);
    assert!(body["ratingId"].is_null());
    assert_eq!(body["title"], "Teriyaki Chicken Casserole");
    assert_eq!(body["cookTime"], "30 minutes");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_favorite_with_rating() {
    let app = create_test_app().await;

    let mut favorite = sample_favorite("user_1", 52772);
    favorite["ratingId"] = json!(3);

    let (status, body) = post_json(&app, "/api/favorites", favorite).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ratingId"], 3);
}

#[tokio::test]
async fn test_create_favorite_missing_required_field_is_rejected() {
    let app = create_test_app().await;

    for missing in ["userId", "recipeId", "title"] {
        let mut favorite = sample_favorite("user_1", 52772);
        favorite.as_object_mut().unwrap().remove(missing);

        let (status, body) = post_json(&app, "/api/favorites", favorite).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {missing}");
        assert_eq!(body["error"], "Missing required fields");
    }

    // and nothing was persisted
    let (status, body) = get_path(&app, "/api/favorites/user_1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_favorite_blank_user_id_is_rejected() {
    let app = create_test_app().await;

    let mut favorite = sample_favorite("  ", 52772);
    favorite["userId"] = json!("   ");

    let (status, _) = post_json(&app, "/api/favorites", favorite).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_favorite_out_of_range_rating_is_rejected() {
    let app = create_test_app().await;

    let mut favorite = sample_favorite("user_1", 52772);
    favorite["ratingId"] = json!(9);

    let (status, _) = post_json(&app, "/api/favorites", favorite).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_favorite_conflicts() {
    let app = create_test_app().await;

    let (status, _) = post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    // same recipe for another user is fine
    let (status, _) = post_json(&app, "/api/favorites", sample_favorite("user_2", 52772)).await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_favorites_empty_for_unknown_user() {
    let app = create_test_app().await;

    let (status, body) = get_path(&app, "/api/favorites/nobody").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_favorites_returns_only_that_user_in_insertion_order() {
    let app = create_test_app().await;

    post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;
    post_json(&app, "/api/favorites", sample_favorite("user_1", 52940)).await;
    post_json(&app, "/api/favorites", sample_favorite("user_2", 52772)).await;

    let (status, body) = get_path(&app, "/api/favorites/user_1").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["recipeId"], 52772);
    assert_eq!(rows[1]["recipeId"], 52940);
}

// =============================================================================
// Update rating
// =============================================================================

#[tokio::test]
async fn test_update_rating_sets_rating() {
    let app = create_test_app().await;
    post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;

    let (status, body) = put_json(
        &app,
        "/api/favorites/user_1/52772/rating",
        json!({ "ratingId": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ratingId"], 2);
}

#[tokio::test]
async fn test_update_rating_null_clears_rating() {
    let app = create_test_app().await;

    let mut favorite = sample_favorite("user_1", 52772);
    favorite["ratingId"] = json!(4);
    post_json(&app, "/api/favorites", favorite).await;

    let (status, body) = put_json(
        &app,
        "/api/favorites/user_1/52772/rating",
        json!({ "ratingId": null }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["ratingId"].is_null());

    // the cleared rating is what subsequent reads see
    let (_, body) = get_path(&app, "/api/favorites/user_1").await;
    assert!(body[0]["ratingId"].is_null());
}

#[tokio::test]
async fn test_update_rating_nonexistent_favorite_is_404() {
    let app = create_test_app().await;
    post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;

    let (status, body) = put_json(
        &app,
        "/api/favorites/user_1/99999/rating",
        json!({ "ratingId": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Favorite not found");

    // the existing row was not touched
    let (_, body) = get_path(&app, "/api/favorites/user_1").await;
    assert!(body[0]["ratingId"].is_null());
}

#[tokio::test]
async fn test_update_rating_out_of_range_is_rejected() {
    let app = create_test_app().await;
    post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;

    let (status, _) = put_json(
        &app,
        "/api/favorites/user_1/52772/rating",
        json!({ "ratingId": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_favorite_removes_row() {
    let app = create_test_app().await;
    post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;

    let (status, body) = delete_path(&app, "/api/favorites/user_1/52772").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 1);

    let (_, body) = get_path(&app, "/api/favorites/user_1").await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_nonexistent_favorite_still_succeeds() {
    let app = create_test_app().await;

    let (status, body) = delete_path(&app, "/api/favorites/user_1/52772").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    // but the count tells callers nothing was actually removed
    assert_eq!(body["deleted"], 0);
}

#[tokio::test]
async fn test_delete_only_affects_the_given_user() {
    let app = create_test_app().await;
    post_json(&app, "/api/favorites", sample_favorite("user_1", 52772)).await;
    post_json(&app, "/api/favorites", sample_favorite("user_2", 52772)).await;

    let (_, body) = delete_path(&app, "/api/favorites/user_1/52772").await;
    assert_eq!(body["deleted"], 1);

    let (_, body) = get_path(&app, "/api/favorites/user_2").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
