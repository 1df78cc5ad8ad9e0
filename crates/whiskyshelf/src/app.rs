use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{healthz, livez},
        pages::index,
        static_files::serve_asset,
        whiskies::{create_whisky, delete_whisky, get_whisky, list_whiskies, update_whisky},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/whiskies", get(list_whiskies).post(create_whisky))
        .route(
            "/whiskies/{id}",
            get(get_whisky).put(update_whisky).delete(delete_whisky),
        )
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/assets/{*path}", get(serve_asset))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, any(feature = "inmemory", feature = "sqlite")))]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::seed::seed_if_empty;

    #[cfg(feature = "inmemory")]
    async fn test_state() -> AppState {
        AppState::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    #[cfg(feature = "sqlite")]
    async fn test_state() -> AppState {
        let repo = crate::storage::SqliteRepository::new_in_memory()
            .await
            .expect("in-memory database");
        AppState::with_repository(Arc::new(repo))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_greeting_page() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("whisky collection"));
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_backend() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_seeded_collection() {
        let state = test_state().await;
        seed_if_empty(state.whisky_repo.as_ref()).await.unwrap();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/whiskies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let whiskies = body_json(response).await;
        let whiskies = whiskies.as_array().unwrap();

        assert_eq!(whiskies.len(), 2);
        assert_eq!(whiskies[0]["name"], "Bowmore 15 Years Laimrig");
        assert_eq!(whiskies[0]["origin"], "Scotland, Islay");
        assert_eq!(whiskies[1]["name"], "Talisker 57° North");
        assert_eq!(whiskies[1]["origin"], "Scotland, Island");
    }

    #[tokio::test]
    async fn test_create_and_get_whisky() {
        let app = create_app(test_state().await);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/whiskies",
                r#"{"name":"Jameson","origin":"Ireland"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let whisky = body_json(response).await;
        assert_eq!(whisky["name"], "Jameson");
        assert_eq!(whisky["origin"], "Ireland");
        assert!(!whisky["id"].is_null());

        let id = whisky["id"].as_str().unwrap().to_string();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/whiskies/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let whisky = body_json(response).await;
        assert_eq!(whisky["name"], "Jameson");
        assert_eq!(whisky["id"], id);
    }

    #[tokio::test]
    async fn test_get_nonexistent_whisky() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/whiskies/424242")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_whisky() {
        let state = test_state().await;
        seed_if_empty(state.whisky_repo.as_ref()).await.unwrap();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/whiskies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let whiskies = body_json(response).await;
        let id = whiskies[0]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/whiskies/{id}"),
                r#"{"name":"Bowmore 18","origin":"Scotland, Islay"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let whisky = body_json(response).await;
        assert_eq!(whisky["name"], "Bowmore 18");
        assert_eq!(whisky["id"], id);

        // The stored record reflects the update
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/whiskies/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let whisky = body_json(response).await;
        assert_eq!(whisky["name"], "Bowmore 18");
    }

    #[tokio::test]
    async fn test_update_nonexistent_whisky() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/whiskies/424242",
                r#"{"name":"Ghost","origin":"Nowhere"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let app = create_app(test_state().await);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/whiskies",
                r#"{"name":"Jameson","origin":"Ireland"}"#,
            ))
            .await
            .unwrap();
        let whisky = body_json(response).await;
        let id = whisky["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/whiskies/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/whiskies/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Deleting again still answers 204
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/whiskies/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_malformed_create_body() {
        let app = create_app(test_state().await);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/whiskies", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // A body missing a required field is rejected the same way
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/whiskies",
                r#"{"name":"Jameson"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_update_body() {
        let app = create_app(test_state().await);

        let response = app
            .oneshot(json_request("PUT", "/api/whiskies/1", "{broken"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
