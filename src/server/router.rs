//! Axum router construction.

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::trace::TraceLayer;

use super::{handlers, state::AppState};

/// Build the application [`Router`].
///
/// `POST /payments` is the only route. A wrong method on `/payments` falls
/// through to the same empty 404 as an unknown path, and the default request
/// body limit is disabled: bodies of any size are accumulated in full.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route(
            "/payments",
            post(handlers::ingest).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn post_payments_returns_204() {
        let app = build(AppState::default());
        let req = Request::builder()
            .method("POST")
            .uri("/payments")
            .body(Body::from(r#"{"amount":1.00}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 204);
    }

    #[tokio::test]
    async fn get_payments_returns_404() {
        let app = build(AppState::default());
        let req = Request::builder()
            .uri("/payments")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = build(AppState::default());
        let req = Request::builder()
            .uri("/unknown")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn trailing_slash_is_a_different_path() {
        let app = build(AppState::default());
        let req = Request::builder()
            .method("POST")
            .uri("/payments/")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }
}
