use crate::server::static_assets::*;
use axum::http::StatusCode;

#[tokio::test]
async fn test_unforwarded_api_routes_return_404() {
    let uri = "/api/v1/projects".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bare_api_prefix_returns_404() {
    let uri = "/api".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_lookalike_is_not_api() {
    // Served as a frontend path (index.html or the missing-build notice)
    let uri = "/apiary".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_ne!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_never_404s() {
    let uri = "/".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert!(
        response.status() == StatusCode::OK
            || response.status() == StatusCode::INTERNAL_SERVER_ERROR
    );
}
