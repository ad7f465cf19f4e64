use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn site(pages: Router) -> Router {
    let public = public_dir();
    site_routes(pages, &public, &public)
}

async fn get_path(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_path(site(Router::new()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_check_rejects_post() {
    let response = site(Router::new())
        .oneshot(Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _) = get_path(site(Router::new()), "/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_fallback_serves_assets_dir() {
    let (status, body) = get_path(site(Router::new()), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("User-agent"));
}

#[tokio::test]
async fn pkg_prefix_serves_bundle_dir() {
    let (status, body) = get_path(site(Router::new()), "/pkg/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("User-agent"));
}

#[tokio::test]
async fn page_routes_win_over_static_fallback() {
    let pages = Router::new().route("/videos", get(|| async { "videos page" }));
    let (status, body) = get_path(site(pages), "/videos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "videos page");
}
