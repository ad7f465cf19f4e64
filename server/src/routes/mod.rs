//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR pages, the compiled WASM/CSS bundle under `/pkg`, a
//! health check, and static media under a single Axum router. Paths that
//! match none of these are looked up in the assets directory.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Request tracing, gzip, and read-only CORS around every route.
fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET, Method::HEAD]);

    router.layer(cors).layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Assemble the site around `pages`: health check, `/pkg` bundle, and a
/// static fallback for everything else.
pub fn site_routes(pages: Router, pkg_dir: &Path, assets_dir: &Path) -> Router {
    with_middleware(
        health_routes()
            .merge(pages)
            .nest_service("/pkg", ServeDir::new(pkg_dir))
            .fallback_service(ServeDir::new(assets_dir)),
    )
}

/// Full site router: SSR pages, `/pkg` bundle, and static media fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, RouteError> {
    let conf = get_configuration(None).map_err(|e| RouteError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Ok(site_routes(leptos_router, &pkg_dir, &config.assets_dir))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
