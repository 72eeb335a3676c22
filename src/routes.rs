//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio page is rendered by Leptos SSR at `/` and hydrated from the
//! wasm bundle under `/pkg`. Everything else the page references (`/sw.js`,
//! project images, favicon) is served from the public directory.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::error::ServerError;

/// Health probe, wasm bundle, and public asset fallback.
pub fn static_routes(config: &HostConfig, pkg_dir: &Path) -> Router {
    let public = ServeDir::new(&config.public_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(public)
}

/// Leptos SSR page merged over the static routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (malformed
/// `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(config: &HostConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portfolio_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Ok(leptos_router
        .merge(static_routes(config, &pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
