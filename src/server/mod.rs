//! HTTP surface: serve sitemap documents over axum.
//!
//! One request performs one build plus one serialize against read-only
//! shared state; nothing is cached or mutated across requests.

use crate::sitemap::{builder::DEFAULT_IDENT, BuildError, SitemapBuilder, XmlFormatter};
use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Read-only state shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<dyn SitemapBuilder>,
    pub formatter: Arc<XmlFormatter>,
}

/// Build the sitemap router.
///
/// `GET /sitemap.xml` serves the default hierarchy; `GET /sitemap/:ident`
/// serves a named one (a trailing `.xml` on the ident is accepted).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(default_sitemap))
        .route("/sitemap/:ident", get(named_sitemap))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("serving sitemaps on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn default_sitemap(State(state): State<AppState>) -> Response {
    sitemap_response(&state, DEFAULT_IDENT)
}

async fn named_sitemap(State(state): State<AppState>, Path(ident): Path<String>) -> Response {
    let ident = ident.strip_suffix(".xml").unwrap_or(ident.as_str());
    sitemap_response(&state, ident)
}

fn sitemap_response(state: &AppState, ident: &str) -> Response {
    let collections = match state.builder.build(ident) {
        Ok(collections) => collections,
        Err(BuildError::UnknownIdent(ident)) => {
            return (StatusCode::NOT_FOUND, format!("no sitemap for '{ident}'")).into_response();
        }
    };

    match state.formatter.collections_to_xml(&collections) {
        Some(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        // Never hand back an empty 200; a missing document is a failure.
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "sitemap serialization failed",
        )
            .into_response(),
    }
}
