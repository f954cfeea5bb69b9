//! Run the sitemap HTTP server.

use crate::config::SitemapConfig;
use crate::server::{self, AppState};
use crate::sitemap::{StaticBuilder, XmlFormatter};
use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Load the configuration and serve sitemaps until stopped.
pub async fn run(config_path: &Path, addr: SocketAddr) -> Result<()> {
    let config = SitemapConfig::load(config_path)?;
    info!(
        base_url = %config.base_url,
        hierarchies = config.sitemaps.len(),
        "configuration loaded"
    );

    let state = AppState {
        builder: Arc::new(StaticBuilder::new(config.sitemaps)),
        formatter: Arc::new(XmlFormatter::new(config.base_url)),
    };

    server::serve(state, addr).await
}
