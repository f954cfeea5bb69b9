//! Configuration file loading and validation.

use crate::sitemap::Collection;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

/// Declarative sitemap configuration.
///
/// ```json
/// {
///   "base_url": "https://example.com/",
///   "sitemaps": { "xml": [[{"url": "/", "priority": 1.0}]] }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SitemapConfig {
    /// Absolute base URL of the site. Relative link URLs are resolved
    /// against it, and its host decides which links are kept.
    pub base_url: String,
    /// Sitemap identifier to link hierarchy.
    #[serde(default)]
    pub sitemaps: BTreeMap<String, Vec<Collection>>,
}

impl SitemapConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: SitemapConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is absolute and carries a host.
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url)
            .with_context(|| format!("base_url '{}' is not an absolute URL", self.base_url))?;
        if parsed.host_str().is_none() {
            bail!("base_url '{}' has no host", self.base_url);
        }
        Ok(())
    }
}
