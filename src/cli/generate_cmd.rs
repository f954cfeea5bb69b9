//! Generate a sitemap document and write it out.

use crate::config::SitemapConfig;
use crate::sitemap::{SitemapBuilder, StaticBuilder, XmlFormatter};
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::info;

/// Build one hierarchy and write the XML to a file or stdout.
pub fn run(config_path: &Path, ident: &str, output: Option<&Path>) -> Result<()> {
    let config = SitemapConfig::load(config_path)?;
    let builder = StaticBuilder::new(config.sitemaps);
    let formatter = XmlFormatter::new(config.base_url);

    let collections = builder.build(ident)?;
    let xml = formatter
        .collections_to_xml(&collections)
        .ok_or_else(|| anyhow!("sitemap serialization failed for ident '{ident}'"))?;

    match output {
        Some(path) => {
            std::fs::write(path, &xml)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = xml.len(), "sitemap written");
        }
        None => println!("{xml}"),
    }

    Ok(())
}
