//! The boundary between content hierarchies and the formatter.
//!
//! A [`SitemapBuilder`] owns the mapping from a sitemap identifier to its
//! link hierarchy; the formatter never sees where links came from.

use crate::sitemap::Collection;
use std::collections::BTreeMap;
use thiserror::Error;

/// Identifier used when a request names no hierarchy.
pub const DEFAULT_IDENT: &str = "xml";

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no sitemap hierarchy configured for ident '{0}'")]
    UnknownIdent(String),
}

/// Produces the collection set for a sitemap identifier.
pub trait SitemapBuilder: Send + Sync {
    fn build(&self, ident: &str) -> Result<Vec<Collection>, BuildError>;
}

/// Builder backed by hierarchies declared in the configuration file.
pub struct StaticBuilder {
    sitemaps: BTreeMap<String, Vec<Collection>>,
}

impl StaticBuilder {
    pub fn new(sitemaps: BTreeMap<String, Vec<Collection>>) -> Self {
        Self { sitemaps }
    }
}

impl SitemapBuilder for StaticBuilder {
    fn build(&self, ident: &str) -> Result<Vec<Collection>, BuildError> {
        self.sitemaps
            .get(ident)
            .cloned()
            .ok_or_else(|| BuildError::UnknownIdent(ident.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::Link;

    #[test]
    fn test_static_builder_lookup() {
        let mut sitemaps = BTreeMap::new();
        sitemaps.insert(
            "xml".to_string(),
            vec![vec![Link {
                url: "/".to_string(),
                ..Default::default()
            }]],
        );

        let builder = StaticBuilder::new(sitemaps);
        let collections = builder.build(DEFAULT_IDENT).unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0][0].url, "/");
    }

    #[test]
    fn test_static_builder_unknown_ident() {
        let builder = StaticBuilder::new(BTreeMap::new());
        let err = builder.build("news").unwrap_err();
        assert!(matches!(err, BuildError::UnknownIdent(ref ident) if ident == "news"));
    }
}
