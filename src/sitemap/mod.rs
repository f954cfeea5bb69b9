//! Sitemap link hierarchies and their XML serialization.
//!
//! A sitemap is described as a set of collections — ordered lists of [`Link`]
//! records. Links may nest further collections under `children` to any depth;
//! the nesting exists only in the source data, the emitted document is flat
//! at the `<url>` level as the sitemap protocol requires.

pub mod builder;
pub mod formatter;
pub mod origin;

pub use builder::{BuildError, SitemapBuilder, StaticBuilder};
pub use formatter::XmlFormatter;

use serde::{Deserialize, Serialize};

/// An ordered list of links, one level of a sitemap hierarchy.
pub type Collection = Vec<Link>;

/// A single sitemap location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    /// Target URL, absolute or relative to the configured base URL.
    pub url: String,
    /// Last-modification stamp, emitted verbatim as `<lastmod>` when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Crawl priority in `[0.0, 1.0]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
    /// Per-locale variants of this location.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<Alternate>,
    /// Nested collections, expanded as sibling `<url>` entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Collection>,
}

impl Link {
    /// Last-modification stamp if one should be emitted.
    pub fn lastmod(&self) -> Option<&str> {
        self.last_modified.as_deref().filter(|v| !v.is_empty())
    }

    /// Priority if one should be emitted.
    ///
    /// A priority of exactly 0 is treated as absent. Zero is a legal
    /// sitemaps.org value, but suppressing it keeps output compatible with
    /// existing consumers of this format; see `test_priority_zero_omitted`.
    pub fn priority_value(&self) -> Option<f32> {
        self.priority.filter(|p| *p != 0.0)
    }
}

/// An hreflang variant of a link, advertised as an `xhtml:link` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternate {
    /// Variant URL, same resolution rules as [`Link::url`].
    pub url: String,
    /// Language/locale tag (`fr`, `en-CA`, ...).
    pub lang: String,
}
