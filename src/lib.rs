//! Sitemap XML generation from declarative link hierarchies.
//!
//! `sitemapper` turns nested collections of link records into
//! sitemaps.org-protocol documents: relative URLs are absolutized against a
//! configured base URL, links pointing at foreign hosts are silently dropped,
//! and per-locale alternates are advertised through `xhtml:link` elements.
//! The same document can be written to disk (`sitemapper generate`) or served
//! over HTTP (`sitemapper serve`).

pub mod cli;
pub mod config;
pub mod server;
pub mod sitemap;
