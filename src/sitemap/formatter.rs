//! Sitemap XML serialization.
//!
//! Walks link collections recursively and emits one flat urlset document.
//! Links and alternates resolving to a foreign host are dropped without
//! comment; the children of a dropped link are still walked, so locally
//! hosted descendants of an external link remain in the output.

use crate::sitemap::{origin, Alternate, Collection, Link};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io;
use tracing::warn;

/// Default sitemap namespace.
const XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
/// XHTML namespace, carries the hreflang alternate links.
const XMLNS_XHTML: &str = "http://www.w3.org/1999/xhtml";
/// XML Schema instance namespace.
const XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Schema location advertised on the urlset element.
const XSI_SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9 \
     http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

/// Cut-off for runaway `children` nesting.
const MAX_DEPTH: usize = 64;

/// Serializes link collections into sitemaps.org XML documents.
pub struct XmlFormatter {
    base_url: String,
}

impl XmlFormatter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Serialize a set of collections into one urlset document.
    ///
    /// Returns `None` when the writer cannot produce a string; partial
    /// output is never returned. An empty set yields a valid empty urlset.
    pub fn collections_to_xml(&self, collections: &[Collection]) -> Option<String> {
        self.write_document(collections).ok()
    }

    /// Serialize a single collection into one urlset document.
    pub fn collection_to_xml(&self, collection: &Collection) -> Option<String> {
        self.write_document(std::slice::from_ref(collection)).ok()
    }

    fn write_document(&self, collections: &[Collection]) -> io::Result<String> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", XMLNS));
        urlset.push_attribute(("xmlns:xhtml", XMLNS_XHTML));
        urlset.push_attribute(("xmlns:xsi", XMLNS_XSI));
        urlset.push_attribute(("xsi:schemaLocation", XSI_SCHEMA_LOCATION));
        writer.write_event(Event::Start(urlset))?;

        for collection in collections {
            self.write_collection(&mut writer, collection, 0)?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        String::from_utf8(writer.into_inner())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_collection(
        &self,
        writer: &mut Writer<Vec<u8>>,
        collection: &Collection,
        depth: usize,
    ) -> io::Result<()> {
        for link in collection {
            self.write_link(writer, link, depth)?;
        }
        Ok(())
    }

    /// Emit one `<url>` element if the link is internal, then expand its
    /// children as siblings regardless.
    fn write_link(&self, writer: &mut Writer<Vec<u8>>, link: &Link, depth: usize) -> io::Result<()> {
        let loc = origin::absolutize(&link.url, &self.base_url);

        if !origin::is_external(&loc, &self.base_url) {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            write_text_element(writer, "loc", &loc)?;

            if let Some(lastmod) = link.lastmod() {
                write_text_element(writer, "lastmod", lastmod)?;
            }

            if let Some(priority) = link.priority_value() {
                write_text_element(writer, "priority", &priority.to_string())?;
            }

            for alternate in &link.alternates {
                self.write_alternate(writer, alternate)?;
            }

            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        if !link.children.is_empty() {
            if depth >= MAX_DEPTH {
                warn!(url = %link.url, "children nested deeper than {MAX_DEPTH} levels, cutting off");
                return Ok(());
            }
            for child in &link.children {
                self.write_collection(writer, child, depth + 1)?;
            }
        }

        Ok(())
    }

    fn write_alternate(&self, writer: &mut Writer<Vec<u8>>, alternate: &Alternate) -> io::Result<()> {
        let href = origin::absolutize(&alternate.url, &self.base_url);
        if origin::is_external(&href, &self.base_url) {
            return Ok(());
        }

        let mut element = BytesStart::new("xhtml:link");
        element.push_attribute(("rel", "alternate"));
        element.push_attribute(("hreflang", alternate.lang.as_str()));
        element.push_attribute(("href", href.as_str()));
        writer.write_event(Event::Empty(element))
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}
