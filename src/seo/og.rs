//! Open Graph image URLs and meta tag data.
//!
//! Social preview images are produced by an external endpoint at
//! [`OG_GENERATE_PATH`]; pages only build the URL that points at it.

use crate::config::SiteConfig;
use crate::page::schema::WebPageSchema;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Path of the OG image generation endpoint.
pub const OG_GENERATE_PATH: &str = "/api/og/generate";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component.
///
/// `"A & B"` -> `"A%20%26%20B"`
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Root-relative OG image URL for a page title.
pub fn og_image_url(title: &str) -> String {
    format!("{OG_GENERATE_PATH}?title={}", encode_uri_component(title))
}

/// Resolve a root-relative path against the site base URL.
///
/// Absolute URLs are returned unchanged.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Open Graph and Twitter Card tags for one page.
pub struct OgTags<'a> {
    pub og_type: &'static str,
    pub title: &'a str,
    pub description: &'a str,
    pub url: String,
    pub image: String,
    pub locale: &'a str,
    pub twitter_card: &'static str,
}

impl<'a> OgTags<'a> {
    /// Build tags from a page's structured data.
    pub fn from_schema(schema: &'a WebPageSchema, config: &'a SiteConfig) -> Self {
        Self {
            og_type: "website",
            title: &schema.title,
            description: &schema.description,
            url: schema.page_url(),
            image: absolute_url(&schema.base_url, &schema.image),
            locale: &config.site.language,
            twitter_card: "summary_large_image",
        }
    }

    /// `(attribute, key, content)` triples in output order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, &str)> {
        vec![
            ("property", "og:type", self.og_type),
            ("property", "og:title", self.title),
            ("property", "og:description", self.description),
            ("property", "og:url", &self.url),
            ("property", "og:image", &self.image),
            ("property", "og:locale", self.locale),
            ("name", "twitter:card", self.twitter_card),
            ("name", "twitter:title", self.title),
            ("name", "twitter:description", self.description),
            ("name", "twitter:image", &self.image),
        ]
    }
}
