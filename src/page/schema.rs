//! schema.org structured data for pages.
//!
//! A [`WebPageSchema`] is both a node of the page tree and the source of
//! the page's `<head>` metadata. It renders to JSON-LD:
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@type": "WebPage",
//!   "url": "https://example.com/",
//!   "name": "Home",
//!   "description": "...",
//!   "image": "https://example.com/api/og/generate?title=Home",
//!   "author": { "@type": "Person", "name": "...", "url": "...", "image": "..." }
//! }
//! ```

use crate::seo::og::absolute_url;
use serde::Serialize;
use serde_json::{Value, json};

/// schema.org type of a structured-data node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKind {
    WebPage,
}

impl SchemaKind {
    pub const fn schema_type(self) -> &'static str {
        match self {
            SchemaKind::WebPage => "WebPage",
        }
    }
}

/// Author of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub url: String,
    pub image: String,
}

/// Structured data describing one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageSchema {
    #[serde(rename = "as")]
    pub kind: SchemaKind,
    pub base_url: String,
    pub path: String,
    pub title: String,
    pub description: String,
    /// Root-relative or absolute image URL.
    pub image: String,
    pub author: Author,
}

impl WebPageSchema {
    /// Canonical URL of the page.
    pub fn page_url(&self) -> String {
        absolute_url(&self.base_url, &self.path)
    }

    /// JSON-LD object for a `<script type="application/ld+json">` block.
    ///
    /// Author fields are emitted exactly as stored.
    pub fn to_json_ld(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": self.kind.schema_type(),
            "url": self.page_url(),
            "name": self.title,
            "description": self.description,
            "image": absolute_url(&self.base_url, &self.image),
            "author": {
                "@type": "Person",
                "name": self.author.name,
                "url": self.author.url,
                "image": self.author.image,
            },
        })
    }
}
