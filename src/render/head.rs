//! `<head>` writer.
//!
//! Title, description and canonical URL come from the first structured-data
//! node of the tree. Trees without one only get the charset and viewport.

use crate::config::SiteConfig;
use crate::page::Node;
use crate::page::schema::WebPageSchema;
use crate::seo::og::OgTags;
use crate::utils::html::{escape, escape_attr};

/// Writes `<head>…</head>` for a page tree.
pub struct HeadWriter<'a> {
    config: &'a SiteConfig,
}

impl<'a> HeadWriter<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub fn write(&self, tree: &Node, out: &mut String) {
        out.push_str("<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");

        if let Some(schema) = tree.metadata() {
            self.write_page_meta(schema, out);
        }

        out.push_str("</head>\n");
    }

    fn write_page_meta(&self, schema: &WebPageSchema, out: &mut String) {
        if !schema.title.is_empty() {
            out.push_str("<title>");
            out.push_str(&escape(&schema.title));
            out.push_str("</title>\n");
        }

        if !schema.description.is_empty() {
            push_meta(out, "name", "description", &schema.description);
        }

        out.push_str("<link rel=\"canonical\" href=\"");
        out.push_str(&escape_attr(&schema.page_url()));
        out.push_str("\">\n");

        let og = OgTags::from_schema(schema, self.config);
        for (attr, key, content) in og.entries() {
            if !content.is_empty() {
                push_meta(out, attr, key, content);
            }
        }
    }
}

fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
    out.push_str("<meta ");
    out.push_str(attr);
    out.push_str("=\"");
    out.push_str(key);
    out.push_str("\" content=\"");
    out.push_str(&escape_attr(content));
    out.push_str("\">\n");
}
