//! Page tree → HTML document.
//!
//! # Modules
//!
//! - `head`: `<head>` content (title, description, canonical, OG tags)
//! - `body`: node tree → body markup

mod body;
mod head;

pub use body::BodyWriter;
pub use head::HeadWriter;

use crate::config::SiteConfig;
use crate::page::Node;
use crate::utils::html::escape_attr;

/// Render a full HTML document for a page tree.
pub fn render_document(tree: &Node, config: &SiteConfig) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"");
    html.push_str(&escape_attr(&config.site.language));
    html.push_str("\">\n");

    HeadWriter::new(config).write(tree, &mut html);

    html.push_str("<body>\n");
    BodyWriter::new().write(tree, &mut html);
    html.push_str("</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::page::render_home;

    fn render(extra: &str) -> String {
        let config = test_parse_config(extra);
        render_document(&render_home(&config), &config)
    }

    #[test]
    fn test_document_structure() {
        let html = render("");
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<head>"));
        assert!(html.contains("<body>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_blog_section_rendered() {
        let html = render("[routes]\n\"/blog\" = true");
        assert!(html.contains("<h3"));
        assert!(html.contains(r#"data-source="posts""#));
        assert!(html.contains(r#"data-columns="2""#));
    }

    #[test]
    fn test_blog_disabled_has_no_visible_content() {
        let html = render("");
        assert!(!html.contains("<h3"));
        assert!(!html.contains("data-source"));
        assert!(html.contains("application/ld+json"));
    }

    #[test]
    fn test_json_ld_precedes_blog_section() {
        let html = render("[routes]\n\"/blog\" = true");
        let ld = html.find("application/ld+json").unwrap();
        let heading = html.find("<h3").unwrap();
        assert!(ld < heading);
    }
}
