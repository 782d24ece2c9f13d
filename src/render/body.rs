//! Body writer: node tree → markup.
//!
//! Layout tokens become `data-*` attributes for the site stylesheet.
//! Listings render as empty mount points that the component named by
//! `data-source` fills in.

use crate::page::Node;
use crate::page::node::{Column, Heading, Listing, Section};
use crate::page::schema::WebPageSchema;
use crate::utils::html::{escape, escape_attr, escape_script_json};

/// Writes the markup of a node tree.
#[derive(Debug, Default)]
pub struct BodyWriter {
    depth: usize,
}

impl BodyWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, node: &Node, out: &mut String) {
        match node {
            Node::Column(column) => self.write_column(column, out),
            Node::Section(section) => self.write_section(section, out),
            Node::Metadata(schema) => self.write_metadata(schema, out),
            Node::Heading(heading) => self.write_heading(heading, out),
            Node::Listing(listing) => self.write_listing(listing, out),
        }
    }

    fn write_column(&mut self, column: &Column, out: &mut String) {
        self.open(out);
        out.push_str("<div class=\"column\"");
        push_attr(out, "data-max-width", column.max_width.as_str());
        push_attr(out, "data-gap", &column.gap.to_string());
        push_attr(out, "data-align", column.align.as_str());
        out.push_str(">\n");

        self.write_children(&column.children, out);

        self.close("div", out);
    }

    fn write_section(&mut self, section: &Section, out: &mut String) {
        self.open(out);
        out.push_str("<div class=\"flex\"");
        push_attr(out, "data-direction", section.direction.as_str());
        if section.fill_width {
            out.push_str(" data-fill-width");
        }
        if let Some(gap) = section.gap {
            push_attr(out, "data-gap", &gap.to_string());
        }
        if let Some(padding) = section.padding_x {
            push_attr(out, "data-padding-x", &padding.to_string());
        }
        if let Some(flex) = section.flex {
            push_attr(out, "data-flex", &flex.to_string());
        }
        out.push_str(">\n");

        self.write_children(&section.children, out);

        self.close("div", out);
    }

    fn write_metadata(&mut self, schema: &WebPageSchema, out: &mut String) {
        self.open(out);
        out.push_str("<script type=\"application/ld+json\">");
        out.push_str(&escape_script_json(&schema.to_json_ld().to_string()));
        out.push_str("</script>\n");
    }

    fn write_heading(&mut self, heading: &Heading, out: &mut String) {
        let tag = format!("h{}", heading.level.clamp(1, 6));

        self.open(out);
        out.push('<');
        out.push_str(&tag);
        if let Some(padding) = heading.padding_x {
            push_attr(out, "data-padding-x", &padding.to_string());
        }
        out.push('>');
        out.push_str(&escape(&heading.text));
        out.push_str("</");
        out.push_str(&tag);
        out.push_str(">\n");
    }

    fn write_listing(&mut self, listing: &Listing, out: &mut String) {
        self.open(out);
        out.push_str("<div class=\"");
        out.push_str(listing.source.as_str());
        out.push('"');
        push_attr(out, "data-source", listing.source.as_str());
        push_attr(out, "data-columns", &listing.columns.count().to_string());
        out.push_str("></div>\n");
    }

    fn write_children(&mut self, children: &[Node], out: &mut String) {
        self.depth += 1;
        for child in children {
            self.write(child, out);
        }
        self.depth -= 1;
    }

    /// Indent the next opening tag.
    fn open(&self, out: &mut String) {
        for _ in 0..self.depth {
            out.push_str("  ");
        }
    }

    fn close(&self, tag: &str, out: &mut String) {
        self.open(out);
        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}
