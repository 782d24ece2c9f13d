//! Typed page node tree.
//!
//! A page is an immutable tree of [`Node`]s. Layout containers
//! ([`Column`], [`Section`]) carry design tokens, leaves carry content
//! ([`Heading`]), delegated rendering ([`Listing`]) or structured data
//! ([`WebPageSchema`]).
//!
//! The tree serializes to tagged JSON for `folio tree`:
//!
//! ```json
//! { "kind": "heading", "level": 3, "padding_x": "20", "text": "..." }
//! ```

use super::schema::WebPageSchema;
use serde::{Serialize, Serializer};
use std::fmt;

// ============================================================================
// Design tokens
// ============================================================================

/// Container width token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    M,
}

impl Width {
    pub const fn as_str(self) -> &'static str {
        match self {
            Width::M => "m",
        }
    }
}

/// Spacing token: named step or pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Xl,
    Px(u16),
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Xl => f.write_str("xl"),
            Space::Px(px) => write!(f, "{px}"),
        }
    }
}

impl Serialize for Space {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Center,
}

impl Align {
    pub const fn as_str(self) -> &'static str {
        match self {
            Align::Center => "center",
        }
    }
}

/// Column count hint passed to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    Two,
}

impl Columns {
    pub const fn count(self) -> u8 {
        match self {
            Columns::Two => 2,
        }
    }
}

impl Serialize for Columns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.count())
    }
}

/// External component a listing delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Posts,
}

impl ListingSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            ListingSource::Posts => "posts",
        }
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// One node of a page tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Column(Column),
    Metadata(WebPageSchema),
    Section(Section),
    Heading(Heading),
    Listing(Listing),
}

/// Vertical page container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub max_width: Width,
    pub gap: Space,
    pub align: Align,
    pub children: Vec<Node>,
}

/// Flex container grouping related content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub direction: Direction,
    pub fill_width: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Space>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<Space>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u8>,
    pub children: Vec<Node>,
}

impl Section {
    /// Row section with no spacing, flex or width hints.
    pub fn row(children: Vec<Node>) -> Self {
        Self {
            direction: Direction::Row,
            fill_width: false,
            gap: None,
            padding_x: None,
            flex: None,
            children,
        }
    }

    /// Column section with no spacing, flex or width hints.
    pub fn column(children: Vec<Node>) -> Self {
        Self {
            direction: Direction::Column,
            ..Self::row(children)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// `1..=6`, maps to `<h1>`..`<h6>`.
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<Space>,
    pub text: String,
}

/// Placeholder for a collection rendered by an external component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub source: ListingSource,
    pub columns: Columns,
}

impl Node {
    /// Direct children (empty for leaves).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Column(column) => &column.children,
            Node::Section(section) => &section.children,
            Node::Metadata(_) | Node::Heading(_) | Node::Listing(_) => &[],
        }
    }

    /// Pre-order traversal starting at `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Number of nodes in the subtree matching `pred`.
    pub fn count(&self, pred: impl Fn(&Node) -> bool) -> usize {
        self.descendants().filter(|node| pred(node)).count()
    }

    /// First structured-data node in the subtree.
    pub fn metadata(&self) -> Option<&WebPageSchema> {
        self.descendants().find_map(|node| match node {
            Node::Metadata(schema) => Some(schema),
            _ => None,
        })
    }
}

/// Iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> Node {
        Node::Heading(Heading {
            level: 2,
            padding_x: None,
            text: text.into(),
        })
    }

    fn tree() -> Node {
        Node::Column(Column {
            max_width: Width::M,
            gap: Space::Xl,
            align: Align::Center,
            children: vec![
                heading("a"),
                Node::Section(Section::column(vec![
                    heading("b"),
                    Node::Listing(Listing {
                        source: ListingSource::Posts,
                        columns: Columns::Two,
                    }),
                ])),
                heading("c"),
            ],
        })
    }

    #[test]
    fn test_descendants_pre_order() {
        let texts: Vec<_> = tree()
            .descendants()
            .filter_map(|node| match node {
                Node::Heading(h) => Some(h.text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_count() {
        let tree = tree();
        assert_eq!(tree.count(|_| true), 6);
        assert_eq!(tree.count(|n| matches!(n, Node::Listing(_))), 1);
        assert!(tree.metadata().is_none());
    }

    #[test]
    fn test_tokens_serialize_as_strings() {
        let json = serde_json::to_value(tree()).unwrap();
        assert_eq!(json["kind"], "column");
        assert_eq!(json["max_width"], "m");
        assert_eq!(json["gap"], "xl");
        assert_eq!(json["children"][1]["kind"], "section");
        assert_eq!(json["children"][1]["children"][1]["columns"], "2");
        assert_eq!(json["children"][1]["children"][1]["source"], "posts");
        assert!(json["children"][1].get("gap").is_none());
        assert_eq!(serde_json::to_value(Space::Px(24)).unwrap(), "24");
    }
}
