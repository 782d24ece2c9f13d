//! Home page.
//!
//! ```text
//! Column (max width m, gap xl, centered)
//! ├── Metadata (WebPage structured data)
//! └── Section (column, gap 24)            only when `/blog` is enabled
//!     ├── Heading h3 (home.headline)
//!     └── Section (flex 3)
//!         └── Listing (posts, 2 columns)
//! ```

use super::node::{
    Align, Column, Columns, Heading, Listing, ListingSource, Node, Section, Space, Width,
};
use super::schema::{Author, SchemaKind, WebPageSchema};
use crate::config::{Route, SiteConfig};
use crate::seo::og::og_image_url;

/// Build the home page tree from site configuration.
///
/// Pure: equal configs produce equal trees.
pub fn render_home(config: &SiteConfig) -> Node {
    let mut children = vec![Node::Metadata(home_schema(config))];

    if config.routes.is_enabled(Route::Blog) {
        children.push(blog_section(&config.home.headline));
    }

    Node::Column(Column {
        max_width: Width::M,
        gap: Space::Xl,
        align: Align::Center,
        children,
    })
}

fn home_schema(config: &SiteConfig) -> WebPageSchema {
    let base_url = &config.site.base_url;
    let home = &config.home;

    WebPageSchema {
        kind: SchemaKind::WebPage,
        base_url: base_url.clone(),
        path: home.path.clone(),
        title: home.title.clone(),
        description: home.description.clone(),
        image: og_image_url(&home.title),
        author: Author {
            name: config.person.name.clone(),
            url: format!("{base_url}{}", config.about.path),
            image: format!("{base_url}{}", config.person.avatar),
        },
    }
}

fn blog_section(headline: &str) -> Node {
    let heading = Node::Heading(Heading {
        level: 3,
        padding_x: Some(Space::Px(20)),
        text: headline.to_owned(),
    });

    let posts = Node::Section(Section {
        flex: Some(3),
        padding_x: Some(Space::Px(20)),
        ..Section::row(vec![Node::Listing(Listing {
            source: ListingSource::Posts,
            columns: Columns::Two,
        })])
    });

    Node::Section(Section {
        fill_width: true,
        gap: Some(Space::Px(24)),
        ..Section::column(vec![heading, posts])
    })
}
