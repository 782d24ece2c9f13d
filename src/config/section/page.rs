//! `[home]` and `[about]` page configuration.
//!
//! # Example
//!
//! ```toml
//! [home]
//! path = "/"
//! title = "Jane's Portfolio"
//! description = "Design engineer"
//! headline = "Recent writing"
//!
//! [about]
//! path = "/about"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::has_parent_segment;
use serde::{Deserialize, Serialize};

/// Heading shown above the post listing when `[home] headline` is unset.
pub const DEFAULT_HEADLINE: &str = "Latest from the blog";

/// Path, title and description identifying a page.
///
/// Defaults describe the about page, the only secondary page the home page
/// links to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub path: String,
    pub title: String,
    pub description: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            path: "/about".into(),
            title: String::new(),
            description: String::new(),
        }
    }
}

/// `[home]` section: the page rendered at the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub path: String,
    pub title: String,
    pub description: String,

    /// Heading text above the post listing.
    pub headline: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            path: "/".into(),
            title: String::new(),
            description: String::new(),
            headline: DEFAULT_HEADLINE.into(),
        }
    }
}

impl HomeConfig {
    pub const PATH: FieldPath = FieldPath::new("home.path");
    pub const TITLE: FieldPath = FieldPath::new("home.title");

    /// Validate `[home]`.
    ///
    /// `path` decides where the page is written under the output directory,
    /// so `..` segments are rejected. Any title is accepted; a blank one
    /// only leaves the page without `<title>`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if has_parent_segment(&self.path) {
            diag.error_with_hint(
                Self::PATH,
                format!("{} `{}` must not contain `..` segments", Self::PATH, self.path),
                "use a path below the site root, e.g.: path = \"/\"",
            );
        }

        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "is empty, the page will have no <title>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_defaults() {
        let home = HomeConfig::default();
        assert_eq!(home.path, "/");
        assert_eq!(home.headline, DEFAULT_HEADLINE);
    }

    #[test]
    fn test_empty_title_only_warns() {
        let mut diag = ConfigDiagnostics::new();
        HomeConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        let home = HomeConfig {
            title: "Home".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        home.validate(&mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_path_with_parent_segments_rejected() {
        for path in ["/../../escaped", "/en/../..", ".."] {
            let home = HomeConfig {
                path: path.into(),
                title: "Home".into(),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            home.validate(&mut diag);
            assert!(diag.has_errors(), "accepted {path}");
        }

        for path in ["/", "/en/", "/..hidden"] {
            let home = HomeConfig {
                path: path.into(),
                title: "Home".into(),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            home.validate(&mut diag);
            assert!(!diag.has_errors(), "rejected {path}");
        }
    }

    #[test]
    fn test_about_default_path() {
        assert_eq!(PageConfig::default().path, "/about");
    }
}
