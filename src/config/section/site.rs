//! `[site]` configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! base_url = "https://example.com"   # No trailing slash
//! language = "en"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Absolute site URL, joined verbatim with page and asset paths.
    pub base_url: String,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const BASE_URL: FieldPath = FieldPath::new("site.base_url");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `base_url` must be set
    /// - `base_url` must be a valid http(s) URL with a host
    /// - a trailing `/` on `base_url` is reported as a warning
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.base_url.is_empty() {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("{} is not configured", Self::BASE_URL),
                format!("set {}, e.g.: \"https://example.com\"", Self::BASE_URL),
            );
            return;
        }

        match url::Url::parse(&self.base_url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::BASE_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::BASE_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::BASE_URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }

        if self.base_url.ends_with('/') {
            diag.warn(
                Self::BASE_URL,
                "ends with '/', page and avatar paths are appended verbatim",
            );
        }
    }
}
