//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"   # Relative to the project root
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Build output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory. Absolute after config loading.
    pub output: PathBuf,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public"),
            clean: false,
        }
    }
}

impl BuildConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");

    /// Validate `[build]` against the project root.
    ///
    /// The output directory is wiped by `--clean`, so it must not be the
    /// project root or one of its ancestors.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        let output = normalize_path(&self.output);
        if normalize_path(root).starts_with(&output) {
            diag.error_with_hint(
                Self::OUTPUT,
                format!(
                    "{} `{}` is the project root or contains it",
                    Self::OUTPUT,
                    self.output.display()
                ),
                "use a dedicated directory, e.g.: output = \"public\"",
            );
        }
    }
}
