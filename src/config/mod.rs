//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `[site]`   | Base URL and language                           |
//! | `[person]` | Author name and avatar                          |
//! | `[home]`   | Home page path, title, description, headline    |
//! | `[about]`  | About page path (linked as the author URL)      |
//! | `[routes]` | Enabled site sections, keyed by route path      |
//! | `[build]`  | Output directory                                |
//! | `[serve]`  | Preview server (interface, port)                |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildConfig, HomeConfig, PageConfig, PersonConfig, Route, RouteTable, ServeConfig,
    SiteInfoConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub person: PersonConfig,

    #[serde(default)]
    pub home: HomeConfig,

    #[serde(default)]
    pub about: PageConfig,

    #[serde(default)]
    pub routes: RouteTable,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(config_path) = find_config_file(&cli.config, &cwd) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found in {} or any parent directory",
                cli.config.display(),
                cwd.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.build.output = self.root_join(&self.build.output);

        self.apply_command_options(cli);
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// File the home page is written to, derived from `home.path`.
    ///
    /// `/` -> `<output>/index.html`, `/en/` -> `<output>/en/index.html`
    pub fn home_output_file(&self) -> PathBuf {
        let relative = self.home.path.trim_matches('/');
        if relative.is_empty() {
            self.build.output.join("index.html")
        } else {
            self.build.output.join(relative).join("index.html")
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                self.apply_serve_options(*interface, *port);
            }
            // Tree command only reads config
            Commands::Tree { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        self.build.clean = args.clean;
        Self::update_option(&mut self.site.base_url, args.base_url.as_ref());
    }

    /// Apply serve-specific options.
    fn apply_serve_options(&mut self, interface: Option<std::net::IpAddr>, port: Option<u16>) {
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());

        // Local preview links to itself unless a base URL was configured
        if self.site.base_url.is_empty() {
            self.site.base_url = format!("http://{}:{}", self.serve.interface, self.serve.port);
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.home.validate(&mut diag);
        self.build.validate(self.get_root(), &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` and `[home]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\nbase_url = \"https://example.com\"\n[home]\ntitle = \"Home\"\ndescription = \"Test\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<SiteConfig, _> = toml::from_str("[site\nbase_url = \"https://example.com\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.language, "en");
        assert_eq!(config.home.path, "/");
        assert_eq!(config.about.path, "/about");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.serve.port, 5277);
        assert!(!config.routes.is_enabled(Route::Blog));
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"
[person]
name = "Jane Doe"
avatar = "/images/avatar.jpg"

[about]
path = "/about-me"
title = "About"

[routes]
"/blog" = true

[build]
output = "dist"
"#,
        );

        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.home.title, "Home");
        assert_eq!(config.home.headline, HomeConfig::default().headline);
        assert_eq!(config.person.name, "Jane Doe");
        assert_eq!(config.about.path, "/about-me");
        assert!(config.routes.is_enabled(Route::Blog));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nbase_url = \"https://example.com\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.base_url, "https://example.com");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/site");
        config.build.output = PathBuf::from("/site");
        config.home.path = "/../escaped".into();

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_empty_output_rejected_after_finalize() {
        let cli = Cli::parse_from(["folio", "build", "--clean"]);
        let mut config = test_parse_config("[build]\noutput = \"\"");
        config.config_path = PathBuf::from("/site/folio.toml");
        config.finalize(&cli);

        assert!(config.build.clean);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_title_is_accepted() {
        let mut config = test_parse_config("");
        config.home.title = "   ".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_home_output_file() {
        let mut config = test_parse_config("");
        config.build.output = PathBuf::from("/site/public");
        assert_eq!(
            config.home_output_file(),
            PathBuf::from("/site/public/index.html")
        );

        config.home.path = "/en/".into();
        assert_eq!(
            config.home_output_file(),
            PathBuf::from("/site/public/en/index.html")
        );
    }

    #[test]
    fn test_finalize_applies_cli_options() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("folio.toml");

        let cli = Cli::parse_from([
            "folio",
            "--output",
            "out",
            "serve",
            "--port",
            "8080",
        ]);
        let mut config = test_parse_config("");
        config.site.base_url.clear();
        config.config_path = config_path;
        config.finalize(&cli);

        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.build.output, dir.path().join("out"));
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.site.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_build_base_url_override() {
        let cli = Cli::parse_from(["folio", "build", "--base-url", "https://me.dev"]);
        let mut config = test_parse_config("");
        config.config_path = PathBuf::from("/site/folio.toml");
        config.finalize(&cli);

        assert_eq!(config.site.base_url, "https://me.dev");
        assert_eq!(config.build.output, PathBuf::from("/site/public"));
    }
}
