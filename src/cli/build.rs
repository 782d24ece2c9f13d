//! `folio build`: render the home page into the output directory.

use crate::{
    config::{Route, SiteConfig},
    debug, debug_do, log,
    page::render_home,
    render::render_document,
};
use crate::utils::path::{is_within, normalize_path};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Render and write the home page. Returns the written file.
pub fn build_site(config: &SiteConfig) -> Result<PathBuf> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        ensure_not_root(output, config.get_root())?;
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }

    let tree = render_home(config);
    debug!("build"; "home tree has {} nodes", tree.count(|_| true));

    debug_do! {
        let enabled: Vec<_> = config.routes.enabled().map(Route::as_str).collect();
        debug!("build"; "enabled routes: [{}]", enabled.join(", "));
    }

    if !config.routes.is_enabled(Route::Blog) {
        log!("build"; "route `{}` is disabled, home page only carries metadata", Route::Blog);
    }

    let html = render_document(&tree, config);

    let path = config.home_output_file();
    if !is_within(&path, output) {
        bail!(
            "refusing to write {} outside output directory {}",
            path.display(),
            output.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    let shown = path.strip_prefix(config.get_root()).unwrap_or(path.as_path());
    log!("build"; "wrote {}", shown.display());

    Ok(path)
}

/// Refuse to clean an output directory that is the project root or above it.
fn ensure_not_root(output: &Path, root: &Path) -> Result<()> {
    let output = output
        .canonicalize()
        .unwrap_or_else(|_| normalize_path(output));
    let root = root.canonicalize().unwrap_or_else(|_| normalize_path(root));

    if root.starts_with(&output) {
        bail!(
            "refusing to clean {}: it is the project root or contains it",
            output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir, extra: &str) -> SiteConfig {
        let mut config = test_parse_config(extra);
        config.root = dir.path().to_path_buf();
        config.build.output = dir.path().join("public");
        config
    }

    #[test]
    fn test_build_writes_index() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "[routes]\n\"/blog\" = true");

        let path = build_site(&config).unwrap();
        assert_eq!(path, dir.path().join("public/index.html"));

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains(r#"data-columns="2""#));
    }

    #[test]
    fn test_build_nested_home_path() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir, "");
        config.home.path = "/en".into();

        let path = build_site(&config).unwrap();
        assert_eq!(path, dir.path().join("public/en/index.html"));
        assert!(path.is_file());
    }

    #[test]
    fn test_build_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir, "");
        let stale = dir.path().join("public/stale.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();

        assert!(!stale.exists());
        assert!(dir.path().join("public/index.html").is_file());
    }

    #[test]
    fn test_clean_refuses_project_root() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir, "");
        let config_file = dir.path().join("folio.toml");
        let avatar = dir.path().join("images/avatar.jpg");
        fs::write(&config_file, "").unwrap();
        fs::create_dir_all(avatar.parent().unwrap()).unwrap();
        fs::write(&avatar, "").unwrap();

        config.build.output = config.root_join("");
        config.build.clean = true;

        assert!(build_site(&config).is_err());
        assert!(config_file.is_file());
        assert!(avatar.is_file());
    }

    #[test]
    fn test_clean_refuses_parent_of_root() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir, "");
        config.root = dir.path().join("site");
        fs::create_dir_all(&config.root).unwrap();
        let config_file = config.root_join("folio.toml");
        fs::write(&config_file, "").unwrap();

        config.build.output = dir.path().to_path_buf();
        config.build.clean = true;

        assert!(build_site(&config).is_err());
        assert!(config_file.is_file());
    }

    #[test]
    fn test_home_path_cannot_escape_output() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir, "");
        config.home.path = "/../../escaped".into();

        assert!(build_site(&config).is_err());
        assert!(!dir.path().join("escaped").exists());
        assert!(!dir.path().join("public/index.html").exists());
    }
}
