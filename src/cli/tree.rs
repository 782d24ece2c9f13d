//! `folio tree`: print the home page node tree as JSON.

use crate::{config::SiteConfig, page::render_home};
use anyhow::Result;
use std::io::{Write, stdout};

pub fn print_tree(config: &SiteConfig, pretty: bool) -> Result<()> {
    let json = tree_json(config, pretty)?;
    let mut stdout = stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn tree_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let tree = render_home(config);
    let json = if pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_tree_json() {
        let config = test_parse_config("[routes]\n\"/blog\" = true");
        let json: serde_json::Value =
            serde_json::from_str(&tree_json(&config, false).unwrap()).unwrap();

        assert_eq!(json["kind"], "column");
        let metadata = &json["children"][0];
        assert_eq!(metadata["kind"], "metadata");
        assert_eq!(metadata["as"], "webPage");
        assert_eq!(metadata["image"], "/api/og/generate?title=Home");
        assert_eq!(json["children"][1]["children"][0]["kind"], "heading");
    }

    #[test]
    fn test_tree_json_pretty() {
        let config = test_parse_config("");
        assert!(tree_json(&config, true).unwrap().contains('\n'));
        assert!(!tree_json(&config, false).unwrap().contains('\n'));
    }
}
