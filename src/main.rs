//! Folio - renders the home page of a portfolio/blog site to static HTML.

mod cli;
mod config;
mod logger;
mod page;
mod render;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Serve { .. } => {
            cli::build::build_site(&config)?;
            cli::serve::serve_site(&config)
        }
        Commands::Tree { pretty } => cli::tree::print_tree(&config, *pretty),
    }
}
