//! Example page build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use sketchsite_static::{BuildConfig, SiteBuilder};

use crate::config::load_config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building example pages...");

    let file_config = load_config(config_path)?;

    let config = BuildConfig {
        content_dir: PathBuf::from(&file_config.site.content),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        site_title: file_config.site.title,
        site_root: file_config.site.root,
    };

    let result = SiteBuilder::new(config).build()?;

    tracing::info!(
        "Built {} pages and copied {} applets in {}ms",
        result.pages,
        result.applets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
