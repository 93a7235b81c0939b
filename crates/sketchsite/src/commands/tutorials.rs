//! Tutorial export command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use sketchsite_static::TutorialExporter;

use crate::config::load_config;

/// Run the tutorials command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Exporting tutorial pages...");

    let file_config = load_config(config_path)?;

    let exporter = TutorialExporter::new(
        PathBuf::from(&file_config.tutorials.source),
        output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        &file_config.site.title,
        &file_config.site.root,
    );

    let result = exporter.export()?;

    tracing::info!(
        "Exported {} tutorial pages and {} images",
        result.pages,
        result.images
    );

    Ok(())
}
