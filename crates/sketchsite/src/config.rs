//! Configuration file loading (site.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub tutorials: TutorialsConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_content_dir")]
    pub content: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: default_content_dir(),
            output: default_output(),
            title: default_title(),
            root: default_root(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TutorialsConfig {
    #[serde(default = "default_tutorials_source")]
    pub source: String,
}

impl Default for TutorialsConfig {
    fn default() -> Self {
        Self {
            source: default_tutorials_source(),
        }
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_title() -> String {
    "Mobile Processing".to_string()
}
fn default_root() -> String {
    "/".to_string()
}
fn default_tutorials_source() -> String {
    "content/static/tutorials".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let config = load_config(Path::new("does-not-exist.toml")).unwrap();

        assert_eq!(config.site.content, "content");
        assert_eq!(config.site.output, "dist");
        assert_eq!(config.site.root, "/");
        assert_eq!(config.tutorials.source, "content/static/tutorials");
    }

    #[test]
    fn parses_partial_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\noutput = \"public\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.output, "public");
        assert_eq!(config.site.title, "Mobile Processing");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\noops").unwrap();

        assert!(load_config(&path).is_err());
    }
}
