//! Site builder for example pages.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use sketchsite_pde::{extract_size, ExampleSource};

use crate::catalog::ExampleCatalog;
use crate::nav::build_nav;
use crate::renderer::{render_example, AppletRef};
use crate::templates::{PageContext, TemplateEngine};

/// Fixed subcategories, in the order they are built.
pub const SUBCATEGORIES: [&str; 4] = ["Basics", "Topics", "3D", "Libraries"];

/// Configuration for building the example pages.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content root; examples live under `<content_dir>/examples`
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Site title for page chrome
    pub site_title: String,

    /// Root prefix for absolute links
    pub site_root: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            site_title: "Mobile Processing".to_string(),
            site_root: "/".to_string(),
        }
    }
}

/// Result of a build run.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of example pages written
    pub pages: usize,

    /// Number of applet artifacts copied
    pub applets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read content: {0}")]
    Read(String),

    #[error("Failed to load example: {0}")]
    Source(#[from] sketchsite_pde::SourceError),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Sequential builder for the example pages.
///
/// Processing is one example at a time; a fatal error leaves already written
/// pages in place and halts at the failing item. There is no rollback.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        let templates = TemplateEngine::new(&config.site_title, &config.site_root);
        Self { config, templates }
    }

    /// Build every example page.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let examples_dir = self.config.content_dir.join("examples");
        if !examples_dir.exists() {
            return Err(BuildError::Read(format!(
                "Examples directory not found: {}",
                examples_dir.display()
            )));
        }

        let mut pages = 0;
        let mut applets = 0;

        for subcategory in SUBCATEGORIES {
            let sub_dir = examples_dir.join(subcategory);
            if !sub_dir.is_dir() {
                tracing::debug!("No {} examples", subcategory);
                continue;
            }

            let catalog = ExampleCatalog::scan(&sub_dir)
                .map_err(|e| BuildError::Read(format!("{}: {}", sub_dir.display(), e)))?;

            for category in &catalog.categories {
                for entry in &category.entries {
                    let copied = self.build_example(
                        &examples_dir,
                        &catalog,
                        subcategory,
                        &category.name,
                        &entry.name,
                    )?;
                    pages += 1;
                    if copied {
                        applets += 1;
                    }
                }
            }
        }

        Ok(BuildResult {
            pages,
            applets,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Build one example page. Returns whether an applet artifact was copied.
    fn build_example(
        &self,
        examples_dir: &Path,
        catalog: &ExampleCatalog,
        subcategory: &str,
        category: &str,
        name: &str,
    ) -> Result<bool, BuildError> {
        let source = ExampleSource::load(examples_dir, subcategory, category, name)?;
        let parsed = source.parse();

        let applet_src = source.applet_path();
        let applet = applet_src
            .exists()
            .then(|| AppletRef::new(name, extract_size(&source.concatenated())));

        let body = render_example(&self.templates, &parsed, applet.as_ref())
            .map_err(|e| BuildError::Template(e.to_string()))?;
        let nav = build_nav(
            &self.templates,
            catalog,
            subcategory,
            &format!("{name}.html"),
        )
        .map_err(|e| BuildError::Template(e.to_string()))?;

        let mut extra = BTreeMap::new();
        extra.insert("examples_nav".to_string(), nav);

        let html = self
            .templates
            .render_page(&PageContext {
                title: format!("{name} \\ Learning"),
                active_nav_label: "Examples".to_string(),
                content_html: body,
                extra,
            })
            .map_err(|e| BuildError::Template(e.to_string()))?;

        let out_path = example_page_path(&self.config.output_dir, subcategory, name);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }
        fs::write(&out_path, html).map_err(|e| BuildError::Write(e.to_string()))?;
        tracing::info!("Wrote {}", out_path.display());

        if applet.is_some() {
            self.copy_applet(&applet_src, subcategory, name)
        } else {
            Ok(false)
        }
    }

    /// Copy the compiled applet into the shared media directory.
    ///
    /// Copy failure is diagnosed and skipped so the rest of the run can
    /// proceed; directory creation failure is fatal.
    fn copy_applet(
        &self,
        source: &Path,
        subcategory: &str,
        name: &str,
    ) -> Result<bool, BuildError> {
        let media_dir = self
            .config
            .output_dir
            .join("learning")
            .join(subcategory.to_lowercase())
            .join("media");
        fs::create_dir_all(&media_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let target = media_dir.join(format!("{name}.jar"));
        match fs::copy(source, &target) {
            Ok(_) => {
                tracing::debug!("Copied {} to {}", source.display(), target.display());
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(
                    "Could not copy {} to {}: {}",
                    source.display(),
                    target.display(),
                    e
                );
                Ok(false)
            }
        }
    }
}

/// Output path for an example page: `learning/<subcategory>/<name>.html`,
/// lower-cased.
pub fn example_page_path(output_dir: &Path, subcategory: &str, name: &str) -> PathBuf {
    output_dir
        .join("learning")
        .join(subcategory.to_lowercase())
        .join(format!("{}.html", name.to_lowercase()))
}
