//! Static tutorial page export.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::builder::BuildError;
use crate::templates::{PageContext, TemplateEngine};

/// One tutorial page to export.
#[derive(Debug, Clone, Copy)]
pub struct TutorialPage {
    pub title: &'static str,
    /// HTML fragment path, relative to the tutorials source directory
    pub fragment: &'static str,
    /// Output path, relative to the output directory
    pub output: &'static str,
    /// Image directory to mirror, relative to the tutorials source directory
    pub image_dir: Option<&'static str>,
}

/// The fixed tutorial set. This list is part of the program, not data; new
/// tutorials are added here.
pub const TUTORIALS: [TutorialPage; 5] = [
    TutorialPage {
        title: "Tutorials",
        fragment: "index.html",
        output: "learning/tutorials/index.html",
        image_dir: None,
    },
    TutorialPage {
        title: "Processing in Eclipse",
        fragment: "eclipse/index.html",
        output: "learning/tutorials/eclipse/index.html",
        image_dir: Some("eclipse/imgs"),
    },
    TutorialPage {
        title: "Basics",
        fragment: "basics/index.html",
        output: "learning/tutorials/basics/index.html",
        image_dir: Some("basics/imgs"),
    },
    TutorialPage {
        title: "RGB Color",
        fragment: "color/index.html",
        output: "learning/tutorials/color/index.html",
        image_dir: Some("color/imgs"),
    },
    TutorialPage {
        title: "Regular Polygon",
        fragment: "regular_polygon/index.html",
        output: "learning/tutorials/regular_polygon/index.html",
        image_dir: Some("regular_polygon/imgs"),
    },
];

/// Result of a tutorial export run.
#[derive(Debug)]
pub struct ExportResult {
    /// Number of tutorial pages written
    pub pages: usize,

    /// Number of image files mirrored
    pub images: usize,
}

/// Exports the fixed tutorial set.
///
/// Fragments are read verbatim (no parsing) and wrapped in the shared page
/// template; associated image directories are mirrored into the output tree.
pub struct TutorialExporter {
    source_dir: PathBuf,
    output_dir: PathBuf,
    templates: TemplateEngine,
}

impl TutorialExporter {
    /// Create an exporter reading from `source_dir` and writing under
    /// `output_dir`.
    pub fn new(source_dir: PathBuf, output_dir: PathBuf, site_title: &str, site_root: &str) -> Self {
        Self {
            source_dir,
            output_dir,
            templates: TemplateEngine::new(site_title, site_root),
        }
    }

    /// Export all tutorial pages.
    pub fn export(&self) -> Result<ExportResult, BuildError> {
        let mut pages = 0;
        let mut images = 0;

        for tutorial in TUTORIALS {
            self.export_page(&tutorial)?;
            pages += 1;

            if let Some(image_dir) = tutorial.image_dir {
                let src = self.source_dir.join(image_dir);
                if !src.is_dir() {
                    tracing::debug!("No image directory at {}", src.display());
                    continue;
                }
                // Images land next to the page: learning/tutorials/<name>/imgs.
                let output_parent = Path::new(tutorial.output)
                    .parent()
                    .unwrap_or(Path::new(""));
                let dir_name = match src.file_name() {
                    Some(name) => name,
                    None => continue,
                };
                let dst = self.output_dir.join(output_parent).join(dir_name);
                images += mirror_dir(&src, &dst)?;
            }
        }

        Ok(ExportResult { pages, images })
    }

    fn export_page(&self, tutorial: &TutorialPage) -> Result<(), BuildError> {
        let fragment_path = self.source_dir.join(tutorial.fragment);
        let content = match fs::read_to_string(&fragment_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Tutorial fragment not found: {}", fragment_path.display());
                String::new()
            }
            Err(e) => {
                return Err(BuildError::Read(format!(
                    "{}: {}",
                    fragment_path.display(),
                    e
                )))
            }
        };

        let html = self
            .templates
            .render_page(&PageContext {
                title: tutorial.title.to_string(),
                active_nav_label: "Tutorials".to_string(),
                content_html: content,
                extra: BTreeMap::new(),
            })
            .map_err(|e| BuildError::Template(e.to_string()))?;

        let out_path = self.output_dir.join(tutorial.output);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }
        fs::write(&out_path, html).map_err(|e| BuildError::Write(e.to_string()))?;
        tracing::info!("Wrote {}", out_path.display());

        Ok(())
    }
}

/// Recursively mirror `src` into `dst`, returning the number of files copied.
///
/// Directory creation failures are fatal; individual file copy failures are
/// diagnosed and skipped.
fn mirror_dir(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;

    for entry in WalkDir::new(src) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", src.display(), e);
                continue;
            }
        };
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| BuildError::Write(e.to_string()))?;
        } else if let Err(e) = fs::copy(entry.path(), &target) {
            tracing::warn!(
                "Could not copy {} to {}: {}",
                entry.path().display(),
                target.display(),
                e
            );
        } else {
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn exporter(source: &Path, output: &Path) -> TutorialExporter {
        TutorialExporter::new(
            source.to_path_buf(),
            output.to_path_buf(),
            "Mobile Processing",
            "/",
        )
    }

    fn seed_fragments(source: &Path) {
        for tutorial in TUTORIALS {
            let path = source.join(tutorial.fragment);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("<h2>{}</h2>", tutorial.title)).unwrap();
        }
    }

    #[test]
    fn exports_all_pages() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("tutorials");
        let out = temp.path().join("dist");
        seed_fragments(&source);

        let result = exporter(&source, &out).export().unwrap();

        assert_eq!(result.pages, TUTORIALS.len());
        for tutorial in TUTORIALS {
            let html = fs::read_to_string(out.join(tutorial.output)).unwrap();
            assert!(html.contains(&format!("<h2>{}</h2>", tutorial.title)));
            assert!(html.contains(&format!("<title>{} \\ Mobile Processing</title>", tutorial.title)));
        }
    }

    #[test]
    fn fragment_is_wrapped_verbatim() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("tutorials");
        let out = temp.path().join("dist");
        seed_fragments(&source);
        fs::write(
            source.join("index.html"),
            "<p>Plain <b>markup</b> &amp; entities stay as-is.</p>",
        )
        .unwrap();

        exporter(&source, &out).export().unwrap();

        let html = fs::read_to_string(out.join("learning/tutorials/index.html")).unwrap();
        assert!(html.contains("<p>Plain <b>markup</b> &amp; entities stay as-is.</p>"));
    }

    #[test]
    fn mirrors_image_directories() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("tutorials");
        let out = temp.path().join("dist");
        seed_fragments(&source);

        let imgs = source.join("eclipse/imgs");
        fs::create_dir_all(imgs.join("nested")).unwrap();
        fs::write(imgs.join("step1.gif"), b"gif").unwrap();
        fs::write(imgs.join("nested/step2.gif"), b"gif").unwrap();

        let result = exporter(&source, &out).export().unwrap();

        assert_eq!(result.images, 2);
        assert!(out.join("learning/tutorials/eclipse/imgs/step1.gif").exists());
        assert!(out
            .join("learning/tutorials/eclipse/imgs/nested/step2.gif")
            .exists());
    }

    #[test]
    fn missing_fragment_exports_empty_page() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("tutorials");
        let out = temp.path().join("dist");
        fs::create_dir_all(&source).unwrap();

        let result = exporter(&source, &out).export().unwrap();

        assert_eq!(result.pages, TUTORIALS.len());
        let html = fs::read_to_string(out.join("learning/tutorials/index.html")).unwrap();
        assert!(html.contains("<title>Tutorials \\ Mobile Processing</title>"));
    }
}
