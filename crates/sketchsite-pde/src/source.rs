//! Example source loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::splitter::{join_sources, split_example, ParsedExample};

/// Errors that can occur while loading an example source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A loaded example source.
///
/// Holds the raw primary file text plus any sibling fragment files with the
/// same extension, in lexicographic filename order. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct ExampleSource {
    /// Top-level grouping (`Basics`, `Topics`, `3D`, `Libraries`).
    pub subcategory: String,

    /// Category directory within the subcategory (e.g. `Structure`).
    pub category: String,

    /// Example name; also the primary filename stem.
    pub name: String,

    /// Raw text of `<name>.pde`. Empty when the file is missing.
    pub primary: String,

    /// Texts of sibling `.pde` files, sorted by filename.
    pub fragments: Vec<String>,

    /// Directory the example was loaded from.
    pub dir: PathBuf,
}

impl ExampleSource {
    /// Load an example from `<examples_dir>/<subcategory>/<category>/<name>/`.
    ///
    /// A missing primary file loads as empty text rather than failing; other
    /// I/O errors are propagated.
    pub fn load(
        examples_dir: &Path,
        subcategory: &str,
        category: &str,
        name: &str,
    ) -> Result<Self, SourceError> {
        let dir = examples_dir.join(subcategory).join(category).join(name);
        let primary_name = format!("{name}.pde");

        let primary = read_or_empty(&dir.join(&primary_name))?;

        let mut fragment_names: Vec<String> = Vec::new();
        if let Ok(entries) = fs::read_dir(&dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let file_name = entry.file_name().to_string_lossy().to_string();
                if file_name.ends_with(".pde") && file_name != primary_name {
                    fragment_names.push(file_name);
                }
            }
        }
        // Directory listing order is not stable; sort for deterministic output.
        fragment_names.sort();

        let mut fragments = Vec::with_capacity(fragment_names.len());
        for file_name in &fragment_names {
            fragments.push(read_or_empty(&dir.join(file_name))?);
        }

        Ok(Self {
            subcategory: subcategory.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            primary,
            fragments,
            dir,
        })
    }

    /// Split into documentation and code.
    pub fn parse(&self) -> ParsedExample {
        split_example(&self.primary, &self.fragments)
    }

    /// Primary and fragment texts joined the way the splitter sees them.
    pub fn concatenated(&self) -> String {
        join_sources(&self.primary, &self.fragments)
    }

    /// Path of the compiled applet artifact for this example.
    ///
    /// The file may or may not exist; absence means the example renders
    /// without an embedded applet.
    pub fn applet_path(&self) -> PathBuf {
        self.dir.join("applet").join(format!("{}.jar", self.name))
    }
}

fn read_or_empty(path: &Path) -> Result<String, SourceError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("Source file not found: {}", path.display());
            Ok(String::new())
        }
        Err(e) => Err(SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
