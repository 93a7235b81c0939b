//! Example catalog: the ordered grouping of all examples by category.

use std::fs;
use std::io;
use std::path::Path;

/// One example in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogEntry {
    /// Example directory name, case preserved (e.g. `PhotoSlider`).
    pub name: String,

    /// Key used for navigation matching: `<name>.html`, case preserved.
    pub file_key: String,

    /// Display name shown in the navigation dropdown.
    pub title: String,
}

/// An ordered category of examples.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogCategory {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

/// The full ordered catalog for one subcategory.
///
/// Read-only input to the navigation builder; the order of categories and
/// entries determines prev/next neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ExampleCatalog {
    pub categories: Vec<CatalogCategory>,
}

impl ExampleCatalog {
    /// Scan a subcategory directory (`<content>/examples/<Subcategory>`).
    ///
    /// Expects `<Category>/<Name>/<Name>.pde`; directories without a primary
    /// source file are skipped. Categories and examples are sorted by name
    /// so repeated scans of the same tree produce the same catalog.
    pub fn scan(subcategory_dir: &Path) -> io::Result<Self> {
        let mut categories = Vec::new();

        for category_name in sorted_subdirs(subcategory_dir)? {
            let category_dir = subcategory_dir.join(&category_name);
            let mut entries = Vec::new();

            for example_name in sorted_subdirs(&category_dir)? {
                let primary = category_dir
                    .join(&example_name)
                    .join(format!("{example_name}.pde"));
                if !primary.exists() {
                    tracing::debug!("Skipping {}: no primary source", example_name);
                    continue;
                }

                entries.push(CatalogEntry {
                    file_key: format!("{example_name}.html"),
                    title: example_name.clone(),
                    name: example_name,
                });
            }

            if !entries.is_empty() {
                categories.push(CatalogCategory {
                    name: category_name,
                    entries,
                });
            }
        }

        Ok(Self { categories })
    }

    /// Iterate all entries in catalog order, across categories.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }
}

/// Previous and next siblings of an example in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub prev: Option<CatalogEntry>,
    pub next: Option<CatalogEntry>,
}

/// Find the neighbors of `file_key` with a single scan over the catalog.
///
/// Matching is a case-sensitive exact comparison against each entry's file
/// key. Neighbors carry across category boundaries: the last entry of one
/// category is `prev` for the first entry of the next. An absent key leaves
/// both sides empty.
pub fn neighbors(catalog: &ExampleCatalog, file_key: &str) -> Neighbors {
    let mut result = Neighbors::default();
    let mut last: Option<&CatalogEntry> = None;
    let mut take_next = false;

    for entry in catalog.entries() {
        if take_next {
            result.next = Some(entry.clone());
            take_next = false;
        }
        if entry.file_key == file_key {
            result.prev = last.cloned();
            take_next = true;
        }
        last = Some(entry);
    }

    result
}

fn sorted_subdirs(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}
