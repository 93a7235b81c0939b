//! Previous/next navigation control for example pages.

use crate::catalog::{neighbors, CatalogEntry, ExampleCatalog};
use crate::templates::TemplateEngine;

/// The fixed subcategory switcher entries, in display order.
const SWITCHER: [&str; 4] = ["Basics", "Topics", "3D", "Libraries"];

#[derive(Debug, serde::Serialize)]
struct SubcategoryLink {
    label: String,
    href: String,
    active: bool,
}

#[derive(Debug, serde::Serialize)]
struct OptionItem {
    value: String,
    label: String,
    selected: bool,
}

#[derive(Debug, serde::Serialize)]
struct OptionGroup {
    label: String,
    options: Vec<OptionItem>,
}

#[derive(Debug, serde::Serialize)]
struct Arrow {
    href: String,
    title: String,
}

impl Arrow {
    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            href: entry.file_key.to_lowercase(),
            title: entry.title.clone(),
        }
    }
}

/// Render the examples navigation control: a subcategory switcher header, a
/// dropdown over the full catalog with the current entry pre-selected, and
/// prev/next arrows.
///
/// A missing `prev` renders as a 48px blank placeholder so the dropdown stays
/// aligned; a missing `next` is omitted entirely.
pub fn build_nav(
    engine: &TemplateEngine,
    catalog: &ExampleCatalog,
    current_subcategory: &str,
    current_file_key: &str,
) -> Result<String, minijinja::Error> {
    let known = SWITCHER.contains(&current_subcategory);

    let subcategories: Vec<SubcategoryLink> = SWITCHER
        .iter()
        .map(|&label| {
            // When the subcategory is none of the fixed four, the switcher
            // shows a generic unhighlighted "Library" tail entry.
            let display = if !known && label == "Libraries" {
                "Library"
            } else {
                label
            };
            SubcategoryLink {
                label: display.to_string(),
                href: format!(
                    "{}learning/{}/",
                    engine.site_root(),
                    label.to_lowercase()
                ),
                active: known && label == current_subcategory,
            }
        })
        .collect();

    let groups: Vec<OptionGroup> = catalog
        .categories
        .iter()
        .map(|category| OptionGroup {
            label: category.name.clone(),
            options: category
                .entries
                .iter()
                .map(|entry| OptionItem {
                    value: entry.file_key.to_lowercase(),
                    label: entry.title.clone(),
                    selected: entry.file_key == current_file_key,
                })
                .collect(),
        })
        .collect();

    let found = neighbors(catalog, current_file_key);

    engine.render(
        "nav.html",
        minijinja::context! {
            site_root => engine.site_root(),
            subcategories => subcategories,
            groups => groups,
            prev => found.prev.as_ref().map(Arrow::from_entry),
            next => found.next.as_ref().map(Arrow::from_entry),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogCategory;

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            file_key: format!("{name}.html"),
            title: name.to_string(),
        }
    }

    fn catalog() -> ExampleCatalog {
        ExampleCatalog {
            categories: vec![CatalogCategory {
                name: "Structure".to_string(),
                entries: vec![entry("Loop"), entry("Redraw"), entry("SetupDraw")],
            }],
        }
    }

    fn engine() -> TemplateEngine {
        TemplateEngine::new("Mobile Processing", "/")
    }

    #[test]
    fn highlights_current_subcategory() {
        let html = build_nav(&engine(), &catalog(), "Topics", "Redraw.html").unwrap();

        assert!(html.contains(r#"<a href="/learning/topics/" class="activeSub">Topics</a>"#));
        assert!(html.contains(r#"<a href="/learning/basics/">Basics</a>"#));
        assert!(html.contains(">Libraries</a>"));
    }

    #[test]
    fn unknown_subcategory_shows_library_label() {
        let html = build_nav(&engine(), &catalog(), "Contrib", "Redraw.html").unwrap();

        assert!(!html.contains("activeSub"));
        assert!(html.contains(">Library</a>"));
        assert!(!html.contains(">Libraries</a>"));
    }

    #[test]
    fn middle_entry_gets_both_arrows() {
        let html = build_nav(&engine(), &catalog(), "Basics", "Redraw.html").unwrap();

        assert!(html.contains(r#"<a href="loop.html">"#));
        assert!(html.contains(r#"<a class="next" href="setupdraw.html">"#));
        assert!(!html.contains(r#"<td width="48">"#));
    }

    #[test]
    fn first_entry_gets_blank_placeholder_and_next() {
        let html = build_nav(&engine(), &catalog(), "Basics", "Loop.html").unwrap();

        assert!(html.contains(r#"<td width="48">&nbsp;</td>"#));
        assert!(html.contains(r#"<a class="next" href="redraw.html">"#));
    }

    #[test]
    fn last_entry_omits_next_arrow() {
        let html = build_nav(&engine(), &catalog(), "Basics", "SetupDraw.html").unwrap();

        assert!(html.contains("back_off.gif"));
        assert!(!html.contains("next_off.gif"));
    }

    #[test]
    fn absent_key_renders_placeholder_only() {
        let html = build_nav(&engine(), &catalog(), "Basics", "Missing.html").unwrap();

        assert!(html.contains(r#"<td width="48">&nbsp;</td>"#));
        assert!(!html.contains("next_off.gif"));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn dropdown_selects_current_entry() {
        let html = build_nav(&engine(), &catalog(), "Basics", "Redraw.html").unwrap();

        assert!(html.contains(r#"<optgroup label="Structure">"#));
        assert!(html.contains(r#"<option value="redraw.html" selected="selected">Redraw</option>"#));
        assert!(html.contains(r#"<option value="loop.html">Loop</option>"#));
    }
}
