//! Static site generation for the example and tutorial pages.
//!
//! Renders one HTML page per sketch example (documentation, escaped code,
//! prev/next navigation, embedded applet when a compiled artifact exists)
//! and exports the fixed set of tutorial pages.

pub mod builder;
pub mod catalog;
pub mod nav;
pub mod renderer;
pub mod templates;
pub mod tutorials;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder, SUBCATEGORIES};
pub use catalog::{neighbors, CatalogCategory, CatalogEntry, ExampleCatalog, Neighbors};
pub use templates::{PageContext, TemplateEngine};
pub use tutorials::{ExportResult, TutorialExporter};
