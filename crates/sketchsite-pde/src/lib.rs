//! Sketch example parsing.
//!
//! This crate loads `.pde` example sources (a primary file plus optional
//! fragment files in the same directory) and splits them into a leading
//! documentation block and an HTML-escaped code block.

pub mod dimensions;
pub mod escape;
pub mod source;
pub mod splitter;

pub use dimensions::extract_size;
pub use escape::{escape_html, unescape_html};
pub use source::{ExampleSource, SourceError};
pub use splitter::{join_sources, split_example, ParsedExample};
