//! Documentation/code splitting for example sources.

use crate::escape::escape_html;

/// An example source split into documentation and code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExample {
    /// Flattened text of the leading comment block, joined with spaces.
    /// Blank comment lines become `"\n\n"` paragraph markers.
    pub documentation: String,

    /// Everything after the comment terminator, HTML-escaped, one line per
    /// source line.
    pub code: String,
}

/// Split an example into documentation and code.
///
/// The primary text and each fragment are concatenated with three newlines
/// between them, then scanned line by line. Lines up to the first `*/` are
/// documentation: the `*/` line itself and any `/**` lines are dropped, a
/// leading `" * "` marker is stripped, and blank lines become paragraph
/// breaks. Every line after the terminator is code, unconditionally; there
/// is no way back into documentation mode, even if later comments appear.
///
/// A source with no `*/` at all never leaves documentation mode and yields
/// an empty code block.
pub fn split_example(primary: &str, fragments: &[String]) -> ParsedExample {
    let text = join_sources(primary, fragments);

    let mut doc_lines: Vec<String> = Vec::new();
    let mut code_lines: Vec<String> = Vec::new();
    let mut in_doc = true;

    for line in text.split('\n') {
        if in_doc {
            if line.contains("*/") {
                in_doc = false;
                continue;
            }
            if line.contains("/**") {
                continue;
            }
            let stripped = line.strip_prefix(" * ").unwrap_or(line).trim();
            if stripped.is_empty() {
                doc_lines.push("\n\n".to_string());
            } else {
                doc_lines.push(stripped.to_string());
            }
        } else {
            code_lines.push(escape_html(line));
        }
    }

    ParsedExample {
        documentation: doc_lines.join(" "),
        code: code_lines.join("\n"),
    }
}

/// Join a primary source and its fragments with the three-newline separator
/// the splitter scans. Dimension extraction reads the same joined text.
pub fn join_sources(primary: &str, fragments: &[String]) -> String {
    let mut text = String::from(primary);
    for fragment in fragments {
        text.push_str("\n\n\n");
        text.push_str(fragment);
    }
    text
}
