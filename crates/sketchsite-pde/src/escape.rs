//! HTML escaping for code listings.

/// Escape `&`, `<`, `>` and `"` for embedding source code in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Invert [`escape_html`].
///
/// `&amp;` is decoded last so that escaped output containing entity-looking
/// text (e.g. `&amp;lt;`) maps back to the original input.
pub fn unescape_html(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
