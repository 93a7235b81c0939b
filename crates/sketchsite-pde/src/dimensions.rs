//! Sketch display dimension extraction.

use regex::Regex;

/// Find the first `size(w, h)` call in a sketch and return its dimensions.
///
/// Returns `None` when there is no `size()` call or when either argument is
/// not a plain numeric literal (e.g. `size(width, height)`). Callers fall
/// back to the default 200x200 applet box in that case.
pub fn extract_size(source: &str) -> Option<(u32, u32)> {
    let re = Regex::new(r"(?m)(?:^|[\s;])size\s*\(\s*(\w+)\s*,\s*(\w+)")
        .expect("size pattern is valid");

    let caps = re.captures(source)?;
    let width = caps.get(1)?.as_str().parse().ok()?;
    let height = caps.get(2)?.as_str().parse().ok()?;

    Some((width, height))
}
