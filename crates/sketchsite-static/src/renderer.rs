//! Example page body rendering.

use sketchsite_pde::ParsedExample;

use crate::templates::TemplateEngine;

/// Default applet display box when the sketch declares no usable `size()`.
pub const DEFAULT_APPLET_SIZE: (u32, u32) = (200, 200);

/// An embedded applet reference for a rendered example.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AppletRef {
    /// Applet class and archive name (case preserved)
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl AppletRef {
    /// Build a reference with the given dimensions, or the 200x200 default.
    pub fn new(name: &str, size: Option<(u32, u32)>) -> Self {
        let (width, height) = size.unwrap_or(DEFAULT_APPLET_SIZE);
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }
}

/// Render the example body: applet box (when a compiled artifact exists),
/// documentation paragraph, and the escaped code listing.
///
/// With an applet the documentation floats beside the display box; without
/// one it takes the full width. Documentation newlines become `<br>` tags.
pub fn render_example(
    engine: &TemplateEngine,
    parsed: &ParsedExample,
    applet: Option<&AppletRef>,
) -> Result<String, minijinja::Error> {
    engine.render(
        "example.html",
        minijinja::context! {
            documentation => nl2br(&parsed.documentation),
            code => &parsed.code,
            applet => applet,
        },
    )
}

fn nl2br(text: &str) -> String {
    text.replace('\n', "<br>\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(doc: &str, code: &str) -> ParsedExample {
        ParsedExample {
            documentation: doc.to_string(),
            code: code.to_string(),
        }
    }

    fn engine() -> TemplateEngine {
        TemplateEngine::new("Mobile Processing", "/")
    }

    #[test]
    fn renders_applet_with_floating_doc() {
        let applet = AppletRef::new("Redraw", Some((128, 128)));
        let html =
            render_example(&engine(), &parsed("Doc text.", "code();"), Some(&applet)).unwrap();

        assert!(html.contains(
            r#"<applet code="Redraw" archive="media/Redraw.jar" width="128" height="128"></applet>"#
        ));
        assert!(html.contains(r#"<p class="doc-float">Doc text.</p>"#));
    }

    #[test]
    fn renders_full_width_doc_without_applet() {
        let html = render_example(&engine(), &parsed("Doc text.", "code();"), None).unwrap();

        assert!(html.contains(r#"<p class="doc">Doc text.</p>"#));
        assert!(!html.contains("<applet"));
    }

    #[test]
    fn documentation_newlines_become_breaks() {
        let html = render_example(&engine(), &parsed("One. \n\n Two.", ""), None).unwrap();

        assert!(html.contains("One. <br>\n<br>\n Two."));
    }

    #[test]
    fn escaped_code_is_not_escaped_again() {
        let html = render_example(&engine(), &parsed("", "if (x &lt; 10) {}"), None).unwrap();

        assert!(html.contains("<pre class=\"code\">if (x &lt; 10) {}</pre>"));
        assert!(!html.contains("&amp;lt;"));
    }

    #[test]
    fn missing_size_falls_back_to_default_box() {
        let applet = AppletRef::new("Cube", None);

        assert_eq!((applet.width, applet.height), DEFAULT_APPLET_SIZE);
    }
}
