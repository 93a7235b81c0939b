//! Template engine for rendering site pages.

use std::collections::BTreeMap;

use minijinja::{context, Environment};

/// Top navigation labels and their paths relative to the site root.
const TOP_NAV: [(&str, &str); 5] = [
    ("Cover", ""),
    ("Learning", "learning/"),
    ("Reference", "reference/"),
    ("Download", "download/"),
    ("FAQ", "faq/"),
];

/// Learning subnavigation sections.
const LEARNING_SECTIONS: [(&str, &str); 2] = [
    ("Examples", "learning/"),
    ("Tutorials", "learning/tutorials/"),
];

/// Context for rendering a full page.
///
/// `extra` holds named template slots beyond the fixed ones; example pages
/// use it to pass the `examples_nav` control.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Page title (goes into `<title>` alongside the site title)
    pub title: String,
    /// Top navigation label to render as active (unlinked)
    pub active_nav_label: String,
    /// Page body HTML
    pub content_html: String,
    /// Named template slots
    pub extra: BTreeMap<String, String>,
}

#[derive(Debug, serde::Serialize)]
struct NavLink {
    label: String,
    href: String,
    active: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
    site_title: String,
    site_root: String,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new(site_title: &str, site_root: &str) -> Self {
        let mut env = Environment::new();
        // HTML-bearing values are pre-escaped and piped through `| safe`;
        // auto-escaping would mangle hrefs (`/` -> `&#x2f;`).
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");
        env.add_template_owned("example.html".to_string(), EXAMPLE_TEMPLATE.to_string())
            .expect("Failed to add example template");
        env.add_template_owned("nav.html".to_string(), NAV_TEMPLATE.to_string())
            .expect("Failed to add nav template");

        Self {
            env,
            site_title: site_title.to_string(),
            site_root: site_root.to_string(),
        }
    }

    /// Site root prefix for absolute links.
    pub fn site_root(&self) -> &str {
        &self.site_root
    }

    /// Render a full page with the shared chrome.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let in_learning = LEARNING_SECTIONS
            .iter()
            .any(|(label, _)| *label == ctx.active_nav_label);

        let top_nav: Vec<NavLink> = TOP_NAV
            .iter()
            .map(|(label, path)| NavLink {
                label: (*label).to_string(),
                href: format!("{}{}", self.site_root, path),
                active: *label == ctx.active_nav_label
                    || (*label == "Learning" && in_learning),
            })
            .collect();

        let subnav: Option<Vec<NavLink>> = in_learning.then(|| {
            LEARNING_SECTIONS
                .iter()
                .map(|(label, path)| NavLink {
                    label: (*label).to_string(),
                    href: format!("{}{}", self.site_root, path),
                    active: *label == ctx.active_nav_label,
                })
                .collect()
        });

        let tmpl = self.env.get_template("page.html")?;
        tmpl.render(context! {
            title => &ctx.title,
            site_title => &self.site_title,
            site_root => &self.site_root,
            top_nav => top_nav,
            subnav => subnav,
            content => &ctx.content_html,
            extra => &ctx.extra,
        })
    }

    /// Render one of the built-in partial templates.
    pub(crate) fn render<S: serde::Serialize>(
        &self,
        template: &str,
        ctx: S,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(template)?.render(ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new("Mobile Processing", "/")
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN"
                      "http://www.w3.org/TR/html4/strict.dtd">
<html>
<head>
<title>{{ title }} \ {{ site_title }}</title>
<meta http-equiv="Content-Type" content="text/html; charset=iso-8859-1">
<link rel="stylesheet" href="{{ site_root }}css/style.css" type="text/css">
</head>
<body>
<div id="head">
    <img src="{{ site_root }}img/header.gif" alt="{{ site_title }}">
</div>
<div id="navigation">
    <img src="{{ site_root }}img/nav_bottomarrow.gif" alt="">
{%- for item in top_nav %}
    {% if item.active %}{{ item.label }}{% else %}<a href="{{ item.href }}">{{ item.label }}</a>{% endif %}{% if not loop.last %} <span class="backslash">\</span>{% endif %}
{%- endfor %}
</div>
{%- if subnav %}
<div id="subnavigation">
{%- for item in subnav %}
    {% if item.active %}{{ item.label }}{% else %}<a href="{{ item.href }}">{{ item.label }}</a>{% endif %}{% if not loop.last %} <span class="backslash">\</span>{% endif %}
{%- endfor %}
</div>
{%- endif %}
<div id="content">
{%- if extra.examples_nav %}
{{ extra.examples_nav | safe }}
{%- endif %}
{{ content | safe }}
</div>
<div id="footer">{{ site_title }}</div>
</body>
</html>
"##;

const EXAMPLE_TEMPLATE: &str = r##"<div class="example">
{%- if applet %}
<div class="applet">
	<applet code="{{ applet.name }}" archive="media/{{ applet.name }}.jar" width="{{ applet.width }}" height="{{ applet.height }}"></applet>
</div>
<p class="doc-float">{{ documentation | safe }}</p>
{%- else %}
<p class="doc">{{ documentation | safe }}</p>
{%- endif %}
<pre class="code">{{ code | safe }}</pre>
</div>
"##;

const NAV_TEMPLATE: &str = r##"<table id="examples-nav">
<tr><td>&nbsp;</td><td>
{%- for sub in subcategories %}<a href="{{ sub.href }}"{% if sub.active %} class="activeSub"{% endif %}>{{ sub.label }}</a>{% if not loop.last %} \ {% endif %}{% endfor %}
</td><td>&nbsp;</td></tr>
<tr><td>&nbsp;</td><td>&nbsp;</td><td>&nbsp;</td></tr>
<tr>
{%- if prev %}
<td><a href="{{ prev.href }}"><img src="{{ site_root }}img/back_off.gif" alt="{{ prev.title }}"></a></td>
{%- else %}
<td width="48">&nbsp;</td>
{%- endif %}
<td>
<select name="nav" size="1" class="inputnav" onchange="javascript:gogo(this)">
{%- for group in groups %}
	<optgroup label="{{ group.label }}">
{%- for option in group.options %}
		<option value="{{ option.value }}"{% if option.selected %} selected="selected"{% endif %}>{{ option.label }}</option>
{%- endfor %}
	</optgroup>
{%- endfor %}
</select>
</td>
{%- if next %}
<td><a class="next" href="{{ next.href }}"><img src="{{ site_root }}img/next_off.gif" alt="{{ next.title }}"></a></td>
{%- endif %}
</tr>
</table>
"##;
