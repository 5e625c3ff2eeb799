use dioxus::prelude::*;

use common::config::SiteConfig;
use webapp::{GLOBAL_STYLES, StaticPage};

// a complete html document for the configured variant
//
// the stylesheets are inlined verbatim: they are trusted constants and must not pass through
// the renderer, which would escape them as text
pub fn render_document(config: &SiteConfig) -> String {
    let title = config.title.clone();
    let description = config.description.clone();
    let variant = config.variant;

    let head = dioxus_ssr::render_element(rsx! {
        title { "{title}" }
        meta { name: "description", content: "{description}" }
    });
    let body = dioxus_ssr::render_element(rsx! {
        StaticPage { variant: variant }
    });
    let theme_variables = variant.theme().css_variables();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}
<style>{GLOBAL_STYLES}</style>
<style>{theme_variables}</style>
</head>
<body>
<div id="main">{body}</div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use content::PageVariant;

    use super::*;

    #[test]
    fn document_contains_page_and_styles() {
        let html = render_document(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"modules\""));
        assert!(html.contains("--color-accent-primary: #1E3A8A;"));
        assert!(html.contains(".site-header {"));
    }

    #[test]
    fn document_uses_configured_variant() {
        let config = SiteConfig {
            variant: PageVariant::Catalog,
            ..SiteConfig::default()
        };
        let html = render_document(&config);

        assert!(html.contains("--layout-max-width: 1120px;"));
        assert!(html.contains("Learn More"));
    }

    #[test]
    fn head_text_is_escaped() {
        let config = SiteConfig {
            title: String::from("Looms <&> Dyes"),
            ..SiteConfig::default()
        };
        let html = render_document(&config);

        assert!(!html.contains("Looms <&> Dyes"));
        assert!(html.contains("<title>Looms &lt;&amp;"));
    }
}
