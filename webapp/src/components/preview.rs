use dioxus::prelude::*;

use content::{MODULES, Module, PREVIEW_LIMIT, module_previews};

use crate::common::theme::use_theme;

#[derive(Clone, PartialEq, Props)]
pub struct ModulesPreviewProps {
    #[props(default = MODULES)]
    modules: &'static [Module],
    #[props(default)]
    class: &'static str,
}

// the first few modules with a one-sentence teaser each
//
// rendered inside the desktop hover panel and inside the mobile disclosure
#[component]
pub fn ModulesPreview(props: ModulesPreviewProps) -> Element {
    let theme = use_theme();
    let previews = module_previews(props.modules, PREVIEW_LIMIT);

    let name_style = format!(
        "font-weight: {}; color: {};",
        theme.typography.weight.semibold, theme.color.text.primary
    );
    let sentence_style = format!(
        "margin-top: 2px; font-size: 0.9rem; line-height: 1.5; color: {};",
        theme.color.text.secondary
    );

    rsx! {
        div { class: "modules-preview-list {props.class}",
            for preview in previews {
                a {
                    key: "{preview.id}",
                    class: "module-preview-item",
                    "data-preview": preview.id,
                    href: "{preview.href}",
                    span { "aria-hidden": "true", style: "font-size: 1.4rem;", "{preview.icon}" }
                    div {
                        p { style: "{name_style}", "{preview.name}" }
                        p { style: "{sentence_style}", "{preview.sentence}" }
                    }
                }
            }
        }
    }
}
