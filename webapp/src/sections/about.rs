use dioxus::prelude::*;

use content::about_chips;

use crate::{
    common::theme::{section_title, use_theme},
    components::layout::{BoundedContainer, FullWidthSection},
};

#[component]
pub fn AboutSection() -> Element {
    let theme = use_theme();
    let color = &theme.color;

    let illustration_style = format!(
        "padding: 2.5rem; border-radius: {}; background: linear-gradient(135deg, {}, rgba(15, 23, 42, 0.08));",
        theme.layout.radius.lg, color.accent.subtle,
    );
    let outer_frame_style = format!(
        "inset: 18%; border-radius: {}; border: 1px solid {}; transform: rotate(-5deg);",
        theme.layout.radius.md, color.border.strong,
    );
    let inner_frame_style = format!(
        "inset: 12%; border-radius: {}; border: 1px solid {}; transform: rotate(4deg);",
        theme.layout.radius.md, color.accent.primary,
    );
    let chip_style = format!(
        "padding: 14px; font-size: 0.8rem; font-weight: {}; border-radius: {}; background: {}; border: 1px solid {}; box-shadow: {};",
        theme.typography.weight.medium,
        theme.layout.radius.md,
        color.background.surface,
        color.border.default,
        theme.shadow.card,
    );
    let caption_style = format!("font-size: 0.75rem; color: {};", color.text.secondary);
    let body_style = format!(
        "font-size: {}; line-height: 1.75; color: {};",
        theme.typography.sizes.body, color.text.secondary,
    );
    let title_style = section_title(theme);

    rsx! {
        FullWidthSection { id: "about", subdued: true,
            BoundedContainer { class: "split-grid",
                div { class: "about-illustration", style: "{illustration_style}",
                    div { class: "frame", "aria-hidden": "true", style: "{outer_frame_style}" }
                    div { class: "frame", "aria-hidden": "true", style: "{inner_frame_style}" }
                    div { class: "stack", style: "position: relative; z-index: 1; gap: 14px; text-align: center; color: {color.text.primary};",
                        div { class: "chip-grid",
                            for chip in about_chips() {
                                div { key: "{chip}", style: "{chip_style}", "{chip}" }
                            }
                        }
                        span { class: "overline", style: "{caption_style}", "Fabricode OS Core" }
                    }
                }

                div { class: "stack",
                    h2 { style: "{title_style}", "Modular platform crafted for every textile tenant" }
                    p { style: "{body_style}",
                        "Fabricode is a modular, multitenant platform built to simplify textile production management, from cotton to finished fabric. Each OS module handles a specific process, integrated seamlessly under one ecosystem and secured by tenant-aware access controls."
                    }
                    p { style: "{body_style}",
                        "Deploy tailored workflows for weaving, dyeing, logistics, and quality while sharing insights across all your mills. Fabricode scales with every site, ensuring your teams operate on a unified yet personalized operating system."
                    }
                }
            }
        }
    }
}
