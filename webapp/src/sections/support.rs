use dioxus::prelude::*;

use content::SUPPORT_CARDS;

use crate::{
    common::theme::{section_title, use_theme},
    components::layout::{BoundedContainer, FullWidthSection},
};

#[component]
pub fn SupportSection() -> Element {
    let theme = use_theme();

    let title_style = section_title(theme);
    let intro_style = format!("line-height: 1.7; color: {};", theme.color.text.secondary);
    let card_style = format!(
        "padding: 26px; border-radius: {}; background: {};",
        theme.layout.radius.lg, theme.color.accent.subtle,
    );
    let card_title_style = format!(
        "font-size: 1.2rem; font-weight: {}; color: {};",
        theme.typography.weight.semibold, theme.color.text.primary,
    );
    let card_body_style = format!("margin-top: 10px; line-height: 1.6; color: {};", theme.color.text.tertiary);
    let cta_style = format!(
        "font-weight: {}; color: {};",
        theme.typography.weight.medium, theme.color.accent.primary,
    );

    rsx! {
        FullWidthSection { id: "support",
            BoundedContainer { class: "stack", style: "gap: 48px;",
                div { class: "stack", style: "max-width: 42rem; gap: 16px;",
                    h2 { style: "{title_style}", "Enterprise-grade support from day zero" }
                    p { style: "{intro_style}",
                        "From implementation to everyday operations, Fabricode partners with your mills and teams to keep production flowing."
                    }
                }

                div { class: "card-grid",
                    for card in SUPPORT_CARDS.iter() {
                        div { key: "{card.title}", class: "support-card", "data-support": card.title, style: "{card_style}",
                            div {
                                h3 { style: "{card_title_style}", "{card.title}" }
                                p { style: "{card_body_style}", "{card.description}" }
                            }
                            a { href: card.href, style: "{cta_style}", "{card.cta} →" }
                        }
                    }
                }
            }
        }
    }
}
