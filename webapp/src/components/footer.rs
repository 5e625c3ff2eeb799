use dioxus::prelude::*;

use content::{BRAND_NAME, FOOTER_GROUPS, SOCIAL_LINKS};

use crate::{
    common::{current_year, theme::use_theme},
    components::layout::BoundedContainer,
};

#[component]
pub fn Footer() -> Element {
    let theme = use_theme();
    let year = current_year();

    let footer_style = format!(
        "background: {}; color: {}; padding-top: 64px; padding-bottom: 48px;",
        theme.color.background.footer, theme.color.text.inverse
    );
    let brand_style = format!(
        "font-weight: {}; font-size: 1.25rem;",
        theme.typography.weight.semibold
    );
    let muted_style = format!(
        "margin-top: 16px; max-width: 320px; line-height: 1.5; color: {};",
        theme.color.text.inverse_muted
    );
    let group_title_style = format!(
        "font-weight: {}; margin-bottom: 12px;",
        theme.typography.weight.medium
    );
    let link_style = format!("color: {};", theme.color.text.inverse_muted);
    let copyright_style = format!("font-size: 0.9rem; color: {};", theme.color.text.inverse_muted);

    rsx! {
        footer { style: "{footer_style}",
            BoundedContainer { class: "footer-grid",
                div {
                    p { style: "{brand_style}", "{BRAND_NAME}" }
                    p { style: "{muted_style}",
                        "Modular textile management platform that scales with every mill, from cotton to finished fabric."
                    }
                }
                for group in FOOTER_GROUPS.iter() {
                    div { key: "{group.title}", "data-footer-group": group.title,
                        p { style: "{group_title_style}", "{group.title}" }
                        ul { class: "stack", style: "gap: 12px;",
                            for link in group.links.iter() {
                                li { key: "{link.href}",
                                    a { href: link.href, style: "{link_style}", "{link.label}" }
                                }
                            }
                        }
                    }
                }
            }

            BoundedContainer { class: "footer-bottom",
                p { class: "copyright", style: "{copyright_style}",
                    "© {year} {BRAND_NAME}. All rights reserved."
                }
                div { class: "social-links",
                    for (link, badge) in SOCIAL_LINKS.iter().map(|link| (link, link.badge())) {
                        a {
                            key: "{link.label}",
                            class: "social-link",
                            href: link.href,
                            "aria-label": link.label,
                            "{badge}"
                        }
                    }
                }
            }
        }
    }
}
