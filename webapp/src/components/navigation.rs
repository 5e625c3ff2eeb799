use dioxus::prelude::*;
use tracing::debug;

use content::{BRAND_NAME, MODULES_NAV_LINK, NAV_LINKS, REGISTER_HREF};

use crate::{
    common::{
        theme::{gradient_button, use_theme},
        toggle::NavState,
    },
    components::{layout::BoundedContainer, preview::ModulesPreview},
};

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    // state on mount, closed and hidden unless given
    #[props(default)]
    initial: NavState,
}

// sticky site header
//
// the menu and preview states live here and nowhere else; they reset whenever the header
// is unmounted
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let theme = use_theme();

    let initial = props.initial;
    let mut state = use_signal(|| initial);

    let menu_open = state().menu.is_open();
    let preview_shown = state().preview.is_shown();

    let header_style = format!(
        "background: {}; border-bottom: 1px solid {};",
        theme.color.background.header, theme.color.border.default
    );
    let brand_style = format!(
        "font-size: 1.15rem; font-weight: {}; letter-spacing: {}; color: {};",
        theme.typography.weight.semibold,
        theme.typography.letter_spacing.relaxed,
        theme.color.text.primary
    );
    let link_style = format!("font-size: 0.95rem; color: {};", theme.color.text.secondary);
    let panel_style = format!(
        "background: {}; border: 1px solid {}; border-radius: {}; box-shadow: {};",
        theme.color.background.surface,
        theme.color.border.default,
        theme.layout.radius.lg,
        theme.shadow.card
    );
    let cta_style = format!(
        "padding: 0.65rem 1.4rem; border-radius: {}; font-size: 0.95rem; {}",
        theme.layout.radius.full,
        gradient_button(theme)
    );
    let toggle_style = format!(
        "border-radius: {}; border: 1px solid {};",
        theme.layout.radius.md, theme.color.border.default
    );
    let mobile_menu_style = format!(
        "background: {}; border-top: 1px solid {};",
        theme.color.background.surface, theme.color.border.default
    );
    let mobile_link_style = format!("font-size: 1rem; color: {};", theme.color.text.primary);
    let mobile_cta_style = format!(
        "display: block; text-align: center; padding: 0.75rem 1.25rem; border-radius: {}; {}",
        theme.layout.radius.md,
        gradient_button(theme)
    );

    let (top_bar, middle_bar, bottom_bar) = if menu_open {
        (
            "nav-toggle-bar open-top",
            "nav-toggle-bar open-middle",
            "nav-toggle-bar open-bottom",
        )
    } else {
        ("nav-toggle-bar", "nav-toggle-bar", "nav-toggle-bar")
    };

    rsx! {
        header { class: "site-header", style: "{header_style}",
            BoundedContainer { class: "nav-container", style: "min-height: 80px;",
                a { href: "/", style: "{brand_style}", "{BRAND_NAME}" }

                nav { class: "nav-links desktop-only",
                    div {
                        class: "nav-preview-trigger",
                        onmouseenter: move |_| {
                            let next = state().on_pointer_enter();
                            debug!(?next, "modules preview pointer enter");
                            state.set(next);
                        },
                        onmouseleave: move |_| {
                            let next = state().on_pointer_leave();
                            debug!(?next, "modules preview pointer leave");
                            state.set(next);
                        },
                        a { href: MODULES_NAV_LINK.href, style: "{link_style}", "{MODULES_NAV_LINK.label}" }
                        if preview_shown {
                            div { class: "modules-preview", style: "{panel_style}",
                                ModulesPreview {}
                            }
                        }
                    }
                    for link in NAV_LINKS.iter() {
                        a { key: "{link.href}", href: link.href, style: "{link_style}", "{link.label}" }
                    }
                }

                div { class: "desktop-only",
                    a { href: REGISTER_HREF, style: "{cta_style}", "Get Now" }
                }

                button {
                    r#type: "button",
                    class: "nav-toggle mobile-only",
                    style: "{toggle_style}",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| {
                        let next = state().menu_toggled();
                        debug!(?next, "navigation menu toggled");
                        state.set(next);
                    },
                    span { class: top_bar }
                    span { class: middle_bar }
                    span { class: bottom_bar }
                }
            }

            if menu_open {
                div { class: "mobile-menu mobile-only", style: "{mobile_menu_style}",
                    BoundedContainer { class: "mobile-links",
                        details {
                            ontoggle: move |_| {
                                let next = state().disclosure_toggled();
                                debug!(?next, "modules preview disclosure toggled");
                                state.set(next);
                            },
                            summary { style: "{mobile_link_style}", "{MODULES_NAV_LINK.label}" }
                            ModulesPreview {}
                        }
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.href}",
                                href: link.href,
                                style: "{mobile_link_style}",
                                onclick: move |_| state.set(state().menu_closed()),
                                "{link.label}"
                            }
                        }
                        a {
                            href: REGISTER_HREF,
                            style: "{mobile_cta_style}",
                            onclick: move |_| state.set(state().menu_closed()),
                            "Get Now"
                        }
                    }
                }
            }
        }
    }
}
