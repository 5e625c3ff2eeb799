use dioxus::prelude::*;

use content::{CONTACT_HREF, REGISTER_HREF};

use crate::{
    common::theme::{gradient_button, section_title, use_theme},
    components::layout::{BoundedContainer, FullWidthSection},
};

// closing call to action
#[component]
pub fn GetStartedSection() -> Element {
    let theme = use_theme();

    let title_style = section_title(theme);
    let body_style = format!(
        "font-size: {}; line-height: 1.7; color: {};",
        theme.typography.sizes.subtitle, theme.color.text.secondary,
    );
    let primary_style = format!(
        "padding: 1rem 1.75rem; border-radius: {}; {}",
        theme.layout.radius.full,
        gradient_button(theme),
    );
    let secondary_style = format!(
        "padding: 1rem 1.75rem; border-radius: {}; border: 1px solid {}; color: {}; font-weight: {};",
        theme.layout.radius.full,
        theme.color.border.default,
        theme.color.text.primary,
        theme.typography.weight.medium,
    );

    rsx! {
        FullWidthSection { id: "cta", subdued: true,
            BoundedContainer { class: "centered stack",
                h2 { style: "{title_style}", "Ready to weave your operating system?" }
                p { style: "{body_style}",
                    "Start the 6-month pilot today and bring every mill, department and tenant onto one modular platform."
                }
                div { class: "button-row", style: "justify-content: center;",
                    a { href: REGISTER_HREF, style: "{primary_style}", "Get Fabricode Now" }
                    a { href: CONTACT_HREF, style: "{secondary_style}", "Talk to our team" }
                }
            }
        }
    }
}
