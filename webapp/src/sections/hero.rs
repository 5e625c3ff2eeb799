use dioxus::prelude::*;

use content::REGISTER_HREF;

use crate::{
    common::theme::{gradient_button, use_theme},
    components::layout::{BoundedContainer, FullWidthSection},
};

pub const HERO_IMAGE: &str = "/images/fabricode-hero-grid.png";
pub const HERO_IMAGE_WIDTH: u32 = 640;
pub const HERO_IMAGE_HEIGHT: u32 = 460;

#[component]
pub fn HeroSection() -> Element {
    let theme = use_theme();
    let color = &theme.color;
    let typography = &theme.typography;

    let badge_style = format!(
        "font-size: {}; font-weight: {}; letter-spacing: {}; color: {}; background: {}; padding: 0.6rem 1.1rem; border-radius: {};",
        typography.sizes.overline,
        typography.weight.medium,
        typography.letter_spacing.wide,
        color.accent.primary,
        color.accent.subtle,
        theme.layout.radius.md,
    );
    let title_style = format!(
        "font-size: {}; font-weight: {}; letter-spacing: {}; line-height: 1.05; color: {};",
        typography.sizes.hero,
        typography.weight.semibold,
        typography.letter_spacing.tight,
        color.text.primary,
    );
    let subtitle_style = format!(
        "font-size: {}; max-width: 32rem; line-height: 1.6; color: {};",
        typography.sizes.subtitle, color.text.secondary,
    );
    let primary_style = format!(
        "padding: 1rem 1.75rem; border-radius: {}; text-align: center; {}",
        theme.layout.radius.full,
        gradient_button(theme),
    );
    let secondary_style = format!(
        "padding: 1rem 1.75rem; border-radius: {}; border: 1px solid {}; color: {}; font-weight: {}; text-align: center;",
        theme.layout.radius.full,
        color.border.default,
        color.text.primary,
        typography.weight.medium,
    );
    let illustration_style = format!(
        "width: 100%; padding: 2.75rem; border-radius: {}; background: linear-gradient(160deg, {}, rgba(15, 23, 42, 0.05)); box-shadow: {};",
        theme.layout.radius.xl, color.accent.subtle, theme.shadow.soft,
    );
    let frame_style = format!("border: 1px solid {};", color.border.strong);
    let image_style = format!("width: 100%; height: auto; border-radius: {};", theme.layout.radius.lg);

    rsx! {
        FullWidthSection {
            BoundedContainer { class: "split-grid",
                div { class: "stack",
                    span { class: "hero-badge", style: "{badge_style}", "Multitenant · Intelligent · Modular" }
                    h1 { style: "{title_style}",
                        "The Intelligent Operating System for Textile Manufacturing"
                    }
                    p { style: "{subtitle_style}",
                        "Unify your weaving, dyeing, logistics, and workflow operations under one smart ecosystem built for every tenant in your organization."
                    }
                    div { class: "button-row",
                        a { href: REGISTER_HREF, style: "{primary_style}", "Get Fabricode Now" }
                        a { href: "#modules", style: "{secondary_style}", "Explore Modules" }
                    }
                }

                div { class: "hero-illustration", style: "{illustration_style}",
                    div { class: "frame", "aria-hidden": "true", style: "{frame_style}" }
                    img {
                        src: HERO_IMAGE,
                        alt: "Fabricode OS modules connected",
                        width: "{HERO_IMAGE_WIDTH}",
                        height: "{HERO_IMAGE_HEIGHT}",
                        style: "{image_style}",
                    }
                }
            }
        }
    }
}
