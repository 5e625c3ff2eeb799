use dioxus::prelude::*;

use content::{PRICING_INCLUSIONS, PRICING_PLAN};

use crate::{
    common::theme::{overline, section_title, use_theme},
    components::layout::{BoundedContainer, FullWidthSection},
};

// a single static plan
//
// every figure is a literal from the registry; nothing here computes a price
#[component]
pub fn PricingSection() -> Element {
    let theme = use_theme();
    let plan = PRICING_PLAN;

    let overline_style = overline(theme);
    let title_style = section_title(theme);
    let secondary_style = format!("line-height: 1.7; color: {};", theme.color.text.secondary);
    let card_style = format!(
        "border-radius: {}; background: {};",
        theme.layout.radius.xl, theme.color.accent.subtle,
    );
    let plan_name_style = format!("font-size: 1.4rem; font-weight: {};", theme.typography.weight.semibold);
    let badge_style = format!("font-size: 0.85rem; color: {};", theme.color.accent.primary);
    let price_style = format!("font-size: 2.5rem; font-weight: {};", theme.typography.weight.semibold);
    let bullet_style = format!("margin-top: 4px; color: {};", theme.color.accent.primary);
    let cta_style = format!(
        "display: inline-flex; justify-content: center; padding: 0.95rem; border-radius: {}; background: {}; color: {}; font-weight: {}; letter-spacing: 0.01em;",
        theme.layout.radius.md,
        theme.color.accent.primary,
        theme.color.text.inverse,
        theme.typography.weight.medium,
    );

    rsx! {
        FullWidthSection { id: "pricing", subdued: true,
            BoundedContainer { class: "stack", style: "gap: 48px;",
                div { class: "centered stack",
                    p { class: "overline", style: "{overline_style}", "Pricing" }
                    h2 { style: "{title_style}", "Start free, scale with your production network" }
                    p { style: "{secondary_style}",
                        "Fabricode OS launches with a 6-month free pilot. Move to a transparent enterprise plan once your modules are live across tenants."
                    }
                }

                div { class: "pricing-card stack", style: "{card_style}",
                    div {
                        h3 { style: "{plan_name_style}", "{plan.name}" }
                        p { style: "margin-top: 8px; {secondary_style}", "{plan.summary}" }
                    }

                    div {
                        span { class: "overline", style: "{badge_style}", "{plan.badge}" }
                        div { style: "display: flex; align-items: baseline; gap: 8px; margin-top: 12px;",
                            span { class: "price", style: "{price_style}", "{plan.price_headline}" }
                            span { style: "{secondary_style}", "{plan.price_qualifier}" }
                        }
                        p { style: "margin-top: 4px; {secondary_style}", "{plan.price_followup}" }
                    }

                    ul { class: "pricing-inclusions stack", style: "gap: 12px;",
                        for item in PRICING_INCLUSIONS.iter() {
                            li { key: "{item}",
                                span { "aria-hidden": "true", style: "{bullet_style}", "•" }
                                span { style: "{secondary_style}", "{item}" }
                            }
                        }
                    }

                    a { href: plan.cta_href, style: "{cta_style}", "{plan.cta_label}" }
                }
            }
        }
    }
}
