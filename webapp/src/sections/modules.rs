use dioxus::prelude::*;

use content::{MODULES, Module, ModuleLayout, ModuleSummary};

use crate::{
    common::theme::{overline, section_title, use_page_variant, use_theme},
    components::layout::{BoundedContainer, FullWidthSection},
};

#[derive(Clone, PartialEq, Props)]
pub struct ModulesSectionProps {
    // defaults to the layout of the current page variant
    #[props(default)]
    layout: Option<ModuleLayout>,
    #[props(default = MODULES)]
    modules: &'static [Module],
}

// one card per module, in registry order
#[component]
pub fn ModulesSection(props: ModulesSectionProps) -> Element {
    let theme = use_theme();
    let variant = use_page_variant();
    let layout = props.layout.unwrap_or(variant.module_layout());

    let overline_style = overline(theme);
    let title_style = section_title(theme);
    let intro_style = format!("line-height: 1.7; color: {};", theme.color.text.secondary);

    rsx! {
        FullWidthSection { id: "modules",
            BoundedContainer { class: "stack", style: "gap: 48px;",
                div { class: "split-grid", style: "align-items: end;",
                    div {
                        p { class: "overline", style: "{overline_style}", "OS Modules" }
                        h2 { style: "{title_style}", "Explore Fabricode Modules" }
                    }
                    p { style: "{intro_style}",
                        "Each module focuses on a distinct textile process. Combine them like building blocks to create the operating system your mill deserves. Launch a module in minutes, provision it to specific tenants, and monitor performance across the entire network."
                    }
                }

                div { class: "card-grid",
                    match layout {
                        ModuleLayout::Compact => rsx! {
                            for module in props.modules.iter() {
                                ModuleCard { key: "{module.id}", summary: module.summary() }
                            }
                        },
                        ModuleLayout::Detailed => rsx! {
                            for (index, module) in props.modules.iter().enumerate() {
                                ModuleDetailCard { key: "{module.id}", module: module, index: index }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModuleCardProps {
    summary: ModuleSummary,
}

// compact card: icon, name and headline linking to the module page
#[component]
pub fn ModuleCard(props: ModuleCardProps) -> Element {
    let theme = use_theme();
    let summary = props.summary;

    let card_style = format!(
        "border-radius: {}; background: {}; border: 1px solid {}; box-shadow: {};",
        theme.layout.radius.lg,
        theme.color.background.surface,
        theme.color.border.default,
        theme.shadow.card,
    );
    let name_style = format!(
        "font-size: 1.1rem; font-weight: {}; color: {};",
        theme.typography.weight.semibold, theme.color.text.primary,
    );
    let headline_style = format!(
        "margin-top: 8px; font-size: 0.95rem; line-height: 1.5; color: {};",
        theme.color.text.secondary,
    );
    let more_style = format!(
        "font-size: 0.95rem; font-weight: {}; color: {};",
        theme.typography.weight.medium, theme.color.accent.primary,
    );

    rsx! {
        a {
            class: "module-card",
            "data-module": summary.id,
            href: "{summary.href}",
            style: "{card_style}",
            span { "aria-hidden": "true", style: "font-size: 2rem;", "{summary.icon}" }
            div {
                p { style: "{name_style}", "{summary.name}" }
                p { style: "{headline_style}", "{summary.headline}" }
            }
            span { class: "learn-more", style: "{more_style}", "Learn More →" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModuleDetailCardProps {
    module: &'static Module,
    // position in the grid, selects the alternating background
    index: usize,
}

// full card: title, quoted headline, description and the capability list
#[component]
pub fn ModuleDetailCard(props: ModuleDetailCardProps) -> Element {
    let theme = use_theme();
    let module = props.module;

    let card_style = format!(
        "border-radius: {}; background: {}; border: 1px solid {}; box-shadow: {};",
        theme.layout.radius.lg,
        theme.module_background(props.index),
        theme.color.border.default,
        theme.shadow.card,
    );
    let title_style = format!(
        "font-size: 1.2rem; font-weight: {}; color: {};",
        theme.typography.weight.semibold, theme.color.text.primary,
    );
    let quote_style = format!(
        "font-style: italic; padding-left: 12px; border-left: 3px solid {}; color: {};",
        theme.color.accent.primary, theme.color.text.primary,
    );
    let body_style = format!("line-height: 1.6; color: {};", theme.color.text.secondary);
    let capability_style = format!("font-size: 0.95rem; color: {};", theme.color.text.tertiary);

    rsx! {
        article {
            class: "module-card",
            "data-module": module.id,
            style: "{card_style}",
            div { style: "display: flex; gap: 12px; align-items: center;",
                span { "aria-hidden": "true", style: "font-size: 1.75rem;", "{module.icon}" }
                div {
                    p { class: "overline", style: "color: {theme.color.accent.primary};", "{module.name}" }
                    h3 { style: "{title_style}", "{module.title}" }
                }
            }
            blockquote { style: "{quote_style}", "“{module.headline}”" }
            p { style: "{body_style}", "{module.description}" }
            ul { class: "module-capabilities",
                for capability in module.capabilities.iter() {
                    li { key: "{capability}", style: "{capability_style}", "{capability}" }
                }
            }
        }
    }
}
