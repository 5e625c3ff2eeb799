use dioxus::prelude::*;

use content::{PageVariant, Theme};

// the page variant installed by the nearest PageVariantProvider, or the default variant
// when the component is rendered on its own
pub fn use_page_variant() -> PageVariant {
    try_use_context::<PageVariant>().unwrap_or_default()
}

pub fn use_theme() -> &'static Theme {
    use_page_variant().theme()
}

#[derive(Clone, PartialEq, Props)]
pub struct PageVariantProviderProps {
    variant: PageVariant,
    children: Element,
}

#[component]
pub fn PageVariantProvider(props: PageVariantProviderProps) -> Element {
    use_context_provider(|| props.variant);

    rsx! {
        {props.children}
    }
}

// shared inline style fragments
//
// these are the few token combinations that several components repeat verbatim
pub fn gradient_button(theme: &Theme) -> String {
    format!(
        "background: linear-gradient(135deg, {}, {}); color: {}; font-weight: {}; box-shadow: {};",
        theme.color.accent.gradient_from,
        theme.color.accent.gradient_to,
        theme.color.text.inverse,
        theme.typography.weight.medium,
        theme.shadow.soft,
    )
}

pub fn section_title(theme: &Theme) -> String {
    format!(
        "font-size: {}; font-weight: {}; color: {}; line-height: 1.1;",
        theme.typography.sizes.section_title,
        theme.typography.weight.semibold,
        theme.color.text.primary,
    )
}

pub fn overline(theme: &Theme) -> String {
    format!("color: {}; margin-bottom: 12px;", theme.color.text.secondary)
}
