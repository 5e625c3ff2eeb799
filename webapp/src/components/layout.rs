use dioxus::prelude::*;

use crate::common::theme::use_theme;

#[derive(Clone, PartialEq, Props)]
pub struct BoundedContainerProps {
    children: Element,
    // appended to the container's own classes and styles
    #[props(default)]
    class: &'static str,
    #[props(default)]
    style: &'static str,
}

// centers its children and clamps them to the theme's maximum width
#[component]
pub fn BoundedContainer(props: BoundedContainerProps) -> Element {
    let theme = use_theme();
    let layout = &theme.layout;

    let class = if props.class.is_empty() {
        String::from("bounded-container")
    } else {
        format!("bounded-container {}", props.class)
    };
    let style = format!(
        "width: 100%; max-width: {}; margin: 0 auto; padding-left: clamp({}, 5vw, {}); padding-right: clamp({}, 5vw, {}); {}",
        layout.max_width,
        layout.gutter.mobile,
        layout.gutter.desktop,
        layout.gutter.mobile,
        layout.gutter.desktop,
        props.style,
    );

    rsx! {
        div { class: "{class}", style: "{style}", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FullWidthSectionProps {
    children: Element,
    // anchor target, omitted from the markup when absent
    #[props(default)]
    id: Option<&'static str>,
    // swaps the base background for the surface background
    #[props(default)]
    subdued: bool,
}

#[component]
pub fn FullWidthSection(props: FullWidthSectionProps) -> Element {
    let theme = use_theme();

    let background = section_background(theme, props.subdued);
    let padding = &theme.layout.section_padding;
    let style = format!(
        "width: 100%; padding-top: clamp({}, 8vw, {}); padding-bottom: clamp({}, 8vw, {}); background: {};",
        padding.mobile, padding.desktop, padding.mobile, padding.desktop, background,
    );

    rsx! {
        section { id: props.id, style: "{style}", {props.children} }
    }
}

pub fn section_background(theme: &content::Theme, subdued: bool) -> &'static str {
    if subdued {
        theme.color.background.surface
    } else {
        theme.color.background.base
    }
}
