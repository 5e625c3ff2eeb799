use dioxus::prelude::*;

use content::PageVariant;

use crate::{
    common::theme::PageVariantProvider,
    components::{footer::Footer, navigation::NavBar},
    sections::{
        AboutSection, GetStartedSection, HeroSection, ModulesSection, PricingSection,
        SupportSection,
    },
};

// the vertical segments of the landing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LandingSection {
    Hero,
    About,
    Modules,
    Pricing,
    Support,
    GetStarted,
}

impl LandingSection {
    // display order, top to bottom
    pub const ORDER: [Self; 6] = [
        Self::Hero,
        Self::About,
        Self::Modules,
        Self::Pricing,
        Self::Support,
        Self::GetStarted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Modules => "modules",
            Self::Pricing => "pricing",
            Self::Support => "support",
            Self::GetStarted => "get-started",
        }
    }

    // the in-page anchor the section renders, if any
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::Hero => None,
            Self::About => Some("about"),
            Self::Modules => Some("modules"),
            Self::Pricing => Some("pricing"),
            Self::Support => Some("support"),
            Self::GetStarted => Some("cta"),
        }
    }

    fn render(self) -> Element {
        match self {
            Self::Hero => rsx! { HeroSection {} },
            Self::About => rsx! { AboutSection {} },
            Self::Modules => rsx! { ModulesSection {} },
            Self::Pricing => rsx! { PricingSection {} },
            Self::Support => rsx! { SupportSection {} },
            Self::GetStarted => rsx! { GetStartedSection {} },
        }
    }
}

#[component]
pub fn LandingPage() -> Element {
    let sections = LandingSection::ORDER.into_iter().map(|section| {
        let name = section.name();

        rsx! {
            div { key: "{name}", "data-section": name, {section.render()} }
        }
    });

    rsx! {
        main { class: "landing", {sections} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MarketingShellProps {
    children: Element,
}

// persistent header and footer around the page content
#[component]
pub fn MarketingShell(props: MarketingShellProps) -> Element {
    rsx! {
        NavBar {}
        {props.children}
        Footer {}
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StaticPageProps {
    variant: PageVariant,
}

// the complete landing page for one variant, without a router
//
// this is the root used for prerendering
#[component]
pub fn StaticPage(props: StaticPageProps) -> Element {
    rsx! {
        PageVariantProvider { variant: props.variant,
            MarketingShell {
                LandingPage {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_is_the_only_section_without_anchor() {
        let unanchored: Vec<LandingSection> = LandingSection::ORDER
            .into_iter()
            .filter(|section| section.anchor().is_none())
            .collect();

        assert_eq!(unanchored, [LandingSection::Hero]);
    }

    #[test]
    fn anchors_follow_display_order() {
        let anchors: Vec<&str> = LandingSection::ORDER
            .into_iter()
            .filter_map(LandingSection::anchor)
            .collect();

        assert_eq!(anchors, ["about", "modules", "pricing", "support", "cta"]);
    }
}
