use anyhow::Result;
use serde::Serialize;

use content::{
    FOOTER_GROUPS, FooterGroup, MODULES, Module, NAV_LINKS, NavLink, PRICING_INCLUSIONS,
    PRICING_PLAN, PricingPlan, SOCIAL_LINKS, SUPPORT_CARDS, SocialLink, SupportCard,
};

// every registry, in display order
#[derive(Serialize)]
struct ContentExport {
    modules: &'static [Module],
    nav_links: &'static [NavLink],
    footer_groups: &'static [FooterGroup],
    social_links: &'static [SocialLink],
    support_cards: &'static [SupportCard],
    pricing_plan: PricingPlan,
    pricing_inclusions: &'static [&'static str],
}

pub fn content_json() -> Result<String> {
    let export = ContentExport {
        modules: MODULES,
        nav_links: NAV_LINKS,
        footer_groups: FOOTER_GROUPS,
        social_links: SOCIAL_LINKS,
        support_cards: SUPPORT_CARDS,
        pricing_plan: PRICING_PLAN,
        pricing_inclusions: PRICING_INCLUSIONS,
    };

    Ok(serde_json::to_string_pretty(&export)?)
}
