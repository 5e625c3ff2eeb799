// end to end rendering of the composed landing page

mod support;

use chrono::{Datelike, Local};
use dioxus::prelude::*;

use content::{FOOTER_GROUPS, PageVariant, SOCIAL_LINKS};
use webapp::{LandingPage, LandingSection, StaticPage, components::footer::Footer};

use support::{assert_in_order, count, render};

#[test]
fn landing_sections_render_in_fixed_order() {
    let html = render(rsx! { LandingPage {} });

    let markers: Vec<String> = LandingSection::ORDER
        .iter()
        .map(|section| format!("data-section=\"{}\"", section.name()))
        .collect();
    let markers: Vec<&str> = markers.iter().map(String::as_str).collect();

    assert_in_order(&html, &markers);
    assert_eq!(count(&html, "data-section="), LandingSection::ORDER.len());
}

#[test]
fn landing_sections_expose_their_anchors() {
    let html = render(rsx! { LandingPage {} });

    assert_in_order(
        &html,
        &[
            "id=\"about\"",
            "id=\"modules\"",
            "id=\"pricing\"",
            "id=\"support\"",
            "id=\"cta\"",
        ],
    );

    for anchor in LandingSection::ORDER.iter().filter_map(|section| section.anchor()) {
        assert_eq!(count(&html, &format!("id=\"{anchor}\"")), 1, "{anchor}");
    }
}

#[test]
fn static_page_wraps_content_in_chrome() {
    for variant in PageVariant::ALL {
        let html = render(rsx! { StaticPage { variant: variant } });

        assert_in_order(&html, &["<header", "<main", "<footer"]);
        assert!(html.contains(variant.theme().color.background.footer));
    }
}

#[test]
fn footer_shows_current_year() {
    let html = render(rsx! { Footer {} });
    let year = Local::now().year();

    assert!(
        html.contains(&format!("© {year} Fabricode OS. All rights reserved.")),
        "copyright line missing year {year}"
    );
}

#[test]
fn footer_renders_link_groups_and_social_badges() {
    let html = render(rsx! { Footer {} });

    assert_eq!(count(&html, "data-footer-group="), FOOTER_GROUPS.len());
    assert_in_order(&html, &["Product", "Company", "Resources"]);

    for link in SOCIAL_LINKS {
        assert!(html.contains(&format!("aria-label=\"{}\"", link.label)));
        assert!(html.contains(&format!(">{}</a>", link.icon.to_uppercase())));
    }
}
