// module grid and navigation preview rendering

mod support;

use dioxus::prelude::*;

use content::{MODULES, Module, ModuleLayout, PREVIEW_LIMIT, PageVariant, preview_sentence, theme::INDIGO};
use webapp::{PageVariantProvider, components::preview::ModulesPreview, sections::ModulesSection};

use support::{assert_in_order, count, render};

static TWO_MODULES: &[Module] = &[
    Module {
        id: "spin-os",
        slug: "spinos",
        name: "spinOS",
        icon: "S",
        title: "Spinning",
        headline: "Yarn without surprises.",
        description: "spinOS tracks spindles. It reports yarn counts.",
        capabilities: &["Spindle monitoring"],
    },
    Module {
        id: "knit-os",
        slug: "knitos",
        name: "knitOS",
        icon: "K",
        title: "Knitting",
        headline: "Every stitch accounted for.",
        description: "knitOS schedules circular knitting machines",
        capabilities: &["Machine scheduling"],
    },
];

fn module_markers(modules: &[Module]) -> Vec<String> {
    modules
        .iter()
        .map(|module| format!("data-module=\"{}\"", module.id))
        .collect()
}

fn assert_one_card_per_module(html: &str, modules: &[Module]) {
    let markers = module_markers(modules);
    let markers: Vec<&str> = markers.iter().map(String::as_str).collect();

    assert_eq!(count(html, "data-module="), modules.len());
    for marker in &markers {
        assert_eq!(count(html, marker), 1, "{marker}");
    }
    assert_in_order(html, &markers);
}

#[test]
fn compact_grid_renders_every_module_in_order() {
    let html = render(rsx! { ModulesSection { layout: ModuleLayout::Compact } });

    assert_one_card_per_module(&html, MODULES);
    for module in MODULES {
        assert!(html.contains(&format!("href=\"/modules/{}\"", module.slug)));
    }
}

#[test]
fn detailed_grid_renders_every_module_in_order() {
    let html = render(rsx! { ModulesSection { layout: ModuleLayout::Detailed } });

    assert_one_card_per_module(&html, MODULES);
    for module in MODULES {
        for capability in module.capabilities {
            assert!(html.contains(capability), "{capability}");
        }
    }
}

#[test]
fn detailed_grid_alternates_palette_backgrounds() {
    let html = render(rsx! { ModulesSection { layout: ModuleLayout::Detailed } });

    let palette = INDIGO.color.module_palette;
    let cards: Vec<&str> = html.split("data-module=").skip(1).collect();
    assert_eq!(cards.len(), MODULES.len());
    assert!(MODULES.len() >= palette.len() + 1, "registry too short to wrap the palette");

    for (index, card) in cards.iter().enumerate() {
        let expected = format!("background: {};", palette[index % palette.len()]);
        assert!(card.contains(&expected), "card {index} should use {expected}");
    }
}

#[test]
fn grid_layout_follows_page_variant() {
    let catalog = render(rsx! {
        PageVariantProvider { variant: PageVariant::Catalog, ModulesSection {} }
    });
    let showcase = render(rsx! {
        PageVariantProvider { variant: PageVariant::Showcase, ModulesSection {} }
    });

    assert!(catalog.contains("Learn More"));
    assert!(!catalog.contains("<article"));
    assert!(showcase.contains("<article"));
    assert!(!showcase.contains("Learn More"));
}

#[test]
fn grid_renders_custom_registries() {
    let html = render(rsx! { ModulesSection { layout: ModuleLayout::Compact, modules: TWO_MODULES } });

    assert_one_card_per_module(&html, TWO_MODULES);
}

#[test]
fn preview_shows_first_modules_only() {
    let html = render(rsx! { ModulesPreview {} });

    let expected = PREVIEW_LIMIT.min(MODULES.len());
    assert_eq!(count(&html, "data-preview="), expected);

    let markers: Vec<String> = MODULES[..expected]
        .iter()
        .map(|module| format!("data-preview=\"{}\"", module.id))
        .collect();
    let markers: Vec<&str> = markers.iter().map(String::as_str).collect();
    assert_in_order(&html, &markers);

    for module in &MODULES[expected..] {
        assert!(!html.contains(&format!("data-preview=\"{}\"", module.id)));
    }
}

#[test]
fn preview_with_short_registry_renders_what_exists() {
    let html = render(rsx! { ModulesPreview { modules: TWO_MODULES } });

    assert_eq!(count(&html, "data-preview="), 2);
    assert!(html.contains("spinOS tracks spindles."));
    assert!(html.contains("knitOS schedules circular knitting machines."));
}

#[test]
fn preview_sentences_come_from_descriptions() {
    let html = render(rsx! { ModulesPreview {} });

    for module in MODULES.iter().take(PREVIEW_LIMIT) {
        assert!(html.contains(&preview_sentence(module.description)), "{}", module.id);
    }
}
