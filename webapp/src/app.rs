use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::PageVariant;

use crate::{
    common::style,
    page::{LandingPage, MarketingShell},
};

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Landing {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let variant = use_context_provider(PageVariant::default);
    let theme_variables = variant.theme().css_variables();

    rsx! {
        style { "{style::GLOBAL_STYLES}" }
        style { "{theme_variables}" }
        Router::<Route> {}
    }
}

#[component]
fn SiteLayout() -> Element {
    rsx! {
        MarketingShell {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Landing() -> Element {
    rsx! {
        LandingPage {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        main { class: "centered stack", style: "padding: 120px 20px;",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Landing {}, "Back to the home page" }
        }
    }
}
