#![allow(non_snake_case)]

pub mod app;
pub mod common;
pub mod components;
pub mod page;
pub mod sections;

pub use app::{App, Route};
pub use common::{style::GLOBAL_STYLES, theme::PageVariantProvider};
pub use page::{LandingPage, LandingSection, MarketingShell, StaticPage};
