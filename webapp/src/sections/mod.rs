pub mod about;
pub mod get_started;
pub mod hero;
pub mod modules;
pub mod pricing;
pub mod support;

pub use about::AboutSection;
pub use get_started::GetStartedSection;
pub use hero::HeroSection;
pub use modules::{ModuleCard, ModuleDetailCard, ModulesSection};
pub use pricing::PricingSection;
pub use support::SupportSection;
