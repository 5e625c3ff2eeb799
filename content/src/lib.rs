// static content and design tokens for the fabricode marketing site
//
// everything in this crate is immutable data defined at compile time, plus the handful of
// pure projections the presentation layer needs (module summaries, preview sentences, palette
// selection).  nothing here allocates state or performs i/o
pub mod module;
pub mod registry;
pub mod theme;
pub mod variant;

pub use module::{Module, ModulePreview, ModuleSummary, PREVIEW_LIMIT, module_previews, preview_sentence};
pub use registry::*;
pub use theme::Theme;
pub use variant::{ModuleLayout, PageVariant};
