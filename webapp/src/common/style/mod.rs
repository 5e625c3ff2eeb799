use constcat::concat;

mod base;
mod chrome;
mod landing;

pub use base::BASE_STYLES;
pub use chrome::CHROME_STYLES;
pub use landing::LANDING_STYLES;

// the complete stylesheet
//
// the theme's :root variables are injected separately, since they depend on the page variant
pub const GLOBAL_STYLES: &str = concat!(BASE_STYLES, CHROME_STYLES, LANDING_STYLES);
