pub mod footer;
pub mod layout;
pub mod navigation;
pub mod preview;
