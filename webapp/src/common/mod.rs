pub mod style;
pub mod theme;
pub mod toggle;

use chrono::{Datelike, Local};

// read on every call so a long-lived page rolls over at new year
pub fn current_year() -> i32 {
    Local::now().year()
}
