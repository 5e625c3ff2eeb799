// helpers for rendering components to html and asserting on the markup
#![allow(dead_code)]

use dioxus::prelude::*;

// render an element tree to an html string
pub fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

// number of non-overlapping occurrences of needle
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

// byte offset of each needle, panics naming the first one that is missing
pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("`{needle}` not found in rendered html"))
        })
        .collect()
}

// every needle appears, and in the given order
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let found = positions(html, needles);

    for (pair, window) in needles.windows(2).zip(found.windows(2)) {
        assert!(
            window[0] < window[1],
            "`{}` should render before `{}`",
            pair[0],
            pair[1]
        );
    }
}
