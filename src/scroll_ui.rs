use log::debug;

use crate::config::Config;
use crate::page::{Elements, Page};

/// Strictly past the cutoff. The same comparison shows and hides, so there is no hysteresis.
pub fn is_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

fn apply<P: Page>(page: &P, node: &P::Node, marker: &str, on: bool, what: &str) {
    if page.has_marker(node, marker) != on {
        page.set_marker(node, marker, on);
        debug!("{} marker '{}' -> {}", what, marker, on);
    }
}

pub fn update_navbar<P: Page>(page: &P, elements: &Elements<P::Node>, config: &Config) {
    if let Some(navbar) = elements.navbar.as_ref() {
        let on = is_past(page.scroll_y(), config.scrolled_threshold);
        apply(page, navbar, &config.markers.scrolled, on, "Navbar");
    }
}

pub fn update_scroll_button<P: Page>(page: &P, elements: &Elements<P::Node>, config: &Config) {
    if let Some(button) = elements.scroll_button.as_ref() {
        let on = is_past(page.scroll_y(), config.scroll_top_threshold);
        apply(page, button, &config.markers.visible, on, "Scroll-to-top");
    }
}
