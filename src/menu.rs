use log::debug;

use crate::config::Config;
use crate::page::{Elements, Page};

pub fn is_open<P: Page>(page: &P, elements: &Elements<P::Node>, config: &Config) -> bool {
    elements
        .nav_links
        .as_ref()
        .map_or(false, |links| page.has_marker(links, &config.markers.open))
}

/// Opens or closes the mobile menu. Without a link list there is nothing to show,
/// so the button is left alone too.
pub fn toggle<P: Page>(page: &P, elements: &Elements<P::Node>, config: &Config) {
    let Some(links) = elements.nav_links.as_ref() else {
        return;
    };
    let open = page.toggle_marker(links, &config.markers.open);
    if let Some(button) = elements.menu_button.as_ref() {
        page.set_marker(button, &config.markers.open, open);
    }
    debug!("Mobile menu {}", if open { "opened" } else { "closed" });
}

pub fn close<P: Page>(page: &P, elements: &Elements<P::Node>, config: &Config) {
    if is_open(page, elements, config) {
        toggle(page, elements, config);
    }
}
