use log::debug;

use crate::page::Page;

/// The element id an in-page link points at, if `href` is a fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Scrolls so the element with `id` sits `offset` below the top of the window.
/// Returns false, and leaves the scroll position alone, when there is no such element.
pub fn smooth_scroll<P: Page>(page: &P, id: &str, offset: f64) -> bool {
    match page.element_by_id(id) {
        Some(target) => {
            page.smooth_scroll_to(page.offset_top(&target) - offset);
            true
        }
        None => {
            debug!("No element with id '{}', skipping scroll", id);
            false
        }
    }
}

pub fn scroll_to_top<P: Page>(page: &P) {
    page.smooth_scroll_to(0.0);
}
