use log::debug;

use crate::config::Config;
use crate::page::{Elements, Page, Rect};

/// Top edge within the first `ratio` of the viewport and bottom edge not yet above it.
pub fn in_view(rect: Rect, viewport_height: f64, ratio: f64) -> bool {
    rect.top <= viewport_height * ratio && rect.bottom >= 0.0
}

/// Marks every reveal block that has entered the viewport. Once marked, a block
/// stays marked; nothing here ever removes the markers.
///
/// Returns how many blocks were revealed by this call.
pub fn reveal<P: Page>(page: &P, elements: &Elements<P::Node>, config: &Config) -> usize {
    let viewport = page.viewport_height();
    let markers = &config.markers;
    let mut revealed = 0;
    for block in &elements.reveal_blocks {
        if page.has_marker(block, &markers.animated) {
            continue;
        }
        if in_view(page.bounding_rect(block), viewport, config.reveal_ratio) {
            page.set_marker(block, &markers.animated, true);
            page.set_marker(block, &markers.fade_in, true);
            revealed += 1;
        }
    }
    if revealed > 0 {
        debug!("Revealed {} content block(s)", revealed);
    }
    revealed
}
