use std::ops::Range;

use log::debug;

use crate::config::Config;
use crate::page::{Elements, Page};

/// Scroll offsets for which a section counts as current. The range starts
/// `margin` early so the link lights up just before the section reaches the navbar.
pub fn section_range(offset_top: f64, height: f64, margin: f64) -> Range<f64> {
    let top = offset_top - margin;
    top..top + height
}

/// The current section for `scroll`. Sections are checked in order and a later
/// match replaces an earlier one, so with overlapping ranges the last one wins.
pub fn active_section<'a>(scroll: f64, sections: &'a [(String, Range<f64>)]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, range)| range.contains(&scroll))
        .last()
        .map(|(id, _)| id.as_str())
}

/// Sections with an id, in document order, paired with their current ranges.
fn measure<P: Page>(page: &P, config: &Config) -> Vec<(String, Range<f64>)> {
    page.query_all(&config.section_selector)
        .iter()
        .filter_map(|section| {
            let id = page.attribute(section, "id").filter(|id| !id.is_empty())?;
            let range = section_range(
                page.offset_top(section),
                page.offset_height(section),
                config.section_margin,
            );
            Some((id, range))
        })
        .collect()
}

/// Marks the nav link of the current section and clears the rest.
/// When no section contains the scroll offset the markers are left as they were.
pub fn update_active_link<P: Page>(page: &P, elements: &Elements<P::Node>, config: &Config) {
    let sections = measure(page, config);
    let Some(current) = active_section(page.scroll_y(), &sections) else {
        return;
    };
    let target = format!("#{}", current);
    let marker = &config.markers.active;
    for item in &elements.nav_items {
        let matches = page.attribute(item, "href").as_deref() == Some(target.as_str());
        if matches && !page.has_marker(item, marker) {
            debug!("Active section is now '{}'", current);
        }
        page.set_marker(item, marker, matches);
    }
}
