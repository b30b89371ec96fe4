use log::{debug, info};

use crate::anchor;
use crate::config::Config;
use crate::menu;
use crate::page::{Elements, Page};
use crate::reveal;
use crate::scroll_ui;
use crate::sections;

/// Stylesheet for the markers, installed at startup unless the page ships it.
pub const STYLESHEET: &str = include_str!("../assets/enhance.css");
pub const STYLESHEET_ID: &str = "landing-enhancer-styles";
pub const SCROLL_BUTTON_GLYPH: &str = "↑";

/// One page, its resolved elements and the handlers the event listeners call into.
pub struct Enhancer<P: Page> {
    page: P,
    config: Config,
    elements: Elements<P::Node>,
}

impl<P: Page> Enhancer<P> {
    /// Installs the stylesheet and the scroll-to-top button if needed, then resolves
    /// elements. Safe to run again on the same page: neither gets added twice.
    pub fn new(page: P, config: Config) -> Self {
        if config.inject_styles {
            page.install_stylesheet(STYLESHEET_ID, STYLESHEET);
        }
        provision_scroll_button(&page, &config);
        let elements = Elements::resolve(&page, &config);
        info!(
            "Enhancing page: {} nav link(s), {} reveal block(s), navbar {}",
            elements.nav_items.len(),
            elements.reveal_blocks.len(),
            if elements.navbar.is_some() { "found" } else { "missing" }
        );
        Self {
            page,
            config,
            elements,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn elements(&self) -> &Elements<P::Node> {
        &self.elements
    }

    /// Brings every marker in line with the current scroll position and flags the body as loaded.
    pub fn start(&self) {
        self.on_scroll();
        if let Some(body) = self.page.body() {
            self.page.set_marker(&body, &self.config.markers.loaded, true);
        }
    }

    pub fn on_scroll(&self) {
        scroll_ui::update_navbar(&self.page, &self.elements, &self.config);
        scroll_ui::update_scroll_button(&self.page, &self.elements, &self.config);
        reveal::reveal(&self.page, &self.elements, &self.config);
        sections::update_active_link(&self.page, &self.elements, &self.config);
    }

    pub fn on_menu_click(&self) {
        menu::toggle(&self.page, &self.elements, &self.config);
    }

    /// Handles a nav link click. Returns true when the link is in-page and the
    /// browser's own navigation must be suppressed.
    pub fn on_link_click(&self, href: &str) -> bool {
        let Some(id) = anchor::fragment_target(href) else {
            return false;
        };
        anchor::smooth_scroll(&self.page, id, self.config.anchor_offset);
        menu::close(&self.page, &self.elements, &self.config);
        true
    }

    pub fn on_scroll_button_click(&self) {
        anchor::scroll_to_top(&self.page);
    }
}

/// Creates the scroll-to-top button when the page has none. Returns the created node.
pub fn provision_scroll_button<P: Page>(page: &P, config: &Config) -> Option<P::Node> {
    if page.element_by_id(&config.scroll_button_id).is_some() {
        return None;
    }
    debug!("No #{} on the page, adding one", config.scroll_button_id);
    page.append_to_body(&config.scroll_button_id, SCROLL_BUTTON_GLYPH)
}
