use crate::config::Config;

/// Viewport-relative vertical bounds of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

/// The slice of the browser the enhancer touches.
///
/// `DomPage` implements this over `web-sys`; tests use an in-memory page.
/// Every method takes `&self`: the page owns its elements, we only flip markers.
pub trait Page {
    type Node: Clone;

    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Animated scroll of the window, delegated to the host.
    fn smooth_scroll_to(&self, top: f64);

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn has_marker(&self, node: &Self::Node, marker: &str) -> bool;
    fn set_marker(&self, node: &Self::Node, marker: &str, on: bool);

    fn bounding_rect(&self, node: &Self::Node) -> Rect;
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Appends `<div id=id>text</div>` to the body.
    fn append_to_body(&self, id: &str, text: &str) -> Option<Self::Node>;
    /// Adds a `<style id=id>` to the head, or rewrites the one already there.
    fn install_stylesheet(&self, id: &str, css: &str);

    /// Flips `marker` and returns whether it is now present.
    fn toggle_marker(&self, node: &Self::Node, marker: &str) -> bool {
        let on = !self.has_marker(node, marker);
        self.set_marker(node, marker, on);
        on
    }
}

/// Element handles resolved once at startup.
#[derive(Debug, Clone)]
pub struct Elements<N> {
    pub navbar: Option<N>,
    pub menu_button: Option<N>,
    pub nav_links: Option<N>,
    pub nav_items: Vec<N>,
    pub reveal_blocks: Vec<N>,
    pub scroll_button: Option<N>,
}

impl<N: Clone> Elements<N> {
    pub fn resolve<P: Page<Node = N>>(page: &P, config: &Config) -> Self {
        Self {
            navbar: page.query(&config.navbar_selector),
            menu_button: page.query(&config.menu_button_selector),
            nav_links: page.query(&config.nav_links_selector),
            nav_items: page.query_all(&config.nav_item_selector),
            reveal_blocks: page.query_all(&config.reveal_selector),
            scroll_button: page.element_by_id(&config.scroll_button_id),
        }
    }
}
