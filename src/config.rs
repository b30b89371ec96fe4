use log::Level;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn default_log_level() -> Level {
    Level::Debug // Verbose marker transitions when running a dev build
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> Level {
    Level::Info
}

/// Class names used as state markers on page elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Markers {
    pub open: String,
    pub scrolled: String,
    pub visible: String,
    pub animated: String,
    pub fade_in: String,
    pub active: String,
    pub loaded: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: "active".to_string(),
            scrolled: "scrolled".to_string(),
            visible: "visible".to_string(),
            animated: "animated".to_string(),
            fade_in: "fade-in".to_string(),
            active: "active".to_string(),
            loaded: "loaded".to_string(),
        }
    }
}

/// Everything the enhancer needs to know about the host page.
///
/// Deserialized from a partial JS object passed to `init_with_config`; any key
/// left out keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub navbar_selector: String,
    pub menu_button_selector: String,
    pub nav_links_selector: String,
    pub nav_item_selector: String,
    pub reveal_selector: String,
    pub section_selector: String,
    pub scroll_button_id: String,
    pub scrolled_threshold: f64,
    pub scroll_top_threshold: f64,
    pub anchor_offset: f64,
    pub section_margin: f64,
    pub reveal_ratio: f64,
    pub inject_styles: bool,
    pub log_level: Option<String>,
    pub markers: Markers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navbar_selector: ".navbar".to_string(),
            menu_button_selector: ".mobile-menu".to_string(),
            nav_links_selector: ".nav-links".to_string(),
            nav_item_selector: ".nav-links a".to_string(),
            reveal_selector: ".highlight-card, .feature-item, .content-card".to_string(),
            section_selector: "section".to_string(),
            scroll_button_id: "scroll-to-top".to_string(),
            scrolled_threshold: 50.0,
            scroll_top_threshold: 300.0,
            anchor_offset: 80.0, // navbar height
            section_margin: 100.0,
            reveal_ratio: 0.8,
            inject_styles: true,
            log_level: None,
            markers: Markers::default(),
        }
    }
}

impl Config {
    /// Configured level, falling back to the build default on a missing or unknown name.
    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_else(default_log_level)
    }
}
