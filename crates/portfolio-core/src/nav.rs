//! Navigation chrome state
//!
//! Three independent toggles owned by the nav bar:
//! - scrolled past the threshold (chrome styling)
//! - dark / light theme (document-wide class)
//! - mobile menu open / closed

use serde::{Deserialize, Serialize};

/// Default scroll offset, in pixels, past which the nav bar turns solid
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// In-page navigation targets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum NavLink {
    About,
    Skills,
    Projects,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [
        NavLink::About,
        NavLink::Skills,
        NavLink::Projects,
        NavLink::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::About => "About",
            NavLink::Skills => "Skills",
            NavLink::Projects => "Projects",
            NavLink::Contact => "Contact",
        }
    }

    /// Element id of the section this link scrolls to
    pub fn section_id(&self) -> &'static str {
        match self {
            NavLink::About => "about",
            NavLink::Skills => "skills",
            NavLink::Projects => "projects",
            NavLink::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id())
    }
}

/// Tracks whether the page has scrolled past the chrome threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollChrome {
    threshold: f64,
    scrolled: bool,
}

impl ScrollChrome {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Re-evaluate against a new offset. Returns the new flag only when it
    /// changed, so repeated offsets on one side never re-fire.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let scrolled = offset > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

impl Default for ScrollChrome {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

/// Page color scheme
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Class set on the document root while this theme is active
    pub const LIGHT_CLASS: &'static str = "light";

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn toggle(&mut self) -> Theme {
        *self = self.toggled();
        *self
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Whether the document root carries [`Theme::LIGHT_CLASS`]
    pub fn document_has_light_class(&self) -> bool {
        matches!(self, Theme::Light)
    }

    /// Label for the button that switches away from this theme
    pub fn switch_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to Light Mode",
            Theme::Light => "Switch to Dark Mode",
        }
    }
}

/// Full-screen navigation overlay for narrow viewports
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Following a link also dismisses the overlay.
    pub fn select(&mut self, link: NavLink) -> NavLink {
        self.open = false;
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_anchor_to_sections() {
        let hrefs: Vec<String> = NavLink::ALL.iter().map(NavLink::href).collect();
        assert_eq!(hrefs, ["#about", "#skills", "#projects", "#contact"]);
        assert_eq!(NavLink::Projects.label(), "Projects");
    }

    #[test]
    fn threshold_crossing_fires_once_each_way() {
        let mut chrome = ScrollChrome::default();
        assert_eq!(chrome.observe(49.0), None);
        assert_eq!(chrome.observe(51.0), Some(true));
        assert_eq!(chrome.observe(51.0), None);
        assert_eq!(chrome.observe(300.0), None);
        assert_eq!(chrome.observe(49.0), Some(false));
        assert_eq!(chrome.observe(10.0), None);
    }

    #[test]
    fn exactly_threshold_is_not_scrolled() {
        let mut chrome = ScrollChrome::default();
        assert_eq!(chrome.observe(50.0), None);
        assert!(!chrome.is_scrolled());
    }

    #[test]
    fn theme_toggle_pair_is_identity() {
        let mut theme = Theme::default();
        assert!(theme.is_dark());
        assert_eq!(theme.toggle(), Theme::Light);
        assert!(theme.document_has_light_class());
        assert_eq!(theme.toggle(), Theme::Dark);
        assert!(!theme.document_has_light_class());
    }

    #[test]
    fn switch_labels() {
        assert_eq!(Theme::Dark.switch_label(), "Switch to Light Mode");
        assert_eq!(Theme::Light.switch_label(), "Switch to Dark Mode");
    }

    #[test]
    fn menu_closes_on_link() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.open();
        assert!(menu.is_open());
        assert_eq!(menu.select(NavLink::Contact), NavLink::Contact);
        assert!(!menu.is_open());
        menu.open();
        menu.close();
        assert!(!menu.is_open());
    }
}
