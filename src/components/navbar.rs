//! Navigation Bar
//!
//! Fixed top bar with the wordmark, section links and the theme switch.
//! Turns solid once the page scrolls past the chrome threshold. On narrow
//! viewports the links collapse into [`MobileMenuOverlay`].

use dioxus::prelude::*;
use portfolio_core::{Glyph, MobileMenu, NavLink, ScrollChrome, PROFILE};
use portfolio_ui::{use_portfolio_config, Icon};

use crate::components::mobile_menu::MobileMenuOverlay;
use crate::context::{use_scroll, use_theme};

#[component]
pub fn Navbar() -> Element {
    let threshold = use_portfolio_config().scroll_threshold_px;
    let scroll = use_scroll();
    let mut theme = use_theme();
    let mut chrome = use_signal(|| ScrollChrome::new(threshold));
    let mut menu = use_signal(MobileMenu::default);

    // Only transitions reach the signal; repeated offsets on one side are dropped
    use_effect(move || {
        let offset = scroll().offset;
        let mut next = *chrome.peek();
        if let Some(scrolled) = next.observe(offset) {
            tracing::debug!(scrolled, offset, "Nav chrome changed");
            chrome.set(next);
        }
    });

    let scrolled = chrome.read().is_scrolled();
    let theme_glyph = if theme().is_dark() { Glyph::Sun } else { Glyph::Moon };

    rsx! {
        nav { class: if scrolled { "navbar scrolled" } else { "navbar" },
            div { class: "navbar-inner",
                a { class: "brand", href: "#",
                    "{PROFILE.brand}"
                    span { class: "accent", "." }
                }

                div { class: "navbar-links",
                    for link in NavLink::ALL {
                        a { key: "{link.section_id()}", href: "{link.href()}", "{link.label()}" }
                    }
                    button {
                        class: "icon-button glass",
                        "aria-label": "{theme().switch_label()}",
                        onclick: move |_| {
                            let next = theme.write().toggle();
                            tracing::debug!(?next, "Theme toggled");
                        },
                        Icon { glyph: theme_glyph, size: 16 }
                    }
                }

                button {
                    class: "icon-button glass navbar-menu-button",
                    "aria-label": "Open menu",
                    onclick: move |_| {
                        menu.write().open();
                        tracing::debug!("Mobile menu opened");
                    },
                    Icon { glyph: Glyph::Menu }
                }
            }
        }

        if menu.read().is_open() {
            MobileMenuOverlay { menu, theme }
        }
    }
}
