//! Mobile Menu Overlay
//!
//! Full-screen panel that replaces the link row on narrow viewports.

use dioxus::prelude::*;
use portfolio_core::{Glyph, MobileMenu, NavLink, Theme, PROFILE};
use portfolio_ui::Icon;

#[component]
pub fn MobileMenuOverlay(mut menu: Signal<MobileMenu>, mut theme: Signal<Theme>) -> Element {
    let current = theme();
    let glyph = if current.is_dark() { Glyph::Sun } else { Glyph::Moon };

    rsx! {
        div { class: "mobile-menu",
            div { class: "mobile-menu-header",
                span { class: "brand",
                    "{PROFILE.brand}"
                    span { class: "accent", "." }
                }
                button {
                    class: "icon-button glass",
                    "aria-label": "Close menu",
                    onclick: move |_| {
                        menu.write().close();
                        tracing::debug!("Mobile menu closed");
                    },
                    Icon { glyph: Glyph::Close, size: 24 }
                }
            }

            div { class: "mobile-menu-links",
                for (i, link) in NavLink::ALL.into_iter().enumerate() {
                    a {
                        key: "{link.section_id()}",
                        class: "mobile-menu-link",
                        style: format!("animation-delay: {:.1}s;", 0.1 * i as f64),
                        href: "{link.href()}",
                        onclick: move |_| {
                            let chosen = menu.write().select(link);
                            tracing::debug!(section = chosen.section_id(), "Mobile menu link selected");
                        },
                        "{link.label()}"
                    }
                }
            }

            div { class: "mobile-menu-footer",
                div {
                    p { class: "eyebrow", "Contact" }
                    a { class: "mobile-menu-email", href: "{PROFILE.mailto()}", "{PROFILE.email}" }
                }
                button {
                    class: "theme-switch",
                    onclick: move |_| {
                        let next = theme.write().toggle();
                        tracing::debug!(?next, "Theme toggled");
                    },
                    Icon { glyph }
                    "{current.switch_label()}"
                }
            }
        }
    }
}
