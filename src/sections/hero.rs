//! Hero Section
//!
//! Full-height opener: framed headline, summary, the primary call to
//! action and the decorative telemetry block. The content drifts down and
//! fades out as the page scrolls.

use dioxus::prelude::*;
use portfolio_core::content::{FRAME_TAG, SYSTEM_PHASE, SYSTEM_STATUS};
use portfolio_core::telemetry::run_feed;
use portfolio_core::{Glyph, PROFILE};
use portfolio_ui::{use_portfolio_config, CharReveal, Icon, Magnetic, StatusDot};

use crate::context::use_scroll;

#[component]
pub fn Hero() -> Element {
    let config = use_portfolio_config();
    let scroll = use_scroll();
    let mut coords = use_signal(|| config.telemetry.initial);

    // Cosmetic readout; the task ends with the section
    use_future(move || async move {
        run_feed(config.telemetry, move |next| coords.set(next)).await;
    });

    let parallax = config.parallax.hero(scroll()).css();
    let readout = coords();

    rsx! {
        section { class: "hero",
            div { class: "hero-backdrop", "aria-hidden": "true",
                div { class: "hero-grid" }
                div { class: "hero-scanner" }
                div { class: "hero-glow hero-glow--left" }
                div { class: "hero-glow hero-glow--right" }
            }

            div { class: "hero-frame", "aria-hidden": "true",
                div { class: "frame-corner frame-corner--tl" }
                div { class: "frame-corner frame-corner--tr",
                    span { class: "frame-tag", "{FRAME_TAG}" }
                }
                div { class: "frame-corner frame-corner--bl" }
                div { class: "frame-corner frame-corner--br" }
            }

            div { class: "hero-content", style: "{parallax}",
                div { class: "hero-heading",
                    div { class: "hero-kicker",
                        div { class: "kicker-bars",
                            for i in 0..3 {
                                span { key: "{i}", class: "kicker-bar", style: format!("animation-delay: {:.1}s;", 0.2 * i as f64) }
                            }
                        }
                        span { class: "mono-tag accent", "{PROFILE.headline}" }
                    }

                    h1 { class: "hero-title",
                        span { class: "hero-line",
                            CharReveal { text: "ARCHITECTING", class: Some("outline-text".to_string()) }
                        }
                        span { class: "hero-line",
                            CharReveal { text: "DIGITAL", delay: 0.2 }
                        }
                        span { class: "hero-line",
                            CharReveal { text: "SYSTEMS", delay: 0.4, class: Some("chrome-text".to_string()) }
                            span { class: "accent", "." }
                        }
                    }
                }

                div { class: "hero-details",
                    div { class: "hero-summary",
                        p { "{PROFILE.summary}" }
                        Magnetic {
                            a { class: "btn-pill glass", href: "#projects",
                                span { "Explore System" }
                                span { class: "btn-pill-icon",
                                    Icon { glyph: Glyph::ArrowUpRight }
                                }
                            }
                        }
                    }

                    div { class: "hero-divider" }

                    div { class: "hero-telemetry",
                        div {
                            div { class: "telemetry-item",
                                p { class: "meta-label", "Node Identity" }
                                p { class: "telemetry-strong", "{PROFILE.name}" }
                            }
                            div { class: "telemetry-item",
                                p { class: "meta-label", "Coordination" }
                                p { "{readout.latitude_label()}" }
                                p { "{readout.longitude_label()}" }
                            }
                        }
                        div {
                            div { class: "telemetry-item",
                                p { class: "meta-label", "Current Phase" }
                                p { class: "telemetry-strong", "{SYSTEM_PHASE}" }
                            }
                            div { class: "telemetry-item",
                                StatusDot { label: SYSTEM_STATUS.to_string() }
                            }
                        }
                    }
                }
            }

            div { class: "scroll-hint",
                span { class: "scroll-hint-rule" }
                span { "Scroll Down" }
            }
        }
    }
}
