//! About Section
//!
//! Bio copy beside the portrait. The portrait grows and straightens as the
//! page scrolls.

use dioxus::prelude::*;
use portfolio_core::PROFILE;
use portfolio_ui::{use_portfolio_config, FadeInUp, TextReveal};

use crate::context::use_scroll;

#[component]
pub fn About() -> Element {
    let parallax = use_portfolio_config().parallax;
    let scroll = use_scroll();
    let portrait = parallax.portrait(scroll()).css();
    let (lead, rest) = match PROFILE.bio.split_first() {
        Some((lead, rest)) => (*lead, rest),
        None => ("", &[][..]),
    };

    rsx! {
        section { id: "about", class: "section section--tinted",
            div { class: "section-inner about-grid",
                FadeInUp {
                    h2 { class: "section-title",
                        TextReveal { text: "CRAFTING", delay: 0.1 }
                        br {}
                        span { class: "accent italic",
                            TextReveal { text: "MEANINGFUL", delay: 0.2 }
                        }
                        br {}
                        TextReveal { text: "CODE.", delay: 0.3 }
                    }
                    div { class: "about-copy",
                        p {
                            "I am "
                            span { class: "strong", "{PROFILE.name}" }
                            ", {lead}"
                        }
                        for (i, paragraph) in rest.iter().enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }
                    }
                }

                div { class: "portrait glass", style: "{portrait}",
                    img {
                        class: "portrait-image",
                        src: "{PROFILE.portrait_path}",
                        alt: "{PROFILE.name}",
                    }
                    div { class: "portrait-shade" }
                    div { class: "portrait-caption",
                        span { class: "portrait-index", "01" }
                        p { class: "eyebrow", "{PROFILE.name}" }
                    }
                }
            }
        }
    }
}
