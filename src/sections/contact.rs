use dioxus::prelude::*;
use portfolio_core::{Glyph, PROFILE, SOCIAL_LINKS};
use portfolio_ui::{FadeInUp, Icon};

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "section-inner contact-inner",
                FadeInUp {
                    h2 { class: "contact-title",
                        "READY TO "
                        span { class: "accent italic", "BUILD" }
                        "?"
                    }
                    a { class: "contact-email", href: "{PROFILE.mailto()}",
                        "{PROFILE.email}"
                        Icon { glyph: Glyph::ArrowUpRight, size: 40 }
                    }
                }

                div { class: "social-grid",
                    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
                        FadeInUp { key: "{link.label}", delay: 0.1 * i as f64,
                            a {
                                class: "social-link",
                                href: "{link.href}",
                                target: if link.opens_new_tab() { "_blank" } else { "_self" },
                                rel: "noopener noreferrer",
                                div { class: "social-icon glass",
                                    Icon { glyph: link.glyph, size: 24 }
                                }
                                span { class: "social-label", "{link.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
