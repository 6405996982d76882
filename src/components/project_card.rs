//! Project Card
//!
//! Tilt panel for one project. Clicking it focuses the project in the
//! overlay.

use dioxus::prelude::*;
use portfolio_core::{Glyph, Project};
use portfolio_ui::{Icon, TiltCard, TiltKind};

use crate::context::use_project_focus;

#[component]
pub fn ProjectCard(project: &'static Project, index: usize) -> Element {
    let mut focus = use_project_focus();
    let number = index + 1;

    rsx! {
        TiltCard {
            kind: TiltKind::Project,
            class: Some("project-card glass".to_string()),
            onclick: move |_| {
                focus.write().select(project);
                tracing::debug!(project = project.name, "Project focused");
            },

            div { class: "scanlines" }

            div { class: "card-layer card-layer--top",
                div { class: "card-icon",
                    Icon { glyph: Glyph::Code, size: 28 }
                }
                div { class: "project-link-badge",
                    div { class: "round-badge glass",
                        Icon { glyph: Glyph::ArrowUpRight, size: 24 }
                    }
                    span { class: "mono-tag", "System_Link_v.0{number}" }
                }
            }

            div { class: "card-layer card-layer--front",
                div { class: "project-index",
                    span { class: "project-index-rule" }
                    span { class: "mono-tag accent", "Project_{number}" }
                }
                h3 { class: "card-title project-title", "{project.name}" }
                p { class: "project-description", "{project.description}" }
            }

            div { class: "card-layer card-layer--back project-footer",
                span { class: "tech-pill glass", "{project.tech}" }
                div { class: "project-dots",
                    for i in 0..3 {
                        span { key: "{i}", class: "project-dot", style: format!("transition-delay: {}ms;", i * 100) }
                    }
                }
            }
        }
    }
}
