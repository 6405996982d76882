//! Projects Section
//!
//! Grid of project cards plus the focus overlay. Falls back to a
//! placeholder when there is nothing to show.

use dioxus::prelude::*;
use portfolio_core::{Project, PROJECTS};
use portfolio_ui::FadeInUp;

use crate::components::{ProjectCard, ProjectModal};

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section section--tinted",
            div { class: "section-inner",
                FadeInUp { class: Some("section-header".to_string()),
                    span { class: "eyebrow", "Showcase" }
                    h2 { class: "section-title", "SELECTED WORKS." }
                }
                ProjectGrid { projects: PROJECTS }
            }
            ProjectModal {}
        }
    }
}

#[component]
fn ProjectGrid(projects: &'static [Project]) -> Element {
    if projects.is_empty() {
        return rsx! {
            div { class: "projects-empty",
                p { "Awaiting your perfect projects..." }
            }
        };
    }

    rsx! {
        div { class: "projects-grid",
            for (index, project) in projects.iter().enumerate() {
                ProjectCard { key: "{project.name}", project, index }
            }
        }
    }
}
