//! Project Focus Overlay
//!
//! Expanded view of the focused project. Dismissed by the backdrop or the
//! close button; focusing another project replaces the content in place.

use dioxus::prelude::*;
use portfolio_core::content::PROJECT_STATUS;
use portfolio_core::{Glyph, Project};
use portfolio_ui::{Icon, Magnetic};

use crate::context::use_project_focus;

#[component]
pub fn ProjectModal() -> Element {
    let focus = use_project_focus();
    let focused = focus.read().focused();

    match focused {
        Some(project) => rsx! { ProjectModalPanel { project } },
        None => rsx! {},
    }
}

#[component]
fn ProjectModalPanel(project: &'static Project) -> Element {
    let mut focus = use_project_focus();
    let mut dismiss = move || {
        focus.write().dismiss();
        tracing::debug!("Project overlay dismissed");
    };

    rsx! {
        div { class: "project-modal", role: "dialog", "aria-modal": "true",
            div { class: "project-modal-backdrop", onclick: move |_| dismiss() }

            div { class: "project-modal-panel glass",
                div { class: "project-modal-glow-line" }
                button {
                    class: "icon-button glass project-modal-close",
                    "aria-label": "Close",
                    onclick: move |_| dismiss(),
                    Icon { glyph: Glyph::Close, size: 24 }
                }

                div { class: "project-modal-body",
                    div { class: "project-modal-glow" }
                    div { class: "eyebrow-row",
                        span { class: "eyebrow-rule" }
                        span { class: "mono-tag accent", "Deployment Success" }
                    }
                    h2 { class: "project-modal-title",
                        "{project.name}"
                        span { class: "accent", "." }
                    }

                    div { class: "project-modal-grid",
                        p { class: "project-modal-description", "{project.description}" }
                        div { class: "project-modal-meta",
                            div {
                                p { class: "meta-label", "Technologies" }
                                p { class: "meta-value", "{project.tech}" }
                            }
                            div {
                                p { class: "meta-label", "Status" }
                                div { class: "meta-status",
                                    span { class: "meta-status-dot" }
                                    p { class: "meta-value", "{PROJECT_STATUS}" }
                                }
                            }
                        }
                    }

                    div { class: "project-modal-actions",
                        Magnetic {
                            a {
                                class: "btn-solid",
                                href: "{project.link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Source Repository"
                                Icon { glyph: Glyph::Github }
                            }
                        }
                    }
                }
            }
        }
    }
}
