//! Pulsing status indicator
//!
//! Purely decorative; the label is never derived from real state.

use dioxus::prelude::*;

#[component]
pub fn StatusDot(label: String, #[props(default)] class: Option<String>) -> Element {
    let extra_class = class.unwrap_or_default();

    rsx! {
        span { class: "status-dot {extra_class}",
            span { class: "status-dot-ping" }
            span { class: "status-dot-core" }
            span { class: "status-dot-label", "{label}" }
        }
    }
}
