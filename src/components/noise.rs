//! Film-grain overlay over the whole page

use dioxus::prelude::*;

#[component]
pub fn Noise() -> Element {
    rsx! {
        div { class: "noise", "aria-hidden": "true",
            div { class: "noise-grain" }
        }
    }
}
