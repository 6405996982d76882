use dioxus::prelude::*;

use crate::components::{CustomCursor, Footer, Navbar, Noise};
use crate::sections::{About, Contact, Hero, Projects, Skills};

/// The whole portfolio on one page
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            CustomCursor {}
            Noise {}
            Navbar {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Contact {}
            }
            Footer {}
        }
    }
}
