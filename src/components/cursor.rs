//! Custom Cursor
//!
//! An accent ring that trails the pointer and swells over anything
//! clickable. Not rendered at all on coarse pointers.

use dioxus::prelude::*;
use portfolio_core::motion::{CursorFollower, PointerSample};
use portfolio_ui::animation::use_animator;
use portfolio_ui::{bridge, use_pointer_capability, use_portfolio_config};

#[component]
pub fn CustomCursor() -> Element {
    let coarse = use_pointer_capability()
        .map(|cap| cap().is_coarse())
        .unwrap_or(false);

    if coarse {
        return rsx! {};
    }

    rsx! { CursorRing {} }
}

#[component]
fn CursorRing() -> Element {
    let config = use_portfolio_config().cursor;
    let mut ring = use_animator(move || CursorFollower::new(config));

    use_future(move || async move {
        let mut feed = document::eval(&bridge::pointer_subscribe());
        loop {
            match feed.recv::<serde_json::Value>().await {
                Ok(payload) => match PointerSample::from_payload(payload) {
                    Ok(sample) => ring.update(|r| r.track(sample)),
                    Err(e) => tracing::debug!("Dropping pointer sample: {}", e),
                },
                Err(e) => {
                    tracing::warn!(error = ?e, "Pointer subscription closed");
                    break;
                }
            }
        }
    });

    use_drop(move || {
        let _ = document::eval(&bridge::pointer_unsubscribe());
    });

    let (transform, hovering) = ring.with(|r| (r.css_transform(), r.is_over_clickable()));

    rsx! {
        div {
            class: if hovering { "cursor-ring is-hovering" } else { "cursor-ring" },
            style: "transform: {transform};",
        }
    }
}
