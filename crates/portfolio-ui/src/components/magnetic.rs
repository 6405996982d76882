//! Magnetic Wrapper
//!
//! Children drift toward the pointer while it is inside the wrapper and
//! spring back when it leaves. Pressing gives a short scale-down pulse.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::motion::{Magnetic as MagneticState, MoveSequence, SurfaceRect};

use crate::animation::use_animator;
use crate::hooks::use_portfolio_config;

/// Wraps any interactive element in a magnetic field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Magnetic {
///         a { class: "btn-pill", href: "#projects", "Explore System" }
///     }
/// }
/// ```
#[component]
pub fn Magnetic(
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let config = use_portfolio_config().magnetic;
    let mut magnet = use_animator(move || MagneticState::new(config));
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut moves = use_signal(MoveSequence::new);

    let transform = magnet.with(|m| m.css_transform());
    let extra_class = class.unwrap_or_default();

    rsx! {
        div {
            class: "magnetic {extra_class}",
            style: "transform: {transform};",
            onmounted: move |evt: MountedEvent| mounted.set(Some(evt.data())),
            onmouseenter: move |_| magnet.update(|m| m.pointer_enter()),
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                let Some(node) = mounted() else { return };
                let ticket = moves.write().issue();
                spawn(async move {
                    match node.get_client_rect().await {
                        Ok(rect) => {
                            if !moves.write().accept(ticket) {
                                return;
                            }
                            let rect = SurfaceRect::new(
                                rect.origin.x,
                                rect.origin.y,
                                rect.size.width,
                                rect.size.height,
                            );
                            magnet.update(|m| m.pointer_move(rect, point.x, point.y));
                        }
                        Err(e) => tracing::debug!(error = ?e, "Magnetic bounds unavailable"),
                    }
                });
            },
            onmouseleave: move |_| magnet.update(|m| m.pointer_leave()),
            onmousedown: move |_| magnet.update(|m| m.press()),
            onmouseup: move |_| magnet.update(|m| m.release()),
            {children}
        }
    }
}
