//! Hooks shared by the motion primitives

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use portfolio_core::motion::ViewportTrigger;
use portfolio_core::{PointerCapability, PortfolioConfig};

use crate::bridge;

static NEXT_DOM_ID: AtomicUsize = AtomicUsize::new(0);

/// Unique element id with a readable prefix, e.g. `reveal-12`.
pub fn next_dom_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_DOM_ID.fetch_add(1, Ordering::Relaxed))
}

/// Effect tuning provided by the app root; defaults when absent.
pub fn use_portfolio_config() -> PortfolioConfig {
    try_use_context::<PortfolioConfig>().unwrap_or_default()
}

/// Pointer capability signal provided by the app root, if any.
pub fn use_pointer_capability() -> Option<Signal<PointerCapability>> {
    try_use_context::<Signal<PointerCapability>>()
}

/// One-shot viewport entry.
///
/// Returns the element id to put on the observed element and a flag that
/// flips to `true` the first time that element becomes visible. The JS
/// observer disconnects itself after firing and is also released if the
/// component is dropped first.
pub fn use_viewport_entry(prefix: &str) -> (String, Signal<bool>) {
    let dom_id = use_hook(|| next_dom_id(prefix));
    let mut entered = use_signal(|| false);

    let observed = dom_id.clone();
    use_future(move || {
        let observed = observed.clone();
        async move {
            let mut trigger = ViewportTrigger::new();
            let mut observer = document::eval(&bridge::viewport_observe(&observed));
            loop {
                match observer.recv::<bool>().await {
                    Ok(visible) => {
                        if trigger.observe(visible) {
                            entered.set(true);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(id = %observed, error = ?e, "Viewport observer failed; revealing immediately");
                        entered.set(true);
                        break;
                    }
                }
            }
        }
    });

    let released = dom_id.clone();
    use_drop(move || {
        let _ = document::eval(&bridge::viewport_unobserve(&released));
    });

    (dom_id, entered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique() {
        let a = next_dom_id("reveal");
        let b = next_dom_id("reveal");
        assert_ne!(a, b);
        assert!(a.starts_with("reveal-"));
    }
}
