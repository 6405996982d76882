use dioxus::prelude::*;
use portfolio_core::{PointerCapability, ProjectFocus, ScrollSample, Theme};
use portfolio_ui::bridge;

use crate::context::launch_options;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The whole portfolio; sections are reached by in-page anchors
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, effect configuration, host signals and routing.
#[component]
pub fn App() -> Element {
    let options = launch_options();

    let initial_capability = if options.force_coarse_pointer {
        PointerCapability::Coarse
    } else {
        PointerCapability::Fine
    };
    let mut capability = use_signal(|| initial_capability);
    let mut scroll = use_signal(ScrollSample::default);
    let theme = use_signal(Theme::default);
    let focus = use_signal(ProjectFocus::new);

    // Provide shared state to all child components
    use_context_provider(|| options.config);
    use_context_provider(|| capability);
    use_context_provider(|| scroll);
    use_context_provider(|| theme);
    use_context_provider(|| focus);

    // Pointer capability from the webview, unless pinned on the command line
    use_future(move || async move {
        if options.force_coarse_pointer {
            return;
        }
        let mut feed = document::eval(&bridge::capability_subscribe());
        loop {
            match feed.recv::<bool>().await {
                Ok(coarse) => {
                    let next = PointerCapability::from_coarse_flag(coarse);
                    if *capability.peek() != next {
                        tracing::debug!(?next, "Pointer capability changed");
                        capability.set(next);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "Pointer capability unavailable; assuming fine pointer");
                    break;
                }
            }
        }
    });

    use_future(move || async move {
        let mut feed = document::eval(&bridge::scroll_subscribe());
        loop {
            match feed.recv::<serde_json::Value>().await {
                Ok(payload) => match ScrollSample::from_payload(payload) {
                    Ok(sample) => scroll.set(sample),
                    Err(e) => tracing::debug!("Dropping scroll sample: {}", e),
                },
                Err(e) => {
                    tracing::warn!(error = ?e, "Scroll subscription closed");
                    break;
                }
            }
        }
    });

    use_drop(move || {
        let _ = document::eval(&bridge::scroll_unsubscribe());
        if !options.force_coarse_pointer {
            let _ = document::eval(&bridge::capability_unsubscribe());
        }
    });

    // Keep the document root class in step with the theme
    use_effect(move || {
        let current = theme();
        tracing::debug!(?current, "Applying theme");
        let _ = document::eval(&bridge::document_class(
            Theme::LIGHT_CLASS,
            current.document_has_light_class(),
        ));
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
