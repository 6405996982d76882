//! Page-wide state shared through context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| scroll);
//!
//! // In child components
//! let scroll = use_scroll();
//! ```

use dioxus::prelude::*;
use portfolio_core::{ProjectFocus, ScrollSample, Theme};

pub use crate::{launch_options, LaunchOptions};

/// Latest scroll position reported by the webview.
pub fn use_scroll() -> Signal<ScrollSample> {
    use_context::<Signal<ScrollSample>>()
}

/// Active color scheme. Lives only as long as the window.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// The project currently expanded in the overlay, if any.
pub fn use_project_focus() -> Signal<ProjectFocus> {
    use_context::<Signal<ProjectFocus>>()
}
