//! Portfolio UI Components
//!
//! Reusable Dioxus pieces for the portfolio page. Each component owns its
//! own motion state from `portfolio-core` and drives it with an
//! [`animation::Animator`] while there is something to animate.
//!
//! ## Host signals
//!
//! Scroll offset, pointer position, element visibility and pointer
//! capability are read through the scripts in [`bridge`]. Every
//! subscription is removed again when its owning component is dropped.
//!
//! ## Context
//!
//! Components read `PortfolioConfig` and a `Signal<PointerCapability>` from
//! context when the app provides them and fall back to defaults otherwise.

pub mod animation;
pub mod bridge;
pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::{use_pointer_capability, use_portfolio_config, use_viewport_entry};
