//! Portfolio Core Library
//!
//! Renderer-independent logic for a single-page portfolio.
//!
//! ## Overview
//!
//! The page is static content dressed in motion. Everything that is more
//! than markup lives here so it can be tested without a webview:
//!
//! - **Motion**: damped springs, tilt/spotlight surfaces, magnetic wrappers,
//!   the cursor ring, staggered reveals and scroll-linked parallax
//! - **State**: nav chrome, theme, mobile menu and the focused project
//! - **Telemetry**: the decorative coordinate readout
//! - **Content**: profile, skills, projects and links
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::motion::{settle, PointerCapability, SurfaceRect, TiltConfig, TiltSurface};
//!
//! let mut card = TiltSurface::new(TiltConfig::skill_card(), PointerCapability::Fine);
//! card.pointer_enter();
//! card.pointer_move(SurfaceRect::new(0.0, 0.0, 200.0, 100.0), 200.0, 50.0);
//! settle(&mut card, 1.0 / 60.0, 1_000);
//! assert_eq!(card.pose().rotate_y_deg, 10.0);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod focus;
pub mod motion;
pub mod nav;
pub mod telemetry;

// Re-exports
pub use config::PortfolioConfig;
pub use content::{Glyph, Profile, Project, SkillGroup, SocialLink, PROFILE, PROJECTS, SKILL_GROUPS, SOCIAL_LINKS};
pub use error::{PortfolioError, Result};
pub use focus::ProjectFocus;
pub use motion::{Animated, PointerCapability, ScrollSample};
pub use nav::{MobileMenu, NavLink, ScrollChrome, Theme};
pub use telemetry::{Coordinates, TelemetryConfig};
