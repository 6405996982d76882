//! Motion primitives
//!
//! Renderer-independent state behind every animated effect on the page.
//! Each type is owned by exactly one component instance and is advanced by
//! that component's animation task via [`Animated`].

pub mod cursor;
pub mod magnetic;
pub mod reveal;
pub mod scroll;
pub mod spring;
pub mod tilt;

pub use cursor::{CursorConfig, CursorFollower, PointerSample};
pub use magnetic::{Magnetic, MagneticConfig};
pub use reveal::{
    reveal_units, RevealTiming, RevealUnit, RevealUnitKind, ViewportTrigger, CINEMATIC_EASING,
};
pub use scroll::{HeroParallax, ParallaxConfig, PortraitParallax, RangeMap, ScrollSample};
pub use spring::{settle, Animated, Spring, SpringConfig};
pub use tilt::{
    highlight_percent, tilt_angles, MoveSequence, PointerCapability, SurfaceRect, TiltConfig,
    TiltPose, TiltSurface,
};
