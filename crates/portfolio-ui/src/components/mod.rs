//! Motion primitives and small building blocks

mod icon;
mod magnetic;
mod reveal;
mod status_dot;
mod tilt_card;

pub use icon::Icon;
pub use magnetic::Magnetic;
pub use reveal::{CharReveal, FadeInUp, TextReveal};
pub use status_dot::StatusDot;
pub use tilt_card::{TiltCard, TiltCardProps, TiltKind, SPOTLIGHT_RGB};
