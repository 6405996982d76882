//! Global look of the page.

mod styles;

pub use styles::GLOBAL_STYLES;
