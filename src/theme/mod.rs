//! Visual theme for the greeting page.

mod styles;

pub use styles::GLOBAL_STYLES;
