//! Content sections of the greeting page.

mod sections;

pub use sections::*;
