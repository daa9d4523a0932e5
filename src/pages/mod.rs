//! Page components for the greeting app.

mod greeting;

pub use greeting::GreetingPage;
