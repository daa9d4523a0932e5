use dioxus::prelude::*;

use crate::context::{page_config, PageConfig};
use crate::pages::GreetingPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page configuration, then renders the
/// single greeting page.
#[component]
pub fn App() -> Element {
    use_context_provider::<PageConfig>(page_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        GreetingPage {}
    }
}
