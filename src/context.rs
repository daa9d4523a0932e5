//! Page configuration context.
//!
//! The command line is parsed once in `main` and stored process-wide; the
//! root component then provides it to the tree via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(page_config);
//!
//! // In child components
//! let config = use_page_config();
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;

/// Address copied by the share button when none is given.
pub const DEFAULT_SHARE_URL: &str = "https://happy-birthday.example/";

/// Background music served next to the page when none is given.
pub const DEFAULT_AUDIO_SRC: &str = "audio/romantic-piano.mp3";

/// Global page configuration, set from command line
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Settings for one run of the greeting page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Address written to the clipboard by "Share this moment"
    pub share_url: String,
    /// `src` of the background music element
    pub audio_src: String,
    /// Fixed particle seed, for reproducible layouts
    pub seed: Option<u64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            share_url: DEFAULT_SHARE_URL.to_string(),
            audio_src: DEFAULT_AUDIO_SRC.to_string(),
            seed: None,
        }
    }
}

/// Store the configuration. Later calls are ignored.
pub fn init_page_config(config: PageConfig) {
    if PAGE_CONFIG.set(config).is_err() {
        tracing::warn!("Page configuration already set; keeping the first one");
    }
}

/// The configuration set from the command line, or defaults.
pub fn page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Hook to access the page configuration from context.
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PageConfig::default();
        assert_eq!(config.share_url, DEFAULT_SHARE_URL);
        assert_eq!(config.audio_src, DEFAULT_AUDIO_SRC);
        assert!(config.seed.is_none());
    }
}
