//! Error types for the greeting page

use thiserror::Error;

/// Errors raised by the platform capabilities behind the greeting view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreetingError {
    /// The platform refused or failed to start playback
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    /// No audio element or output device to drive
    #[error("Audio unavailable: {0}")]
    AudioUnavailable(String),

    /// Clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Webview script evaluation failed
    #[error("Script error: {0}")]
    Script(String),
}

/// Result type alias using GreetingError
pub type GreetingResult<T> = Result<T, GreetingError>;
