//! Desktop adapters for the greeting view's capabilities.
//!
//! - `WebviewAudio` drives the page's `<audio>` element through script eval
//! - `SystemClipboard` writes through arboard (cross-platform clipboard)
//! - `ShareLocation` hands out the configured share address
//! - `UiTask` lets a Dioxus task serve as the "copied" reset timer

use std::future::Future;
use std::pin::Pin;

use dioxus::document;
use dioxus::prelude::{spawn_forever, Task};
use greeting_core::{
    AudioPlayer, ClipboardWriter, GreetingError, GreetingResult, LocationProvider, TimerHandle,
};

/// DOM id of the background music element.
pub const AUDIO_ELEMENT_ID: &str = "background-music";

const PLAY_OK: &str = "ok";
const PLAY_MISSING: &str = "missing";
const PLAY_REJECTED_PREFIX: &str = "rejected:";

/// The page's `<audio>` element, addressed by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WebviewAudio {
    element_id: &'static str,
}

impl Default for WebviewAudio {
    fn default() -> Self {
        Self {
            element_id: AUDIO_ELEMENT_ID,
        }
    }
}

impl WebviewAudio {
    /// Run a statement against the element without waiting on the page.
    ///
    /// Spawned on the root scope so calls made during teardown still run.
    /// Failures are only logged.
    fn run(&self, statement: &str) {
        let eval = document::eval(&self.statement_script(statement));
        let element_id = self.element_id;
        spawn_forever(async move {
            match eval.join::<bool>().await {
                Ok(true) => {}
                Ok(false) => tracing::debug!("Audio element {} not found", element_id),
                Err(e) => tracing::debug!("Audio script failed: {}", e),
            }
        });
    }

    fn statement_script(&self, statement: &str) -> String {
        format!(
            r#"
            const audio = document.getElementById("{id}");
            if (!audio) {{ return false; }}
            {statement}
            return true;
            "#,
            id = self.element_id,
            statement = statement,
        )
    }

    fn play_script(&self) -> String {
        format!(
            r#"
            const audio = document.getElementById("{id}");
            if (!audio) {{ return "{missing}"; }}
            try {{
                await audio.play();
                return "{ok}";
            }} catch (err) {{
                return "{rejected}" + String(err);
            }}
            "#,
            id = self.element_id,
            missing = PLAY_MISSING,
            ok = PLAY_OK,
            rejected = PLAY_REJECTED_PREFIX,
        )
    }
}

/// Map the status string returned by the play script.
pub fn parse_play_status(status: &str) -> GreetingResult<()> {
    if status == PLAY_OK {
        Ok(())
    } else if status == PLAY_MISSING {
        Err(GreetingError::AudioUnavailable(
            "audio element not found".to_string(),
        ))
    } else if let Some(reason) = status.strip_prefix(PLAY_REJECTED_PREFIX) {
        Err(GreetingError::PlaybackRejected(reason.to_string()))
    } else {
        Err(GreetingError::Script(format!(
            "unexpected play status: {}",
            status
        )))
    }
}

impl AudioPlayer for WebviewAudio {
    type Playback = Pin<Box<dyn Future<Output = GreetingResult<()>>>>;

    fn set_volume(&self, volume: f32) {
        self.run(&format!("audio.volume = {};", volume));
    }

    fn pause(&self) {
        self.run("audio.pause();");
    }

    fn play(&self) -> Self::Playback {
        let eval = document::eval(&self.play_script());
        Box::pin(async move {
            match eval.join::<String>().await {
                Ok(status) => parse_play_status(&status),
                Err(e) => Err(GreetingError::Script(e.to_string())),
            }
        })
    }
}

/// System clipboard via arboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> GreetingResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| GreetingError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| GreetingError::Clipboard(e.to_string()))
    }
}

/// The address shared by the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareLocation(pub String);

impl LocationProvider for ShareLocation {
    fn current_location(&self) -> String {
        self.0.clone()
    }
}

/// A spawned Dioxus task used as a one-shot timer.
#[derive(Clone, Copy)]
pub struct UiTask(pub Task);

impl TimerHandle for UiTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ok_status() {
        assert_eq!(parse_play_status("ok"), Ok(()));
    }

    #[test]
    fn parse_missing_element() {
        assert!(matches!(
            parse_play_status("missing"),
            Err(GreetingError::AudioUnavailable(_))
        ));
    }

    #[test]
    fn parse_rejection_keeps_reason() {
        assert_eq!(
            parse_play_status("rejected:NotAllowedError: play() failed"),
            Err(GreetingError::PlaybackRejected(
                "NotAllowedError: play() failed".to_string()
            ))
        );
    }

    #[test]
    fn parse_garbage_is_script_error() {
        assert!(matches!(
            parse_play_status("???"),
            Err(GreetingError::Script(_))
        ));
    }

    #[test]
    fn play_script_targets_element() {
        let script = WebviewAudio::default().play_script();
        assert!(script.contains(r#"getElementById("background-music")"#));
        assert!(script.contains("await audio.play()"));
    }

    #[test]
    fn statement_script_reports_missing_element() {
        let script = WebviewAudio::default().statement_script("audio.pause();");
        assert!(script.contains(r#"getElementById("background-music")"#));
        assert!(script.contains("return false;"));
        assert!(script.contains("audio.pause();"));
        assert!(script.contains("return true;"));
    }

    #[test]
    fn share_location_returns_configured_url() {
        let location = ShareLocation("https://greeting.test/".to_string());
        assert_eq!(location.current_location(), "https://greeting.test/");
    }
}
