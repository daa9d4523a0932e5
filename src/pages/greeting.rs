//! Greeting page - the whole application.
//!
//! Owns the view instance for its lifetime:
//! - particles appear only after the first render has committed
//! - the music button drives the page's `<audio>` element
//! - the share button copies the configured address and shows "Copied!"
//!   for two seconds after the last click

use dioxus::prelude::*;
use greeting_core::{GreetingView, COPIED_RESET};
use greeting_ui::{FloatingHearts, MusicToggle, SparkleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{GreetingSection, LoveSection, MemoriesSection, WishSection};
use crate::context::use_page_config;
use crate::platform::{ShareLocation, SystemClipboard, UiTask, WebviewAudio, AUDIO_ELEMENT_ID};

type PageView = GreetingView<WebviewAudio, UiTask>;

#[component]
pub fn GreetingPage() -> Element {
    let config = use_page_config();
    let mut view: Signal<PageView> = use_signal(|| GreetingView::new(WebviewAudio::default()));

    // Mount gate: runs after the first render, generates particles once
    let seed = config.seed;
    use_effect(move || {
        let mounted = match seed {
            Some(seed) => view.write().mount(&mut StdRng::seed_from_u64(seed)),
            None => view.write().mount(&mut rand::rng()),
        };
        if mounted {
            tracing::debug!(?seed, "Particles generated");
        }
    });

    // Dispose the reset timer and stop the music with the page
    use_drop(move || {
        if let Ok(mut view) = view.try_write() {
            view.teardown();
        }
    });

    let mut toggle_music = move || {
        let Some(pending) = view.write().begin_toggle() else {
            return;
        };
        spawn(async move {
            let (ticket, outcome) = pending.wait().await;
            view.write().settle_playback(ticket, outcome);
        });
    };

    let location = ShareLocation(config.share_url.clone());
    let mut copy_link = move || {
        let ticket = view.write().copy_link(&SystemClipboard, &location);
        let reset = spawn(async move {
            tokio::time::sleep(COPIED_RESET).await;
            view.write().expire_copied(ticket);
        });
        view.write().arm_copied_reset(UiTask(reset));
    };

    let (phase, copied, hearts, sparkles) = {
        let view = view.read();
        (
            view.phase(),
            view.is_copied(),
            view.hearts().to_vec(),
            view.sparkles().to_vec(),
        )
    };

    rsx! {
        div { class: "greeting-page",
            // Background music, started only by the toggle
            audio {
                id: AUDIO_ELEMENT_ID,
                src: "{config.audio_src}",
                "loop": "true",
                "preload": "metadata",
            }

            FloatingHearts { hearts }
            SparkleField { sparkles }

            MusicToggle { phase, onclick: move |_| toggle_music() }

            GreetingSection {}
            LoveSection {}
            MemoriesSection {}
            WishSection { copied, on_share: move |_| copy_link() }
        }
    }
}
