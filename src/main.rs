#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::PageConfig;

/// Birthday greeting page
#[derive(Parser, Debug)]
#[command(name = "greeting-desktop")]
#[command(about = "A scrollable birthday greeting with music and floating hearts")]
struct Args {
    /// Address copied by the share button
    #[arg(long, default_value = context::DEFAULT_SHARE_URL)]
    share_url: String,

    /// Audio source for the background music
    #[arg(long, default_value = context::DEFAULT_AUDIO_SRC)]
    audio_src: String,

    /// Seed for the particle layout (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = PageConfig {
        share_url: args.share_url,
        audio_src: args.audio_src,
        seed: args.seed,
    };
    tracing::info!(
        "Starting greeting page (share url: {}, audio: {})",
        config.share_url,
        config.audio_src
    );
    context::init_page_config(config);

    // Tall portrait window so each section fills the view
    let window_width = 900.0;
    let window_height = 1000.0;

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Happy Birthday")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);
}
