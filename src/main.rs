//! Scroll Chat - a chat feed viewer built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for HTTP calls and file downloads
//! - Communication via crossbeam channels (lock-free, sync-safe)

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scroll_chat::app::ChatApp;
use scroll_chat::backend::HttpApi;
use scroll_chat::config::{self, Settings};
use scroll_chat::state::ChatViewState;

#[derive(Parser, Debug)]
#[command(name = "scroll-chat", version, about = "Scrollable chat feed with soft delete")]
struct Args {
    /// JSON array of messages to show
    #[arg(short, long)]
    messages: Option<PathBuf>,

    /// Stored profile of the signed-in user
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Endpoint for the delete call
    #[arg(long, env = "SCROLL_CHAT_DELETE_URL")]
    delete_url: Option<String>,

    /// Read settings from this file instead of the config dir
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn load_settings(args: &Args) -> Settings {
    if let Some(path) = &args.settings {
        return config::load_settings_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Failed to read settings: {}", e);
            Settings::default()
        });
    }
    match config::load_settings() {
        Some(settings) => settings,
        None => {
            let settings = Settings::default();
            if let Err(e) = config::save_settings(&settings) {
                tracing::warn!("Failed to write default settings: {}", e);
            }
            settings
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "scroll_chat=info".into()))
        .with(fmt::layer())
        .init();

    let args = Args::parse();
    let mut settings = load_settings(&args);
    if let Some(url) = &args.delete_url {
        settings.delete_url = url.clone();
    }

    let user = args
        .profile
        .clone()
        .or_else(|| settings.profile_path.clone())
        .or_else(config::default_profile_path)
        .and_then(|path| match config::load_profile(&path) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to read profile: {}", e);
                None
            }
        });
    if user.is_none() {
        tracing::info!("No signed-in user; delete is disabled");
    }

    let messages = args
        .messages
        .clone()
        .or_else(|| settings.messages_path.clone())
        .map(|path| {
            config::load_messages(&path).unwrap_or_else(|e| {
                tracing::error!(path = %path.display(), "Failed to read messages: {}", e);
                Vec::new()
            })
        })
        .unwrap_or_default();

    let mut state = ChatViewState::new(user).with_on_message_deleted(|message_id| {
        tracing::info!(%message_id, "message removed from feed");
    });
    state.replace_messages(messages);

    let api = match HttpApi::new(&settings.delete_url) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scroll Chat",
        options,
        Box::new(move |cc| Ok(Box::new(ChatApp::new(cc, &settings, state, api)))),
    )
}
