//! Core ChatApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread;

use crate::backend::{run_backend, BackendConfig, ChatApi};
use crate::config::Settings;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ChatViewState;
use crate::ui::images::ImageCache;
use crate::ui::theme::{apply_app_style, ChatTheme};

pub struct ChatApp {
    // Feed, overlay, delete flow, toast, viewer
    pub state: ChatViewState,

    // Decoded previews and avatars
    pub images: ImageCache,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    pub theme: ChatTheme,
}

impl ChatApp {
    /// Spawn the backend thread and set up styling.
    pub fn new<A: ChatApi>(
        cc: &eframe::CreationContext<'_>,
        settings: &Settings,
        state: ChatViewState,
        api: A,
    ) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let config = BackendConfig::from(settings);
        let spawned = thread::Builder::new()
            .name("chat-backend".into())
            .spawn(move || run_backend(api, config, action_rx, event_tx));
        if let Err(e) = spawned {
            tracing::error!("Failed to spawn backend thread: {}", e);
        }

        let theme = ChatTheme::by_name(&settings.theme);
        apply_app_style(&cc.egui_ctx, &theme);

        Self::with_channels(state, action_tx, event_rx, theme)
    }

    /// Build an app around existing channels, without a window.
    pub fn with_channels(
        state: ChatViewState,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
        theme: ChatTheme,
    ) -> Self {
        Self {
            state,
            images: ImageCache::new(),
            action_tx,
            event_rx,
            theme,
        }
    }

    /// Queue work for the backend. A closed channel means the backend died.
    pub(super) fn send(&self, action: BackendAction) {
        if self.action_tx.send(action).is_err() {
            tracing::error!("backend is not running; action dropped");
        }
    }
}
