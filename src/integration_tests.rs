//! Integration tests for scroll-chat
//!
//! These tests exercise full workflows across multiple modules: user actions
//! through `ChatApp`, the backend actions they produce, and the view state
//! after backend events come back.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use chrono::{TimeZone, Utc};
use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::app::ChatApp;
use crate::content::MessageContent;
use crate::grouping::test_support::{msg, profile};
use crate::model::{DeleteResponse, DELETED_SENTINEL};
use crate::protocol::{BackendAction, GuiEvent, ImagePixels};
use crate::state::{ChatViewState, DELETE_ERROR_TEXT, DOWNLOAD_ERROR_TEXT};
use crate::toast::{ToastKind, TOAST_DURATION};
use crate::ui::images::ImagePreview;
use crate::ui::theme::{apply_app_style, ChatTheme};
use crate::ui::{render_feed, ChatAction};

struct Harness {
    app: ChatApp,
    actions: Receiver<BackendAction>,
    events: Sender<GuiEvent>,
    deleted: Rc<RefCell<Vec<String>>>,
}

fn harness() -> Harness {
    let deleted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&deleted);
    let mut state = ChatViewState::new(Some(profile("me")))
        .with_on_message_deleted(move |id| sink.borrow_mut().push(id.to_string()));
    state.replace_messages(vec![
        msg("m1", "other", "hello"),
        msg("m2", "me", "hi"),
        msg("m3", "me", "Image:https://cdn.example.com/cat.png"),
        msg("m4", "other", "PDF notes.pdf:https://cdn.example.com/notes.pdf"),
    ]);

    let (action_tx, action_rx) = unbounded();
    let (event_tx, event_rx) = unbounded();
    let app = ChatApp::with_channels(state, action_tx, event_rx, ChatTheme::light());
    Harness {
        app,
        actions: action_rx,
        events: event_tx,
        deleted,
    }
}

#[test]
fn test_confirmed_delete_reaches_backend_and_updates_feed() {
    let mut h = harness();
    let ctx = egui::Context::default();
    let now = Instant::now();

    h.app.handle_action(ChatAction::RequestDelete("m2".into()));
    assert!(h.actions.try_recv().is_err(), "nothing sent before confirm");
    assert_eq!(h.app.state.pending_delete().map(|m| m.id.as_str()), Some("m2"));

    h.app.handle_action(ChatAction::ConfirmDelete);
    assert_eq!(
        h.actions.try_recv().unwrap(),
        BackendAction::DeleteMessage {
            message_id: "m2".into(),
            own_id: "me".into(),
        }
    );
    assert!(h.app.state.pending_delete().is_none());

    h.events
        .send(GuiEvent::DeleteResolved {
            message_id: "m2".into(),
            result: Ok(DeleteResponse {
                message: Some("Deleted".into()),
            }),
        })
        .unwrap();
    h.app.process_events(&ctx, now);

    assert_eq!(h.app.state.find("m2").unwrap().content, DELETED_SENTINEL);
    assert_eq!(*h.deleted.borrow(), vec!["m2".to_string()]);
    let toast = h.app.state.toast.current().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.text, "Deleted");

    // Deleted messages lose their delete affordance
    h.app.handle_action(ChatAction::RequestDelete("m2".into()));
    assert!(h.app.state.pending_delete().is_none());

    h.app.state.tick(now + TOAST_DURATION);
    assert!(h.app.state.toast.current().is_none());
}

#[test]
fn test_failed_delete_keeps_message() {
    let mut h = harness();
    let ctx = egui::Context::default();

    h.app.handle_action(ChatAction::RequestDelete("m2".into()));
    h.app.handle_action(ChatAction::ConfirmDelete);
    assert!(h.actions.try_recv().is_ok());

    h.app.apply_event(
        &ctx,
        GuiEvent::DeleteResolved {
            message_id: "m2".into(),
            result: Err("HTTP 500".into()),
        },
        Instant::now(),
    );

    assert_eq!(h.app.state.find("m2").unwrap().content, "hi");
    assert!(h.deleted.borrow().is_empty());
    assert_eq!(h.app.state.toast.current().unwrap().text, DELETE_ERROR_TEXT);
}

#[test]
fn test_cancel_sends_nothing() {
    let mut h = harness();
    h.app.handle_action(ChatAction::RequestDelete("m3".into()));
    h.app.handle_action(ChatAction::CancelDelete);
    h.app.handle_action(ChatAction::ConfirmDelete);
    assert!(h.actions.try_recv().is_err());
}

#[test]
fn test_foreign_message_cannot_be_deleted() {
    let mut h = harness();
    h.app.handle_action(ChatAction::RequestDelete("m1".into()));
    h.app.handle_action(ChatAction::ConfirmDelete);
    assert!(h.app.state.pending_delete().is_none());
    assert!(h.actions.try_recv().is_err());
}

#[test]
fn test_pdf_download_round_trip() {
    let mut h = harness();
    let ctx = egui::Context::default();
    let now = Instant::now();

    h.app.handle_action(ChatAction::DownloadPdf {
        url: "https://cdn.example.com/notes.pdf".into(),
        filename: "notes.pdf".into(),
    });
    assert_eq!(
        h.actions.try_recv().unwrap(),
        BackendAction::DownloadPdf {
            url: "https://cdn.example.com/notes.pdf".into(),
            filename: "notes.pdf".into(),
        }
    );

    h.app.apply_event(
        &ctx,
        GuiEvent::PdfDownloaded {
            path: PathBuf::from("/tmp/notes.pdf"),
        },
        now,
    );
    let toast = h.app.state.toast.current().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.text.contains("notes.pdf"));

    h.app.apply_event(
        &ctx,
        GuiEvent::PdfDownloadFailed {
            url: String::new(),
            error: "PDF has no URL".into(),
        },
        now,
    );
    let toast = h.app.state.toast.current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.text, DOWNLOAD_ERROR_TEXT);
}

#[test]
fn test_image_events_update_cache() {
    let mut h = harness();
    let ctx = egui::Context::default();
    let now = Instant::now();

    h.app.apply_event(
        &ctx,
        GuiEvent::ImageLoaded {
            url: "https://cdn.example.com/cat.png".into(),
            pixels: ImagePixels {
                width: 1,
                height: 1,
                rgba: vec![0, 0, 0, 255],
            },
        },
        now,
    );
    assert!(matches!(
        h.app.images.get("https://cdn.example.com/cat.png"),
        ImagePreview::Ready(_)
    ));

    h.app.apply_event(
        &ctx,
        GuiEvent::ImageFailed {
            url: "https://cdn.example.com/dog.png".into(),
            error: "HTTP 404".into(),
        },
        now,
    );
    assert!(h.app.images.is_failed("https://cdn.example.com/dog.png"));
    h.app.dispatch_image_requests();
    assert!(h.actions.try_recv().is_err(), "neither image is refetched");
}

#[test]
fn test_viewer_open_and_close() {
    let mut h = harness();
    h.app
        .handle_action(ChatAction::OpenImage("https://cdn.example.com/cat.png".into()));
    assert_eq!(
        h.app.state.viewer.image_url(),
        Some("https://cdn.example.com/cat.png")
    );
    assert!(h.app.state.viewer.scroll_locked());

    h.app.handle_action(ChatAction::CloseImage);
    assert!(!h.app.state.viewer.is_open());
}

#[test]
fn test_feed_render_requests_previews_once() {
    let mut h = harness();
    let ctx = egui::Context::default();
    apply_app_style(&ctx, &h.app.theme);

    let layouts = h.app.state.layouts();
    assert_eq!(
        layouts[2].content,
        MessageContent::Image {
            url: "https://cdn.example.com/cat.png".into()
        }
    );
    assert_eq!(
        layouts[3].content,
        MessageContent::Pdf {
            name: "notes.pdf".into(),
            url: "https://cdn.example.com/notes.pdf".into()
        }
    );

    for _ in 0..2 {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let actions = render_feed(ui, &h.app.state, &mut h.app.images, &h.app.theme, Utc::now());
                assert!(actions.is_empty());
            });
        });
        h.app.dispatch_image_requests();
    }

    let requested: Vec<_> = h.actions.try_iter().collect();
    assert_eq!(
        requested,
        vec![BackendAction::FetchImage {
            url: "https://cdn.example.com/cat.png".into()
        }]
    );
}

#[test]
fn test_frame_uses_injected_clocks() {
    let mut h = harness();
    let ctx = egui::Context::default();
    apply_app_style(&ctx, &h.app.theme);
    let start = Instant::now();
    let wall = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();

    h.app.handle_action(ChatAction::RequestDelete("m2".into()));
    h.app.handle_action(ChatAction::ConfirmDelete);
    assert!(h.actions.try_recv().is_ok());
    h.events
        .send(GuiEvent::DeleteResolved {
            message_id: "m2".into(),
            result: Ok(DeleteResponse::default()),
        })
        .unwrap();

    // The backend result is drained inside the frame, stamped with `start`
    let _ = ctx.run(egui::RawInput::default(), |ctx| h.app.frame(ctx, start, wall));
    assert_eq!(h.app.state.find("m2").unwrap().content, DELETED_SENTINEL);
    assert!(h.app.state.toast.current().is_some());

    let almost = start + TOAST_DURATION - std::time::Duration::from_millis(1);
    let _ = ctx.run(egui::RawInput::default(), |ctx| h.app.frame(ctx, almost, wall));
    assert!(h.app.state.toast.current().is_some());

    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        h.app.frame(ctx, start + TOAST_DURATION, wall)
    });
    assert!(h.app.state.toast.current().is_none());
}
