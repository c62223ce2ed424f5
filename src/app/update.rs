//! Main update loop

use chrono::{DateTime, Utc};
use eframe::egui;
use std::time::{Duration, Instant};

use super::ChatApp;
use crate::ui;

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx, Instant::now(), Utc::now());
    }
}

impl ChatApp {
    /// Lay out one frame. `now` drives toast expiry, `wall` the timestamps.
    pub fn frame(&mut self, ctx: &egui::Context, now: Instant, wall: DateTime<Utc>) {
        // Backend results first so this frame shows them
        self.process_events(ctx, now);
        self.state.tick(now);

        // Keep polling for backend events and toast expiry
        ctx.request_repaint_after(Duration::from_millis(100));

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("feed_header")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.background)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                let who = match self.state.user() {
                    Some(user) => format!("Signed in as {}", user.name),
                    None => "Not signed in".to_string(),
                };
                ui.horizontal(|ui| {
                    ui.heading("Chat");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(who).color(self.theme.text_muted));
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(ui::render_feed(
                ui,
                &self.state,
                &mut self.images,
                &self.theme,
                wall,
            ));
        });

        if self.state.pending_delete().is_some() {
            actions.extend(ui::render_delete_confirm(ctx, &self.theme));
        }

        if let Some(url) = self.state.viewer.image_url().map(str::to_owned) {
            actions.extend(ui::render_image_viewer(ctx, &url, &mut self.images, &self.theme));
        }

        ui::render_status_toast(ctx, self.state.toast.current(), &self.theme);

        for action in actions {
            self.handle_action(action);
        }
        self.dispatch_image_requests();
    }
}
