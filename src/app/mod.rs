//! Main application structure
//!
//! This module contains `CrtTermApp`, which implements `eframe::App` on top
//! of a [`Session`]. The app owns no terminal state of its own: each frame it
//! forwards keys to the session, hands suspended commands to the background
//! runtime, applies finished ones, and draws.
//!
//! ### UI Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Central Panel (Transcript)              │
//! │ - Banner, echoed lines, command output  │
//! │ - Scanlines / flicker / bell flash      │
//! ├─────────────────────────────────────────┤
//! │ Bottom Panel (Input Row)                │
//! │ - Prompt + single-line editor           │
//! └─────────────────────────────────────────┘
//! ```

mod async_ops;
mod input;

use crtterm::bell::BellSignal;
use crtterm::config::{Config, Theme};
use crtterm::ui::{BellFlash, CrtEffects, HelpOverlay, TranscriptView, UiColors};
use crtterm::{CompletedCommand, PendingCommand, Session};
use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Request sent from the UI to the background task
#[derive(Debug)]
enum AsyncRequest {
    /// Await a command whose handler suspended
    RunCommand(PendingCommand),
}

/// Result sent from the background task back to the UI
#[derive(Debug)]
enum AsyncResult {
    CommandCompleted(CompletedCommand),
}

/// Display options taken from the configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppOptions {
    pub font_size: f32,
    pub scanlines: bool,
}

impl AppOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            font_size: config.ui.font_size as f32,
            scanlines: config.ui.scanlines,
        }
    }
}

pub struct CrtTermApp {
    session: Session,
    options: AppOptions,
    /// Colors for `colors_theme`, rebuilt when the session theme changes
    colors: UiColors,
    colors_theme: Theme,
    transcript_view: TranscriptView,
    help_overlay: HelpOverlay,
    bell_signal: Option<BellSignal>,
    bell_flash: BellFlash,
    input_id: egui::Id,
    /// Put the caret after the last character on the next frame
    move_caret_to_end: bool,
    /// Commands handed to the background task and not yet applied
    in_flight: usize,
    runtime: tokio::runtime::Runtime,
    async_tx: mpsc::UnboundedSender<AsyncRequest>,
    async_rx: mpsc::UnboundedReceiver<AsyncResult>,
}

impl CrtTermApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: Session,
        runtime: tokio::runtime::Runtime,
        options: AppOptions,
        bell_signal: Option<BellSignal>,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = mpsc::unbounded_channel();

        let repaint = cc.egui_ctx.clone();
        runtime.spawn(async move {
            async_ops::async_operation_loop(&mut request_rx, result_tx, repaint).await;
        });

        let theme = session.theme();
        info!(theme = %theme, "application created");

        Self {
            colors: UiColors::from_theme(theme),
            colors_theme: theme,
            transcript_view: TranscriptView::new(options.font_size),
            help_overlay: HelpOverlay::default(),
            bell_flash: BellFlash::new(),
            input_id: egui::Id::new("crtterm_input"),
            move_caret_to_end: false,
            in_flight: 0,
            session,
            options,
            bell_signal,
            runtime,
            async_tx: request_tx,
            async_rx: result_rx,
        }
    }

    /// Hand a suspended command to the background task
    fn run_in_background(&mut self, pending: PendingCommand) {
        debug!(id = pending.id(), verb = pending.verb(), "command suspended");
        match self.async_tx.send(AsyncRequest::RunCommand(pending)) {
            Ok(()) => self.in_flight += 1,
            Err(mpsc::error::SendError(AsyncRequest::RunCommand(pending))) => {
                tracing::error!("Background task is gone, running command in place");
                let completed = self.runtime.block_on(pending.wait());
                self.session.complete(completed);
            }
        }
    }

    /// Apply every finished command (non-blocking)
    fn poll_async_results(&mut self) {
        while let Ok(result) = self.async_rx.try_recv() {
            match result {
                AsyncResult::CommandCompleted(completed) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.session.complete(completed);
                }
            }
        }
    }

    fn refresh_colors(&mut self) {
        let theme = self.session.theme();
        if theme != self.colors_theme {
            debug!(from = %self.colors_theme, to = %theme, "switching palette");
            self.colors = UiColors::from_theme(theme);
            self.colors_theme = theme;
        }
    }

    fn panel_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.colors.background)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
    }

    fn render_input_row(&mut self, ui: &mut egui::Ui) {
        let font = egui::FontId::monospace(self.options.font_size);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.session.prompt())
                    .font(font.clone())
                    .color(self.colors.prompt),
            );

            let output = egui::TextEdit::singleline(self.session.input_mut())
                .id(self.input_id)
                .font(font)
                .text_color(self.colors.foreground)
                .frame(false)
                .lock_focus(true)
                .desired_width(f32::INFINITY)
                .show(ui);

            if self.move_caret_to_end {
                let end = self.session.input().chars().count();
                let mut state = output.state;
                state
                    .cursor
                    .set_char_range(Some(egui::text::CCursorRange::one(
                        egui::text::CCursor::new(end),
                    )));
                state.store(ui.ctx(), output.response.id);
                self.move_caret_to_end = false;
            }

            if !self.session.help_visible() {
                output.response.request_focus();
            }
        });
    }
}

impl eframe::App for CrtTermApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_async_results();
        self.handle_keyboard_shortcuts(ctx);
        self.refresh_colors();

        let now = ctx.input(|i| i.time);
        if let Some(signal) = &self.bell_signal {
            self.bell_flash.update(signal.rings(), now);
        }

        egui::TopBottomPanel::bottom("input_row")
            .frame(self.panel_frame())
            .show_separator_line(false)
            .show(ctx, |ui| self.render_input_row(ui));

        let effects = CrtEffects {
            scanlines: self.options.scanlines,
            flicker: self.session.flicker(),
        };
        let mut flashing = false;
        egui::CentralPanel::default()
            .frame(self.panel_frame())
            .show(ctx, |ui| {
                self.transcript_view
                    .show(ui, self.session.transcript_mut(), &self.colors);

                let rect = ui.clip_rect();
                effects.paint(ui.painter(), rect, self.colors.scanline, now);
                flashing = self
                    .bell_flash
                    .paint(ui.painter(), rect, self.colors.foreground, now);
            });

        if self.session.help_visible() {
            self.help_overlay
                .show(ctx, &self.colors, self.options.font_size);
        }

        if effects.animating() || flashing {
            ctx.request_repaint();
        } else if self.in_flight > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
