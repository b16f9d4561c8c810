//! Help overlay, toggled with Escape

use eframe::egui;

use super::colors::UiColors;
use crate::commands::Registry;

/// Shortcut descriptions shown in the overlay
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "run the command"),
    ("Up / Down", "walk the command history"),
    ("Ctrl+S", "toggle screen flicker"),
    ("Esc", "show or hide this help"),
];

/// Dims the screen and lists shortcuts and commands
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpOverlay {
    registry: Registry,
}

impl HelpOverlay {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn show(&self, ctx: &egui::Context, colors: &UiColors, font_size: f32) {
        let screen = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("crtterm_help_dim"),
        ))
        .rect_filled(screen, 0.0, colors.background.gamma_multiply(0.85));

        let font = egui::FontId::monospace(font_size);
        egui::Area::new(egui::Id::new("crtterm_help"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors.background)
                    .stroke(egui::Stroke::new(1.0, colors.muted))
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Keyboard")
                                .font(font.clone())
                                .color(colors.prompt),
                        );
                        for (key, action) in SHORTCUTS {
                            ui.label(
                                egui::RichText::new(format!("{:<10} {}", key, action))
                                    .font(font.clone())
                                    .color(colors.foreground),
                            );
                        }
                        ui.add_space(font_size);
                        ui.label(
                            egui::RichText::new("Commands")
                                .font(font.clone())
                                .color(colors.prompt),
                        );
                        let verbs: Vec<&str> = self.registry.listed().collect();
                        ui.label(
                            egui::RichText::new(verbs.join("  "))
                                .font(font.clone())
                                .color(colors.foreground),
                        );
                    });
            });
    }
}
