//! CRT overlay effects
//!
//! Scanlines, flicker and the visual bell flash are painted on top of the
//! central panel after the transcript is drawn.

use eframe::egui;

/// Distance between interlace lines in points
pub const SCANLINE_SPACING: f32 = 3.0;

/// Strongest flicker darkening, as alpha
pub const FLICKER_MAX_ALPHA: u8 = 28;

/// How long the visual bell stays visible, in seconds
pub const BELL_FLASH_SECONDS: f64 = 0.15;

/// Which effects are on this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrtEffects {
    pub scanlines: bool,
    pub flicker: bool,
}

impl CrtEffects {
    /// Flicker needs a repaint every frame
    pub fn animating(&self) -> bool {
        self.flicker
    }

    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, scanline: egui::Color32, time: f64) {
        if self.scanlines {
            let stroke = egui::Stroke::new(1.0, scanline);
            for y in scanline_offsets(rect.top(), rect.bottom(), SCANLINE_SPACING) {
                painter.line_segment(
                    [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                    stroke,
                );
            }
        }

        if self.flicker {
            let alpha = flicker_alpha(time);
            painter.rect_filled(
                rect,
                0.0,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, alpha),
            );
        }
    }
}

/// Y positions of the interlace lines between `top` and `bottom`
pub fn scanline_offsets(top: f32, bottom: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let spacing = spacing.max(1.0);
    let count = ((bottom - top).max(0.0) / spacing).ceil() as usize;
    (0..count).map(move |i| top + i as f32 * spacing + 0.5)
}

/// Darkening for a point in time. Two out-of-phase waves keep it from
/// looking like a plain pulse.
pub fn flicker_alpha(time: f64) -> u8 {
    let wave = (time * 47.0).sin() * 0.6 + (time * 13.0).sin() * 0.4;
    let level = (wave * 0.5 + 0.5).clamp(0.0, 1.0);
    (level * FLICKER_MAX_ALPHA as f64).round() as u8
}

/// Tracks visual bell rings and fades the flash out
#[derive(Debug, Clone, Default)]
pub struct BellFlash {
    seen_rings: u64,
    started: Option<f64>,
}

impl BellFlash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a flash if the ring count moved since the last frame
    pub fn update(&mut self, rings: u64, now: f64) {
        if rings != self.seen_rings {
            self.seen_rings = rings;
            self.started = Some(now);
        }
    }

    /// Flash strength in `0.0..=1.0`, zero once it has faded
    pub fn strength(&mut self, now: f64) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let elapsed = now - started;
        if elapsed >= BELL_FLASH_SECONDS {
            self.started = None;
            return 0.0;
        }
        (1.0 - elapsed / BELL_FLASH_SECONDS) as f32
    }

    pub fn paint(&mut self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32, now: f64) -> bool {
        let strength = self.strength(now);
        if strength <= 0.0 {
            return false;
        }
        painter.rect_filled(rect, 0.0, color.gamma_multiply(strength * 0.35));
        true
    }
}
