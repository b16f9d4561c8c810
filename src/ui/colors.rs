//! Color utilities for UI rendering
//!
//! This module converts theme palettes to egui colors.

use crate::config::{Color, Palette, Theme};
use eframe::egui;

/// Extension trait to convert config Color to egui::Color32
pub trait ToEguiColor {
    /// Convert to egui::Color32
    fn to_egui(&self) -> egui::Color32;
}

impl ToEguiColor for Color {
    fn to_egui(&self) -> egui::Color32 {
        let (r, g, b, a) = self.to_rgba8();
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

/// Palette converted to egui colors, rebuilt when the theme changes
#[derive(Debug, Clone, PartialEq)]
pub struct UiColors {
    pub background: egui::Color32,
    pub foreground: egui::Color32,
    pub prompt: egui::Color32,
    pub folder: egui::Color32,
    pub file: egui::Color32,
    pub error: egui::Color32,
    pub muted: egui::Color32,
    pub scanline: egui::Color32,
}

impl UiColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: palette.background.to_egui(),
            foreground: palette.foreground.to_egui(),
            prompt: palette.prompt.to_egui(),
            folder: palette.folder.to_egui(),
            file: palette.file.to_egui(),
            error: palette.error.to_egui(),
            muted: palette.muted.to_egui(),
            scanline: palette.scanline.to_egui(),
        }
    }

    pub fn from_theme(theme: Theme) -> Self {
        Self::from_palette(&theme.palette())
    }
}

impl Default for UiColors {
    fn default() -> Self {
        Self::from_theme(Theme::Default)
    }
}
