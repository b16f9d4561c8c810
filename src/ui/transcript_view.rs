//! Transcript rendering
//!
//! Fragments are first turned into styled [`Row`]s, which is plain data
//! and can be checked without a window, then drawn as monospace labels in
//! a scroll area that sticks to the bottom.

use eframe::egui;

use super::colors::UiColors;
use crate::models::{EntryKind, Fragment};
use crate::transcript::Transcript;

/// One rendered line: colored text segments laid out left to right
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub segments: Vec<(String, egui::Color32)>,
    /// Leave a gap below this row
    pub spaced: bool,
}

impl Row {
    fn single(text: impl Into<String>, color: egui::Color32) -> Self {
        Self {
            segments: vec![(text.into(), color)],
            spaced: false,
        }
    }

    fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }

    /// Concatenated segment text
    pub fn text(&self) -> String {
        self.segments.iter().map(|(text, _)| text.as_str()).collect()
    }
}

/// Rows for a fragment, in display order
pub fn rows_for(fragment: &Fragment, colors: &UiColors) -> Vec<Row> {
    match fragment {
        Fragment::CommandLine { prompt, line } => vec![Row {
            segments: vec![
                (format!("{} ", prompt), colors.prompt),
                (line.clone(), colors.foreground),
            ],
            spaced: false,
        }],
        Fragment::Text(text) => vec![Row::single(text.clone(), colors.foreground)],
        Fragment::Paragraph(text) => vec![Row::single(text.clone(), colors.foreground).spaced()],
        Fragment::Listing(items) => items
            .iter()
            .map(|item| match item.kind {
                EntryKind::Folder => Row::single(format!("{}/", item.name), colors.folder),
                EntryKind::File => Row::single(item.name.clone(), colors.file),
            })
            .collect(),
        Fragment::Preformatted(text) => text
            .lines()
            .map(|line| Row::single(line, colors.foreground))
            .collect(),
        Fragment::Error(text) => vec![Row::single(text.clone(), colors.error)],
    }
}

/// Scroll state key; a cleared transcript starts a fresh scroll area at the top
fn scroll_salt(generation: u64) -> (&'static str, u64) {
    ("transcript", generation)
}

/// Scrolling view over a [`Transcript`]
#[derive(Debug, Clone)]
pub struct TranscriptView {
    font_size: f32,
}

impl TranscriptView {
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    pub fn show(&self, ui: &mut egui::Ui, transcript: &mut Transcript, colors: &UiColors) {
        let scroll_requested = transcript.take_scroll_request();
        let font = egui::FontId::monospace(self.font_size);

        egui::ScrollArea::vertical()
            .id_salt(scroll_salt(transcript.generation()))
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                for fragment in transcript.fragments() {
                    for row in rows_for(fragment, colors) {
                        self.show_row(ui, &row, &font);
                    }
                }
                if scroll_requested {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
    }

    fn show_row(&self, ui: &mut egui::Ui, row: &Row, font: &egui::FontId) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for (text, color) in &row.segments {
                ui.label(
                    egui::RichText::new(text)
                        .font(font.clone())
                        .color(*color),
                );
            }
        });
        if row.spaced {
            ui.add_space(self.font_size * 0.75);
        }
    }
}
