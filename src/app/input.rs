//! Input and Keyboard Handling
//!
//! Keys the session cares about are consumed before the text editor sees
//! them, so Enter never drops focus and the arrows never move the caret.
//!
//! ## Keyboard Shortcuts
//!
//! | Shortcut | Action |
//! |----------|--------|
//! | Enter | Submit the input row |
//! | Up / Down | Walk the command history |
//! | Ctrl+S (Cmd+S) | Toggle screen flicker |
//! | Escape | Toggle the help overlay |
//! | Tab | Swallowed |
//! | Backspace on a blank row | Ring the bell |

use eframe::egui;

use super::CrtTermApp;
use crtterm::{Direction, Shortcut};

impl CrtTermApp {
    /// Handle keyboard shortcuts and navigation
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let consume = |modifiers: egui::Modifiers, key: egui::Key| {
            ctx.input_mut(|i| i.consume_key(modifiers, key))
        };

        if consume(egui::Modifiers::COMMAND, egui::Key::S) {
            self.session.shortcut(Shortcut::ToggleFlicker);
        }

        if consume(egui::Modifiers::NONE, egui::Key::Escape) {
            self.session.shortcut(Shortcut::ToggleHelp);
        }

        // Everything below edits the input row, which the overlay covers
        if self.session.help_visible() {
            return;
        }

        if consume(egui::Modifiers::NONE, egui::Key::Tab) {
            self.session.tab();
        }

        if consume(egui::Modifiers::NONE, egui::Key::ArrowUp) {
            self.move_caret_to_end = self.session.navigate(Direction::Previous);
        }

        if consume(egui::Modifiers::NONE, egui::Key::ArrowDown) {
            self.move_caret_to_end = self.session.navigate(Direction::Next);
        }

        // Not consumed: the editor still deletes whitespace
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.session.backspace();
        }

        if consume(egui::Modifiers::NONE, egui::Key::Enter) {
            if let Some(pending) = self.session.submit_and_poll() {
                self.run_in_background(pending);
            }
        }
    }
}
