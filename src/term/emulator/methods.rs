// src/term/emulator/methods.rs

use super::TerminalEmulator;
use crate::{
    glyph::Attributes,
    term::{action::EmulatorAction, modes::TerminalModes, screen::ScrollHistory},
};

impl TerminalEmulator {
    /// Line feed: scrolls when the cursor sits on the bottom margin,
    /// otherwise moves down, never past the last row.
    pub(super) fn line_feed(&mut self) {
        self.move_down_or_scroll();
    }

    pub(super) fn move_down_or_scroll(&mut self) {
        let ctx = self.screen_context();
        let (_, y) = self.cursor_controller.pos();
        if y == ctx.scroll_bot {
            self.screen.scroll_up(1, ScrollHistory::Save);
        } else if y < ctx.height.saturating_sub(1) {
            self.cursor_controller.move_down(1, &ctx);
        }
    }

    /// Reverse line feed: scrolls down when the cursor sits on the top
    /// margin, otherwise moves up.
    pub(super) fn reverse_line_feed(&mut self) {
        let ctx = self.screen_context();
        let (_, y) = self.cursor_controller.pos();
        if y == ctx.scroll_top {
            self.screen.scroll_down(1);
        } else if y > 0 {
            self.cursor_controller.move_up(1);
        }
    }

    /// CR from the output stream: return to column 0 and mark the
    /// input-line record.
    pub(super) fn carriage_return(&mut self) {
        self.input_pending_cr = true;
        self.cursor_controller.carriage_return();
    }

    /// Hands the input-line record to the embedder when a line feed
    /// arrives with a non-empty record.
    pub(super) fn flush_input_record(&mut self) -> Option<EmulatorAction> {
        self.input_pending_cr = false;
        if self.input_buffer.is_empty() {
            None
        } else {
            Some(EmulatorAction::CommandEntered(std::mem::take(
                &mut self.input_buffer,
            )))
        }
    }

    /// RIS / DECSTR: back to the power-on state. The primary screen is
    /// restored if the alternate was active, then everything is cleared.
    pub(super) fn full_reset(&mut self) {
        if self.screen.alt_screen_active() {
            self.screen.exit_alternate();
        }
        self.screen.clear_all();
        self.screen.clear_scrollback();
        self.screen.reset_scrolling_region();
        self.cursor_controller.reset();
        self.style = Attributes::default();
        self.modes = TerminalModes::default();
        self.last_printed = None;
        self.alt_saved_cursor = None;
        self.input_buffer.clear();
        self.input_pending_cr = false;
        self.current_directory = None;
    }
}
