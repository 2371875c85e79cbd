// src/term/emulator/cursor_handler.rs

use super::TerminalEmulator;
use crate::term::{action::EmulatorAction, TAB_INTERVAL};
use log::debug;
use std::cmp::min;

const XTWINOPS_REPORT_TEXT_AREA_SIZE_CHARS: u16 = 18;

impl TerminalEmulator {
    pub(super) fn backspace(&mut self) {
        self.cursor_controller.move_left(1);
    }

    /// Moves to the next multiple-of-8 column, stopping at the last cell.
    pub(super) fn horizontal_tab(&mut self) {
        let ctx = self.screen_context();
        let (x, _) = self.cursor_controller.pos();
        let next_stop = (x / TAB_INTERVAL + 1) * TAB_INTERVAL;
        self.cursor_controller
            .move_to_col(min(next_stop, ctx.width.saturating_sub(1)), &ctx);
    }

    pub(super) fn cursor_up(&mut self, n: usize) {
        self.cursor_controller.move_up(n.max(1));
    }

    pub(super) fn cursor_down(&mut self, n: usize) {
        let ctx = self.screen_context();
        self.cursor_controller.move_down(n.max(1), &ctx);
    }

    pub(super) fn cursor_forward(&mut self, n: usize) {
        let ctx = self.screen_context();
        let (x, _) = self.cursor_controller.pos();
        self.cursor_controller
            .move_to_col(x.saturating_add(n.max(1)), &ctx);
    }

    pub(super) fn cursor_backward(&mut self, n: usize) {
        self.cursor_controller.move_left(n.max(1));
    }

    pub(super) fn cursor_to_col(&mut self, col: usize) {
        let ctx = self.screen_context();
        self.cursor_controller.move_to_col(col, &ctx);
    }

    pub(super) fn cursor_to_row(&mut self, row: usize) {
        let ctx = self.screen_context();
        self.cursor_controller.move_to_row(row, &ctx);
    }

    pub(super) fn cursor_to_pos(&mut self, row: usize, col: usize) {
        let ctx = self.screen_context();
        self.cursor_controller.move_to(col, row, &ctx);
    }

    /// REP: reprints the last printed character `n` times. A no-op when
    /// nothing has been printed yet.
    pub(super) fn repeat_last_char(&mut self, n: usize) {
        if let Some(ch) = self.last_printed {
            for _ in 0..n.max(1) {
                self.print_char(ch);
            }
        }
    }

    pub(super) fn handle_window_manipulation(
        &mut self,
        ps1: u16,
        ps2: Option<u16>,
        ps3: Option<u16>,
    ) -> Option<EmulatorAction> {
        match ps1 {
            XTWINOPS_REPORT_TEXT_AREA_SIZE_CHARS => {
                let (cols, rows) = self.dimensions();
                let response = format!("\x1b[8;{};{}t", rows, cols);
                Some(EmulatorAction::WritePty(response.into_bytes()))
            }
            _ => {
                debug!(
                    "window manipulation ignored: ps1={}, ps2={:?}, ps3={:?}",
                    ps1, ps2, ps3
                );
                None
            }
        }
    }
}
