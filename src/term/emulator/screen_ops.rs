// src/term/emulator/screen_ops.rs

use super::TerminalEmulator;
use crate::term::{modes::EraseMode, screen::ScrollHistory};
use log::warn;
use std::cmp::min;

impl TerminalEmulator {
    /// Cursor position clamped into the grid for editing operations.
    fn cursor_cell(&self) -> (usize, usize) {
        let ctx = self.screen_context();
        let (x, y) = self.cursor_controller.pos();
        (
            min(x, ctx.width.saturating_sub(1)),
            min(y, ctx.height.saturating_sub(1)),
        )
    }

    pub(super) fn erase_in_display(&mut self, mode: EraseMode) {
        let ctx = self.screen_context();
        let (x, y) = self.cursor_cell();
        match mode {
            EraseMode::ToEnd => {
                self.screen.fill_row_segment(y, x, ctx.width);
                for row in (y + 1)..ctx.height {
                    self.screen.clear_row(row);
                }
            }
            EraseMode::ToStart => {
                for row in 0..y {
                    self.screen.clear_row(row);
                }
                self.screen.fill_row_segment(y, 0, x + 1);
            }
            EraseMode::All => self.screen.clear_all(),
            EraseMode::Scrollback => {
                self.screen.clear_all();
                self.screen.clear_scrollback();
            }
            EraseMode::Unknown => warn!("unknown ED mode used"),
        }
    }

    pub(super) fn erase_in_line(&mut self, mode: EraseMode) {
        let ctx = self.screen_context();
        let (x, y) = self.cursor_cell();
        match mode {
            EraseMode::ToEnd => self.screen.fill_row_segment(y, x, ctx.width),
            EraseMode::ToStart => self.screen.fill_row_segment(y, 0, x + 1),
            EraseMode::All => self.screen.clear_row(y),
            EraseMode::Scrollback => warn!("erase mode 3 is not applicable to EL"),
            EraseMode::Unknown => warn!("unknown EL mode used"),
        }
    }

    pub(super) fn erase_chars(&mut self, n: usize) {
        let ctx = self.screen_context();
        let (x, y) = self.cursor_cell();
        self.screen
            .fill_row_segment(y, x, min(x.saturating_add(n), ctx.width));
    }

    pub(super) fn insert_blank_chars(&mut self, n: usize) {
        let (x, y) = self.cursor_cell();
        self.screen.insert_blank_chars_in_line(y, x, n);
    }

    pub(super) fn delete_chars(&mut self, n: usize) {
        let (x, y) = self.cursor_cell();
        self.screen.delete_chars_in_line(y, x, n);
    }

    /// IL: a no-op when the cursor is outside the scrolling region.
    pub(super) fn insert_lines(&mut self, n: usize) {
        let (_, y) = self.cursor_cell();
        self.screen.insert_lines(y, n);
    }

    /// DL: a no-op when the cursor is outside the scrolling region.
    pub(super) fn delete_lines(&mut self, n: usize) {
        let (_, y) = self.cursor_cell();
        self.screen.delete_lines(y, n);
    }

    pub(super) fn scroll_up_lines(&mut self, n: usize) {
        self.screen.scroll_up(n, ScrollHistory::Save);
    }

    pub(super) fn scroll_down_lines(&mut self, n: usize) {
        self.screen.scroll_down(n);
    }
}
