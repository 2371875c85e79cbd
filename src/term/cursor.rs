// src/term/cursor.rs

//! Manages the terminal's cursor: its position, the DECSC/DECRC save
//! slot, and clamped movement against the current grid geometry.
//!
//! The column may transiently sit one past the last cell after a print
//! fills the line; every direct positioning operation clamps back into
//! the grid.

use log::trace;
use std::cmp::min;

/// Cursor position, zero-based. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column. May equal the grid width after printing in the last cell.
    pub x: usize,
    /// Row. Always within the grid.
    pub y: usize,
}

/// Grid geometry cursor movement is clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenContext {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// Top row of the scrolling region (0-based, inclusive).
    pub scroll_top: usize,
    /// Bottom row of the scrolling region (0-based, inclusive).
    pub scroll_bot: usize,
}

/// Owns the cursor and its save slot.
#[derive(Debug, Clone, Default)]
pub struct CursorController {
    cursor: Cursor,
    saved: Option<Cursor>,
}

impl CursorController {
    /// Creates a controller with the cursor at the origin.
    pub fn new() -> Self {
        CursorController::default()
    }

    /// Returns the current position as `(column, row)`.
    pub fn pos(&self) -> (usize, usize) {
        (self.cursor.x, self.cursor.y)
    }

    /// Returns the current cursor value.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Moves to `(new_x, new_y)`, clamped inside the grid.
    pub fn move_to(&mut self, new_x: usize, new_y: usize, ctx: &ScreenContext) {
        self.cursor.x = min(new_x, ctx.width.saturating_sub(1));
        self.cursor.y = min(new_y, ctx.height.saturating_sub(1));
    }

    /// Moves up by `n`, stopping at the top row.
    pub fn move_up(&mut self, n: usize) {
        self.cursor.y = self.cursor.y.saturating_sub(n);
    }

    /// Moves down by `n`, stopping at the bottom row.
    pub fn move_down(&mut self, n: usize, ctx: &ScreenContext) {
        self.cursor.y = min(
            self.cursor.y.saturating_add(n),
            ctx.height.saturating_sub(1),
        );
    }

    /// Moves left by `n`, stopping at column 0.
    pub fn move_left(&mut self, n: usize) {
        self.cursor.x = self.cursor.x.saturating_sub(n);
    }

    /// Advances right by `n`. The column may reach `ctx.width`, one past
    /// the last cell, signaling that the line is full.
    pub fn move_right(&mut self, n: usize, ctx: &ScreenContext) {
        self.cursor.x = min(self.cursor.x.saturating_add(n), ctx.width);
    }

    /// Moves to column `new_x`, clamped to the last cell.
    pub fn move_to_col(&mut self, new_x: usize, ctx: &ScreenContext) {
        self.cursor.x = min(new_x, ctx.width.saturating_sub(1));
    }

    /// Moves to row `new_y`, clamped to the last row.
    pub fn move_to_row(&mut self, new_y: usize, ctx: &ScreenContext) {
        self.cursor.y = min(new_y, ctx.height.saturating_sub(1));
    }

    /// Moves to column 0 of the current row.
    pub fn carriage_return(&mut self) {
        self.cursor.x = 0;
    }

    /// Saves the current position (DECSC).
    pub fn save_state(&mut self) {
        self.saved = Some(self.cursor);
        trace!("cursor position saved: {:?}", self.cursor);
    }

    /// Restores the saved position (DECRC), clamped to the current grid.
    /// With nothing saved the cursor homes to the origin.
    pub fn restore_state(&mut self, ctx: &ScreenContext) {
        let restored = self.saved.unwrap_or_default();
        self.move_to(restored.x, restored.y, ctx);
        trace!("cursor position restored to {:?}", self.cursor);
    }

    /// Returns the cursor to the origin and clears the save slot.
    pub fn reset(&mut self) {
        self.cursor = Cursor::default();
        self.saved = None;
    }
}
