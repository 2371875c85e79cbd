// src/term/screen.rs

//! Represents the state of the terminal screen: the active grid,
//! scrollback, scrolling region, alternate-screen snapshot, and the
//! row and region edit primitives.
//!
//! Cursor management is handled externally by
//! `term::cursor::CursorController`. Cleared cells always use the
//! default style, so edit operations never colorize.

use crate::glyph::Glyph;
use log::{trace, warn};
use std::cmp::min;
use std::collections::VecDeque;

/// A single grid row.
pub type Row = Vec<Glyph>;
/// The screen grid: `height` rows of `width` cells.
pub type Grid = VecDeque<Row>;

/// Whether rows scrolled off the top of the region are kept in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollHistory {
    /// Evicted rows go to the scrollback buffer (primary screen only).
    Save,
    /// Evicted rows are dropped.
    Discard,
}

/// Primary-screen state parked aside while the alternate screen is active.
#[derive(Debug, Clone)]
struct PrimarySnapshot {
    grid: Grid,
    scrollback: VecDeque<Row>,
    cursor: (usize, usize),
    scroll_top: usize,
    scroll_bot: usize,
}

/// Represents the state of the terminal screen.
///
/// Manages the display grid, the scrollback buffer, the scrolling
/// region, and the alternate-screen snapshot.
#[derive(Debug, Clone)]
pub struct Screen {
    /// The active display grid.
    grid: Grid,
    /// Rows that have scrolled off the top of the primary screen.
    scrollback: VecDeque<Row>,
    /// Maximum number of scrollback rows retained.
    scrollback_limit: usize,
    /// Screen width in columns.
    width: usize,
    /// Screen height in rows.
    height: usize,
    /// Top margin of the scrolling region (0-based, inclusive).
    scroll_top: usize,
    /// Bottom margin of the scrolling region (0-based, inclusive).
    scroll_bot: usize,
    /// Set while the alternate screen is active; holds the primary state.
    snapshot: Option<PrimarySnapshot>,
}

fn blank_row(width: usize) -> Row {
    vec![Glyph::blank(); width]
}

impl Screen {
    /// Creates a new screen of the given dimensions.
    ///
    /// Dimensions are clamped to at least one cell each way.
    pub fn new(width: usize, height: usize, scrollback_limit: usize) -> Self {
        let w = width.max(1);
        let h = height.max(1);
        trace!("creating screen {}x{}, scrollback {}", w, h, scrollback_limit);
        Screen {
            grid: (0..h).map(|_| blank_row(w)).collect(),
            scrollback: VecDeque::new(),
            scrollback_limit,
            width: w,
            height: h,
            scroll_top: 0,
            scroll_bot: h - 1,
            snapshot: None,
        }
    }

    /// Screen width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Screen height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The 0-based top row of the scrolling region.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// The 0-based bottom row of the scrolling region.
    pub fn scroll_bot(&self) -> usize {
        self.scroll_bot
    }

    /// True while the alternate screen is active.
    pub fn alt_screen_active(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Read-only view of the active grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only view of the scrollback buffer (oldest row first).
    pub fn scrollback(&self) -> &VecDeque<Row> {
        &self.scrollback
    }

    /// Number of rows currently held in scrollback.
    pub fn scrollback_len(&self) -> usize {
        self.scrollback.len()
    }

    /// Read-only view of one grid row.
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.grid.get(y)
    }

    /// The cell at `(x, y)`, if within the grid.
    pub fn glyph(&self, x: usize, y: usize) -> Option<Glyph> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Writes one cell.
    pub fn set_glyph(&mut self, x: usize, y: usize, glyph: Glyph) {
        if y >= self.height || x >= self.width {
            warn!(
                "set_glyph: ({},{}) out of bounds for {}x{}",
                x, y, self.width, self.height
            );
            return;
        }
        self.grid[y][x] = glyph;
    }

    /// Blanks the cells of row `y` in `[x_start, x_end)`.
    ///
    /// A wide pair split by either boundary is blanked entirely so no
    /// half survives on its own.
    pub fn fill_row_segment(&mut self, y: usize, x_start: usize, x_end: usize) {
        if y >= self.height {
            warn!("fill_row_segment: row {} out of bounds", y);
            return;
        }
        let start = min(x_start, self.width);
        let end = min(x_end, self.width);
        if start >= end {
            return;
        }
        let row = &mut self.grid[y];
        if start > 0 && row[start].is_wide_spacer() {
            row[start - 1] = Glyph::blank();
        }
        if end < self.width && row[end].is_wide_spacer() {
            row[end] = Glyph::blank();
        }
        for cell in row[start..end].iter_mut() {
            *cell = Glyph::blank();
        }
    }

    /// Blanks an entire row.
    pub fn clear_row(&mut self, y: usize) {
        self.fill_row_segment(y, 0, self.width);
    }

    /// Blanks the entire grid.
    pub fn clear_all(&mut self) {
        for y in 0..self.height {
            self.clear_row(y);
        }
    }

    /// Drops all scrollback rows.
    pub fn clear_scrollback(&mut self) {
        self.scrollback.clear();
    }

    /// Scrolls the region up by `n`. Rows evicted at `scroll_top` are
    /// pushed to scrollback when `history` asks for it and the primary
    /// screen is active; the head is trimmed to the scrollback limit.
    pub fn scroll_up(&mut self, n: usize, history: ScrollHistory) {
        if self.scroll_top > self.scroll_bot || self.scroll_bot >= self.height {
            warn!(
                "scroll_up: invalid region [{}, {}] for height {}",
                self.scroll_top, self.scroll_bot, self.height
            );
            return;
        }
        let region_len = self.scroll_bot - self.scroll_top + 1;
        let count = min(n, region_len);
        let save = history == ScrollHistory::Save
            && self.snapshot.is_none()
            && self.scrollback_limit > 0;
        for _ in 0..count {
            if let Some(row) = self.grid.remove(self.scroll_top) {
                if save {
                    self.scrollback.push_back(row);
                    if self.scrollback.len() > self.scrollback_limit {
                        self.scrollback.pop_front();
                    }
                }
            }
            self.grid.insert(self.scroll_bot, blank_row(self.width));
        }
        debug_assert_eq!(self.grid.len(), self.height);
    }

    /// Scrolls the region down by `n`; new blank rows appear at the top.
    pub fn scroll_down(&mut self, n: usize) {
        if self.scroll_top > self.scroll_bot || self.scroll_bot >= self.height {
            warn!(
                "scroll_down: invalid region [{}, {}] for height {}",
                self.scroll_top, self.scroll_bot, self.height
            );
            return;
        }
        let region_len = self.scroll_bot - self.scroll_top + 1;
        let count = min(n, region_len);
        for _ in 0..count {
            self.grid.remove(self.scroll_bot);
            self.grid.insert(self.scroll_top, blank_row(self.width));
        }
        debug_assert_eq!(self.grid.len(), self.height);
    }

    /// Inserts `n` blank lines at row `y`, shifting rows down within the
    /// scrolling region. A no-op when `y` is outside the region.
    pub fn insert_lines(&mut self, y: usize, n: usize) {
        if y < self.scroll_top || y > self.scroll_bot {
            return;
        }
        let count = min(n, self.scroll_bot - y + 1);
        for _ in 0..count {
            self.grid.remove(self.scroll_bot);
            self.grid.insert(y, blank_row(self.width));
        }
        debug_assert_eq!(self.grid.len(), self.height);
    }

    /// Deletes `n` lines at row `y`, shifting rows up within the
    /// scrolling region. A no-op when `y` is outside the region.
    pub fn delete_lines(&mut self, y: usize, n: usize) {
        if y < self.scroll_top || y > self.scroll_bot {
            return;
        }
        let count = min(n, self.scroll_bot - y + 1);
        for _ in 0..count {
            self.grid.remove(y);
            self.grid.insert(self.scroll_bot, blank_row(self.width));
        }
        debug_assert_eq!(self.grid.len(), self.height);
    }

    /// Inserts `n` blanks at `(x, y)`, shifting the rest of the row
    /// right; cells pushed past the last column are dropped.
    pub fn insert_blank_chars_in_line(&mut self, y: usize, x: usize, n: usize) {
        if y >= self.height || x >= self.width || n == 0 {
            return;
        }
        let count = min(n, self.width - x);
        let row = &mut self.grid[y];
        if row[x].is_wide_spacer() && x > 0 {
            row[x - 1] = Glyph::blank();
        }
        row[x..].rotate_right(count);
        for cell in row[x..x + count].iter_mut() {
            *cell = Glyph::blank();
        }
        // A primary shifted against the right edge lost its spacer.
        if row[self.width - 1].is_wide_primary() {
            row[self.width - 1] = Glyph::blank();
        }
    }

    /// Deletes `n` cells at `(x, y)`, shifting the rest of the row left
    /// and blanking the vacated tail.
    pub fn delete_chars_in_line(&mut self, y: usize, x: usize, n: usize) {
        if y >= self.height || x >= self.width || n == 0 {
            return;
        }
        let count = min(n, self.width - x);
        let row = &mut self.grid[y];
        if row[x].is_wide_spacer() && x > 0 {
            row[x - 1] = Glyph::blank();
        }
        row[x..].rotate_left(count);
        let fill_start = self.width - count;
        for cell in row[fill_start..].iter_mut() {
            *cell = Glyph::blank();
        }
        // A spacer pulled to the deletion point lost its primary.
        if row[x].is_wide_spacer() {
            row[x] = Glyph::blank();
        }
    }

    /// Sets the scrolling region from 1-based margins. A `bottom` of 0
    /// stands for the last row. Invalid margins reset to the full
    /// screen.
    pub fn set_scrolling_region(&mut self, top_1_based: usize, bottom_1_based: usize) {
        let bottom_1_based = if bottom_1_based == 0 {
            self.height
        } else {
            bottom_1_based
        };
        let t = top_1_based.saturating_sub(1);
        let b = bottom_1_based.saturating_sub(1);
        if t < b && b < self.height {
            self.scroll_top = t;
            self.scroll_bot = b;
        } else {
            warn!(
                "invalid scrolling region ({}, {}) for height {}, using full screen",
                top_1_based, bottom_1_based, self.height
            );
            self.scroll_top = 0;
            self.scroll_bot = self.height - 1;
        }
        trace!(
            "scrolling region set to [{}, {}]",
            self.scroll_top,
            self.scroll_bot
        );
    }

    /// Resets the scrolling region to the full screen.
    pub fn reset_scrolling_region(&mut self) {
        self.scroll_top = 0;
        self.scroll_bot = self.height - 1;
    }

    /// Activates the alternate screen, parking the primary grid,
    /// scrollback, cursor and scrolling region. Returns false when the
    /// alternate screen is already active.
    pub fn enter_alternate(&mut self, cursor: (usize, usize)) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        let grid = std::mem::replace(
            &mut self.grid,
            (0..self.height).map(|_| blank_row(self.width)).collect(),
        );
        let scrollback = std::mem::take(&mut self.scrollback);
        self.snapshot = Some(PrimarySnapshot {
            grid,
            scrollback,
            cursor,
            scroll_top: self.scroll_top,
            scroll_bot: self.scroll_bot,
        });
        self.scroll_top = 0;
        self.scroll_bot = self.height - 1;
        trace!("entered alternate screen");
        true
    }

    /// Restores the primary screen and returns its parked cursor, or
    /// `None` when the alternate screen was not active.
    pub fn exit_alternate(&mut self) -> Option<(usize, usize)> {
        let snapshot = self.snapshot.take()?;
        self.grid = snapshot.grid;
        self.scrollback = snapshot.scrollback;
        self.scroll_top = snapshot.scroll_top;
        self.scroll_bot = snapshot.scroll_bot;
        trace!("exited alternate screen");
        Some(snapshot.cursor)
    }

    /// Resizes the grid, keeping the overlapping top-left rectangle and
    /// resetting the scrolling region. Scrollback rows are left as they
    /// are; wrapping is not recomputed.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        let nw = new_width.max(1);
        let nh = new_height.max(1);
        self.grid = copy_into_resized(&self.grid, nw, nh);
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.grid = copy_into_resized(&snapshot.grid, nw, nh);
            snapshot.scroll_top = 0;
            snapshot.scroll_bot = nh - 1;
            snapshot.cursor = (min(snapshot.cursor.0, nw - 1), min(snapshot.cursor.1, nh - 1));
        }
        self.width = nw;
        self.height = nh;
        self.scroll_top = 0;
        self.scroll_bot = nh - 1;
        trace!("screen resized to {}x{}", nw, nh);
    }

    /// Produces the plain text of scrollback plus the grid: spacer cells
    /// are skipped, rows are right-trimmed, and trailing blank rows are
    /// dropped.
    pub fn extract_text(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.scrollback.len() + self.grid.len());
        for row in self.scrollback.iter().chain(self.grid.iter()) {
            let mut line: String = row
                .iter()
                .filter(|glyph| !glyph.is_wide_spacer())
                .map(Glyph::display_char)
                .collect();
            let trimmed = line.trim_end_matches(' ').len();
            line.truncate(trimmed);
            lines.push(line);
        }
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

/// Copies `grid` into a fresh `new_width` x `new_height` grid, anchored
/// top-left. A wide primary cut off from its spacer by the new right
/// edge is blanked.
fn copy_into_resized(grid: &Grid, new_width: usize, new_height: usize) -> Grid {
    (0..new_height)
        .map(|y| {
            let mut row = blank_row(new_width);
            if let Some(old_row) = grid.get(y) {
                for x in 0..min(old_row.len(), new_width) {
                    row[x] = old_row[x];
                }
                if row[new_width - 1].is_wide_primary() {
                    row[new_width - 1] = Glyph::blank();
                }
            }
            row
        })
        .collect()
}
