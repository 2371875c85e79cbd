// src/term/emulator/char_processor.rs

use super::TerminalEmulator;
use crate::{
    glyph::{ContentCell, Glyph},
    term::unicode::char_display_width,
};
use log::trace;

impl TerminalEmulator {
    /// Prints a single character at the cursor, handling width, line
    /// wrapping, insert mode, and wide-pair maintenance.
    pub(super) fn print_char(&mut self, ch: char) {
        let char_width = char_display_width(ch);
        if char_width == 0 {
            trace!("zero-width scalar {:?} dropped", ch);
            return;
        }

        let mut ctx = self.screen_context();
        if char_width == 2 && ctx.width < 2 {
            // A wide glyph cannot exist on a one-column grid.
            return;
        }
        let (x, y) = self.cursor_controller.pos();

        if char_width == 2 && x == ctx.width.saturating_sub(1) {
            // A wide character cannot start in the last column: blank
            // that cell and wrap first, or drop it without autowrap.
            if !self.modes.autowrap {
                return;
            }
            self.unlink_wide_pair(x, y);
            self.screen.set_glyph(x, y, Glyph::blank());
            self.cursor_controller.carriage_return();
            self.move_down_or_scroll();
            ctx = self.screen_context();
        } else if x >= ctx.width {
            // The previous print filled the line.
            if self.modes.autowrap {
                self.cursor_controller.carriage_return();
                self.move_down_or_scroll();
                ctx = self.screen_context();
            } else {
                self.cursor_controller
                    .move_to_col(ctx.width.saturating_sub(1), &ctx);
            }
        }

        let (x, y) = self.cursor_controller.pos();

        self.unlink_wide_pair(x, y);

        if self.modes.insert_mode {
            self.screen.insert_blank_chars_in_line(y, x, char_width);
        }

        let attr = self.style;
        if char_width == 2 {
            // The spacer's cell may itself hold the first half of
            // another pair; that pair's spacer must not survive.
            if self
                .screen
                .glyph(x + 1, y)
                .is_some_and(|g| g.is_wide_primary())
                && self
                    .screen
                    .glyph(x + 2, y)
                    .is_some_and(|g| g.is_wide_spacer())
            {
                self.screen.set_glyph(x + 2, y, Glyph::blank());
            }
            self.screen
                .set_glyph(x, y, Glyph::WidePrimary(ContentCell { c: ch, attr }));
            self.screen
                .set_glyph(x + 1, y, Glyph::WideSpacer { bg: attr.bg });
        } else {
            self.screen
                .set_glyph(x, y, Glyph::Single(ContentCell { c: ch, attr }));
        }

        self.cursor_controller.move_right(char_width, &ctx);
        self.last_printed = Some(ch);
    }

    /// Overwriting half of a wide pair blanks the other half.
    fn unlink_wide_pair(&mut self, x: usize, y: usize) {
        match self.screen.glyph(x, y) {
            Some(glyph) if glyph.is_wide_spacer() => {
                if x > 0
                    && self
                        .screen
                        .glyph(x - 1, y)
                        .is_some_and(|g| g.is_wide_primary())
                {
                    self.screen.set_glyph(x - 1, y, Glyph::blank());
                }
            }
            Some(glyph) if glyph.is_wide_primary() => {
                if self
                    .screen
                    .glyph(x + 1, y)
                    .is_some_and(|g| g.is_wide_spacer())
                {
                    self.screen.set_glyph(x + 1, y, Glyph::blank());
                }
            }
            _ => {}
        }
    }
}
