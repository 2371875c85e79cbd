// src/term/emulator/mod.rs

//! Core terminal emulation logic and state management.
//!
//! This module defines the `TerminalEmulator` struct, the engine facade:
//! it feeds PTY bytes through the parser, dispatches the resulting
//! commands against the screen model, and raises effects through the
//! embedder's hooks.

use crate::{
    ansi::{AnsiParser, AnsiProcessor},
    glyph::Attributes,
    term::{
        action::{EffectHooks, EmulatorAction},
        cursor::{Cursor, CursorController, ScreenContext},
        modes::TerminalModes,
        screen::Screen,
        MAX_SCROLLBACK,
    },
};

mod ansi_handler;
mod char_processor;
mod cursor_handler;
mod methods;
mod mode_handler;
mod osc_handler;
mod screen_ops;

/// The core terminal emulator.
///
/// One instance is one isolated terminal; instances share nothing. All
/// processing is synchronous on the calling thread.
#[derive(Debug)]
pub struct TerminalEmulator {
    parser: AnsiProcessor,
    pub(super) screen: Screen,
    pub(super) cursor_controller: CursorController,
    /// Current SGR register, the template for newly printed cells.
    pub(super) style: Attributes,
    pub(super) modes: TerminalModes,
    pub(super) effects: EffectHooks,
    /// Last printed character, for REP.
    pub(super) last_printed: Option<char>,
    /// Host-written record of the line being edited.
    pub(super) input_buffer: String,
    /// Set by CR in the output stream; new host input after it starts a
    /// fresh record.
    pub(super) input_pending_cr: bool,
    /// Working directory reported through OSC 7.
    pub(super) current_directory: Option<String>,
    /// Cursor slot for mode 1049, independent of DECSC.
    pub(super) alt_saved_cursor: Option<(usize, usize)>,
}

impl TerminalEmulator {
    /// Creates an emulator of `width` columns by `height` rows with the
    /// default scrollback bound.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_scrollback_limit(width, height, MAX_SCROLLBACK)
    }

    /// Creates an emulator with a custom scrollback bound.
    #[must_use]
    pub fn with_scrollback_limit(width: usize, height: usize, scrollback_limit: usize) -> Self {
        TerminalEmulator {
            parser: AnsiProcessor::new(),
            screen: Screen::new(width, height, scrollback_limit),
            cursor_controller: CursorController::new(),
            style: Attributes::default(),
            modes: TerminalModes::default(),
            effects: EffectHooks::default(),
            last_printed: None,
            input_buffer: String::new(),
            input_pending_cr: false,
            current_directory: None,
            alt_saved_cursor: None,
        }
    }

    /// The embedder's effect hooks, for installing callbacks.
    pub fn hooks_mut(&mut self) -> &mut EffectHooks {
        &mut self.effects
    }

    /// Feeds a chunk of PTY output through the engine.
    ///
    /// The chunk may end mid-sequence; parsing state carries over to the
    /// next call. Effects fire synchronously in input order, and
    /// `on_change` fires exactly once after the chunk (even an empty
    /// one) is consumed.
    pub fn process(&mut self, bytes: &[u8]) {
        let commands = self.parser.process_bytes(bytes);
        for command in commands {
            if let Some(action) = ansi_handler::process_ansi_command(self, command) {
                self.emit(action);
            }
        }
        if let Some(on_change) = self.effects.on_change.as_mut() {
            on_change();
        }
    }

    /// Routes an action to the matching hook.
    fn emit(&mut self, action: EmulatorAction) {
        match action {
            EmulatorAction::WritePty(bytes) => {
                if let Some(hook) = self.effects.on_response.as_mut() {
                    hook(&bytes);
                }
            }
            EmulatorAction::SetTitle(title) => {
                if let Some(hook) = self.effects.on_title_change.as_mut() {
                    hook(&title);
                }
            }
            EmulatorAction::RingBell => {
                if let Some(hook) = self.effects.on_bell.as_mut() {
                    hook();
                }
            }
            EmulatorAction::CommandEntered(line) => {
                if let Some(hook) = self.effects.on_command_entered.as_mut() {
                    hook(&line);
                }
            }
        }
    }

    /// Helper building the current `ScreenContext` for cursor clamping.
    pub(super) fn screen_context(&self) -> ScreenContext {
        ScreenContext {
            width: self.screen.width(),
            height: self.screen.height(),
            scroll_top: self.screen.scroll_top(),
            scroll_bot: self.screen.scroll_bot(),
        }
    }

    /// Returns `(columns, rows)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.screen.width(), self.screen.height())
    }

    /// Resizes the grid, keeping the overlapping top-left rectangle,
    /// resetting the scrolling region and clamping the cursor.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.screen.resize(width, height);
        let ctx = self.screen_context();
        let (x, y) = self.cursor_controller.pos();
        self.cursor_controller.move_to(x, y, &ctx);
    }

    /// Full reset, equivalent to receiving RIS.
    pub fn reset(&mut self) {
        self.parser.reset();
        self.full_reset();
    }

    /// The current cursor position.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor_controller.cursor()
    }

    /// Read-only view of the screen model.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The current mode flags.
    #[must_use]
    pub fn modes(&self) -> &TerminalModes {
        &self.modes
    }

    /// The working directory last reported through OSC 7.
    #[must_use]
    pub fn current_directory(&self) -> Option<&str> {
        self.current_directory.as_deref()
    }

    /// Plain text of scrollback plus the grid.
    #[must_use]
    pub fn extract_text(&self) -> String {
        self.screen.extract_text()
    }

    /// Appends host keyboard input to the line record.
    pub fn push_input(&mut self, text: &str) {
        if self.input_pending_cr {
            // A carriage return ended the previous record; new
            // keystrokes start a fresh line.
            self.input_buffer.clear();
            self.input_pending_cr = false;
        }
        self.input_buffer.push_str(text);
    }

    /// Clears the line record.
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.input_pending_cr = false;
    }

    /// The line record as the engine currently sees it.
    #[must_use]
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }
}
