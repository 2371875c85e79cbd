// src/term/emulator/mode_handler.rs

use super::TerminalEmulator;
use crate::{
    ansi::commands::Attribute,
    color::{Color, SCREEN_BACKGROUND},
    glyph::{AttrFlags, Attributes},
    term::modes::{DecModeConstant, Mode, ModeAction, StandardModeConstant},
};
use log::{trace, warn};

impl TerminalEmulator {
    /// Applies a decoded SGR attribute list to the style register.
    pub(super) fn apply_sgr(&mut self, attributes: &[Attribute]) {
        for &attribute in attributes {
            match attribute {
                Attribute::Reset => self.style = Attributes::default(),
                Attribute::Bold => self.style.flags.insert(AttrFlags::BOLD),
                Attribute::Dim => self.style.flags.insert(AttrFlags::DIM),
                Attribute::Italic => self.style.flags.insert(AttrFlags::ITALIC),
                Attribute::Underline => self.style.flags.insert(AttrFlags::UNDERLINE),
                Attribute::Conceal => self.style.flags.insert(AttrFlags::HIDDEN),
                Attribute::Strikethrough => self.style.flags.insert(AttrFlags::STRIKETHROUGH),
                Attribute::Reverse => {
                    // Swap the foreground with the effective background;
                    // a default background swaps in as the concrete
                    // screen background.
                    let old_fg = self.style.fg;
                    self.style.fg = if self.style.bg == Color::Default {
                        SCREEN_BACKGROUND
                    } else {
                        self.style.bg
                    };
                    self.style.bg = old_fg;
                }
                Attribute::ReverseOff => {
                    self.style.fg = Color::Default;
                    self.style.bg = Color::Default;
                }
                Attribute::NormalIntensity => {
                    self.style.flags.remove(AttrFlags::BOLD | AttrFlags::DIM);
                }
                Attribute::NoItalic => self.style.flags.remove(AttrFlags::ITALIC),
                Attribute::NoUnderline => self.style.flags.remove(AttrFlags::UNDERLINE),
                Attribute::NoConceal => self.style.flags.remove(AttrFlags::HIDDEN),
                Attribute::NoStrikethrough => {
                    self.style.flags.remove(AttrFlags::STRIKETHROUGH);
                }
                Attribute::Foreground(color) => self.style.fg = color,
                Attribute::Background(color) => self.style.bg = color,
            }
        }
    }

    pub(super) fn handle_set_mode(&mut self, mode: Mode, action: ModeAction) {
        let enable = action == ModeAction::Enable;
        match mode {
            Mode::Standard(number) => match StandardModeConstant::from_u16(number) {
                Some(StandardModeConstant::InsertMode) => self.modes.insert_mode = enable,
                None => warn!("ignoring unknown standard mode {}", number),
            },
            Mode::DecPrivate(number) => match DecModeConstant::from_u16(number) {
                Some(DecModeConstant::CursorKeys) => self.modes.cursor_keys_app_mode = enable,
                Some(DecModeConstant::Autowrap) => self.modes.autowrap = enable,
                Some(DecModeConstant::TextCursorEnable) => self.modes.show_cursor = enable,
                Some(DecModeConstant::BracketedPaste) => self.modes.bracketed_paste = enable,
                Some(DecModeConstant::AltScreen) | Some(DecModeConstant::AltScreenClear) => {
                    if enable {
                        self.enter_alt_screen(false);
                    } else {
                        self.exit_alt_screen(false);
                    }
                }
                Some(DecModeConstant::AltScreenSaveRestore) => {
                    if enable {
                        self.enter_alt_screen(true);
                    } else {
                        self.exit_alt_screen(true);
                    }
                }
                Some(
                    DecModeConstant::CursorBlink
                    | DecModeConstant::MouseVt200
                    | DecModeConstant::MouseButtonEvent
                    | DecModeConstant::MouseAnyEvent
                    | DecModeConstant::FocusEvent
                    | DecModeConstant::MouseSgr
                    | DecModeConstant::SynchronizedOutput,
                ) => {
                    trace!("private mode {} accepted and ignored", number);
                }
                None => warn!("ignoring unknown private mode {}", number),
            },
        }
    }

    /// Activates the alternate screen. Mode 1049 additionally saves the
    /// cursor in its own slot, independent of DECSC.
    fn enter_alt_screen(&mut self, save_cursor: bool) {
        if self.screen.alt_screen_active() {
            return;
        }
        let cursor = self.cursor_controller.pos();
        if save_cursor {
            self.alt_saved_cursor = Some(cursor);
        }
        self.screen.enter_alternate(cursor);
        let ctx = self.screen_context();
        self.cursor_controller.move_to(0, 0, &ctx);
    }

    /// Restores the primary screen; with `restore_cursor` the mode 1049
    /// slot wins over the parked snapshot cursor.
    fn exit_alt_screen(&mut self, restore_cursor: bool) {
        let Some(parked) = self.screen.exit_alternate() else {
            return;
        };
        let ctx = self.screen_context();
        let (x, y) = if restore_cursor {
            self.alt_saved_cursor.take().unwrap_or(parked)
        } else {
            parked
        };
        self.cursor_controller.move_to(x, y, &ctx);
    }
}
