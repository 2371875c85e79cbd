// src/term/modes.rs

//! Mode bookkeeping: the ANSI and DEC private mode numbers the terminal
//! honors, the accepted-and-ignored set, and erase-mode decoding.

use log::warn;

/// Defines the modes for erase operations (ED and EL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// Erase from the cursor to the end of the screen/line.
    ToEnd,
    /// Erase from the start of the screen/line through the cursor.
    ToStart,
    /// Erase the entire screen/line.
    All,
    /// Erase everything plus the scrollback buffer (ED only).
    Scrollback,
    /// An unknown or unsupported erase mode.
    Unknown,
}

impl From<u16> for EraseMode {
    fn from(value: u16) -> Self {
        match value {
            0 => EraseMode::ToEnd,
            1 => EraseMode::ToStart,
            2 => EraseMode::All,
            3 => EraseMode::Scrollback,
            _ => {
                warn!("unknown erase mode value: {}", value);
                EraseMode::Unknown
            }
        }
    }
}

/// Whether a mode command sets or resets its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    Enable,
    Disable,
}

/// A mode number together with its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A standard ANSI mode (SM/RM).
    Standard(u16),
    /// A DEC private mode (DECSET/DECRST, `CSI ?`).
    DecPrivate(u16),
}

/// DEC private mode numbers the terminal recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum DecModeConstant {
    /// Application Cursor Keys (DECCKM).
    CursorKeys = 1,
    /// Autowrap (DECAWM).
    Autowrap = 7,
    /// ATT610 cursor blink. Accepted; blinking is a renderer concern.
    CursorBlink = 12,
    /// Text Cursor Enable (DECTCEM).
    TextCursorEnable = 25,
    /// Alternate screen buffer.
    AltScreen = 47,
    /// VT200 mouse reporting. Accepted and ignored.
    MouseVt200 = 1000,
    /// Button-event mouse tracking. Accepted and ignored.
    MouseButtonEvent = 1002,
    /// Any-event mouse tracking. Accepted and ignored.
    MouseAnyEvent = 1003,
    /// Focus in/out reporting. Accepted and ignored.
    FocusEvent = 1004,
    /// SGR mouse coordinate encoding. Accepted and ignored.
    MouseSgr = 1006,
    /// Alternate screen buffer, cleared on entry.
    AltScreenClear = 1047,
    /// Alternate screen buffer plus cursor save/restore.
    AltScreenSaveRestore = 1049,
    /// Bracketed paste.
    BracketedPaste = 2004,
    /// Synchronized output. Accepted and ignored.
    SynchronizedOutput = 2026,
}

impl DecModeConstant {
    /// Maps a mode number to a known constant, if there is one.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(DecModeConstant::CursorKeys),
            7 => Some(DecModeConstant::Autowrap),
            12 => Some(DecModeConstant::CursorBlink),
            25 => Some(DecModeConstant::TextCursorEnable),
            47 => Some(DecModeConstant::AltScreen),
            1000 => Some(DecModeConstant::MouseVt200),
            1002 => Some(DecModeConstant::MouseButtonEvent),
            1003 => Some(DecModeConstant::MouseAnyEvent),
            1004 => Some(DecModeConstant::FocusEvent),
            1006 => Some(DecModeConstant::MouseSgr),
            1047 => Some(DecModeConstant::AltScreenClear),
            1049 => Some(DecModeConstant::AltScreenSaveRestore),
            2004 => Some(DecModeConstant::BracketedPaste),
            2026 => Some(DecModeConstant::SynchronizedOutput),
            _ => None,
        }
    }
}

/// Standard ANSI mode numbers the terminal recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum StandardModeConstant {
    /// Insert/Replace Mode (IRM).
    InsertMode = 4,
}

impl StandardModeConstant {
    /// Maps a mode number to a known constant, if there is one.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            4 => Some(StandardModeConstant::InsertMode),
            _ => None,
        }
    }
}

/// The mode flags the terminal tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalModes {
    /// DECCKM: cursor keys send application sequences.
    pub cursor_keys_app_mode: bool,
    /// DECTCEM: the text cursor is visible.
    pub show_cursor: bool,
    /// DECAWM: printing past the last column wraps to the next line.
    pub autowrap: bool,
    /// Bracketed paste is active.
    pub bracketed_paste: bool,
    /// IRM: printing shifts the rest of the row right.
    pub insert_mode: bool,
}

impl Default for TerminalModes {
    /// Power-on defaults.
    fn default() -> Self {
        TerminalModes {
            cursor_keys_app_mode: false,
            show_cursor: true,
            autowrap: true,
            bracketed_paste: false,
            insert_mode: false,
        }
    }
}
