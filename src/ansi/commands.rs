// src/ansi/commands.rs

//! Defines the `AnsiCommand` enum representing parsed escape sequences,
//! the related sub-enums, and the SGR parameter decoder.

use crate::color::Color;
use log::warn;
use std::iter::Peekable;
use std::slice::Iter;

// --- SGR parameter constants ---
// Numeric parameters of Select Graphic Rendition sequences. Constants
// beat magic numbers in the decoder match below.

pub const SGR_RESET: u16 = 0;
pub const SGR_BOLD: u16 = 1;
pub const SGR_DIM: u16 = 2;
pub const SGR_ITALIC: u16 = 3;
pub const SGR_UNDERLINE: u16 = 4;
pub const SGR_REVERSE: u16 = 7;
pub const SGR_CONCEAL: u16 = 8;
pub const SGR_STRIKETHROUGH: u16 = 9;

pub const SGR_NORMAL_INTENSITY: u16 = 22;
pub const SGR_NO_ITALIC: u16 = 23;
pub const SGR_NO_UNDERLINE: u16 = 24;
pub const SGR_NO_REVERSE: u16 = 27;
pub const SGR_NO_CONCEAL: u16 = 28;
pub const SGR_NO_STRIKETHROUGH: u16 = 29;

pub const SGR_FG_BLACK: u16 = 30;
pub const SGR_FG_WHITE: u16 = 37;
pub const SGR_FG_DEFAULT: u16 = 39;
pub const SGR_BG_BLACK: u16 = 40;
pub const SGR_BG_WHITE: u16 = 47;
pub const SGR_BG_DEFAULT: u16 = 49;

/// Introduces an extended foreground color (`38;5;n` or `38;2;r;g;b`).
pub const SGR_EXTENDED_COLOR_FG: u16 = 38;
/// Introduces an extended background color (`48;5;n` or `48;2;r;g;b`).
pub const SGR_EXTENDED_COLOR_BG: u16 = 48;
/// Sub-selector: the next parameter is a 256-color palette index.
pub const SGR_EXT_MODE_256_INDEX: u16 = 5;
/// Sub-selector: the next three parameters are R, G, B.
pub const SGR_EXT_MODE_RGB_TRUECOLOR: u16 = 2;

pub const SGR_FG_BRIGHT_BLACK: u16 = 90;
pub const SGR_FG_BRIGHT_WHITE: u16 = 97;
pub const SGR_BG_BRIGHT_BLACK: u16 = 100;
pub const SGR_BG_BRIGHT_WHITE: u16 = 107;

// --- Wire-level host responses ---

/// Primary DA reply: VT100 with advanced video option.
pub const DA1_RESPONSE: &[u8] = b"\x1b[?1;2c";
/// Secondary DA reply.
pub const DA2_RESPONSE: &[u8] = b"\x1b[>0;0;0c";
/// DSR 5 "operating status OK" reply.
pub const DSR_RESPONSE_OK: &[u8] = b"\x1b[0n";

/// DSR parameter requesting operating status.
pub const DSR_STATUS_OK: u16 = 5;
/// DSR parameter requesting a cursor position report.
pub const DSR_REPORT_CURSOR_POSITION: u16 = 6;

// --- C0 control enum ---

/// The C0 control characters the terminal acts on. Everything else in
/// the C0 range is dropped by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum C0Control {
    /// Bell (0x07).
    BEL,
    /// Backspace (0x08).
    BS,
    /// Horizontal tab (0x09).
    HT,
    /// Line feed (0x0A).
    LF,
    /// Vertical tab (0x0B), treated as a line feed.
    VT,
    /// Form feed (0x0C), treated as a line feed.
    FF,
    /// Carriage return (0x0D).
    CR,
}

impl C0Control {
    /// Maps a scalar to a handled C0 control, if it is one.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{07}' => Some(C0Control::BEL),
            '\u{08}' => Some(C0Control::BS),
            '\u{09}' => Some(C0Control::HT),
            '\u{0A}' => Some(C0Control::LF),
            '\u{0B}' => Some(C0Control::VT),
            '\u{0C}' => Some(C0Control::FF),
            '\u{0D}' => Some(C0Control::CR),
            _ => None,
        }
    }
}

// --- SGR attribute enum ---

/// A single decoded Select Graphic Rendition attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Reset all attributes and both colors to default.
    Reset,
    /// Bold text.
    Bold,
    /// Faint (dim) text.
    Dim,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Swap foreground with the effective background.
    Reverse,
    /// Hidden text.
    Conceal,
    /// Strikethrough text.
    Strikethrough,
    /// Turn off bold and dim.
    NormalIntensity,
    /// Turn off italic.
    NoItalic,
    /// Turn off underline.
    NoUnderline,
    /// Undo reverse video by restoring default colors.
    ReverseOff,
    /// Turn off hidden text.
    NoConceal,
    /// Turn off strikethrough.
    NoStrikethrough,
    /// Set the foreground color.
    Foreground(Color),
    /// Set the background color.
    Background(Color),
}

// --- CSI command enum ---

/// A decoded Control Sequence Introducer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsiCommand {
    /// CUU: move cursor up by `n`.
    CursorUp(u16),
    /// CUD: move cursor down by `n`.
    CursorDown(u16),
    /// CUF: move cursor right by `n`.
    CursorForward(u16),
    /// CUB: move cursor left by `n`.
    CursorBackward(u16),
    /// CNL: move cursor down `n` lines, to column 0.
    CursorNextLine(u16),
    /// CPL: move cursor up `n` lines, to column 0.
    CursorPrevLine(u16),
    /// CHA: move cursor to column `n` (1-based).
    CursorCharacterAbsolute(u16),
    /// VPA: move cursor to row `n` (1-based).
    CursorLineAbsolute(u16),
    /// CUP/HVP: move cursor to `(row, col)` (1-based).
    CursorPosition(u16, u16),
    /// SCO save cursor (`CSI s`).
    SaveCursor,
    /// SCO restore cursor (`CSI u`).
    RestoreCursor,
    /// ED: erase in display (mode `n`).
    EraseInDisplay(u16),
    /// EL: erase in line (mode `n`).
    EraseInLine(u16),
    /// ECH: erase `n` characters in place.
    EraseCharacter(u16),
    /// DCH: delete `n` characters, shifting the rest left.
    DeleteCharacter(u16),
    /// ICH: insert `n` blank characters, shifting the rest right.
    InsertCharacter(u16),
    /// IL: insert `n` blank lines at the cursor row.
    InsertLine(u16),
    /// DL: delete `n` lines at the cursor row.
    DeleteLine(u16),
    /// DECSTBM: set the scrolling region (1-based; `bottom == 0` means
    /// the last row).
    SetScrollingRegion {
        top: u16,
        bottom: u16,
    },
    /// SU: scroll the region up by `n`.
    ScrollUp(u16),
    /// SD: scroll the region down by `n`.
    ScrollDown(u16),
    /// REP: repeat the last printed character `n` times.
    RepeatLastCharacter(u16),
    /// DSR: device status report (parameter 5 or 6).
    DeviceStatusReport(u16),
    /// DA: primary device attributes query.
    PrimaryDeviceAttributes,
    /// DA with `>` prefix: secondary device attributes query.
    SecondaryDeviceAttributes,
    /// SM: set standard mode `n`.
    SetMode(u16),
    /// RM: reset standard mode `n`.
    ResetMode(u16),
    /// DECSET: set private mode `n`.
    SetModePrivate(u16),
    /// DECRST: reset private mode `n`.
    ResetModePrivate(u16),
    /// SGR: set graphic rendition.
    SetGraphicsRendition(Vec<Attribute>),
    /// DECSCUSR: set cursor style (accepted, not acted upon).
    SetCursorStyle {
        shape: u16,
    },
    /// XTWINOPS window manipulation.
    WindowManipulation {
        ps1: u16,
        ps2: Option<u16>,
        ps3: Option<u16>,
    },
    /// DECSTR soft reset (`CSI ! p`).
    SoftReset,
    /// A sequence the terminal does not understand; carried for logging.
    Unsupported(Vec<u8>, Option<char>),
}

// --- ESC command enum ---

/// A decoded two-character escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscCommand {
    /// IND (`ESC D`): line feed.
    Index,
    /// NEL (`ESC E`): carriage return plus line feed.
    NextLine,
    /// RI (`ESC M`): reverse line feed.
    ReverseIndex,
    /// DECSC (`ESC 7`): save cursor position.
    SaveCursor,
    /// DECRC (`ESC 8`): restore cursor position.
    RestoreCursor,
    /// RIS (`ESC c`): full reset.
    ResetToInitialState,
}

// --- Main command enum ---

/// A parsed command ready for dispatch against the screen model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnsiCommand {
    /// A printable character.
    Print(char),
    /// A handled C0 control.
    C0Control(C0Control),
    /// A CSI command.
    Csi(CsiCommand),
    /// An ESC command.
    Esc(EscCommand),
    /// An Operating System Command payload (terminator stripped).
    Osc(String),
}

/// Decodes SGR parameters into a list of `Attribute`s.
///
/// An empty list is a reset. The pointer walks left to right so the
/// 38/48 sub-selectors can consume their extra parameters.
pub(crate) fn parse_sgr(params: &[u16]) -> Vec<Attribute> {
    if params.is_empty() {
        return vec![Attribute::Reset];
    }
    let mut attrs = Vec::new();
    let mut iter = params.iter().peekable();
    while let Some(&param) = iter.next() {
        match param {
            SGR_RESET => attrs.push(Attribute::Reset),
            SGR_BOLD => attrs.push(Attribute::Bold),
            SGR_DIM => attrs.push(Attribute::Dim),
            SGR_ITALIC => attrs.push(Attribute::Italic),
            SGR_UNDERLINE => attrs.push(Attribute::Underline),
            SGR_REVERSE => attrs.push(Attribute::Reverse),
            SGR_CONCEAL => attrs.push(Attribute::Conceal),
            SGR_STRIKETHROUGH => attrs.push(Attribute::Strikethrough),
            SGR_NORMAL_INTENSITY => attrs.push(Attribute::NormalIntensity),
            SGR_NO_ITALIC => attrs.push(Attribute::NoItalic),
            SGR_NO_UNDERLINE => attrs.push(Attribute::NoUnderline),
            SGR_NO_REVERSE => attrs.push(Attribute::ReverseOff),
            SGR_NO_CONCEAL => attrs.push(Attribute::NoConceal),
            SGR_NO_STRIKETHROUGH => attrs.push(Attribute::NoStrikethrough),
            SGR_FG_BLACK..=SGR_FG_WHITE => {
                attrs.push(Attribute::Foreground(Color::Indexed(
                    (param - SGR_FG_BLACK) as u8,
                )));
            }
            SGR_FG_DEFAULT => attrs.push(Attribute::Foreground(Color::Default)),
            SGR_BG_BLACK..=SGR_BG_WHITE => {
                attrs.push(Attribute::Background(Color::Indexed(
                    (param - SGR_BG_BLACK) as u8,
                )));
            }
            SGR_BG_DEFAULT => attrs.push(Attribute::Background(Color::Default)),
            SGR_FG_BRIGHT_BLACK..=SGR_FG_BRIGHT_WHITE => {
                attrs.push(Attribute::Foreground(Color::Indexed(
                    (param - SGR_FG_BRIGHT_BLACK + 8) as u8,
                )));
            }
            SGR_BG_BRIGHT_BLACK..=SGR_BG_BRIGHT_WHITE => {
                attrs.push(Attribute::Background(Color::Indexed(
                    (param - SGR_BG_BRIGHT_BLACK + 8) as u8,
                )));
            }
            SGR_EXTENDED_COLOR_FG => {
                if let Some(color) = parse_extended_color(&mut iter) {
                    attrs.push(Attribute::Foreground(color));
                }
            }
            SGR_EXTENDED_COLOR_BG => {
                if let Some(color) = parse_extended_color(&mut iter) {
                    attrs.push(Attribute::Background(color));
                }
            }
            other => {
                warn!("ignoring unknown SGR parameter: {}", other);
            }
        }
    }
    attrs
}

/// Decodes an extended color selector (256-color or truecolor).
///
/// Returns `None` and leaves the attribute out when the sub-parameters
/// are missing or out of range.
fn parse_extended_color(iter: &mut Peekable<Iter<u16>>) -> Option<Color> {
    match iter.next() {
        Some(&SGR_EXT_MODE_256_INDEX) => iter.next().and_then(|&idx| {
            if idx <= u16::from(u8::MAX) {
                Some(Color::from_palette_index(idx as u8))
            } else {
                warn!("invalid 256-color index: {}", idx);
                None
            }
        }),
        Some(&SGR_EXT_MODE_RGB_TRUECOLOR) => {
            let r = iter.next().map(|&v| v.min(255) as u8);
            let g = iter.next().map(|&v| v.min(255) as u8);
            let b = iter.next().map(|&v| v.min(255) as u8);
            match (r, g, b) {
                (Some(r), Some(g), Some(b)) => Some(Color::Rgb(r, g, b)),
                _ => {
                    warn!("incomplete RGB color sequence");
                    None
                }
            }
        }
        Some(other) => {
            warn!("unsupported extended color mode specifier: {}", other);
            None
        }
        None => {
            warn!("missing parameters for extended color");
            None
        }
    }
}
