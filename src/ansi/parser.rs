// src/ansi/parser.rs

//! The escape-sequence state machine: consumes Unicode scalars and
//! produces `AnsiCommand`s.

use super::commands::{parse_sgr, AnsiCommand, C0Control, CsiCommand, EscCommand};
use log::{debug, trace, warn};

/// Upper bound on CSI parameters; extras are dropped.
const MAX_CSI_PARAMS: usize = 16;
/// Upper bound on CSI intermediate bytes; extras are dropped.
const MAX_CSI_INTERMEDIATES: usize = 2;
/// Upper bound on accumulated OSC payload bytes.
const MAX_OSC_LEN: usize = 1024;

const ESC: char = '\u{1B}';
const BEL: char = '\u{07}';

/// Represents the state of the sequence parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ParserState {
    /// Ready for printable characters and C0 controls.
    #[default]
    Ground,
    /// An ESC has been seen; the next scalar selects the sequence kind.
    Escape,
    /// Collecting a CSI sequence.
    Csi,
    /// Collecting an OSC string.
    Osc,
    /// After `ESC ( ) * +`: the next scalar designates a character set
    /// and is discarded.
    Charset,
    /// Inside a DCS/SOS/PM/APC data string, discarded until BEL or ST.
    StringSequence,
}

/// A parser that takes a stream of Unicode scalars and produces
/// `AnsiCommand`s.
///
/// The state machine handles CSI and OSC sequences, two-character ESC
/// sequences, charset designators, and the string-sequence family, as
/// well as C0 controls and printable characters. Unknown sequences are
/// discarded and the parser returns cleanly to the ground state.
#[derive(Debug, Default)]
pub struct AnsiParser {
    /// Current state of the state machine.
    state: ParserState,
    /// Commands completed so far, drained by `take_commands`.
    commands: Vec<AnsiCommand>,
    /// Numeric parameters of the CSI sequence in progress.
    csi_params: Vec<u16>,
    /// Intermediate bytes (0x20-0x2F) of the CSI sequence in progress.
    csi_intermediates: Vec<u8>,
    /// Leading `?`, `>` or `=` of the CSI sequence in progress.
    csi_private_marker: Option<char>,
    /// Payload of the OSC sequence in progress.
    osc_string: String,
}

impl AnsiParser {
    /// Creates a new parser in the ground state.
    pub fn new() -> Self {
        AnsiParser::default()
    }

    /// Processes a single scalar and updates state and command list.
    pub fn process_scalar(&mut self, c: char) {
        let initial_state = self.state;
        match initial_state {
            ParserState::Ground => self.handle_ground(c),
            ParserState::Escape => self.handle_escape(c),
            ParserState::Csi => self.handle_csi(c),
            ParserState::Osc => self.handle_osc(c),
            ParserState::Charset => self.handle_charset(c),
            ParserState::StringSequence => self.handle_string_sequence(c),
        }
        if self.state != initial_state {
            trace!(
                "parser state transition: {:?} -> {:?}",
                initial_state,
                self.state
            );
        }
    }

    /// Returns the commands processed so far and clears the buffer.
    pub fn take_commands(&mut self) -> Vec<AnsiCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns to the ground state, dropping sequence accumulators.
    fn reset_sequence_state(&mut self) {
        self.state = ParserState::Ground;
        self.csi_params.clear();
        self.csi_intermediates.clear();
        self.csi_private_marker = None;
    }

    fn handle_ground(&mut self, c: char) {
        if c == ESC {
            self.state = ParserState::Escape;
            return;
        }
        if c.is_control() {
            if let Some(c0) = C0Control::from_char(c) {
                self.commands.push(AnsiCommand::C0Control(c0));
            } else {
                trace!("dropping unhandled control scalar {:#04x}", u32::from(c));
            }
            return;
        }
        self.commands.push(AnsiCommand::Print(c));
    }

    fn handle_escape(&mut self, c: char) {
        match c {
            '[' => {
                self.csi_params.clear();
                self.csi_intermediates.clear();
                self.csi_private_marker = None;
                self.state = ParserState::Csi;
            }
            ']' => {
                self.osc_string.clear();
                self.state = ParserState::Osc;
            }
            '(' | ')' | '*' | '+' => self.state = ParserState::Charset,
            '7' => {
                self.commands.push(AnsiCommand::Esc(EscCommand::SaveCursor));
                self.state = ParserState::Ground;
            }
            '8' => {
                self.commands
                    .push(AnsiCommand::Esc(EscCommand::RestoreCursor));
                self.state = ParserState::Ground;
            }
            'D' => {
                self.commands.push(AnsiCommand::Esc(EscCommand::Index));
                self.state = ParserState::Ground;
            }
            'E' => {
                self.commands.push(AnsiCommand::Esc(EscCommand::NextLine));
                self.state = ParserState::Ground;
            }
            'M' => {
                self.commands
                    .push(AnsiCommand::Esc(EscCommand::ReverseIndex));
                self.state = ParserState::Ground;
            }
            'c' => {
                self.commands
                    .push(AnsiCommand::Esc(EscCommand::ResetToInitialState));
                self.state = ParserState::Ground;
            }
            'P' | '_' | '^' | 'X' => self.state = ParserState::StringSequence,
            // ST arriving on its own; nothing was pending.
            '\\' => self.state = ParserState::Ground,
            other => {
                debug!("ignoring unsupported escape sequence: ESC {:?}", other);
                self.state = ParserState::Ground;
            }
        }
    }

    fn handle_csi(&mut self, c: char) {
        match u32::from(c) {
            0x30..=0x3F => self.accumulate_csi_param(c),
            0x20..=0x2F => {
                if self.csi_intermediates.len() < MAX_CSI_INTERMEDIATES {
                    self.csi_intermediates.push(c as u8);
                } else {
                    warn!("too many CSI intermediate bytes, ignoring {:?}", c);
                }
            }
            0x40..=0x7E => {
                self.dispatch_csi(c);
                self.reset_sequence_state();
            }
            _ => {
                // A control scalar inside CSI aborts the sequence.
                warn!(
                    "CSI sequence aborted by scalar {:#04x}",
                    u32::from(c)
                );
                self.reset_sequence_state();
            }
        }
    }

    fn accumulate_csi_param(&mut self, c: char) {
        match c {
            '0'..='9' => {
                let digit = c as u16 - '0' as u16;
                if self.csi_params.is_empty() {
                    self.csi_params.push(0);
                }
                if let Some(last) = self.csi_params.last_mut() {
                    *last = last.saturating_mul(10).saturating_add(digit);
                }
            }
            ';' => {
                if self.csi_params.is_empty() {
                    // A leading separator stands for a zero parameter.
                    self.csi_params.push(0);
                }
                if self.csi_params.len() < MAX_CSI_PARAMS {
                    self.csi_params.push(0);
                } else {
                    warn!("too many CSI parameters, dropping the rest");
                }
            }
            '?' | '>' | '=' => {
                if self.csi_private_marker.is_none() && self.csi_params.is_empty() {
                    self.csi_private_marker = Some(c);
                } else {
                    warn!("misplaced CSI marker {:?}, ignoring", c);
                }
            }
            other => {
                // Sub-parameter separators and the like are not honored.
                warn!("ignoring unsupported CSI parameter byte {:?}", other);
            }
        }
    }

    /// Decodes the accumulated CSI sequence once its final byte arrives.
    fn dispatch_csi(&mut self, final_c: char) {
        let params = std::mem::take(&mut self.csi_params);
        let intermediates = std::mem::take(&mut self.csi_intermediates);
        let marker = self.csi_private_marker.take();
        let param_or_0 = |idx: usize| params.get(idx).copied().unwrap_or(0);
        let param_or_1 = |idx: usize| param_or_0(idx).max(1);

        trace!(
            "dispatch CSI: final={:?}, params={:?}, intermediates={:?}, marker={:?}",
            final_c,
            params,
            intermediates,
            marker
        );

        let command = match (marker, intermediates.as_slice(), final_c) {
            (None, b"", 'A') => CsiCommand::CursorUp(param_or_1(0)),
            (None, b"", 'B') => CsiCommand::CursorDown(param_or_1(0)),
            (None, b"", 'C') => CsiCommand::CursorForward(param_or_1(0)),
            (None, b"", 'D') => CsiCommand::CursorBackward(param_or_1(0)),
            (None, b"", 'E') => CsiCommand::CursorNextLine(param_or_1(0)),
            (None, b"", 'F') => CsiCommand::CursorPrevLine(param_or_1(0)),
            (None, b"", 'G') => CsiCommand::CursorCharacterAbsolute(param_or_1(0)),
            (None, b"", 'd') => CsiCommand::CursorLineAbsolute(param_or_1(0)),
            (None, b"", 'H') | (None, b"", 'f') => {
                CsiCommand::CursorPosition(param_or_1(0), param_or_1(1))
            }
            (None, b"", 'J') => CsiCommand::EraseInDisplay(param_or_0(0)),
            (None, b"", 'K') => CsiCommand::EraseInLine(param_or_0(0)),
            (None, b"", 'X') => CsiCommand::EraseCharacter(param_or_1(0)),
            (None, b"", 'P') => CsiCommand::DeleteCharacter(param_or_1(0)),
            (None, b"", '@') => CsiCommand::InsertCharacter(param_or_1(0)),
            (None, b"", 'L') => CsiCommand::InsertLine(param_or_1(0)),
            (None, b"", 'M') => CsiCommand::DeleteLine(param_or_1(0)),
            (None, b"", 'r') => CsiCommand::SetScrollingRegion {
                top: param_or_1(0),
                bottom: param_or_0(1),
            },
            (None, b"", 'S') => CsiCommand::ScrollUp(param_or_1(0)),
            (None, b"", 'T') => CsiCommand::ScrollDown(param_or_1(0)),
            (None, b"", 'b') => CsiCommand::RepeatLastCharacter(param_or_1(0)),
            (None, b"", 'n') => CsiCommand::DeviceStatusReport(param_or_0(0)),
            (None, b"", 's') => CsiCommand::SaveCursor,
            (None, b"", 'u') => CsiCommand::RestoreCursor,
            (None, b"", 'm') => CsiCommand::SetGraphicsRendition(parse_sgr(&params)),
            (None, b"", 'c') => {
                if param_or_0(0) == 0 {
                    CsiCommand::PrimaryDeviceAttributes
                } else {
                    debug!("ignoring primary DA query with parameter {}", param_or_0(0));
                    return;
                }
            }
            (Some('>'), b"", 'c') => CsiCommand::SecondaryDeviceAttributes,
            (Some('='), b"", 'c') => {
                debug!("ignoring tertiary DA query");
                return;
            }
            (None, b"", 'h') | (None, b"", 'l') | (Some('?'), b"", 'h') | (Some('?'), b"", 'l') => {
                let private = marker == Some('?');
                let enable = final_c == 'h';
                let modes: &[u16] = if params.is_empty() { &[0] } else { &params };
                for &mode in modes {
                    self.commands.push(AnsiCommand::Csi(match (private, enable) {
                        (true, true) => CsiCommand::SetModePrivate(mode),
                        (true, false) => CsiCommand::ResetModePrivate(mode),
                        (false, true) => CsiCommand::SetMode(mode),
                        (false, false) => CsiCommand::ResetMode(mode),
                    }));
                }
                return;
            }
            (None, b" ", 'q') => CsiCommand::SetCursorStyle {
                shape: param_or_0(0),
            },
            (None, b"!", 'p') => CsiCommand::SoftReset,
            (None, b"", 't') => CsiCommand::WindowManipulation {
                ps1: param_or_0(0),
                ps2: params.get(1).copied(),
                ps3: params.get(2).copied(),
            },
            _ => {
                warn!(
                    "unsupported CSI sequence: marker={:?} intermediates={:?} final={:?} params={:?}",
                    marker, intermediates, final_c, params
                );
                CsiCommand::Unsupported(intermediates.clone(), Some(final_c))
            }
        };

        self.commands.push(AnsiCommand::Csi(command));
    }

    fn handle_osc(&mut self, c: char) {
        match c {
            BEL => {
                self.commands
                    .push(AnsiCommand::Osc(std::mem::take(&mut self.osc_string)));
                self.reset_sequence_state();
            }
            ESC => {
                // The OSC payload is complete; the `\` of the string
                // terminator is consumed by the Escape state.
                self.commands
                    .push(AnsiCommand::Osc(std::mem::take(&mut self.osc_string)));
                self.reset_sequence_state();
                self.state = ParserState::Escape;
            }
            _ => {
                if self.osc_string.len() < MAX_OSC_LEN {
                    self.osc_string.push(c);
                } else {
                    warn!("OSC payload exceeds {} bytes, truncating", MAX_OSC_LEN);
                }
            }
        }
    }

    fn handle_charset(&mut self, c: char) {
        // Charset designators are consumed and discarded.
        trace!("discarding charset designator {:?}", c);
        self.state = ParserState::Ground;
    }

    fn handle_string_sequence(&mut self, c: char) {
        match c {
            ESC => self.state = ParserState::Escape,
            BEL => self.state = ParserState::Ground,
            _ => {}
        }
    }
}
