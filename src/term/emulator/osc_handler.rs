// src/term/emulator/osc_handler.rs

//! OSC (Operating System Command) handling.
//!
//! Recognized sequences:
//!
//! | OSC code | Function |
//! |----------|----------|
//! | 0, 1, 2  | Set icon name / window title |
//! | 7        | Current working directory (`file://` URI) |
//!
//! Everything else is ignored.

use super::TerminalEmulator;
use crate::term::action::EmulatorAction;
use log::{debug, warn};

/// Splits an OSC payload into its numeric code and the content after the
/// first semicolon. A payload without a semicolon is all code.
fn split_osc_prefix(data: &str) -> Option<(u32, &str)> {
    let (code, content) = match data.find(';') {
        Some(pos) => (&data[..pos], &data[pos + 1..]),
        None => (data, ""),
    };
    let mut ps: u32 = 0;
    if code.is_empty() {
        return None;
    }
    for b in code.bytes() {
        match b {
            b'0'..=b'9' => {
                ps = ps.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
            }
            _ => return None,
        }
    }
    Some((ps, content))
}

impl TerminalEmulator {
    pub(super) fn handle_osc(&mut self, data: &str) -> Option<EmulatorAction> {
        let (ps, content) = match split_osc_prefix(data) {
            Some(pair) => pair,
            None => {
                warn!("malformed OSC sequence: {:?}", data);
                return None;
            }
        };

        match ps {
            0 | 1 | 2 => Some(EmulatorAction::SetTitle(content.to_string())),
            7 => self.handle_osc_cwd(content),
            _ => {
                debug!("unhandled OSC code {}: {:?}", ps, content);
                None
            }
        }
    }

    /// OSC 7: `file://hostname/path`. The path lands in
    /// `current_directory`; a non-file payload is stored raw. Either way
    /// the title hook fires with the stored value.
    fn handle_osc_cwd(&mut self, content: &str) -> Option<EmulatorAction> {
        let path = if let Some(rest) = content.strip_prefix("file://") {
            match rest.find('/') {
                Some(slash_pos) => &rest[slash_pos..],
                // Hostname without a path component means the root.
                None => "/",
            }
        } else {
            content
        };

        if path.is_empty() {
            debug!("OSC 7 with empty working directory");
            return None;
        }
        self.current_directory = Some(path.to_string());
        Some(EmulatorAction::SetTitle(path.to_string()))
    }
}
