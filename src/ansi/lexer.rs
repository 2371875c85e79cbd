// src/ansi/lexer.rs

//! Byte-chunk decoding for the parser: UTF-8 to Unicode scalars with a
//! lossy-ASCII fallback, followed by canonical composition (NFC).

use log::warn;
use std::str;
use unicode_normalization::UnicodeNormalization;

/// Unicode replacement character (U+FFFD), substituted for bytes that
/// survive neither UTF-8 decoding nor the ASCII fallback.
pub(super) const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Decodes one chunk of bytes into the scalars fed to the state machine.
///
/// The transport guarantees UTF-8 boundary completeness, so the chunk is
/// decoded in one pass and normalized to composed form. A chunk that is
/// not valid UTF-8 degrades to its ASCII bytes, with U+FFFD standing in
/// for everything else; decoding never fails.
pub(super) fn decode_scalars(bytes: &[u8]) -> Vec<char> {
    match str::from_utf8(bytes) {
        Ok(text) => {
            if text.is_ascii() {
                // ASCII is already composed; skip the NFC pass.
                text.chars().collect()
            } else {
                text.nfc().collect()
            }
        }
        Err(_) => {
            warn!("input chunk is not valid UTF-8; falling back to ASCII");
            bytes
                .iter()
                .map(|&b| {
                    if b.is_ascii() {
                        b as char
                    } else {
                        REPLACEMENT_CHARACTER
                    }
                })
                .collect()
        }
    }
}
