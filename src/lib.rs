// src/lib.rs

//! VT/xterm-compatible terminal emulator engine.
//!
//! Feed PTY output bytes to [`TerminalEmulator::process`]; the engine keeps
//! the authoritative screen model (grid, scrollback, cursor, styles, modes)
//! and raises effects (bell, title changes, host responses, coalesced
//! screen-change signals) through the embedder's [`EffectHooks`].
//!
//! The engine is single-threaded and synchronous: `process` neither blocks
//! nor spawns work, and every hook is invoked on the calling thread in the
//! order the triggering bytes appeared. Rendering, PTY I/O and key
//! translation are the embedder's business.

pub mod ansi;
pub mod color;
pub mod glyph;
pub mod term;

pub use color::Color;
pub use glyph::{AttrFlags, Attributes, ContentCell, Glyph};
pub use term::{
    action::{EffectHooks, EmulatorAction},
    Cursor, TerminalEmulator, MAX_SCROLLBACK,
};
