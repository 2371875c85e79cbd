// src/term/action.rs

//! Effects the emulator raises while interpreting output, and the hook
//! set an embedder installs to observe them.

use std::fmt;

/// An externally visible effect produced while interpreting output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmulatorAction {
    /// Bytes to deliver back to the PTY master (DA/DSR replies and the
    /// like). Delivery order matches query order.
    WritePty(Vec<u8>),
    /// OSC title change. Also raised with the path of an OSC 7 working
    /// directory report.
    SetTitle(String),
    /// BEL received.
    RingBell,
    /// The input-line record was flushed by a line feed.
    CommandEntered(String),
}

/// Callback set through which effects reach the embedder.
///
/// All hooks are optional and invoked synchronously on the processing
/// thread, in the order the triggering bytes appeared in the stream.
/// `on_change` fires exactly once per `process` call, after the whole
/// chunk (even an empty one) is consumed.
#[derive(Default)]
pub struct EffectHooks {
    /// The screen may have changed; the renderer reads the grid.
    pub on_change: Option<Box<dyn FnMut()>>,
    /// BEL received.
    pub on_bell: Option<Box<dyn FnMut()>>,
    /// OSC 0/1/2 title, or the OSC 7 working directory.
    pub on_title_change: Option<Box<dyn FnMut(&str)>>,
    /// The input-line record flushed on Enter.
    pub on_command_entered: Option<Box<dyn FnMut(&str)>>,
    /// Bytes to write back to the PTY master.
    pub on_response: Option<Box<dyn FnMut(&[u8])>>,
}

impl fmt::Debug for EffectHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectHooks")
            .field("on_change", &self.on_change.is_some())
            .field("on_bell", &self.on_bell.is_some())
            .field("on_title_change", &self.on_title_change.is_some())
            .field("on_command_entered", &self.on_command_entered.is_some())
            .field("on_response", &self.on_response.is_some())
            .finish()
    }
}
