//! Key-to-intent translation for the two input surfaces: the modal vi-style
//! editor ([`ViInputFsm`]) and the command-bar readline ([`SimpleInputFsm`]).
//!
//! Neither FSM touches a buffer directly. Both translate [`mm_primitives::Key`]
//! events into a stream of [`Intent`]s that `mm-buffer` and the window layer
//! apply; this keeps the keymap testable in isolation from rendering and
//! backend state.

mod simple;
mod types;
mod vi;

pub use simple::SimpleInputFsm;
pub use types::{CompleteDirection, FocusTarget, Intent, Mode, PasteDirection, ScrollKind, WindowAction};
pub use vi::ViInputFsm;
