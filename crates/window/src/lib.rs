//! Pane jump-lists, the tiled/zoomed window layout, and the status line.
//!
//! This crate knows nothing about a concrete backend or terminal: a [`View`]
//! carries only an opaque [`RoomHandle`] and the [`mm_buffer::TextBuffer`]
//! bound to it, and [`Window`] reports state changes it can't apply itself
//! (closing the last pane) as a [`WindowEvent`] for the host to act on.

mod pane;
mod statusline;
mod window;

pub use pane::{JumpDirection, Pane, RoomHandle, View};
pub use statusline::StatusLine;
pub use window::{PaneSlot, Window, WindowEvent, MIN_PANE_HEIGHT};
