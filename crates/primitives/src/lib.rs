//! Basic editing primitives shared across the input, buffer and window crates.
//!
//! This crate intentionally excludes anything that talks to a real terminal
//! or a real chat backend: it only defines the data types the core FSMs and
//! buffers operate on.

mod cursor;
mod histlist;
mod key;
mod motion;
mod register;

pub use cursor::Cursor;
pub use histlist::HistList;
pub use key::{Key, Modifiers, SpecialKey};
pub use motion::{ActionKind, Direction, Motion, MovementKind};
pub use register::RegisterName;
