//! Normalized terminal key events.
//!
//! The terminal rendering/input back-end is an external collaborator; this
//! type is the boundary it is expected to translate raw terminal events
//! into before handing them to [`mm_input`](../mm_input/index.html).

bitflags::bitflags! {
	/// Modifier keys held down alongside a [`SpecialKey`].
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub struct Modifiers: u8 {
		const SHIFT = 0b001;
		const ALT   = 0b010;
	}
}

/// Non-printable keys that aren't control chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	PageUp,
	PageDown,
	Delete,
	Backspace,
	Tab,
	Enter,
	Escape,
}

/// A single logical key event, already normalized from whatever terminal
/// library produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// A printable character, e.g. `a`, `3`, `$`.
	Press(char),
	/// A control chord, identified by the lowercase letter it chords with
	/// (`^C` is `Control('c')`, `^[` is `Control('[')`, `^W` is `Control('w')`).
	Control(char),
	/// Arrows, function keys, home/end, page up/down, delete.
	Special(SpecialKey, Modifiers),
}

impl Key {
	/// Returns `Some(digit)` if this key is a printable ASCII digit.
	pub fn as_digit(self) -> Option<u32> {
		match self {
			Key::Press(c) => c.to_digit(10),
			_ => None,
		}
	}

	/// Returns the pressed character, treating `Escape`/`^[` as `None`.
	pub fn as_char(self) -> Option<char> {
		match self {
			Key::Press(c) => Some(c),
			_ => None,
		}
	}

	/// `true` for `^C` or `^[`/Escape — the two universal "cancel" chords.
	pub fn is_cancel(self) -> bool {
		matches!(self, Key::Control('c') | Key::Control('[') | Key::Special(SpecialKey::Escape, _))
	}
}
