//! The command-bar readline state machine — a much smaller cousin of
//! [`crate::ViInputFsm`] for the single-line buffer behind `:` commands and
//! search prompts.

use mm_primitives::{ActionKind, Direction, Key, Modifiers, Motion, MovementKind, RegisterName, SpecialKey};

use crate::types::{CompleteDirection, Intent, PasteDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimpleState {
	Waiting,
	Paste,
}

/// Readline-style editing for the command bar. Unlike [`crate::ViInputFsm`]
/// there's no modal alphabet here — every printable key just types.
#[derive(Debug, Clone)]
pub struct SimpleInputFsm {
	state: SimpleState,
}

impl Default for SimpleInputFsm {
	fn default() -> Self {
		Self::new()
	}
}

impl SimpleInputFsm {
	pub fn new() -> Self {
		Self { state: SimpleState::Waiting }
	}

	pub fn handle_key(&mut self, key: Key) -> Vec<Intent> {
		match self.state {
			SimpleState::Waiting => self.handle_waiting(key),
			SimpleState::Paste => self.handle_paste(key),
		}
	}

	fn handle_waiting(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Control('a') => intents.push(move_motion(MovementKind::Line, Direction::Left)),
			Key::Control('e') => intents.push(move_motion(MovementKind::Line, Direction::Right)),
			Key::Control('h') | Key::Special(SpecialKey::Backspace, _) => {
				intents.push(Intent::Edit(ActionKind::Delete, Motion::new(MovementKind::Char, Direction::Left).with_count(1)));
			}
			Key::Special(SpecialKey::Delete, _) => {
				intents.push(Intent::Edit(ActionKind::Delete, Motion::new(MovementKind::Char, Direction::Right).with_count(1)));
			}
			Key::Control('u') => {
				intents.push(Intent::Edit(ActionKind::Delete, Motion::new(MovementKind::Line, Direction::Down)));
			}
			Key::Control('r') => self.state = SimpleState::Paste,
			Key::Control('i') => intents.push(Intent::Complete(CompleteDirection::Next)),
			Key::Special(SpecialKey::Tab, mods) if mods.contains(Modifiers::SHIFT) => {
				intents.push(Intent::Complete(CompleteDirection::Previous));
			}
			Key::Special(SpecialKey::Tab, _) => intents.push(Intent::Complete(CompleteDirection::Next)),
			Key::Control('j') | Key::Control('m') | Key::Special(SpecialKey::Enter, _) => intents.push(Intent::Submit),
			Key::Control('c') | Key::Control('[') | Key::Special(SpecialKey::Escape, _) => intents.push(Intent::Switch),

			Key::Special(SpecialKey::Left, mods) if mods.contains(Modifiers::SHIFT) => {
				intents.push(move_motion(MovementKind::WordBegin, Direction::Left));
			}
			Key::Special(SpecialKey::Right, mods) if mods.contains(Modifiers::SHIFT) => {
				intents.push(move_motion(MovementKind::WordBegin, Direction::Right));
			}
			Key::Special(SpecialKey::Left, _) => intents.push(move_motion(MovementKind::Char, Direction::Left)),
			Key::Special(SpecialKey::Right, _) => intents.push(move_motion(MovementKind::Char, Direction::Right)),
			Key::Special(SpecialKey::Home, _) => intents.push(move_motion(MovementKind::Line, Direction::Left)),
			Key::Special(SpecialKey::End, _) => intents.push(move_motion(MovementKind::Line, Direction::Right)),

			Key::Press(ch) => intents.push(Intent::Type(ch)),
			other => {
				tracing::trace!(?other, "unhandled key in command bar");
			}
		}
		intents
	}

	fn handle_paste(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Press(ch) if RegisterName::parse(ch).is_some() => {
				let register = RegisterName::parse(ch).unwrap();
				intents.push(Intent::Paste { direction: PasteDirection::Before, register, count: 1 });
			}
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {}
			other => {
				tracing::trace!(?other, "invalid register name for command-bar paste");
				intents.push(Intent::Warn("Not a valid register name".to_string()));
			}
		}
		self.state = SimpleState::Waiting;
		intents
	}
}

fn move_motion(movement: MovementKind, direction: Direction) -> Intent {
	Intent::Edit(ActionKind::Move, Motion::new(movement, direction).with_count(1))
}
