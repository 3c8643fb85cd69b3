use mm_primitives::{ActionKind, Direction, Key, Motion, MovementKind, SpecialKey};

use super::{PasteReturn, ViInputFsm, ViState};
use crate::types::Intent;

impl ViInputFsm {
	pub(crate) fn handle_insert(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.checkpoint_pending = true;
				self.enter_normal(&mut intents);
			}
			Key::Special(SpecialKey::Backspace, _) | Key::Control('h') => {
				let motion = Motion::new(MovementKind::Char, Direction::Left).with_count(1);
				intents.push(Intent::Edit(ActionKind::Delete, motion));
				self.checkpoint_pending = true;
			}
			Key::Special(SpecialKey::Delete, _) => {
				let motion = Motion::new(MovementKind::Char, Direction::Right).with_count(1);
				intents.push(Intent::Edit(ActionKind::Delete, motion));
				self.checkpoint_pending = true;
			}
			Key::Control('r') => self.state = ViState::PendingPaste(PasteReturn::Insert),
			Key::Special(SpecialKey::Left, _) => {
				intents.push(Intent::Edit(ActionKind::Move, Motion::new(MovementKind::Char, Direction::Left).with_count(1)));
			}
			Key::Special(SpecialKey::Right, _) => {
				intents.push(Intent::Edit(ActionKind::Move, Motion::new(MovementKind::Char, Direction::Right).with_count(1)));
			}
			Key::Special(SpecialKey::Home, _) => {
				intents.push(Intent::Edit(ActionKind::Move, Motion::new(MovementKind::Line, Direction::Left)));
			}
			Key::Special(SpecialKey::End, _) => {
				intents.push(Intent::Edit(ActionKind::Move, Motion::new(MovementKind::Line, Direction::Right)));
			}
			Key::Press(ch) => {
				intents.push(Intent::Type(ch));
				self.checkpoint_pending = true;
			}
			other => {
				tracing::trace!(?other, "unhandled key in INSERT mode");
				intents.push(Intent::Warn(format!("Not yet implemented in INSERT mode: {}", super::normal::describe_key(other))));
			}
		}
		intents
	}

	/// `R` replace mode: every printable key overwrites forward one character
	/// (`replace(ch, typing=true, ...)`), backspace restores from history via
	/// `erase` instead of a plain delete.
	pub(crate) fn handle_replace(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.checkpoint_pending = true;
				self.enter_normal(&mut intents);
			}
			Key::Special(SpecialKey::Backspace, _) | Key::Control('h') => {
				let motion = Motion::new(MovementKind::Char, Direction::Left).with_count(1);
				intents.push(Intent::Edit(ActionKind::Erase, motion));
				self.checkpoint_pending = true;
			}
			Key::Control('r') => self.state = ViState::PendingPaste(PasteReturn::Replace),
			Key::Press(ch) => {
				let motion = Motion::new(MovementKind::Char, Direction::Right).with_count(1);
				intents.push(Intent::Replace { ch, typing: true, motion });
				self.checkpoint_pending = true;
			}
			other => {
				tracing::trace!(?other, "unhandled key in REPLACE mode");
				intents.push(Intent::Warn(format!("Not yet implemented in REPLACE mode: {}", super::normal::describe_key(other))));
			}
		}
		intents
	}
}
