use mm_primitives::{ActionKind, Direction, Key, MovementKind, SpecialKey};

use super::{MovementPost, ViInputFsm, ViState};
use crate::types::{FocusTarget, Intent, ScrollKind};

impl ViInputFsm {
	pub(crate) fn handle_normal(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();

		if self.accumulate_count(key) {
			return intents;
		}

		if let Some((movement, direction)) = ViInputFsm::simple_motion_for_key(key) {
			let motion = self.take_motion(movement, direction);
			intents.push(Intent::Edit(ActionKind::Move, motion));
			return intents;
		}

		match key {
			Key::Press('f') => self.enter_charsearch(false, true),
			Key::Press('F') => self.enter_charsearch(false, false),
			Key::Press('t') => self.enter_charsearch(true, true),
			Key::Press('T') => self.enter_charsearch(true, false),
			Key::Press(';') => self.repeat_char_search(false, &mut intents),
			Key::Press(',') => self.repeat_char_search(true, &mut intents),

			Key::Press('y') => self.enter_movement(ActionKind::Yank, MovementPost::Normal, 'y'),
			Key::Press('d') => self.enter_movement(ActionKind::Delete, MovementPost::Normal, 'd'),
			Key::Press('c') => self.enter_movement(ActionKind::Delete, MovementPost::Insert, 'c'),

			Key::Press('x') => {
				let motion = self.take_motion(MovementKind::Char, Direction::Right);
				intents.push(Intent::Edit(ActionKind::Delete, motion));
				self.checkpoint_pending = true;
			}
			Key::Press('~') => {
				let motion = self.take_motion(MovementKind::Char, Direction::Right);
				intents.push(Intent::Edit(ActionKind::ToggleCase, motion));
				self.checkpoint_pending = true;
			}

			Key::Press('i') => self.enter_insert(&mut intents),
			Key::Press('a') => {
				let motion = self.take_motion(MovementKind::Char, Direction::Right).with_count(1);
				intents.push(Intent::Edit(ActionKind::Move, motion));
				self.enter_insert(&mut intents);
			}
			Key::Press('A') => {
				let motion = self.take_motion(MovementKind::Line, Direction::Right);
				intents.push(Intent::Edit(ActionKind::Move, motion));
				self.enter_insert(&mut intents);
			}
			Key::Press('I') => {
				let motion = self.take_motion(MovementKind::Line, Direction::FirstWord);
				intents.push(Intent::Edit(ActionKind::Move, motion));
				self.enter_insert(&mut intents);
			}
			Key::Press('R') => self.enter_replace(&mut intents),
			Key::Press('v') => self.enter_visual(&mut intents),
			Key::Press('r') => self.state = ViState::CharReplace,

			Key::Press('p') => {
				let count = self.effective_count();
				let register = self.take_register();
				self.reset_params();
				intents.push(Intent::Paste { direction: crate::types::PasteDirection::After, register, count });
				self.checkpoint_pending = true;
			}
			Key::Press('P') => {
				let count = self.effective_count();
				let register = self.take_register();
				self.reset_params();
				intents.push(Intent::Paste { direction: crate::types::PasteDirection::Before, register, count });
				self.checkpoint_pending = true;
			}

			Key::Press('u') => {
				let count = self.effective_count();
				self.reset_params();
				intents.push(Intent::Undo(count));
			}
			Key::Control('r') => {
				let count = self.effective_count();
				self.reset_params();
				intents.push(Intent::Redo(count));
			}

			Key::Press('"') => self.state = ViState::Register,
			Key::Press('g') => self.state = ViState::Goto,
			Key::Press('m') => self.state = ViState::Mark,
			Key::Press('\'') => self.state = ViState::LineJump,
			Key::Press('`') => self.state = ViState::CharJump,
			Key::Control('w') => self.state = ViState::WinCmd,

			Key::Press(':') => {
				self.reset_params();
				intents.push(Intent::Focus { target: FocusTarget::Command, direction: None, count: None });
			}

			Key::Control('z') => {
				self.reset_params();
				intents.push(Intent::Suspend);
			}
			Key::Control('c') => {
				if self.count == 0 && self.register.is_none() {
					intents.push(Intent::Warn("Type :quit<Enter> to exit".to_string()));
				}
				self.reset_params();
			}
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.reset_params();
				self.enter_normal(&mut intents);
			}

			Key::Special(SpecialKey::Up, _) => {
				intents.push(Intent::Scroll { direction: Direction::Up, kind: ScrollKind::Line, count: self.effective_count() });
				self.reset_params();
			}
			Key::Special(SpecialKey::Down, _) => {
				intents.push(Intent::Scroll { direction: Direction::Down, kind: ScrollKind::Line, count: self.effective_count() });
				self.reset_params();
			}
			Key::Special(SpecialKey::PageUp, _) => {
				intents.push(Intent::Scroll { direction: Direction::Up, kind: ScrollKind::Screen, count: self.effective_count() });
				self.reset_params();
			}
			Key::Special(SpecialKey::PageDown, _) => {
				intents.push(Intent::Scroll { direction: Direction::Down, kind: ScrollKind::Screen, count: self.effective_count() });
				self.reset_params();
			}

			other => {
				tracing::trace!(?other, "unhandled key in NORMAL mode");
				intents.push(Intent::Warn(format!("Not yet implemented in NORMAL mode: {}", describe_key(other))));
				self.reset_params();
			}
		}

		intents
	}

	/// The count accumulated before the operator key is preserved as
	/// `pending_count` across the transition into `Movement`, so `2d3w`
	/// multiplies out to 6 words (see [`ViInputFsm::combined_count`]).
	pub(crate) fn enter_movement(&mut self, action: ActionKind, poststate: MovementPost, actchar: char) {
		self.pending_count = self.count;
		self.count = 0;
		self.movement_action = Some(action);
		self.movement_poststate = poststate;
		self.movement_actchar = Some(actchar);
		self.state = ViState::Movement;
	}

	pub(crate) fn repeat_char_search(&mut self, reversed: bool, intents: &mut Vec<Intent>) {
		let Some(params) = self.last_char_search else {
			intents.push(Intent::Warn("No previous character search".to_string()));
			self.reset_params();
			return;
		};
		let direction = if reversed { opposite(params.direction) } else { params.direction };
		let motion = self
			.take_motion(params.movement, direction)
			.with_character(params.character);
		intents.push(Intent::Edit(ActionKind::Move, motion));
	}
}

pub(crate) fn opposite(direction: Direction) -> Direction {
	match direction {
		Direction::Left => Direction::Right,
		Direction::Right => Direction::Left,
		Direction::Up => Direction::Down,
		Direction::Down => Direction::Up,
		Direction::FirstWord => Direction::FirstWord,
	}
}

pub(crate) fn describe_key(key: Key) -> String {
	match key {
		Key::Press(c) => c.to_string(),
		Key::Control(c) => format!("^{}", c.to_ascii_uppercase()),
		Key::Special(special, _) => format!("{special:?}"),
	}
}
