use mm_primitives::{ActionKind, Direction, Key, Motion, MovementKind, SpecialKey};

use super::{ViInputFsm, ViState};
use crate::types::Intent;

impl ViInputFsm {
	/// In VISUAL, plain motions extend the highlight (`edit(highlight, ...)`
	/// rather than `edit(move, ...)` — same cursor math, tagged so
	/// `TextBuffer` knows the anchor must persist). Operators apply directly
	/// to the selection: their motion carries [`MovementKind::Highlight`],
	/// which `TextBuffer`'s range derivation resolves against
	/// `highlight_anchor` instead of stepping the cursor.
	pub(crate) fn handle_visual(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();

		if self.accumulate_count(key) {
			return intents;
		}

		if let Some((movement, direction)) = ViInputFsm::simple_motion_for_key(key) {
			let motion = self.take_motion(movement, direction);
			intents.push(Intent::Edit(ActionKind::Highlight, motion));
			return intents;
		}

		match key {
			Key::Press('f') => self.enter_charsearch(false, true),
			Key::Press('F') => self.enter_charsearch(false, false),
			Key::Press('t') => self.enter_charsearch(true, true),
			Key::Press('T') => self.enter_charsearch(true, false),
			Key::Press(';') => self.repeat_char_search_as(ActionKind::Highlight, false, &mut intents),
			Key::Press(',') => self.repeat_char_search_as(ActionKind::Highlight, true, &mut intents),

			Key::Press('d') | Key::Press('x') => self.apply_visual_operator(ActionKind::Delete, &mut intents),
			Key::Press('y') => self.apply_visual_operator(ActionKind::Yank, &mut intents),
			Key::Press('~') => self.apply_visual_operator(ActionKind::ToggleCase, &mut intents),
			Key::Press('u') => self.apply_visual_operator(ActionKind::Lowercase, &mut intents),
			Key::Press('U') => self.apply_visual_operator(ActionKind::Uppercase, &mut intents),
			Key::Press('c') => {
				let register = self.take_register();
				self.reset_params();
				let motion = Motion::new(MovementKind::Highlight, Direction::Right).with_register(register);
				intents.push(Intent::Edit(ActionKind::Delete, motion));
				self.checkpoint_pending = true;
				self.enter_insert(&mut intents);
			}
			Key::Press('r') => self.state = ViState::VisReplace,

			Key::Press('"') => self.state = ViState::Register,

			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.reset_params();
				self.enter_normal(&mut intents);
			}
			Key::Press('v') => {
				self.reset_params();
				self.enter_normal(&mut intents);
			}

			other => {
				tracing::trace!(?other, "unhandled key in VISUAL mode");
				intents.push(Intent::Warn(format!("Not yet implemented in VISUAL mode: {}", super::normal::describe_key(other))));
				self.reset_params();
			}
		}

		intents
	}

	/// Every VISUAL operator resolves against the selection, exits to NORMAL
	/// (`c` overrides this to INSERT, handled separately above), and sets
	/// `checkpoint_pending` since all five are mutating or at least
	/// register-affecting.
	fn apply_visual_operator(&mut self, action: ActionKind, intents: &mut Vec<Intent>) {
		let register = self.take_register();
		self.reset_params();
		let motion = Motion::new(MovementKind::Highlight, Direction::Right).with_register(register);
		intents.push(Intent::Edit(action, motion));
		self.checkpoint_pending = true;
		self.enter_normal(intents);
	}

	fn repeat_char_search_as(&mut self, action: ActionKind, reversed: bool, intents: &mut Vec<Intent>) {
		let Some(params) = self.last_char_search else {
			intents.push(Intent::Warn("No previous character search".to_string()));
			self.reset_params();
			return;
		};
		let direction = if reversed { super::normal::opposite(params.direction) } else { params.direction };
		let motion = self.take_motion(params.movement, direction).with_character(params.character);
		intents.push(Intent::Edit(action, motion));
	}
}

/// `r` while VISUAL is active: the next keypress replaces the whole
/// selection, mirroring `charreplace` but over a range instead of `count`
/// characters forward.
impl ViInputFsm {
	pub(crate) fn handle_visreplace(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Press(ch) => {
				let register = self.take_register();
				self.reset_params();
				let motion = Motion::new(MovementKind::Highlight, Direction::Right).with_register(register);
				intents.push(Intent::Replace { ch, typing: false, motion });
				self.checkpoint_pending = true;
				self.enter_normal(&mut intents);
			}
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.reset_params();
				self.enter_normal(&mut intents);
			}
			other => {
				tracing::trace!(?other, "unhandled key in VISUAL replace-char");
				intents.push(Intent::Warn(format!("Not a character: {}", super::normal::describe_key(other))));
			}
		}
		intents
	}
}
