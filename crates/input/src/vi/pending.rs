use mm_primitives::{ActionKind, Direction, Key, Motion, MovementKind, RegisterName, SpecialKey};

use super::{CharSearchParams, MovementPost, PasteReturn, ViInputFsm, ViState};
use crate::types::{FocusTarget, Intent, PasteDirection, WindowAction};

impl ViInputFsm {
	/// The operand of a pending `y`/`d`/`c`. Accepts any motion key (plus the
	/// doubled-operator-letter line shortcut, e.g. `dd`) and resolves with
	/// `movement_action` against the combined count.
	pub(crate) fn handle_movement(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();

		if self.accumulate_count(key) {
			return intents;
		}

		if let Key::Press(ch) = key {
			if Some(ch) == self.movement_actchar {
				self.finish_movement(MovementKind::Line, Direction::Down, &mut intents);
				return intents;
			}
		}

		if let Some((movement, direction)) = ViInputFsm::simple_motion_for_key(key) {
			self.finish_movement(movement, direction, &mut intents);
			return intents;
		}

		match key {
			Key::Press('f') => self.state = ViState::CharSearch { till: false, forward: true },
			Key::Press('F') => self.state = ViState::CharSearch { till: false, forward: false },
			Key::Press('t') => self.state = ViState::CharSearch { till: true, forward: true },
			Key::Press('T') => self.state = ViState::CharSearch { till: true, forward: false },
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.abandon_movement();
				self.enter_normal(&mut intents);
			}
			other => {
				tracing::trace!(?other, "unhandled key in MOVEMENT mode");
				intents.push(Intent::Warn(format!("Not yet implemented in MOVEMENT mode: {}", super::normal::describe_key(other))));
				self.abandon_movement();
				self.enter_normal(&mut intents);
			}
		}

		intents
	}

	fn finish_movement(&mut self, movement: MovementKind, direction: Direction, intents: &mut Vec<Intent>) {
		let register = self.take_register();
		let combined = self.combined_count();
		let motion = Motion::new(movement, direction).with_count(combined).with_register(register);
		let action = self.movement_action.take().unwrap_or(ActionKind::Move);
		let poststate = self.movement_poststate;
		self.pending_count = 0;
		self.count = 0;
		intents.push(Intent::Edit(action, motion));
		self.checkpoint_pending = true;
		match poststate {
			MovementPost::Normal => self.enter_normal(intents),
			MovementPost::Insert => self.enter_insert(intents),
		}
	}

	fn abandon_movement(&mut self) {
		self.movement_action = None;
		self.movement_actchar = None;
		self.reset_params();
	}

	/// Second keystroke of `f`/`F`/`t`/`T`, from NORMAL, VISUAL or MOVEMENT.
	/// Resolution of which action/poststate to return to is carried by
	/// whichever state invoked this one — tracked via `movement_action`
	/// being `Some` only for the MOVEMENT case.
	pub(crate) fn handle_charsearch(&mut self, key: Key, till: bool, forward: bool) -> Vec<Intent> {
		let mut intents = Vec::new();
		let Key::Press(character) = key else {
			intents.push(Intent::Warn("Expected a character to search for".to_string()));
			self.abandon_movement();
			self.state = ViState::Normal;
			return intents;
		};

		let movement = if till { MovementKind::TillChar } else { MovementKind::ToChar };
		let direction = if forward { Direction::Right } else { Direction::Left };
		self.last_char_search = Some(CharSearchParams { movement, direction, character });

		if self.movement_action.is_some() {
			self.finish_movement_with_character(movement, direction, character, &mut intents);
		} else {
			let motion = self.take_motion(movement, direction).with_character(character);
			let action = if self.pending_visual_mode() { ActionKind::Highlight } else { ActionKind::Move };
			intents.push(Intent::Edit(action, motion));
			self.state = if self.pending_visual_mode() { ViState::Visual } else { ViState::Normal };
		}
		intents
	}

	fn finish_movement_with_character(&mut self, movement: MovementKind, direction: Direction, character: char, intents: &mut Vec<Intent>) {
		let register = self.take_register();
		let combined = self.combined_count();
		let motion = Motion::new(movement, direction).with_count(combined).with_register(register).with_character(character);
		let action = self.movement_action.take().unwrap_or(ActionKind::Move);
		let poststate = self.movement_poststate;
		self.pending_count = 0;
		self.count = 0;
		intents.push(Intent::Edit(action, motion));
		self.checkpoint_pending = true;
		match poststate {
			MovementPost::Normal => self.enter_normal(intents),
			MovementPost::Insert => self.enter_insert(intents),
		}
	}

	/// `CharSearch` is reachable from both NORMAL and VISUAL directly (no
	/// pending operator); `movement_actchar` being unset in that situation
	/// plus a dedicated flag would be needed to know which to return to, so
	/// instead VISUAL always routes its `f`/`F`/`t`/`T` through here with
	/// `movement_action` left `None` and `return_visual` tracked implicitly:
	/// the only two entry points for charsearch without a pending operator
	/// are NORMAL and VISUAL, and we remember which by never clearing the
	/// `Visual` tag until a concrete motion resolves.
	fn pending_visual_mode(&self) -> bool {
		self.charsearch_return_visual
	}

	pub(crate) fn handle_goto(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Press('g') => {
				let motion = self.take_motion(MovementKind::Line, Direction::Left);
				intents.push(Intent::Edit(ActionKind::Move, motion));
				self.state = ViState::Normal;
			}
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.reset_params();
				self.state = ViState::Normal;
			}
			other => {
				tracing::trace!(?other, "unhandled key in GOTO mode");
				intents.push(Intent::Warn(format!("Not yet implemented in GOTO mode: {}", super::normal::describe_key(other))));
				self.reset_params();
				self.state = ViState::Normal;
			}
		}
		intents
	}

	pub(crate) fn handle_mark(&mut self, key: Key) -> Vec<Intent> {
		self.pop_state_with_char_intent(key, Intent::Mark)
	}

	pub(crate) fn handle_linejump(&mut self, key: Key) -> Vec<Intent> {
		self.pop_state_with_char_intent(key, Intent::LineJump)
	}

	pub(crate) fn handle_charjump(&mut self, key: Key) -> Vec<Intent> {
		self.pop_state_with_char_intent(key, Intent::CharJump)
	}

	fn pop_state_with_char_intent(&mut self, key: Key, make: fn(char) -> Intent) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Press(ch) => intents.push(make(ch.to_ascii_lowercase())),
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {}
			other => {
				tracing::trace!(?other, "expected a mark/jump character");
				intents.push(Intent::Warn("Expected a character".to_string()));
			}
		}
		self.reset_params();
		self.state = ViState::Normal;
		intents
	}

	pub(crate) fn handle_register(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Press(ch) if RegisterName::parse(ch).is_some() => {
				self.register = RegisterName::parse(ch);
				self.state = ViState::Normal;
			}
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.state = ViState::Normal;
			}
			other => {
				tracing::trace!(?other, "invalid register name");
				intents.push(Intent::Warn("Not a valid register name".to_string()));
				self.state = ViState::Normal;
			}
		}
		intents
	}

	pub(crate) fn handle_wincmd(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		let count = self.effective_count();

		match key {
			Key::Press('h') | Key::Special(SpecialKey::Left, _) => {
				intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Left), count: Some(count) });
			}
			Key::Press('l') | Key::Special(SpecialKey::Right, _) => {
				intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Right), count: Some(count) });
			}
			Key::Press('j') | Key::Special(SpecialKey::Down, _) => {
				intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Down), count: Some(count) });
			}
			Key::Press('k') | Key::Special(SpecialKey::Up, _) => {
				intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Up), count: Some(count) });
			}
			Key::Press('w') => {
				intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Right), count: None });
			}
			Key::Press('W') => {
				intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Left), count: None });
			}
			// `t`/`b` (top/bottom) reuse Up/Down with no count, distinguishing them
			// from `k`/`j` (which always carry an explicit count) downstream.
			Key::Press('t') => intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Up), count: None }),
			Key::Press('b') => intents.push(Intent::Focus { target: FocusTarget::Window, direction: Some(Direction::Down), count: None }),

			Key::Press('s') | Key::Press('v') => {
				intents.push(Intent::Window { action: WindowAction::Split, direction: Direction::Down, count });
			}
			Key::Press('-') => intents.push(Intent::Window { action: WindowAction::Resize, direction: Direction::Up, count }),
			Key::Press('+') => intents.push(Intent::Window { action: WindowAction::Resize, direction: Direction::Down, count }),
			Key::Press('<') => intents.push(Intent::Window { action: WindowAction::Resize, direction: Direction::Left, count }),
			Key::Press('>') => intents.push(Intent::Window { action: WindowAction::Resize, direction: Direction::Right, count }),
			Key::Press('=') => intents.push(Intent::Window { action: WindowAction::Resize, direction: Direction::FirstWord, count: 0 }),

			Key::Press('r') => intents.push(Intent::Window { action: WindowAction::Rotate, direction: Direction::Down, count }),
			Key::Press('R') => intents.push(Intent::Window { action: WindowAction::Rotate, direction: Direction::Up, count }),

			// Zoom toggle has no direction or count of its own; `Focus` with
			// neither is unambiguous since every other Focus variant sets at
			// least one of them.
			Key::Press('z') => intents.push(Intent::Focus { target: FocusTarget::Window, direction: None, count: None }),

			Key::Control('c') | Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {}
			other => {
				tracing::trace!(?other, "unhandled key in WINCMD mode");
				intents.push(Intent::Warn(format!("Not yet implemented in WINCMD mode: {}", super::normal::describe_key(other))));
			}
		}

		self.reset_params();
		self.state = ViState::Normal;
		intents
	}

	pub(crate) fn handle_charreplace(&mut self, key: Key) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Press(ch) => {
				let register = self.take_register();
				let count = self.effective_count();
				self.reset_params();
				let motion = Motion::new(MovementKind::Char, Direction::Right).with_count(count).with_register(register);
				intents.push(Intent::Replace { ch, typing: false, motion });
				self.checkpoint_pending = true;
			}
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {
				self.reset_params();
			}
			other => {
				tracing::trace!(?other, "expected a replacement character");
				intents.push(Intent::Warn(format!("Not a character: {}", super::normal::describe_key(other))));
				self.reset_params();
			}
		}
		self.state = ViState::Normal;
		intents
	}

	/// `^R` in INSERT/REPLACE: next key names a register whose contents are
	/// typed in verbatim, returning to whichever mode requested the paste.
	pub(crate) fn handle_pending_paste(&mut self, key: Key, ret: PasteReturn) -> Vec<Intent> {
		let mut intents = Vec::new();
		match key {
			Key::Press(ch) if RegisterName::parse(ch).is_some() => {
				let register = RegisterName::parse(ch).unwrap();
				intents.push(Intent::Paste { direction: PasteDirection::Before, register, count: 1 });
				self.checkpoint_pending = true;
			}
			Key::Control('[') | Key::Special(SpecialKey::Escape, _) => {}
			other => {
				tracing::trace!(?other, "invalid register name for ^R paste");
				intents.push(Intent::Warn("Not a valid register name".to_string()));
			}
		}
		self.state = match ret {
			PasteReturn::Insert => ViState::Insert,
			PasteReturn::Replace => ViState::Replace,
		};
		intents
	}
}
