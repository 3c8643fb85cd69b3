//! The single-line editable buffer behind a chat input or the command bar.
//!
//! [`TextBuffer`] owns the value, cursor, undo history and completion ring,
//! and exposes one method per mutating operation named in the input FSMs'
//! vocabulary (`edit`, `type_char`, `replace`, `erase`, `paste`, `undo`,
//! `redo`, `complete`, `clamp`, `checkpoint`). The host binary is the thing
//! that reads `mm_input::Intent`s and calls the matching method — this crate
//! never depends on a concrete input FSM, only on the plain data types
//! (`ActionKind`, `Motion`) both sides share.

mod completion;
mod motion;
mod range;
mod word;

use mm_input::{CompleteDirection, PasteDirection};
use mm_primitives::{ActionKind, Cursor, HistList, Motion, RegisterName};
use mm_registers::RegisterStore;

pub use completion::Completer;

/// Default undo depth. Generous for a chat input line — the teacher's own
/// editor history caps are sized per-document rather than per-keystroke, but
/// a single-line buffer's snapshots are cheap enough that there's no reason
/// to be stingy.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

#[derive(Debug, Clone)]
pub struct TextBuffer {
	value: String,
	cursor: Cursor,
	start: Cursor,
	highlight_anchor: Option<Cursor>,
	history: HistList<String>,
	prev: String,
	completion: completion::CompletionState,
	visible_width: usize,
}

impl TextBuffer {
	pub fn new(visible_width: usize) -> Self {
		Self::with_capacity(visible_width, DEFAULT_HISTORY_CAPACITY)
	}

	pub fn with_capacity(visible_width: usize, history_capacity: usize) -> Self {
		Self {
			value: String::new(),
			cursor: Cursor::default(),
			start: Cursor::default(),
			highlight_anchor: None,
			history: HistList::new(String::new(), history_capacity),
			prev: String::new(),
			completion: completion::CompletionState::default(),
			visible_width,
		}
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	pub fn start(&self) -> Cursor {
		self.start
	}

	pub fn highlight_anchor(&self) -> Option<Cursor> {
		self.highlight_anchor
	}

	pub fn len_chars(&self) -> usize {
		self.value.chars().count()
	}

	pub fn set_highlight_anchor(&mut self) {
		self.highlight_anchor = Some(self.cursor);
	}

	pub fn clear_highlight_anchor(&mut self) {
		self.highlight_anchor = None;
	}

	fn chars(&self) -> Vec<char> {
		self.value.chars().collect()
	}

	/// Resolves `motion` without applying anything — exposed for callers
	/// that only need the target column (e.g. rendering a pending search
	/// preview).
	pub fn resolve_motion(&self, motion: &Motion) -> Option<usize> {
		let anchor = self.highlight_anchor.map(|c| c.x);
		motion::resolve(&self.chars(), self.cursor.x, anchor, motion)
	}

	/// Applies `move`, `highlight`, `delete`, `yank`, `togglecase`,
	/// `uppercase` or `lowercase`. Returns a warning message on a failed
	/// motion (`OutOfRangeMotion`); `Paste`/`Erase`/`Replace` have their own
	/// dedicated methods since their intents carry extra payload.
	pub fn edit(&mut self, action: ActionKind, motion: Motion, registers: &mut RegisterStore) -> Option<String> {
		self.completion.reset();
		let chars = self.chars();
		let anchor = self.highlight_anchor.map(|c| c.x);
		let nc = motion::resolve(&chars, self.cursor.x, anchor, &motion)?;

		match action {
			ActionKind::Move | ActionKind::Highlight => {
				self.cursor.x = nc;
				None
			}
			ActionKind::Delete | ActionKind::Yank => {
				let range = self.derive_range(&chars, nc, &motion);
				let text: String = chars[range.start..range.end].iter().collect();
				let write_action = if action == ActionKind::Delete { ActionKind::Delete } else { ActionKind::Yank };
				registers.update_register(write_action, motion.register, &text);
				if action == ActionKind::Delete {
					self.splice(range.start, range.end, "");
				}
				self.cursor.x = range.start;
				None
			}
			ActionKind::ToggleCase | ActionKind::Uppercase | ActionKind::Lowercase => {
				let range = self.derive_range(&chars, nc, &motion);
				self.transform_case(action, range.start, range.end);
				None
			}
			ActionKind::Paste | ActionKind::Erase | ActionKind::Replace => {
				unreachable!("Paste/Erase/Replace are applied via their own methods, not edit()")
			}
		}
	}

	fn derive_range(&self, chars: &[char], nc: usize, motion: &Motion) -> range::CharRange {
		if range::is_whole_line(motion) { range::whole_line(chars.len()) } else { range::derive(self.cursor.x, nc, motion) }
	}

	/// `type(ch)`: inserts a single character and advances the cursor.
	pub fn type_char(&mut self, ch: char) {
		self.completion.reset();
		self.splice(self.cursor.x, self.cursor.x, &ch.to_string());
		self.cursor.x += 1;
	}

	/// `replace(ch, typing, motion)`. `typing=true` is REPLACE-mode typing
	/// (one character per keystroke, always writes at least one character
	/// even at end-of-line); `typing=false` is `r`/visual-replace, which
	/// overwrites the whole resolved range and no-ops if it's short of
	/// `motion.count`.
	pub fn replace(&mut self, ch: char, typing: bool, motion: Motion) {
		self.completion.reset();
		if typing {
			let len = self.len_chars();
			if self.cursor.x >= len {
				self.splice(self.cursor.x, self.cursor.x, &ch.to_string());
			} else {
				self.splice(self.cursor.x, self.cursor.x + 1, &ch.to_string());
			}
			self.cursor.x += 1;
			return;
		}

		let chars = self.chars();
		let anchor = self.highlight_anchor.map(|c| c.x);
		let Some(nc) = motion::resolve(&chars, self.cursor.x, anchor, &motion) else { return };
		let range = self.derive_range(&chars, nc, &motion);
		let length = range.end - range.start;
		if (length as u32) < motion.count {
			return;
		}
		let replacement: String = std::iter::repeat_n(ch, length).collect();
		self.splice(range.start, range.end, &replacement);
		self.cursor.x = range.start;
	}

	/// Backspace in REPLACE mode: restores characters from the last
	/// checkpoint rather than just deleting them, since REPLACE overwrote
	/// them in place.
	pub fn erase(&mut self, motion: Motion) {
		self.completion.reset();
		let chars = self.chars();
		let anchor = self.highlight_anchor.map(|c| c.x);
		let Some(nc) = motion::resolve(&chars, self.cursor.x, anchor, &motion) else { return };
		let range = range::derive(self.cursor.x, nc, &motion);
		let original: Vec<char> = self.history.current().chars().collect();

		let mut new_chars = chars;
		for i in (range.start..range.end).rev() {
			match original.get(i) {
				Some(&orig) => new_chars[i] = orig,
				None => {
					new_chars.remove(i);
				}
			}
		}
		self.value = new_chars.into_iter().collect();
		self.cursor.x = range.start;
	}

	/// `paste(direction, register, count)`. A blackhole paste is a silent
	/// no-op; an empty register returns a warning message.
	pub fn paste(&mut self, direction: PasteDirection, register: RegisterName, count: u32, registers: &RegisterStore) -> Option<String> {
		if register.is_blackhole() {
			return None;
		}
		let Some(content) = registers.get(register) else {
			return Some(format!("Nothing in register {register}"));
		};
		self.completion.reset();
		let text = content.repeat(count.max(1) as usize);
		let len = self.len_chars();
		let insert_at = match direction {
			PasteDirection::Before => self.cursor.x,
			PasteDirection::After => (self.cursor.x + 1).min(len),
		};
		self.splice(insert_at, insert_at, &text);
		let span = text.chars().count();
		self.cursor.x = match direction {
			PasteDirection::Before => (insert_at + span).saturating_sub(1),
			PasteDirection::After => insert_at + span.saturating_sub(1),
		};
		None
	}

	/// Jumps the cursor directly to `x`, clamped into `[0, len]`, and
	/// rescrolls. Used by mark/linejump/charjump intents, which name an
	/// absolute position rather than a relative motion.
	pub fn goto(&mut self, x: usize) {
		self.completion.reset();
		self.cursor.x = x.min(self.len_chars());
		self.rescroll();
	}

	/// On exit from INSERT/REPLACE/VISUAL: clamps the cursor back into
	/// NORMAL's `[0, len-1]` range and drops the highlight anchor.
	pub fn clamp(&mut self) {
		let len = self.len_chars();
		if len == 0 {
			self.cursor.x = 0;
		} else if self.cursor.x >= len {
			self.cursor.x = len - 1;
		}
		self.highlight_anchor = None;
		self.rescroll();
	}

	/// Appends to history iff the value changed since the last checkpoint.
	pub fn checkpoint(&mut self) {
		if self.value != self.prev {
			self.history.append(self.value.clone());
			self.prev = self.value.clone();
			tracing::trace!(len = self.value.chars().count(), "checkpoint recorded");
		}
	}

	pub fn undo(&mut self, count: u32) {
		self.value = self.history.prev(count as usize).clone();
		self.prev = self.value.clone();
		self.clamp();
	}

	pub fn redo(&mut self, count: u32) {
		self.value = self.history.next(count as usize).clone();
		self.prev = self.value.clone();
		self.clamp();
	}

	pub fn complete(&mut self, direction: CompleteDirection, completer: &dyn Completer) {
		let advance = self.completion.advance(&self.value, self.cursor.x, direction, completer);
		self.value = advance.value;
		self.cursor.x = advance.cursor;
	}

	fn transform_case(&mut self, action: ActionKind, start: usize, end: usize) {
		let mut chars = self.chars();
		for c in &mut chars[start..end] {
			*c = match action {
				ActionKind::ToggleCase => {
					if c.is_uppercase() {
						c.to_ascii_lowercase()
					} else {
						c.to_ascii_uppercase()
					}
				}
				ActionKind::Uppercase => c.to_ascii_uppercase(),
				ActionKind::Lowercase => c.to_ascii_lowercase(),
				_ => *c,
			};
		}
		self.value = chars.into_iter().collect();
	}

	fn splice(&mut self, start: usize, end: usize, replacement: &str) {
		let mut chars = self.chars();
		chars.splice(start..end, replacement.chars());
		self.value = chars.into_iter().collect();
	}

	fn rescroll(&mut self) {
		if self.cursor.x < self.start.x {
			self.start.x = self.cursor.x;
		} else if self.cursor.x.saturating_sub(self.start.x) >= self.visible_width {
			self.start.x = self.cursor.x + 1 - self.visible_width;
		}
	}
}

#[cfg(test)]
mod tests {
	use mm_primitives::{Direction, MovementKind};

	use super::*;

	fn buf_with(text: &str) -> TextBuffer {
		let mut b = TextBuffer::new(40);
		for ch in text.chars() {
			b.type_char(ch);
		}
		b
	}

	#[test]
	fn typing_inserts_and_advances_cursor() {
		let b = buf_with("hi");
		assert_eq!(b.value(), "hi");
		assert_eq!(b.cursor().x, 2);
	}

	#[test]
	fn delete_writes_to_register_and_moves_cursor_to_start() {
		let mut b = buf_with("hello world");
		b.cursor.x = 0;
		let mut registers = RegisterStore::new();
		let motion = Motion::new(MovementKind::WordBegin, Direction::Right).with_count(1);
		b.edit(ActionKind::Delete, motion, &mut registers).unwrap_or_default();
		assert_eq!(b.value(), "world");
		assert_eq!(b.cursor().x, 0);
		assert_eq!(registers.get(RegisterName::UNNAMED), Some("hello "));
	}

	#[test]
	fn undo_restores_the_pre_delete_value() {
		let mut b = buf_with("hello world");
		b.checkpoint();
		b.cursor.x = 0;
		let mut registers = RegisterStore::new();
		b.edit(ActionKind::Delete, Motion::new(MovementKind::WordBegin, Direction::Right).with_count(1), &mut registers);
		b.checkpoint();
		b.undo(1);
		assert_eq!(b.value(), "hello world");
	}

	#[test]
	fn redo_after_undo_is_the_identity() {
		let mut b = buf_with("ab");
		b.checkpoint();
		let before = b.value().to_string();
		b.type_char('c');
		b.checkpoint();
		b.undo(1);
		b.redo(1);
		assert_eq!(b.value(), format!("{before}c"));
	}

	#[test]
	fn yank_then_paste_before_inserts_at_cursor() {
		let mut b = buf_with("world");
		let mut registers = RegisterStore::new();
		b.cursor.x = 0;
		b.edit(ActionKind::Yank, Motion::new(MovementKind::WordBegin, Direction::Right).with_count(1), &mut registers);
		assert_eq!(b.cursor().x, 0);
		b.paste(PasteDirection::Before, RegisterName::UNNAMED, 1, &registers);
		assert_eq!(b.value(), "worldworld");
	}

	#[test]
	fn paste_from_an_empty_register_warns() {
		let mut b = buf_with("hi");
		let registers = RegisterStore::new();
		let warning = b.paste(PasteDirection::Before, RegisterName::parse('z').unwrap(), 1, &registers);
		assert_eq!(warning, Some("Nothing in register z".to_string()));
		assert_eq!(b.value(), "hi");
	}

	#[test]
	fn paste_from_blackhole_is_always_a_silent_noop() {
		let mut b = buf_with("hi");
		let registers = RegisterStore::new();
		let warning = b.paste(PasteDirection::Before, RegisterName::BLACKHOLE, 1, &registers);
		assert_eq!(warning, None);
		assert_eq!(b.value(), "hi");
	}

	#[test]
	fn goto_clamps_to_the_end_of_the_line() {
		let mut b = buf_with("abc");
		b.goto(99);
		assert_eq!(b.cursor().x, 3);
		b.goto(1);
		assert_eq!(b.cursor().x, 1);
	}

	#[test]
	fn clamp_pulls_cursor_back_from_end_of_line() {
		let mut b = buf_with("abc");
		b.cursor.x = 3;
		b.clamp();
		assert_eq!(b.cursor().x, 2);
	}

	#[test]
	fn clamp_on_empty_buffer_is_zero() {
		let mut b = TextBuffer::new(40);
		b.cursor.x = 0;
		b.clamp();
		assert_eq!(b.cursor().x, 0);
	}

	#[test]
	fn togglecase_flips_the_range() {
		let mut b = buf_with("abc");
		b.cursor.x = 0;
		let mut registers = RegisterStore::new();
		b.edit(ActionKind::ToggleCase, Motion::new(mm_primitives::MovementKind::Char, Direction::Right).with_count(3), &mut registers);
		assert_eq!(b.value(), "ABC");
	}

	#[test]
	fn charreplace_noops_when_short_of_count() {
		let mut b = buf_with("ab");
		b.cursor.x = 0;
		let motion = Motion::new(MovementKind::Char, Direction::Right).with_count(5);
		b.replace('x', false, motion);
		assert_eq!(b.value(), "ab");
	}

	#[test]
	fn charreplace_overwrites_in_place() {
		let mut b = buf_with("abc");
		b.cursor.x = 0;
		let motion = Motion::new(MovementKind::Char, Direction::Right).with_count(2);
		b.replace('x', false, motion);
		assert_eq!(b.value(), "xxc");
		assert_eq!(b.cursor().x, 0);
	}

	#[test]
	fn typing_replace_writes_even_at_end_of_line() {
		let mut b = buf_with("ab");
		let motion = Motion::new(MovementKind::Char, Direction::Right).with_count(1);
		b.replace('z', true, motion);
		assert_eq!(b.value(), "abz");
		assert_eq!(b.cursor().x, 3);
	}
}
