//! Panes: a per-pane jump-list of views, with `%`/`#` register bookkeeping on
//! every focus change.

use mm_buffer::TextBuffer;
use mm_primitives::{HistList, RegisterName};
use mm_registers::RegisterStore;

/// Opaque reference to a chat room, owned by the backend adapter. `mm-window`
/// never dereferences it — only compares and displays it via `short_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomHandle(pub String);

/// The composition of a chat log handle and the text buffer bound to it.
#[derive(Debug, Clone)]
pub struct View {
	pub room: RoomHandle,
	pub short_name: String,
	pub buffer: TextBuffer,
}

impl View {
	pub fn new(room: RoomHandle, short_name: impl Into<String>, visible_width: usize) -> Self {
		Self { room, short_name: short_name.into(), buffer: TextBuffer::new(visible_width) }
	}
}

/// Which way `focus_history` steps the jump list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDirection {
	Next,
	Previous,
}

/// A tiled region of the window, holding a bounded navigation history of the
/// views it has shown.
#[derive(Debug, Clone)]
pub struct Pane {
	jump_list: HistList<View>,
}

impl Pane {
	/// Creates a pane on `initial`, appending it to the jump list and seeding
	/// `%` in `registers`.
	pub fn new(initial: View, max_size: usize, registers: &mut RegisterStore) -> Self {
		registers.set_special(RegisterName::CURRENT_BUFFER, initial.short_name.clone());
		Self { jump_list: HistList::new(initial, max_size) }
	}

	pub fn current(&self) -> &View {
		self.jump_list.current()
	}

	pub fn current_mut(&mut self) -> &mut View {
		self.jump_list.current_mut()
	}

	/// Opens `view` as a new jump-list entry and becomes current.
	pub fn focus_view(&mut self, view: View, registers: &mut RegisterStore) {
		let old = self.jump_list.current().short_name.clone();
		self.jump_list.append(view);
		registers.set_special(RegisterName::ALTERNATE_BUFFER, old);
		registers.set_special(RegisterName::CURRENT_BUFFER, self.jump_list.current().short_name.clone());
	}

	/// Steps the jump-list cursor and makes the landed-on view current.
	pub fn focus_history(&mut self, direction: JumpDirection, count: usize, registers: &mut RegisterStore) -> &View {
		let old = self.jump_list.current().short_name.clone();
		let landed = match direction {
			JumpDirection::Next => self.jump_list.next(count),
			JumpDirection::Previous => self.jump_list.prev(count),
		};
		registers.set_special(RegisterName::ALTERNATE_BUFFER, old);
		registers.set_special(RegisterName::CURRENT_BUFFER, landed.short_name.clone());
		self.jump_list.current()
	}

	/// Deep-copies the jump list and its cursor — used by `:split`, so the new
	/// pane starts on the same view without sharing buffer state.
	pub fn split_clone(&self) -> Self {
		Self { jump_list: self.jump_list.deep_clone() }
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn view(name: &str) -> View {
		View::new(RoomHandle(name.to_string()), name, 80)
	}

	#[test]
	fn new_pane_seeds_the_current_buffer_register() {
		let mut registers = RegisterStore::new();
		let pane = Pane::new(view("lobby"), 50, &mut registers);
		assert_eq!(pane.current().short_name, "lobby");
		assert_eq!(registers.get(RegisterName::CURRENT_BUFFER), Some("lobby"));
	}

	#[test]
	fn focus_view_updates_both_buffer_registers() {
		let mut registers = RegisterStore::new();
		let mut pane = Pane::new(view("lobby"), 50, &mut registers);
		pane.focus_view(view("#general"), &mut registers);
		assert_eq!(pane.current().short_name, "#general");
		assert_eq!(registers.get(RegisterName::CURRENT_BUFFER), Some("#general"));
		assert_eq!(registers.get(RegisterName::ALTERNATE_BUFFER), Some("lobby"));
	}

	#[test]
	fn focus_history_previous_then_next_round_trips() {
		let mut registers = RegisterStore::new();
		let mut pane = Pane::new(view("a"), 50, &mut registers);
		pane.focus_view(view("b"), &mut registers);
		pane.focus_view(view("c"), &mut registers);

		pane.focus_history(JumpDirection::Previous, 2, &mut registers);
		assert_eq!(pane.current().short_name, "a");

		pane.focus_history(JumpDirection::Next, 2, &mut registers);
		assert_eq!(pane.current().short_name, "c");
	}

	#[test]
	fn split_clone_is_independent_of_the_original() {
		let mut registers = RegisterStore::new();
		let mut pane = Pane::new(view("a"), 50, &mut registers);
		let mut clone = pane.split_clone();
		clone.focus_view(view("b"), &mut registers);
		assert_eq!(pane.current().short_name, "a");
		assert_eq!(clone.current().short_name, "b");
	}
}
