//! The `Core`: wires the two input FSMs, the buffer/window/register layer
//! and the backend together, dispatching every `Intent` to its consumer.
//!
//! This is the direct-method-dispatch handler object the teacher's own
//! design notes call for in place of a string-keyed event emitter — one
//! `match` over the intent union, each arm a plain method call.

use std::collections::HashMap;

use mm_backend::{Backend, BackendError, Message, Room};
use mm_buffer::{Completer, TextBuffer};
use mm_input::{CompleteDirection, FocusTarget, Intent, Mode, SimpleInputFsm, ViInputFsm, WindowAction};
use mm_primitives::{ActionKind, Direction, Key, SpecialKey};
use mm_registers::RegisterStore;
use mm_window::{JumpDirection, Pane, RoomHandle, StatusLine, View, Window};

use crate::command::{self, CommandOutcome};

/// What the binary's event loop must do on the host's behalf — things the
/// terminal-agnostic core can't perform itself (matching the teacher's
/// convention of returning requests to an outer host loop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
	SpawnShell,
	Suspend,
	Quit,
	QuitAll,
	ForceRedraw,
}

/// Which input surface currently owns keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
	Window,
	Command,
}

/// A completer with no candidates. A real deployment would inject one
/// backed by the room's member list; that directory isn't modeled on this
/// side of the backend boundary, so completion in this crate degrades to
/// "no suggestions" rather than fabricating one.
struct NoCandidates;

impl Completer for NoCandidates {
	fn complete(&self, _stem: &str) -> Vec<String> {
		Vec::new()
	}
}

pub struct Core {
	vi_fsm: ViInputFsm,
	simple_fsm: SimpleInputFsm,
	focus: Focus,
	window: Window,
	registers: RegisterStore,
	status: StatusLine,
	command_bar: TextBuffer,
	backend: Box<dyn Backend>,
	rooms: HashMap<String, Box<dyn Room>>,
	marks: HashMap<char, usize>,
	scroll_offset: usize,
	visible_width: usize,
}

impl Core {
	pub fn new(mut backend: Box<dyn Backend>, lobby_name: &str, visible_width: usize, total_height: u16) -> Self {
		let mut registers = RegisterStore::new();
		let view = View::new(RoomHandle(lobby_name.to_string()), lobby_name, visible_width);
		let pane = Pane::new(view, 100, &mut registers);
		let mut rooms = HashMap::new();
		if let Some(room) = backend.get_room_by_name(lobby_name) {
			rooms.insert(lobby_name.to_string(), room);
		}

		Self {
			vi_fsm: ViInputFsm::new(),
			simple_fsm: SimpleInputFsm::new(),
			focus: Focus::Window,
			window: Window::new(pane, total_height),
			registers,
			status: StatusLine::new(),
			command_bar: TextBuffer::new(visible_width),
			backend,
			rooms,
			marks: HashMap::new(),
			scroll_offset: 0,
			visible_width,
		}
	}

	pub fn window(&self) -> &Window {
		&self.window
	}

	pub fn status(&self) -> &StatusLine {
		&self.status
	}

	pub fn command_bar(&self) -> &TextBuffer {
		&self.command_bar
	}

	pub fn is_command_focused(&self) -> bool {
		self.focus == Focus::Command
	}

	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}

	/// Replays the currently focused room's known messages, for rendering.
	pub fn current_room_messages(&mut self) -> Vec<Message> {
		let room = self.window.focused().current().room.clone();
		self.messages_for(&room)
	}

	/// Replays `room`'s known messages, for rendering any pane (not just the
	/// focused one).
	pub fn messages_for(&mut self, room: &RoomHandle) -> Vec<Message> {
		let Some(room) = self.room_for(&room.0, false) else {
			return Vec::new();
		};
		let mut out = Vec::new();
		room.for_each_message(&mut |msg| out.push(msg.clone()));
		out
	}

	fn room_for(&mut self, name: &str, direct: bool) -> Option<&mut Box<dyn Room>> {
		if !self.rooms.contains_key(name) {
			let room = if direct { self.backend.get_direct_by_name(name) } else { self.backend.get_room_by_name(name) };
			let room = room?;
			self.rooms.insert(name.to_string(), room);
		}
		self.rooms.get_mut(name)
	}

	/// Processes one raw key event, returning whatever host actions it
	/// produced (usually none).
	pub fn handle_key(&mut self, key: Key) -> Vec<HostAction> {
		if self.focus == Focus::Window && is_enter(key) && self.vi_fsm.mode() == Mode::Normal {
			self.submit_chat_message();
			return Vec::new();
		}

		let intents = match self.focus {
			Focus::Window => self.vi_fsm.handle_key(key),
			Focus::Command => self.simple_fsm.handle_key(key),
		};

		let mut actions = Vec::new();
		for intent in intents {
			if let Some(action) = self.dispatch(intent) {
				actions.push(action);
			}
		}
		actions
	}

	fn submit_chat_message(&mut self) {
		let view = self.window.focused_mut().current_mut();
		let text = view.buffer.value().to_string();
		if text.is_empty() {
			return;
		}
		let room_name = view.room.0.clone();
		view.buffer = TextBuffer::new(self.visible_width);

		let Some(room) = self.room_for(&room_name, false) else {
			self.status.show_message(format!("No such room: {room_name}"));
			return;
		};
		room.send_message(&text, Box::new(report_send_failure));
	}

	fn dispatch(&mut self, intent: Intent) -> Option<HostAction> {
		match intent {
			Intent::Clamp => {
				self.active_buffer_mut().clamp();
				None
			}
			Intent::Checkpoint => {
				self.active_buffer_mut().checkpoint();
				None
			}
			Intent::Edit(ActionKind::Erase, motion) => {
				self.active_buffer_mut().erase(motion);
				None
			}
			Intent::Edit(action, motion) => {
				let warning = match self.focus {
					Focus::Window => self.window.focused_mut().current_mut().buffer.edit(action, motion, &mut self.registers),
					Focus::Command => self.command_bar.edit(action, motion, &mut self.registers),
				};
				if let Some(warning) = warning {
					self.status.show_message(warning);
				}
				None
			}
			Intent::Type(ch) => {
				self.active_buffer_mut().type_char(ch);
				None
			}
			Intent::Replace { ch, typing, motion } => {
				self.active_buffer_mut().replace(ch, typing, motion);
				None
			}
			Intent::Paste { direction, register, count } => {
				let warning = match self.focus {
					Focus::Window => self.window.focused_mut().current_mut().buffer.paste(direction, register, count, &self.registers),
					Focus::Command => self.command_bar.paste(direction, register, count, &self.registers),
				};
				if let Some(warning) = warning {
					self.status.show_message(warning);
				}
				None
			}
			Intent::Scroll { direction, kind, count } => {
				self.apply_scroll(direction, kind, count);
				None
			}
			Intent::Mark(ch) => {
				let x = self.active_buffer_mut().cursor().x;
				self.marks.insert(ch, x);
				None
			}
			Intent::LineJump(ch) | Intent::CharJump(ch) => {
				self.jump_to_mark(ch);
				None
			}
			Intent::Focus { target, direction, count } => self.apply_focus(target, direction, count),
			Intent::Window { action, direction, count } => {
				self.apply_window_action(action, direction, count);
				None
			}
			Intent::Submit => self.submit_command_bar(),
			Intent::Clear => {
				self.status.show_message(String::new());
				None
			}
			Intent::Suspend => Some(HostAction::Suspend),
			Intent::Refresh => Some(HostAction::ForceRedraw),
			Intent::Complete(direction) => {
				self.complete(direction);
				None
			}
			Intent::Undo(count) => {
				self.active_buffer_mut().undo(count);
				None
			}
			Intent::Redo(count) => {
				self.active_buffer_mut().redo(count);
				None
			}
			Intent::Warn(message) => {
				self.status.show_message(message);
				None
			}
			Intent::Switch => {
				self.focus = Focus::Window;
				self.command_bar = TextBuffer::new(self.visible_width);
				self.simple_fsm = SimpleInputFsm::new();
				None
			}
			Intent::ModeChanged(mode) => {
				match mode {
					Mode::Visual => self.active_buffer_mut().set_highlight_anchor(),
					Mode::Normal | Mode::Insert | Mode::Replace => self.active_buffer_mut().clear_highlight_anchor(),
				}
				self.status.on_mode_changed(mode);
				None
			}
		}
	}

	fn active_buffer_mut(&mut self) -> &mut TextBuffer {
		match self.focus {
			Focus::Window => &mut self.window.focused_mut().current_mut().buffer,
			Focus::Command => &mut self.command_bar,
		}
	}

	fn jump_to_mark(&mut self, ch: char) {
		match self.marks.get(&ch).copied() {
			Some(x) => self.active_buffer_mut().goto(x),
			None if ch.is_ascii_lowercase() => self.status.show_message("Mark not set"),
			None => self.status.show_message(format!("Unknown mark: {ch}")),
		}
	}

	fn apply_scroll(&mut self, direction: Direction, kind: mm_input::ScrollKind, count: u32) {
		use mm_input::ScrollKind as K;
		match kind {
			K::Top => self.scroll_offset = 0,
			K::Bottom => self.scroll_offset = usize::MAX,
			K::Screen | K::Line | K::Char => match direction {
				Direction::Up => self.scroll_offset = self.scroll_offset.saturating_add(count.max(1) as usize),
				Direction::Down => self.scroll_offset = self.scroll_offset.saturating_sub(count.max(1) as usize),
				_ => {}
			},
		}
	}

	fn apply_focus(&mut self, target: FocusTarget, direction: Option<Direction>, count: Option<u32>) -> Option<HostAction> {
		match target {
			FocusTarget::Command => {
				self.focus = Focus::Command;
				self.command_bar = TextBuffer::new(self.visible_width);
				self.simple_fsm = SimpleInputFsm::new();
				None
			}
			FocusTarget::Lobby => {
				self.join_room("lobby", false);
				None
			}
			FocusTarget::Window => {
				if let Some(warning) = self.window.focus(direction, count) {
					self.status.show_message(warning);
				}
				None
			}
			FocusTarget::History => {
				let jump_direction = match direction {
					Some(Direction::Left) | Some(Direction::Up) => JumpDirection::Previous,
					Some(Direction::Right) | Some(Direction::Down) => JumpDirection::Next,
					_ => return None,
				};
				self.window.focused_mut().focus_history(jump_direction, count.unwrap_or(1) as usize, &mut self.registers);
				None
			}
		}
	}

	fn apply_window_action(&mut self, action: WindowAction, direction: Direction, count: u32) {
		match action {
			WindowAction::Split => {
				if let Err(warning) = self.window.hsplit(None) {
					self.status.show_message(warning);
				}
			}
			WindowAction::Resize => match direction {
				Direction::Up => self.window.hresize(-(count.max(1) as i32)),
				Direction::Down => self.window.hresize(count.max(1) as i32),
				Direction::FirstWord => self.window.eresize(),
				Direction::Left | Direction::Right => self.status.show_message("Vertical splits not yet supported"),
			},
			WindowAction::Rotate => self.window.rotate(direction, count),
		}
	}

	fn complete(&mut self, direction: CompleteDirection) {
		let completer = NoCandidates;
		self.active_buffer_mut().complete(direction, &completer);
	}

	fn join_room(&mut self, name: &str, direct: bool) {
		if self.room_for(name, direct).is_none() {
			self.status.show_message(format!("No such room: {name}"));
			return;
		}
		let view = View::new(RoomHandle(name.to_string()), name, self.visible_width);
		self.window.focused_mut().focus_view(view, &mut self.registers);
	}

	fn submit_command_bar(&mut self) -> Option<HostAction> {
		let raw = self.command_bar.value().to_string();
		self.focus = Focus::Window;
		self.command_bar = TextBuffer::new(self.visible_width);
		self.simple_fsm = SimpleInputFsm::new();

		match command::dispatch(&raw, &mut self.registers) {
			Ok(outcome) => self.run_command(outcome),
			Err(message) => {
				self.status.show_message(message);
				None
			}
		}
	}

	fn run_command(&mut self, outcome: CommandOutcome) -> Option<HostAction> {
		match outcome {
			CommandOutcome::DirectMessage { user } => {
				self.join_room(&user, true);
				None
			}
			CommandOutcome::Join { room } => {
				self.join_room(&room, false);
				None
			}
			CommandOutcome::Split => {
				if let Err(warning) = self.window.hsplit(None) {
					self.status.show_message(warning);
				}
				None
			}
			CommandOutcome::VSplit => {
				if let Err(warning) = self.window.vsplit() {
					self.status.show_message(warning);
				}
				None
			}
			CommandOutcome::Quit => match self.window.close_focused() {
				Some(_) => Some(HostAction::Quit),
				None => None,
			},
			CommandOutcome::QuitAll => Some(HostAction::QuitAll),
			CommandOutcome::Shell => Some(HostAction::SpawnShell),
			CommandOutcome::Registers => {
				let dump = self.registers.dump_registers().into_iter().map(|(ch, v)| format!("{ch}={v}")).collect::<Vec<_>>().join(" ");
				self.status.show_message(dump);
				None
			}
			CommandOutcome::Help { topic } => {
				self.status.show_message(help_text(topic.as_deref()));
				None
			}
		}
	}
}

fn is_enter(key: Key) -> bool {
	matches!(key, Key::Control('m') | Key::Control('j') | Key::Special(SpecialKey::Enter, _))
}

fn report_send_failure(result: Result<(), BackendError>) {
	if let Err(err) = result {
		tracing::warn!(%err, "message send failed");
	}
}

fn help_text(topic: Option<&str>) -> String {
	match topic {
		None => "dm join split vsplit quit qall shell registers help".to_string(),
		Some(name) => format!(":{name}"),
	}
}

#[cfg(test)]
mod tests {
	use mm_backend::fake::InMemoryBackend;
	use mm_primitives::Key as K;
	use pretty_assertions::assert_eq;

	use super::*;

	fn core() -> Core {
		Core::new(Box::new(InMemoryBackend::new()), "lobby", 80, 20)
	}

	#[test]
	fn typing_in_insert_mode_lands_in_the_focused_buffer() {
		let mut core = core();
		core.handle_key(K::Press('i'));
		core.handle_key(K::Press('h'));
		core.handle_key(K::Press('i'));
		assert_eq!(core.window.focused().current().buffer.value(), "hi");
	}

	#[test]
	fn colon_switches_focus_to_the_command_bar() {
		let mut core = core();
		core.handle_key(K::Press(':'));
		assert!(core.is_command_focused());
	}

	#[test]
	fn enter_in_normal_mode_sends_and_clears_the_buffer() {
		let mut core = core();
		core.handle_key(K::Press('i'));
		for ch in "hello".chars() {
			core.handle_key(K::Press(ch));
		}
		core.handle_key(K::Control('['));
		core.handle_key(K::Control('m'));
		assert_eq!(core.window.focused().current().buffer.value(), "");
		assert_eq!(core.current_room_messages().last().map(|m| m.text.clone()), Some("hello".to_string()));
	}

	#[test]
	fn quit_command_on_the_only_pane_requests_process_exit() {
		let mut core = core();
		core.handle_key(K::Press(':'));
		for ch in "q".chars() {
			core.handle_key(K::Press(ch));
		}
		let actions = core.handle_key(K::Control('m'));
		assert_eq!(actions, vec![HostAction::Quit]);
	}

	#[test]
	fn split_command_grows_the_window() {
		let mut core = core();
		core.handle_key(K::Press(':'));
		for ch in "split".chars() {
			core.handle_key(K::Press(ch));
		}
		core.handle_key(K::Control('m'));
		assert_eq!(core.window().len(), 2);
	}

	#[test]
	fn setting_and_jumping_to_a_mark_moves_the_cursor() {
		let mut core = core();
		core.handle_key(K::Press('i'));
		for ch in "hello".chars() {
			core.handle_key(K::Press(ch));
		}
		core.handle_key(K::Control('['));
		core.handle_key(K::Press('0'));
		core.handle_key(K::Press('m'));
		core.handle_key(K::Press('a'));
		core.handle_key(K::Press('$'));
		core.handle_key(K::Press('`'));
		core.handle_key(K::Press('a'));
		assert_eq!(core.window.focused().current().buffer.cursor().x, 0);
	}
}
