//! The external render/input collaborator: raw-mode lifecycle, crossterm
//! key translation into [`mm_primitives::Key`], and the ratatui draw pass.
//!
//! Nothing here ever outlives a single call from `main`'s event loop — it
//! only ever observes a snapshot of [`Core`]'s state, never drives it.

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use mm_primitives::{Key, Modifiers, SpecialKey};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::Core;

pub type Backend = CrosstermBackend<Stdout>;

pub fn init() -> io::Result<Terminal<Backend>> {
	enable_raw_mode()?;
	execute!(io::stdout(), EnterAlternateScreen)?;
	Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
	disable_raw_mode()?;
	execute!(io::stdout(), LeaveAlternateScreen)?;
	Ok(())
}

/// Reads the next terminal event, blocking. Returns `None` for anything
/// that isn't a key press (mouse events, bracketed-paste chunks the
/// keymap doesn't model, spurious release events on platforms that
/// report them).
pub fn next_key() -> io::Result<Option<Key>> {
	match event::read()? {
		Event::Key(key) if key.kind != KeyEventKind::Release => Ok(translate_key(key)),
		Event::Resize(_, _) => Ok(None),
		_ => Ok(None),
	}
}

pub fn poll(timeout: std::time::Duration) -> io::Result<bool> {
	event::poll(timeout)
}

fn translate_key(event: event::KeyEvent) -> Option<Key> {
	let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
	let shift = event.modifiers.contains(KeyModifiers::SHIFT);
	let alt = event.modifiers.contains(KeyModifiers::ALT);

	let mut mods = Modifiers::empty();
	if shift {
		mods |= Modifiers::SHIFT;
	}
	if alt {
		mods |= Modifiers::ALT;
	}

	match event.code {
		KeyCode::Char(ch) if ctrl => Some(Key::Control(ch.to_ascii_lowercase())),
		KeyCode::Char(ch) => Some(Key::Press(ch)),
		KeyCode::Up => Some(Key::Special(SpecialKey::Up, mods)),
		KeyCode::Down => Some(Key::Special(SpecialKey::Down, mods)),
		KeyCode::Left => Some(Key::Special(SpecialKey::Left, mods)),
		KeyCode::Right => Some(Key::Special(SpecialKey::Right, mods)),
		KeyCode::Home => Some(Key::Special(SpecialKey::Home, mods)),
		KeyCode::End => Some(Key::Special(SpecialKey::End, mods)),
		KeyCode::PageUp => Some(Key::Special(SpecialKey::PageUp, mods)),
		KeyCode::PageDown => Some(Key::Special(SpecialKey::PageDown, mods)),
		KeyCode::Delete => Some(Key::Special(SpecialKey::Delete, mods)),
		KeyCode::Backspace => Some(Key::Special(SpecialKey::Backspace, mods)),
		KeyCode::Tab => Some(Key::Special(SpecialKey::Tab, mods)),
		KeyCode::BackTab => Some(Key::Special(SpecialKey::Tab, mods | Modifiers::SHIFT)),
		KeyCode::Enter => Some(Key::Special(SpecialKey::Enter, mods)),
		KeyCode::Esc => Some(Key::Special(SpecialKey::Escape, mods)),
		_ => None,
	}
}

/// Draws one frame from a snapshot of `core`'s state: each tiled pane (or
/// the single zoomed one), then the status/command line.
pub fn draw(frame: &mut ratatui::Frame, core: &mut Core) {
	let area = frame.area();
	let [panes_area, bottom_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

	if core.window().is_zoomed() {
		let index = core.window().focused_index();
		draw_pane(frame, panes_area, core, index);
	} else {
		let heights: Vec<Constraint> =
			core.window().panes().iter().map(|slot| slot.height.map(Constraint::Length).unwrap_or(Constraint::Fill(1))).collect();
		let chunks = Layout::vertical(heights).split(panes_area);
		for (i, chunk) in chunks.iter().enumerate() {
			draw_pane(frame, *chunk, core, i);
		}
	}

	let bottom_line = if core.is_command_focused() {
		format!(":{}", core.command_bar().value())
	} else {
		core.status().render()
	};
	frame.render_widget(Paragraph::new(bottom_line).style(Style::default().add_modifier(Modifier::BOLD)), bottom_area);
}

fn draw_pane(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, core: &mut Core, index: usize) {
	let Some(slot) = core.window().panes().get(index) else { return };
	let view = slot.pane.current();
	let room = view.room.clone();
	let short_name = view.short_name.clone();
	let input_value = view.buffer.value().to_string();
	let focused = index == core.window().focused_index();

	let [log_area, input_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

	let messages = core.messages_for(&room);
	let lines: Vec<Line> = messages.iter().map(|m| Line::from(format!("{}: {}", m.speaker.display_name, m.text))).collect();
	let border = if focused { Style::default().add_modifier(Modifier::BOLD) } else { Style::default() };
	frame.render_widget(Paragraph::new(lines).block(Block::default().borders(Borders::TOP).title(short_name).border_style(border)), log_area);
	frame.render_widget(Paragraph::new(input_value), input_area);
}
