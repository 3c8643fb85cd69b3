//! The status line: either a transient message or the current mode banner.

use mm_input::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
	/// An arbitrary transient string, shown in bold.
	Message(String),
	/// `-- INSERT --` / `-- REPLACE --` / `-- VISUAL --`.
	Status(Mode),
}

impl Default for StatusLine {
	fn default() -> Self {
		Self::Message(String::new())
	}
}

impl StatusLine {
	pub fn new() -> Self {
		Self::default()
	}

	/// Follows the input FSM's mode-change notifications: NORMAL returns to a
	/// cleared message, everything else shows the mode banner.
	pub fn on_mode_changed(&mut self, mode: Mode) {
		*self = match mode {
			Mode::Normal => Self::Message(String::new()),
			other => Self::Status(other),
		};
	}

	pub fn show_message(&mut self, text: impl Into<String>) {
		*self = Self::Message(text.into());
	}

	pub fn render(&self) -> String {
		match self {
			Self::Message(text) => text.clone(),
			Self::Status(mode) => format!("-- {} --", mode_label(*mode)),
		}
	}
}

fn mode_label(mode: Mode) -> &'static str {
	match mode {
		Mode::Normal => "NORMAL",
		Mode::Insert => "INSERT",
		Mode::Replace => "REPLACE",
		Mode::Visual => "VISUAL",
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn entering_insert_shows_the_banner() {
		let mut status = StatusLine::new();
		status.on_mode_changed(Mode::Insert);
		assert_eq!(status.render(), "-- INSERT --");
	}

	#[test]
	fn returning_to_normal_clears_the_message() {
		let mut status = StatusLine::new();
		status.show_message("Nothing in register z");
		status.on_mode_changed(Mode::Normal);
		assert_eq!(status.render(), "");
	}

	#[test]
	fn a_message_is_shown_verbatim() {
		let mut status = StatusLine::new();
		status.show_message("Not enough room");
		assert_eq!(status.render(), "Not enough room");
	}
}
