//! Tab-completion ring. The core stays decoupled from any concrete user or
//! room directory by taking the lookup as an injected trait object.

use mm_input::CompleteDirection;

/// Supplies completion candidates for a stem. Implemented externally (e.g.
/// by a room member list or a slash-command table); `mm-buffer` only knows
/// about the trait.
pub trait Completer {
	/// Returns candidate suffixes (not full replacement text) for `stem`.
	fn complete(&self, stem: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CompletionState {
	options: Vec<String>,
	/// `Some(options.len())` is the "no completion" ring position (original
	/// text). `None` means completion hasn't started yet.
	index: Option<usize>,
	stem_start: usize,
	original_text: String,
	original_cursor: usize,
}

pub(crate) struct Advance {
	pub value: String,
	pub cursor: usize,
}

impl CompletionState {
	pub(crate) fn is_active(&self) -> bool {
		self.index.is_some()
	}

	pub(crate) fn reset(&mut self) {
		*self = Self::default();
	}

	/// Steps the ring by one in `direction`, starting a new completion (via
	/// `completer` and the word-stem to the left of `cursor`) if one isn't
	/// already in progress.
	pub(crate) fn advance(&mut self, value: &str, cursor: usize, direction: CompleteDirection, completer: &dyn Completer) -> Advance {
		if self.index.is_none() {
			let chars: Vec<char> = value.chars().collect();
			let mut stem_start = cursor;
			while stem_start > 0 && is_word_char(chars[stem_start - 1]) {
				stem_start -= 1;
			}
			self.stem_start = stem_start;
			self.original_text = value.to_string();
			self.original_cursor = cursor;
			self.options = completer.complete(&value[byte_offset(value, stem_start)..byte_offset(value, cursor)]);
			self.index = Some(self.options.len());
		}

		let modulus = self.options.len() + 1;
		let current = self.index.unwrap_or(self.options.len());
		self.index = Some(match direction {
			CompleteDirection::Next => (current + 1) % modulus,
			CompleteDirection::Previous => (current + modulus - 1) % modulus,
		});

		self.render()
	}

	fn render(&self) -> Advance {
		let idx = self.index.unwrap_or(self.options.len());
		if idx == self.options.len() {
			return Advance { value: self.original_text.clone(), cursor: self.original_cursor };
		}
		let stem = &self.original_text[byte_offset(&self.original_text, self.stem_start)..byte_offset(&self.original_text, self.original_cursor)];
		let candidate = format!("{stem}{}", self.options[idx]);
		let prefix = &self.original_text[..byte_offset(&self.original_text, self.stem_start)];
		let suffix = &self.original_text[byte_offset(&self.original_text, self.original_cursor)..];
		let value = format!("{prefix}{candidate}{suffix}");
		let cursor = self.stem_start + candidate.chars().count();
		Advance { value, cursor }
	}
}

fn is_word_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '_'
}

fn byte_offset(s: &str, char_index: usize) -> usize {
	s.char_indices().nth(char_index).map(|(b, _)| b).unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(Vec<&'static str>);
	impl Completer for Fixed {
		fn complete(&self, _stem: &str) -> Vec<String> {
			self.0.iter().map(|s| s.to_string()).collect()
		}
	}

	#[test]
	fn advancing_past_the_end_returns_to_original_text() {
		let mut state = CompletionState::default();
		let completer = Fixed(vec!["lice", "bert"]);
		let first = state.advance("hi a", 4, CompleteDirection::Next, &completer);
		assert_eq!(first.value, "hi alice");
		let second = state.advance("hi alice", 8, CompleteDirection::Next, &completer);
		assert_eq!(second.value, "hi abert");
		let third = state.advance("hi abert", 8, CompleteDirection::Next, &completer);
		assert_eq!(third.value, "hi a");
	}

	#[test]
	fn previous_steps_backward_through_the_ring() {
		let mut state = CompletionState::default();
		let completer = Fixed(vec!["lice", "bert"]);
		state.advance("hi a", 4, CompleteDirection::Next, &completer);
		let back = state.advance("hi alice", 8, CompleteDirection::Previous, &completer);
		assert_eq!(back.value, "hi a");
	}
}
