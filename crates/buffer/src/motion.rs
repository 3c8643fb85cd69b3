//! Motion resolution: turns a [`Motion`] plus the buffer's current cursor
//! into a target column, or `None` when the motion can't complete (only
//! possible for `to-char`/`till-char` searches).

use mm_primitives::{Direction, Motion, MovementKind};

use crate::word;

/// Resolves `motion` against `chars`/`cursor_x`/`highlight_anchor`. Returns
/// `None` only for a failed character search — every other movement kind
/// always has a landing spot.
pub(crate) fn resolve(chars: &[char], cursor_x: usize, highlight_anchor: Option<usize>, motion: &Motion) -> Option<usize> {
	let len = chars.len();
	match motion.movement {
		MovementKind::Char => Some(match motion.direction {
			Direction::Right => cursor_x.saturating_add(motion.count as usize).min(len),
			_ => cursor_x.saturating_sub(motion.count as usize),
		}),
		MovementKind::Line => Some(match motion.direction {
			Direction::Right => len,
			Direction::FirstWord => first_non_space(chars),
			_ => 0,
		}),
		MovementKind::WordBegin => Some(match motion.direction {
			Direction::Left => word::word_begin_backward(chars, cursor_x, motion.count),
			_ => word::word_begin_forward(chars, cursor_x, motion.count),
		}),
		MovementKind::WordEnd => Some(word::word_end_forward(chars, cursor_x, motion.count)),
		MovementKind::ToChar => to_char(chars, cursor_x, motion),
		MovementKind::TillChar => till_char(chars, cursor_x, motion),
		MovementKind::Highlight => Some(highlight_anchor.unwrap_or(cursor_x)),
	}
}

fn first_non_space(chars: &[char]) -> usize {
	chars.iter().position(|c| !c.is_whitespace()).unwrap_or(0)
}

fn to_char(chars: &[char], cursor_x: usize, motion: &Motion) -> Option<usize> {
	let needle = motion.character?;
	match motion.direction {
		Direction::Right => nth_match_forward(chars, cursor_x + 1, needle, motion.count),
		_ => nth_match_backward(chars, cursor_x, needle, motion.count),
	}
}

fn till_char(chars: &[char], cursor_x: usize, motion: &Motion) -> Option<usize> {
	let needle = motion.character?;
	match motion.direction {
		Direction::Right => {
			let hit = nth_match_forward(chars, cursor_x + 1, needle, motion.count)?;
			Some(hit.saturating_sub(1))
		}
		_ => {
			let hit = nth_match_backward(chars, cursor_x, needle, motion.count)?;
			Some((hit + 1).min(chars.len()))
		}
	}
}

fn nth_match_forward(chars: &[char], from: usize, needle: char, count: u32) -> Option<usize> {
	let mut remaining = count;
	for (offset, &c) in chars.get(from..)?.iter().enumerate() {
		if c == needle {
			remaining -= 1;
			if remaining == 0 {
				return Some(from + offset);
			}
		}
	}
	None
}

fn nth_match_backward(chars: &[char], before: usize, needle: char, count: u32) -> Option<usize> {
	let mut remaining = count;
	for offset in 0..before {
		let idx = before - 1 - offset;
		if chars[idx] == needle {
			remaining -= 1;
			if remaining == 0 {
				return Some(idx);
			}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use mm_primitives::RegisterName;

	use super::*;

	fn motion(movement: MovementKind, direction: Direction) -> Motion {
		Motion { movement, direction, character: None, count: 1, register: RegisterName::UNNAMED }
	}

	#[test]
	fn char_right_saturates_at_len() {
		let chars: Vec<char> = "ab".chars().collect();
		let m = Motion { count: 5, ..motion(MovementKind::Char, Direction::Right) };
		assert_eq!(resolve(&chars, 0, None, &m), Some(2));
	}

	#[test]
	fn to_char_finds_the_nth_match() {
		let chars: Vec<char> = "a.b.c".chars().collect();
		let m = Motion { character: Some('.'), count: 2, ..motion(MovementKind::ToChar, Direction::Right) };
		assert_eq!(resolve(&chars, 0, None, &m), Some(3));
	}

	#[test]
	fn to_char_fails_past_the_last_match() {
		let chars: Vec<char> = "a.b".chars().collect();
		let m = Motion { character: Some('.'), count: 2, ..motion(MovementKind::ToChar, Direction::Right) };
		assert_eq!(resolve(&chars, 0, None, &m), None);
	}

	#[test]
	fn till_char_lands_one_short() {
		let chars: Vec<char> = "a.b.c".chars().collect();
		let m = Motion { character: Some('.'), count: 1, ..motion(MovementKind::TillChar, Direction::Right) };
		assert_eq!(resolve(&chars, 0, None, &m), Some(0));
	}

	#[test]
	fn highlight_swaps_with_the_anchor() {
		let chars: Vec<char> = "hello".chars().collect();
		let m = motion(MovementKind::Highlight, Direction::Right);
		assert_eq!(resolve(&chars, 4, Some(1), &m), Some(1));
	}

	#[test]
	fn line_first_word_skips_leading_whitespace() {
		let chars: Vec<char> = "   hi".chars().collect();
		let m = motion(MovementKind::Line, Direction::FirstWord);
		assert_eq!(resolve(&chars, 4, None, &m), Some(3));
	}
}
