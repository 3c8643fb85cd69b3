//! Range derivation: turns a resolved target column into the `[start, end)`
//! span an operator acts over.

use mm_primitives::{Direction, Motion, MovementKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CharRange {
	pub start: usize,
	pub end: usize,
}

/// `dd`/`yy`-style whole-line shortcut: the only case where the range is
/// known without resolving a motion at all.
pub(crate) fn is_whole_line(motion: &Motion) -> bool {
	motion.movement == MovementKind::Line && matches!(motion.direction, Direction::Up | Direction::Down)
}

pub(crate) fn whole_line(len: usize) -> CharRange {
	CharRange { start: 0, end: len }
}

/// Derives `[start, end)` from a resolved target `nc` relative to `cursor`.
pub(crate) fn derive(cursor: usize, nc: usize, motion: &Motion) -> CharRange {
	if nc <= cursor {
		let bump = motion.movement == MovementKind::Highlight;
		CharRange { start: nc, end: cursor + usize::from(bump) }
	} else {
		let bump = matches!(motion.movement, MovementKind::ToChar | MovementKind::TillChar | MovementKind::WordEnd | MovementKind::Highlight);
		CharRange { start: cursor, end: nc + usize::from(bump) }
	}
}

#[cfg(test)]
mod tests {
	use mm_primitives::RegisterName;

	use super::*;

	fn motion(movement: MovementKind) -> Motion {
		Motion { movement, direction: Direction::Right, character: None, count: 1, register: RegisterName::UNNAMED }
	}

	#[test]
	fn leftward_motion_is_exclusive_by_default() {
		let r = derive(5, 2, &motion(MovementKind::Char));
		assert_eq!(r, CharRange { start: 2, end: 5 });
	}

	#[test]
	fn rightward_to_char_is_inclusive() {
		let r = derive(0, 3, &motion(MovementKind::ToChar));
		assert_eq!(r, CharRange { start: 0, end: 4 });
	}

	#[test]
	fn rightward_word_begin_is_exclusive() {
		let r = derive(0, 4, &motion(MovementKind::WordBegin));
		assert_eq!(r, CharRange { start: 0, end: 4 });
	}

	#[test]
	fn highlight_bumps_on_either_side() {
		assert_eq!(derive(5, 2, &motion(MovementKind::Highlight)), CharRange { start: 2, end: 6 });
		assert_eq!(derive(2, 5, &motion(MovementKind::Highlight)), CharRange { start: 2, end: 6 });
	}
}
