use crate::RegisterName;

/// Direction a motion or scroll travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Left,
	Right,
	Up,
	Down,
	/// "to the first non-blank character" — used by `^` and `dd`'s line motion.
	FirstWord,
}

/// What kind of target a [`Motion`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
	Char,
	WordBegin,
	WordEnd,
	Line,
	ToChar,
	TillChar,
	Highlight,
}

/// A buffer-mutating or cursor-moving operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
	Move,
	Highlight,
	Delete,
	Yank,
	Paste,
	Erase,
	ToggleCase,
	Uppercase,
	Lowercase,
	Replace,
}

/// A fully resolved cursor motion: where to go, how far, and which register
/// an associated operator should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
	pub movement: MovementKind,
	pub direction: Direction,
	pub character: Option<char>,
	pub count: u32,
	pub register: RegisterName,
}

impl Motion {
	pub fn new(movement: MovementKind, direction: Direction) -> Self {
		Self {
			movement,
			direction,
			character: None,
			count: 1,
			register: RegisterName::UNNAMED,
		}
	}

	pub fn with_count(mut self, count: u32) -> Self {
		self.count = count.max(1);
		self
	}

	pub fn with_character(mut self, character: char) -> Self {
		self.character = Some(character);
		self
	}

	pub fn with_register(mut self, register: RegisterName) -> Self {
		self.register = register;
		self
	}
}
