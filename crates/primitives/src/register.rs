/// A single-character vi register name.
///
/// The alphabet is validated at construction so downstream code never has
/// to handle an "invalid register character" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterName(char);

impl RegisterName {
	/// The implicit default register, `"`.
	pub const UNNAMED: RegisterName = RegisterName('"');
	/// The blackhole register, `_` — writes are discarded.
	pub const BLACKHOLE: RegisterName = RegisterName('_');
	/// Most-recent-yank register, `0`.
	pub const YANK: RegisterName = RegisterName('0');
	/// Small-delete register, `-`.
	pub const SMALL_DELETE: RegisterName = RegisterName('-');
	/// Last-inserted-text register, `.`.
	pub const LAST_INSERT: RegisterName = RegisterName('.');
	/// Last-command register, `:`.
	pub const LAST_COMMAND: RegisterName = RegisterName(':');
	/// Last-search register, `/`.
	pub const LAST_SEARCH: RegisterName = RegisterName('/');
	/// Current buffer name register, `%`.
	pub const CURRENT_BUFFER: RegisterName = RegisterName('%');
	/// Alternate (previous) buffer name register, `#`.
	pub const ALTERNATE_BUFFER: RegisterName = RegisterName('#');
	/// Expression register, `=` — accepted but never writable.
	pub const EXPRESSION: RegisterName = RegisterName('=');

	/// Parses a register name from the key that follows `"` in NORMAL mode.
	///
	/// Returns `None` for any character outside `[a-zA-Z0-9.:%#/_"=-]`.
	pub fn parse(ch: char) -> Option<Self> {
		match ch {
			'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | ':' | '%' | '#' | '/' | '_' | '"' | '=' | '-' => {
				Some(RegisterName(ch))
			}
			_ => None,
		}
	}

	pub const fn ch(self) -> char {
		self.0
	}

	pub fn is_blackhole(self) -> bool {
		self.0 == '_'
	}

	pub fn is_unnamed(self) -> bool {
		self.0 == '"'
	}

	pub fn is_numbered(self) -> bool {
		self.0.is_ascii_digit()
	}

	/// Numbered delete-ring slot `1..=9`, if this is one.
	pub fn ring_slot(self) -> Option<u8> {
		if self.0.is_ascii_digit() && self.0 != '0' {
			Some(self.0 as u8 - b'0')
		} else {
			None
		}
	}

	pub fn is_lower_named(self) -> bool {
		self.0.is_ascii_lowercase()
	}

	/// If this is an uppercase named register (`A..=Z`), returns the
	/// lowercase register it appends to.
	pub fn append_target(self) -> Option<RegisterName> {
		if self.0.is_ascii_uppercase() {
			Some(RegisterName(self.0.to_ascii_lowercase()))
		} else {
			None
		}
	}

	/// `true` for the special registers that can never be written through
	/// [`crate::register`]'s generic update path (`.`, `:`, `/`, `%`, `#`, `=`).
	pub fn is_immutable_via_update(self) -> bool {
		matches!(self.0, '.' | ':' | '/' | '%' | '#' | '=')
	}
}

impl std::fmt::Display for RegisterName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
