use mm_primitives::{ActionKind, Direction, Motion, RegisterName};

/// Coarse mode notification for the status line.
///
/// The FSM has many more internal pending states than this (goto,
/// charsearch, register, wincmd, ...) but the status line only ever shows
/// `-- INSERT --` / `-- REPLACE --` / `-- VISUAL --`; every pending state
/// reports as [`Mode::Normal`] because vi doesn't surface them either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Normal,
	Insert,
	Replace,
	Visual,
}

/// Which direction a paste inserts relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteDirection {
	Before,
	After,
}

/// What a `scroll` intent scrolls by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKind {
	Screen,
	Line,
	Char,
	Top,
	Bottom,
}

/// Target a `focus` intent moves keyboard focus to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
	Command,
	Lobby,
	Window,
	History,
}

/// `^W` sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
	Split,
	Resize,
	Rotate,
}

/// Tab-completion ring direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteDirection {
	Next,
	Previous,
}

/// A single semantic editing command emitted by either input FSM.
///
/// [`crate::ViInputFsm`]/[`crate::SimpleInputFsm`] never mutate a buffer
/// directly — they produce a stream of these, which `mm-buffer` and the
/// window manager consume.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
	/// Fired on every entry into NORMAL.
	Clamp,
	/// Fired once per return to NORMAL, iff a mutating action happened since
	/// the last checkpoint.
	Checkpoint,
	Edit(ActionKind, Motion),
	Type(char),
	Replace { ch: char, typing: bool, motion: Motion },
	Paste { direction: PasteDirection, register: RegisterName, count: u32 },
	Scroll { direction: Direction, kind: ScrollKind, count: u32 },
	Mark(char),
	LineJump(char),
	CharJump(char),
	Focus { target: FocusTarget, direction: Option<Direction>, count: Option<u32> },
	Window { action: WindowAction, direction: Direction, count: u32 },
	Submit,
	Clear,
	Suspend,
	Refresh,
	Complete(CompleteDirection),
	Undo(u32),
	Redo(u32),
	Warn(String),
	/// `^C`/`^[` in the command bar: the host interprets this as "leave the
	/// command bar", returning focus to wherever it was before `:` was
	/// pressed.
	Switch,
	/// Not in the original event vocabulary by name, but required to drive
	/// [`crate::status`]-style status line transitions without the buffer
	/// and the FSM both needing to know about each other's mode.
	ModeChanged(Mode),
}
