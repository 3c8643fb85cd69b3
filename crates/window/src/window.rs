//! The tiled (and optionally zoomed) window: an ordered list of panes laid
//! out as a single vertical stack, plus focus/split/resize/rotate operations
//! driven by `^W` sub-commands.

use mm_primitives::Direction;

use crate::pane::Pane;

/// Minimum usable pane height, in terminal rows.
pub const MIN_PANE_HEIGHT: u16 = 4;

/// A pane plus its fixed size, if one was set by a resize. `None` means
/// "share the remaining space equally with its siblings".
#[derive(Debug, Clone)]
pub struct PaneSlot {
	pub pane: Pane,
	pub height: Option<u16>,
}

/// Signalled back to the host when an action can't be completed internally —
/// matching the teacher's convention of returning requests to an outer host
/// loop instead of side-effecting from core logic (`process::exit`, here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
	LastPaneClosed,
}

#[derive(Debug, Clone)]
pub struct Window {
	panes: Vec<PaneSlot>,
	index: usize,
	zoomed: bool,
	total_height: u16,
}

impl Window {
	pub fn new(initial: Pane, total_height: u16) -> Self {
		Self { panes: vec![PaneSlot { pane: initial, height: None }], index: 0, zoomed: false, total_height }
	}

	pub fn resize_terminal(&mut self, total_height: u16) {
		self.total_height = total_height;
	}

	pub fn len(&self) -> usize {
		self.panes.len()
	}

	pub fn is_zoomed(&self) -> bool {
		self.zoomed
	}

	pub fn focused_index(&self) -> usize {
		self.index
	}

	pub fn focused(&self) -> &Pane {
		&self.panes[self.index].pane
	}

	pub fn focused_mut(&mut self) -> &mut Pane {
		&mut self.panes[self.index].pane
	}

	pub fn panes(&self) -> &[PaneSlot] {
		&self.panes
	}

	/// `^W` focus transitions. `direction: None, count: None` is the zoom
	/// toggle; `(Right|Left, None)` are the cyclic `w`/`W`; `(Up|Down, None)`
	/// are `t`/`b` (top/bottom); `(Up|Down, Some(n))` are `k`/`j`; `(Left|Right,
	/// Some(_))` are `h`/`l`, which warn since vertical splits aren't
	/// supported.
	pub fn focus(&mut self, direction: Option<Direction>, count: Option<u32>) -> Option<String> {
		let n = self.panes.len();
		match (direction, count) {
			(None, None) => {
				self.zoomed = !self.zoomed;
				None
			}
			(Some(Direction::Right), None) => {
				self.index = (self.index + 1) % n;
				None
			}
			(Some(Direction::Left), None) => {
				self.index = (self.index + n - 1) % n;
				None
			}
			(Some(Direction::Up), None) => {
				self.index = 0;
				None
			}
			(Some(Direction::Down), None) => {
				self.index = n - 1;
				None
			}
			(Some(Direction::Up), Some(count)) => {
				self.index = self.index.saturating_sub(count.max(1) as usize);
				None
			}
			(Some(Direction::Down), Some(count)) => {
				self.index = (self.index + count.max(1) as usize).min(n - 1);
				None
			}
			(Some(Direction::Left), Some(_)) | (Some(Direction::Right), Some(_)) => Some("Vertical splits not yet supported".to_string()),
			(Some(Direction::FirstWord), _) | (None, Some(_)) => None,
		}
	}

	/// Horizontal split, refusing if the resulting per-pane share would be
	/// below [`MIN_PANE_HEIGHT`]. The new pane is a clone of the focused one
	/// and becomes focused.
	pub fn hsplit(&mut self, height: Option<u16>) -> Result<(), String> {
		let n = self.panes.len() as u16;
		if self.total_height / (n + 1) < MIN_PANE_HEIGHT {
			return Err("Not enough room".to_string());
		}
		let clone = self.panes[self.index].pane.split_clone();
		let height = height.map(|h| h.max(MIN_PANE_HEIGHT));
		let insert_at = self.index + 1;
		self.panes.insert(insert_at, PaneSlot { pane: clone, height });
		self.index = insert_at;
		Ok(())
	}

	pub fn vsplit(&mut self) -> Result<(), String> {
		Err("Vertical splits not yet supported".to_string())
	}

	/// Adjusts the focused pane's height by `delta`, clamped to
	/// [`MIN_PANE_HEIGHT`].
	pub fn hresize(&mut self, delta: i32) {
		let n = self.panes.len().max(1) as u16;
		let share = self.total_height / n;
		let current = self.panes[self.index].height.unwrap_or(share) as i32;
		let next = (current + delta).max(MIN_PANE_HEIGHT as i32) as u16;
		self.panes[self.index].height = Some(next);
	}

	/// Clears every pane's fixed height, returning to an equal split.
	pub fn eresize(&mut self) {
		for slot in &mut self.panes {
			slot.height = None;
		}
	}

	/// Rotates the pane list by `k mod n` positions, keeping `index` tracking
	/// the same focused pane through the move.
	pub fn rotate(&mut self, direction: Direction, k: u32) {
		let n = self.panes.len();
		if n == 0 {
			return;
		}
		let k = (k as usize) % n;
		match direction {
			Direction::Down => {
				self.panes.rotate_right(k);
				self.index = (self.index + k) % n;
			}
			_ => {
				self.panes.rotate_left(k);
				self.index = (self.index + n - k) % n;
			}
		}
	}

	/// Closes the focused pane. Returns [`WindowEvent::LastPaneClosed`]
	/// without mutating state if it's the only one left — the host decides
	/// whether that means exiting the process.
	pub fn close_focused(&mut self) -> Option<WindowEvent> {
		if self.panes.len() <= 1 {
			return Some(WindowEvent::LastPaneClosed);
		}
		self.panes.remove(self.index);
		if self.index >= self.panes.len() {
			self.index = self.panes.len() - 1;
		}
		None
	}
}
