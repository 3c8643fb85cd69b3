//! The boundary into the chat backend: a constructor contract plus the
//! `Backend`/`Room`/`Message`/`User` traits an adapter crate implements.
//!
//! Everything past this boundary — actually opening a socket, polling a
//! homeserver, whatever a given protocol needs — is somebody else's crate.
//! This one only models the shape of the conversation between the core and
//! that somebody else, the same way the teacher keeps its completion-picker
//! providers as a closure-backed trait rather than hardwiring one source.

mod error;
pub mod fake;

pub use error::BackendError;

/// A user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
	pub id: String,
	pub display_name: String,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
	pub speaker: User,
	pub text: String,
	/// Unix epoch milliseconds.
	pub created: u64,
}

/// Callback invoked once a backend has finished (or failed) sending a
/// message — the core never blocks on it.
pub type SendCallback = Box<dyn FnOnce(Result<(), BackendError>) + Send>;

/// A room or direct chat. Implemented externally; the core only ever holds
/// it behind a `Box<dyn Room>`.
pub trait Room: Send {
	fn id(&self) -> String;
	fn alias(&self) -> Option<String>;
	fn name(&self) -> Option<String>;

	/// Replays every message currently known locally, in arrival order.
	fn for_each_message(&self, visitor: &mut dyn FnMut(&Message));

	/// Sends `text`, invoking `cb` once the backend confirms or fails. A
	/// failure is surfaced by the caller as a synthetic log line rather than
	/// propagated — see [`BackendError::preview`].
	fn send_message(&mut self, text: &str, cb: SendCallback);
}

/// Notifications a [`Room`] implementation pushes to its owner as messages
/// arrive out of band (e.g. from a polling or websocket task).
pub trait RoomEvents {
	fn message(&mut self, room_id: &str, msg: Message);
}

/// The backend adapter itself: looks up rooms and direct chats by name.
pub trait Backend: Send {
	fn get_room_by_name(&mut self, name: &str) -> Option<Box<dyn Room>>;
	fn get_direct_by_name(&mut self, user: &str) -> Option<Box<dyn Room>>;
}

/// Connection-lifecycle notifications a [`Backend`] implementation pushes to
/// its owner.
pub trait BackendEvents {
	fn connected(&mut self, user: User);
	fn reconnected(&mut self);
}

/// Constructs a [`Backend`] from the deserialized `auth`/`config` document
/// (§6's configuration file). Implemented by each concrete adapter crate;
/// `protocol` selects which one the host's `:-command`-free startup path
/// picks.
pub trait BackendFactory {
	fn connect(auth: serde_json::Value, config: Option<serde_json::Value>) -> Result<Box<dyn Backend>, BackendError>
	where
		Self: Sized;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_equality_is_by_value() {
		let a = User { id: "1".into(), display_name: "Ada".into() };
		let b = a.clone();
		assert_eq!(a, b);
	}
}
