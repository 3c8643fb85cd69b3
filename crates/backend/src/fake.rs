//! An in-memory [`Backend`]/[`Room`] pair for exercising the core without a
//! real adapter — used by `bin/mm-term`'s own tests, not shipped as a
//! protocol choice.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{Backend, Message, Room, SendCallback, User};

#[derive(Default)]
pub struct InMemoryBackend {
	rooms: HashMap<String, Arc<Mutex<Vec<Message>>>>,
	directs: HashMap<String, Arc<Mutex<Vec<Message>>>>,
}

impl InMemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn seed_room(&mut self, name: &str, messages: Vec<Message>) {
		self.rooms.insert(name.to_string(), Arc::new(Mutex::new(messages)));
	}
}

impl Backend for InMemoryBackend {
	fn get_room_by_name(&mut self, name: &str) -> Option<Box<dyn Room>> {
		let log = self.rooms.entry(name.to_string()).or_default().clone();
		Some(Box::new(InMemoryRoom { id: name.to_string(), alias: Some(format!("#{name}")), messages: log }))
	}

	fn get_direct_by_name(&mut self, user: &str) -> Option<Box<dyn Room>> {
		let log = self.directs.entry(user.to_string()).or_default().clone();
		Some(Box::new(InMemoryRoom { id: user.to_string(), alias: None, messages: log }))
	}
}

struct InMemoryRoom {
	id: String,
	alias: Option<String>,
	messages: Arc<Mutex<Vec<Message>>>,
}

impl Room for InMemoryRoom {
	fn id(&self) -> String {
		self.id.clone()
	}

	fn alias(&self) -> Option<String> {
		self.alias.clone()
	}

	fn name(&self) -> Option<String> {
		self.alias.clone()
	}

	fn for_each_message(&self, visitor: &mut dyn FnMut(&Message)) {
		for msg in self.messages.lock().expect("fake backend mutex poisoned").iter() {
			visitor(msg);
		}
	}

	fn send_message(&mut self, text: &str, cb: SendCallback) {
		let speaker = User { id: "self".to_string(), display_name: "me".to_string() };
		self.messages.lock().expect("fake backend mutex poisoned").push(Message { speaker, text: text.to_string(), created: 0 });
		cb(Ok(()));
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn sent_messages_are_replayed_in_order() {
		let mut backend = InMemoryBackend::new();
		let mut room = backend.get_room_by_name("general").unwrap();
		room.send_message("hi", Box::new(|_| {}));
		room.send_message("there", Box::new(|_| {}));

		let mut seen = Vec::new();
		room.for_each_message(&mut |msg| seen.push(msg.text.clone()));
		assert_eq!(seen, vec!["hi".to_string(), "there".to_string()]);
	}

	#[test]
	fn room_lookups_for_the_same_name_share_the_log() {
		let mut backend = InMemoryBackend::new();
		let mut first = backend.get_room_by_name("general").unwrap();
		first.send_message("hi", Box::new(|_| {}));

		let second = backend.get_room_by_name("general").unwrap();
		let mut seen = Vec::new();
		second.for_each_message(&mut |msg| seen.push(msg.text.clone()));
		assert_eq!(seen, vec!["hi".to_string()]);
	}
}
