//! Named, numbered and special registers, with vi-accurate write rules.
//!
//! Constructed empty at process start and mutated by the buffer on every
//! yank/delete and by the command interpreter on `:` executions. Nothing in
//! this crate ever destroys a [`RegisterStore`] before shutdown — it is a
//! process-wide resource, just passed around by `&mut` rather than reached
//! for as a singleton.

use std::collections::BTreeMap;

use mm_primitives::{ActionKind, RegisterName};

/// The vi register bank.
#[derive(Debug, Default)]
pub struct RegisterStore {
	values: BTreeMap<char, String>,
}

impl RegisterStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads a register's current value, if it has ever been written.
	pub fn get(&self, reg: RegisterName) -> Option<&str> {
		self.values.get(&reg.ch()).map(String::as_str)
	}

	/// Applies the generic vi write rules for `(action, reg, value)`.
	///
	/// This is the entry point used by yank/delete; it does *not* accept
	/// writes to the immutable special registers (`.`, `:`, `/`, `%`, `#`,
	/// `=`) — those go through their own setters below, since they are
	/// updated by dedicated events rather than by the yank/delete path.
	pub fn update_register(&mut self, action: ActionKind, reg: RegisterName, value: &str) {
		if reg.is_blackhole() {
			return;
		}
		if reg.is_immutable_via_update() {
			return;
		}

		if let Some(lower) = reg.append_target() {
			self.append(lower.ch(), value);
			let combined = self.values.get(&lower.ch()).cloned().unwrap_or_default();
			self.set_unnamed(combined);
			return;
		}

		if reg.is_lower_named() {
			self.set(reg.ch(), value.to_string());
			self.set_unnamed(value.to_string());
			return;
		}

		if let Some(slot) = reg.ring_slot() {
			self.set(char::from(b'0' + slot), value.to_string());
			self.set_unnamed(value.to_string());
			return;
		}

		if reg.ch() == '0' {
			self.set('0', value.to_string());
			self.set_unnamed(value.to_string());
			return;
		}

		debug_assert!(reg.is_unnamed());
		match action {
			ActionKind::Yank => {
				self.set('0', value.to_string());
			}
			ActionKind::Delete => {
				self.shift_delete_ring(value);
				self.set('-', value.to_string());
			}
			_ => {}
		}
		self.set_unnamed(value.to_string());
	}

	/// Sets an immutable-via-`update_register` special register directly
	/// (`.`, `:`, `/`, `%`, `#`). `=` is never written, even here.
	pub fn set_special(&mut self, reg: RegisterName, value: String) {
		if reg.ch() == '=' {
			return;
		}
		self.set(reg.ch(), value);
	}

	fn set(&mut self, ch: char, value: String) {
		self.values.insert(ch, value);
	}

	fn set_unnamed(&mut self, value: String) {
		self.values.insert('"', value);
	}

	/// Shifts `1..=8` up to `2..=9` and writes `value` into slot `1`.
	fn shift_delete_ring(&mut self, value: &str) {
		for slot in (1..=8u8).rev() {
			let from = char::from(b'0' + slot);
			let to = char::from(b'0' + slot + 1);
			if let Some(v) = self.values.get(&from).cloned() {
				self.values.insert(to, v);
			}
		}
		self.values.insert('1', value.to_string());
	}

	/// Returns registers in dump order: `0`, then the delete ring `1..=9`
	/// (present entries only), then remaining named/special registers
	/// lexicographically.
	pub fn dump_registers(&self) -> Vec<(char, &str)> {
		let mut ordered = Vec::new();
		if let Some(v) = self.values.get(&'0') {
			ordered.push(('0', v.as_str()));
		}
		for slot in 1..=9u8 {
			let ch = char::from(b'0' + slot);
			if let Some(v) = self.values.get(&ch) {
				ordered.push((ch, v.as_str()));
			}
		}
		for (&ch, v) in self.values.iter() {
			if ch == '0' || ch.is_ascii_digit() {
				continue;
			}
			ordered.push((ch, v.as_str()));
		}
		ordered
	}
}

impl RegisterStore {
	fn append(&mut self, ch: char, value: &str) {
		let entry = self.values.entry(ch).or_default();
		entry.push_str(value);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reg(ch: char) -> RegisterName {
		RegisterName::parse(ch).unwrap()
	}

	#[test]
	fn blackhole_discards_writes() {
		let mut store = RegisterStore::new();
		store.update_register(ActionKind::Delete, reg('_'), "gone");
		assert_eq!(store.get(reg('_')), None);
		assert_eq!(store.get(reg('"')), None);
	}

	#[test]
	fn unnamed_yank_updates_yank_slot_and_unnamed() {
		let mut store = RegisterStore::new();
		store.update_register(ActionKind::Yank, reg('"'), "hello");
		assert_eq!(store.get(reg('0')), Some("hello"));
		assert_eq!(store.get(reg('"')), Some("hello"));
	}

	#[test]
	fn unnamed_delete_shifts_ring_and_sets_small_delete() {
		let mut store = RegisterStore::new();
		store.update_register(ActionKind::Delete, reg('"'), "one");
		store.update_register(ActionKind::Delete, reg('"'), "two");
		store.update_register(ActionKind::Delete, reg('"'), "three");

		assert_eq!(store.get(reg('1')), Some("three"));
		assert_eq!(store.get(reg('2')), Some("two"));
		assert_eq!(store.get(reg('3')), Some("one"));
		assert_eq!(store.get(reg('-')), Some("three"));
		assert_eq!(store.get(reg('"')), Some("three"));
	}

	#[test]
	fn nine_deletes_fill_the_full_ring() {
		let mut store = RegisterStore::new();
		for i in 1..=9 {
			store.update_register(ActionKind::Delete, reg('"'), &i.to_string());
		}
		for slot in 1..=9 {
			let expected = (10 - slot).to_string();
			assert_eq!(store.get(reg(char::from(b'0' + slot as u8))), Some(expected.as_str()));
		}
	}

	#[test]
	fn uppercase_register_appends_to_lowercase() {
		let mut store = RegisterStore::new();
		store.update_register(ActionKind::Yank, reg('a'), "one ");
		store.update_register(ActionKind::Yank, reg('A'), "two");
		assert_eq!(store.get(reg('a')), Some("one two"));
	}

	#[test]
	fn immutable_specials_ignore_update_register_but_accept_set_special() {
		let mut store = RegisterStore::new();
		store.update_register(ActionKind::Yank, reg('/'), "ignored");
		assert_eq!(store.get(reg('/')), None);

		store.set_special(reg('/'), "pattern".to_string());
		assert_eq!(store.get(reg('/')), Some("pattern"));

		store.set_special(reg('='), "2+2".to_string());
		assert_eq!(store.get(reg('=')), None, "= is never writable, even via set_special");
	}

	#[test]
	fn dump_registers_orders_yank_then_ring_then_named() {
		let mut store = RegisterStore::new();
		store.update_register(ActionKind::Yank, reg('"'), "y");
		store.update_register(ActionKind::Delete, reg('"'), "d1");
		store.update_register(ActionKind::Yank, reg('z'), "zz");
		store.set_special(reg('%'), "#room".to_string());

		let dumped = store.dump_registers();
		let keys: Vec<char> = dumped.iter().map(|(c, _)| *c).collect();
		assert_eq!(keys[0], '0');
		assert_eq!(keys[1], '1');
		assert!(keys.contains(&'%'));
		assert!(keys.contains(&'z'));
	}
}
