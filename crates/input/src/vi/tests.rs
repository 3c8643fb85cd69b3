use mm_primitives::{ActionKind, Direction, Key, Motion, MovementKind, RegisterName};
use pretty_assertions::assert_eq;

use super::ViInputFsm;
use crate::types::{Intent, Mode};

fn press(ch: char) -> Key {
	Key::Press(ch)
}

#[test]
fn initial_mode_is_normal() {
	let fsm = ViInputFsm::new();
	assert_eq!(fsm.mode(), Mode::Normal);
	assert_eq!(fsm.mode_name(), "NORMAL");
}

#[test]
fn h_emits_a_leftward_char_move() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(press('h'));
	assert_eq!(intents, vec![Intent::Edit(ActionKind::Move, Motion::new(MovementKind::Char, Direction::Left).with_count(1))]);
}

#[test]
fn digit_prefix_multiplies_a_simple_motion() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('3'));
	let intents = fsm.handle_key(press('l'));
	assert_eq!(intents, vec![Intent::Edit(ActionKind::Move, Motion::new(MovementKind::Char, Direction::Right).with_count(3))]);
}

#[test]
fn two_d_three_w_multiplies_the_pending_count() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('2'));
	fsm.handle_key(press('d'));
	let intents = fsm.handle_key(press('3'));
	assert!(intents.is_empty(), "digit accumulation inside MOVEMENT should not emit anything");
	let intents = fsm.handle_key(press('w'));
	let Intent::Edit(action, motion) = &intents[0] else { panic!("expected an Edit intent") };
	assert_eq!(*action, ActionKind::Delete);
	assert_eq!(motion.count, 6);
	assert_eq!(fsm.mode(), Mode::Normal);
}

#[test]
fn dd_selects_the_whole_line() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('d'));
	let intents = fsm.handle_key(press('d'));
	assert_eq!(intents[0], Intent::Edit(ActionKind::Delete, Motion::new(MovementKind::Line, Direction::Down)));
}

#[test]
fn i_enters_insert_and_escape_returns_to_normal_with_checkpoint() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(press('i'));
	assert_eq!(intents, vec![Intent::ModeChanged(Mode::Insert)]);
	assert_eq!(fsm.mode(), Mode::Insert);

	fsm.handle_key(press('x'));
	let intents = fsm.handle_key(Key::Control('['));
	assert!(intents.contains(&Intent::Clamp));
	assert!(intents.contains(&Intent::Checkpoint));
	assert!(intents.contains(&Intent::ModeChanged(Mode::Normal)));
	assert_eq!(fsm.mode(), Mode::Normal);
}

#[test]
fn o_is_not_yet_implemented_and_warns() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(press('o'));
	let Intent::Warn(message) = &intents[0] else { panic!("expected a warn intent") };
	assert!(message.contains("NORMAL"));
}

#[test]
fn register_prefix_carries_into_the_next_operator() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('"'));
	fsm.handle_key(press('a'));
	let intents = fsm.handle_key(press('y'));
	assert!(intents.is_empty(), "y alone just enters MOVEMENT");
	let intents = fsm.handle_key(press('w'));
	let Intent::Edit(_, motion) = &intents[0] else { panic!("expected an Edit intent") };
	assert_eq!(motion.register, RegisterName::parse('a').unwrap());
}

#[test]
fn f_then_character_resolves_a_to_char_motion() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('f'));
	let intents = fsm.handle_key(press('x'));
	let Intent::Edit(action, motion) = &intents[0] else { panic!("expected an Edit intent") };
	assert_eq!(*action, ActionKind::Move);
	assert_eq!(motion.movement, MovementKind::ToChar);
	assert_eq!(motion.character, Some('x'));
}

#[test]
fn semicolon_repeats_the_last_character_search() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('f'));
	fsm.handle_key(press('x'));
	let intents = fsm.handle_key(press(';'));
	let Intent::Edit(_, motion) = &intents[0] else { panic!("expected an Edit intent") };
	assert_eq!(motion.character, Some('x'));
	assert_eq!(motion.direction, Direction::Right);
}

#[test]
fn comma_repeats_the_search_reversed() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('f'));
	fsm.handle_key(press('x'));
	let intents = fsm.handle_key(press(','));
	let Intent::Edit(_, motion) = &intents[0] else { panic!("expected an Edit intent") };
	assert_eq!(motion.direction, Direction::Left);
}

#[test]
fn semicolon_without_a_prior_search_warns() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(press(';'));
	assert!(matches!(intents[0], Intent::Warn(_)));
}

#[test]
fn v_enters_visual_and_motions_emit_highlight() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(press('v'));
	assert_eq!(intents, vec![Intent::ModeChanged(Mode::Visual)]);
	assert_eq!(fsm.mode(), Mode::Visual);

	let intents = fsm.handle_key(press('l'));
	assert_eq!(intents, vec![Intent::Edit(ActionKind::Highlight, Motion::new(MovementKind::Char, Direction::Right).with_count(1))]);
}

#[test]
fn visual_d_deletes_the_selection_and_returns_to_normal() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('v'));
	fsm.handle_key(press('l'));
	let intents = fsm.handle_key(press('d'));
	let Intent::Edit(action, motion) = &intents[0] else { panic!("expected an Edit intent") };
	assert_eq!(*action, ActionKind::Delete);
	assert_eq!(motion.movement, MovementKind::Highlight);
	assert!(intents.contains(&Intent::Checkpoint));
	assert_eq!(fsm.mode(), Mode::Normal);
}

#[test]
fn visual_c_deletes_and_enters_insert() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('v'));
	let intents = fsm.handle_key(press('c'));
	assert!(intents.iter().any(|i| matches!(i, Intent::Edit(ActionKind::Delete, _))));
	assert_eq!(fsm.mode(), Mode::Insert);
}

#[test]
fn undo_and_redo_carry_their_count() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('3'));
	let intents = fsm.handle_key(press('u'));
	assert_eq!(intents, vec![Intent::Undo(3)]);

	let intents = fsm.handle_key(Key::Control('r'));
	assert_eq!(intents, vec![Intent::Redo(1)]);
}

#[test]
fn p_pastes_after_with_the_selected_register() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('"'));
	fsm.handle_key(press('z'));
	let intents = fsm.handle_key(press('p'));
	assert!(matches!(&intents[0], Intent::Paste { register, .. } if *register == RegisterName::parse('z').unwrap()));
}

#[test]
fn ctrl_c_with_no_prefix_warns_to_use_quit() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(Key::Control('c'));
	assert_eq!(intents, vec![Intent::Warn("Type :quit<Enter> to exit".to_string())]);
}

#[test]
fn ctrl_c_with_a_pending_count_is_swallowed_silently() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('4'));
	let intents = fsm.handle_key(Key::Control('c'));
	assert!(intents.is_empty());
}

#[test]
fn colon_focuses_the_command_bar() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(press(':'));
	assert!(matches!(&intents[0], Intent::Focus { target: crate::types::FocusTarget::Command, .. }));
}

#[test]
fn ctrl_w_h_focuses_the_window_to_the_left() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(Key::Control('w'));
	let intents = fsm.handle_key(press('h'));
	assert!(matches!(&intents[0], Intent::Focus { direction: Some(Direction::Left), .. }));
	assert_eq!(fsm.mode(), Mode::Normal);
}

#[test]
fn r_then_char_replaces_in_place_without_typing_flag() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('r'));
	let intents = fsm.handle_key(press('z'));
	assert_eq!(intents, vec![Intent::Replace { ch: 'z', typing: false, motion: Motion::new(MovementKind::Char, Direction::Right).with_count(1) }]);
}

#[test]
fn capital_r_enters_replace_mode() {
	let mut fsm = ViInputFsm::new();
	let intents = fsm.handle_key(press('R'));
	assert_eq!(intents, vec![Intent::ModeChanged(Mode::Replace)]);
	assert_eq!(fsm.mode(), Mode::Replace);

	let intents = fsm.handle_key(press('z'));
	assert_eq!(intents[0], Intent::Replace { ch: 'z', typing: true, motion: Motion::new(MovementKind::Char, Direction::Right).with_count(1) });
}

#[test]
fn mark_jump_and_register_keys_lowercase_their_argument() {
	let mut fsm = ViInputFsm::new();
	fsm.handle_key(press('m'));
	let intents = fsm.handle_key(press('A'));
	assert_eq!(intents, vec![Intent::Mark('a')]);
}
