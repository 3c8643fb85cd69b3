//! The `:`-command interpreter — §6's command table, dispatched against
//! whitespace-split argv with alias/arity checking and a fuzzy "did you
//! mean" on unrecognized names.

use mm_primitives::RegisterName;
use mm_registers::RegisterStore;

/// One recognized command name plus the handful of spellings §6 accepts
/// for it, and how many arguments it takes (including the command word
/// itself at index 0).
struct CommandDef {
	names: &'static [&'static str],
	min_argc: usize,
	max_argc: usize,
}

const COMMANDS: &[CommandDef] = &[
	CommandDef { names: &["dm"], min_argc: 2, max_argc: 2 },
	CommandDef { names: &["join"], min_argc: 2, max_argc: 2 },
	CommandDef { names: &["split", "sp"], min_argc: 1, max_argc: 1 },
	CommandDef { names: &["vsplit", "vsp"], min_argc: 1, max_argc: 1 },
	CommandDef { names: &["quit", "q", "Q"], min_argc: 1, max_argc: 1 },
	CommandDef { names: &["qall", "qa", "Qa"], min_argc: 1, max_argc: 1 },
	CommandDef { names: &["shell", "sh", "Sh"], min_argc: 1, max_argc: 1 },
	CommandDef { names: &["registers", "reg", "register"], min_argc: 1, max_argc: 1 },
	CommandDef { names: &["help", "h"], min_argc: 1, max_argc: 2 },
];

/// What a successfully-parsed command asks the host to do. The command
/// interpreter itself never opens a shell, splits a window, or exits — it
/// only classifies the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
	DirectMessage { user: String },
	Join { room: String },
	Split,
	VSplit,
	Quit,
	QuitAll,
	Shell,
	Registers,
	Help { topic: Option<String> },
}

/// Minimum Jaro-Winkler similarity a command name must clear before it's
/// offered as a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Parses and classifies one command-bar submission.
///
/// `raw` is the command bar's contents at the moment `<CR>` was pressed,
/// `:` not yet stripped. Every submission — valid or not — updates the
/// `:` register, matching vi's behavior of recording the last command line
/// regardless of whether it succeeded.
pub fn dispatch(raw: &str, registers: &mut RegisterStore) -> Result<CommandOutcome, String> {
	let trimmed = raw.strip_prefix(':').unwrap_or(raw).trim();
	registers.set_special(RegisterName::LAST_COMMAND, trimmed.to_string());

	let argv: Vec<&str> = trimmed.split_whitespace().collect();
	let Some(&name) = argv.first() else {
		return Err("no command".to_string());
	};

	let Some(def) = COMMANDS.iter().find(|def| def.names.contains(&name)) else {
		return Err(unknown_command_message(name));
	};

	if argv.len() < def.min_argc || argv.len() > def.max_argc {
		return Err(unknown_command_message(name));
	}

	Ok(match def.names[0] {
		"dm" => CommandOutcome::DirectMessage { user: argv[1].to_string() },
		"join" => CommandOutcome::Join { room: argv[1].to_string() },
		"split" => CommandOutcome::Split,
		"vsplit" => CommandOutcome::VSplit,
		"quit" => CommandOutcome::Quit,
		"qall" => CommandOutcome::QuitAll,
		"shell" => CommandOutcome::Shell,
		"registers" => CommandOutcome::Registers,
		"help" => CommandOutcome::Help { topic: argv.get(1).map(|s| s.to_string()) },
		_ => unreachable!("every CommandDef's canonical name is handled above"),
	})
}

fn unknown_command_message(name: &str) -> String {
	match suggest_command(name) {
		Some(suggestion) => format!("Not a client command: {name}. Did you mean '{suggestion}'?"),
		None => format!("Not a client command: {name}"),
	}
}

fn suggest_command(name: &str) -> Option<&'static str> {
	let mut best_match = None;
	let mut best_score = 0.0;

	for def in COMMANDS {
		for &alias in def.names {
			let score = strsim::jaro_winkler(name, alias);
			if score > best_score {
				best_score = score;
				best_match = Some(def.names[0]);
			}
		}
	}

	if best_score > SUGGESTION_THRESHOLD { best_match } else { None }
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn quit_aliases_all_resolve_to_the_same_outcome() {
		for alias in ["quit", "q", "Q"] {
			let mut registers = RegisterStore::new();
			assert_eq!(dispatch(alias, &mut registers), Ok(CommandOutcome::Quit));
		}
	}

	#[test]
	fn dm_requires_exactly_one_argument() {
		let mut registers = RegisterStore::new();
		assert_eq!(dispatch("dm alice", &mut registers), Ok(CommandOutcome::DirectMessage { user: "alice".to_string() }));
		assert!(dispatch("dm", &mut registers).is_err());
		assert!(dispatch("dm alice bob", &mut registers).is_err());
	}

	#[test]
	fn help_accepts_an_optional_topic() {
		let mut registers = RegisterStore::new();
		assert_eq!(dispatch("help", &mut registers), Ok(CommandOutcome::Help { topic: None }));
		assert_eq!(dispatch("help split", &mut registers), Ok(CommandOutcome::Help { topic: Some("split".to_string()) }));
	}

	#[test]
	fn every_submission_updates_the_command_register_even_on_error() {
		let mut registers = RegisterStore::new();
		let _ = dispatch(":bogus", &mut registers);
		assert_eq!(registers.get(RegisterName::LAST_COMMAND), Some("bogus"));
	}

	#[test]
	fn unknown_command_close_to_a_real_one_gets_a_suggestion() {
		let mut registers = RegisterStore::new();
		let err = dispatch("qiut", &mut registers).unwrap_err();
		assert!(err.contains("Did you mean"), "{err}");
	}

	#[test]
	fn unknown_command_far_from_any_real_one_gets_no_suggestion() {
		let mut registers = RegisterStore::new();
		let err = dispatch("xyzzy", &mut registers).unwrap_err();
		assert!(!err.contains("Did you mean"), "{err}");
	}
}
