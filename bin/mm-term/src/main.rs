mod cli;
mod command;
mod config;
mod core;
mod error;
mod logging;
mod terminal;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use cli::Cli;
use config::Config;
use core::{Core, HostAction};
use error::CoreError;
use mm_backend::fake::InMemoryBackend;
use mm_backend::Backend;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
	logging::init();
	let cli = Cli::parse();

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			tracing::error!(%err, "exiting");
			eprintln!("{err}");
			ExitCode::from(err.exit_code() as u8)
		}
	}
}

fn run(cli: Cli) -> Result<(), CoreError> {
	let config = Config::load(&cli.config)?;
	let backend = build_backend(&config)?;

	let mut term = terminal::init().map_err(CoreError::TerminalFault)?;
	let size = term.size().map_err(CoreError::TerminalFault)?;
	let mut core = Core::new(backend, "lobby", size.width as usize, size.height);

	let result = event_loop(&mut term, &mut core);
	terminal::restore().map_err(CoreError::TerminalFault)?;
	result
}

fn build_backend(config: &Config) -> Result<Box<dyn Backend>, CoreError> {
	match config.protocol.as_str() {
		"fake" => Ok(Box::new(InMemoryBackend::new())),
		other => Err(CoreError::UnsupportedScheme(other.to_string())),
	}
}

fn event_loop(term: &mut ratatui::Terminal<terminal::Backend>, core: &mut Core) -> Result<(), CoreError> {
	loop {
		term.draw(|frame| terminal::draw(frame, core)).map_err(CoreError::TerminalFault)?;

		if !terminal::poll(POLL_INTERVAL).map_err(CoreError::TerminalFault)? {
			continue;
		}

		let Some(key) = terminal::next_key().map_err(CoreError::TerminalFault)? else {
			continue;
		};

		for action in core.handle_key(key) {
			match action {
				HostAction::Quit => return Ok(()),
				HostAction::QuitAll => return Ok(()),
				HostAction::ForceRedraw => term.clear().map_err(CoreError::TerminalFault)?,
				HostAction::Suspend => suspend(term)?,
				HostAction::SpawnShell => spawn_shell(term)?,
			}
		}
	}
}

/// Pauses raw mode, runs an interactive shell to completion, then restores
/// the alternate screen and forces a full redraw — used by both `^Z` and
/// `:shell`.
fn spawn_shell(term: &mut ratatui::Terminal<terminal::Backend>) -> Result<(), CoreError> {
	terminal::restore().map_err(CoreError::TerminalFault)?;
	let shell = std::env::var("SHELL").unwrap_or_else(|_| "sh".to_string());
	let _ = std::process::Command::new(shell).status();
	*term = terminal::init().map_err(CoreError::TerminalFault)?;
	term.clear().map_err(CoreError::TerminalFault)?;
	Ok(())
}

#[cfg(unix)]
fn suspend(term: &mut ratatui::Terminal<terminal::Backend>) -> Result<(), CoreError> {
	terminal::restore().map_err(CoreError::TerminalFault)?;
	// SAFETY: raising SIGTSTP on our own process stops it exactly as a shell
	// job-control suspend would; there is no memory unsafety to uphold here.
	unsafe {
		libc::raise(libc::SIGTSTP);
	}
	*term = terminal::init().map_err(CoreError::TerminalFault)?;
	term.clear().map_err(CoreError::TerminalFault)?;
	Ok(())
}

#[cfg(not(unix))]
fn suspend(term: &mut ratatui::Terminal<terminal::Backend>) -> Result<(), CoreError> {
	term.clear().map_err(CoreError::TerminalFault)?;
	Ok(())
}
