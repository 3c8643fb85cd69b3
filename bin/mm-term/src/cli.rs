use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mm-term")]
#[command(about = "A modal, vi-inspired terminal chat client")]
#[command(version)]
pub struct Cli {
	/// Path to the account/configuration file
	#[arg(short = 'c', long = "config", default_value = "mm-account.json")]
	pub config: PathBuf,
}
