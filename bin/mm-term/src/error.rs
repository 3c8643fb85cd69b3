use thiserror::Error;

/// Process-boundary errors: the subset of the error design that crosses out
/// of the core rather than staying an in-core `warn` intent.
#[derive(Debug, Error)]
pub enum CoreError {
	#[error("terminal error: {0}")]
	TerminalFault(#[source] std::io::Error),

	#[error("invalid configuration: {0}")]
	ConfigInvalid(#[source] serde_json::Error),

	#[error("could not read configuration file {path}: {source}")]
	ConfigIo {
		path: std::path::PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("unsupported backend protocol: {0}")]
	UnsupportedScheme(String),
}

impl CoreError {
	/// Process exit code per the CLI's `0 success, 2 misuse` contract.
	/// `TerminalFault` is the one variant that isn't a startup misuse.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::TerminalFault(_) => 1,
			Self::ConfigInvalid(_) | Self::ConfigIo { .. } | Self::UnsupportedScheme(_) => 2,
		}
	}
}
