//! Tracing setup.
//!
//! A full-screen terminal app can never log to stdout/stderr without
//! corrupting its own display, so unlike a daemon this always logs to a
//! file — `$MM_TERM_LOG_DIR` if set, `$TMPDIR`/`/tmp` otherwise.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;

pub fn init() {
	let log_dir = std::env::var("MM_TERM_LOG_DIR").map(PathBuf::from).unwrap_or_else(|_| std::env::temp_dir());
	let _ = std::fs::create_dir_all(&log_dir);

	let pid = std::process::id();
	let log_path = log_dir.join(format!("mm-term.{pid}.log"));

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mm_term=info,mm_window=info,mm_input=info"));

	if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
		let file_layer = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).with_span_events(FmtSpan::CLOSE).with_target(true);

		tracing_subscriber::registry().with(filter).with(file_layer).init();
		tracing::info!(path = ?log_path, "logging initialized");
	}
	// If the log file can't be opened there's nowhere safe to report that —
	// writing to stderr would corrupt the alternate screen buffer — so
	// tracing is simply left unconfigured and every event is a no-op.
}
