use thiserror::Error;

/// Errors reported across the backend boundary. Never propagated past the
/// room that produced them — the core turns every variant into a synthetic
/// log line rather than a `CoreError`.
#[derive(Debug, Error)]
pub enum BackendError {
	#[error("failed to load room: {0}")]
	LoadFailed(String),
	#[error("failed to send message: {0}")]
	SendFailed(String),
}

/// Truncates a message preview to 15 characters plus an ellipsis once the
/// original is longer than 18 — short messages are shown in full, so a
/// 16-or-17-character message isn't awkwardly cut three characters short of
/// its own length.
pub fn truncate_preview(text: &str) -> String {
	if text.chars().count() > 18 {
		let head: String = text.chars().take(15).collect();
		format!("{head}...")
	} else {
		text.to_string()
	}
}

/// The synthetic log line a `Room` emits on a failed send, per the error
/// handling design's `BackendFault` entry.
pub fn send_failure_log_line(text: &str) -> String {
	format!("Failed to send message: {}", truncate_preview(text))
}
