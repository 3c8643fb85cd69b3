use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;

/// The configuration document §6 describes: required `protocol`/`auth`,
/// optional adapter-specific `config`.
#[derive(Debug, Deserialize)]
pub struct Config {
	pub protocol: String,
	pub auth: serde_json::Value,
	pub config: Option<serde_json::Value>,
}

/// Backend names this binary actually knows how to connect. A real
/// deployment would register one adapter crate per protocol; this one only
/// ships the in-memory fake, so it's the sole supported value.
pub const KNOWN_PROTOCOLS: &[&str] = &["fake"];

impl Config {
	pub fn load(path: &Path) -> Result<Self, CoreError> {
		let text = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigIo { path: path.to_path_buf(), source })?;
		let config: Config = serde_json::from_str(&text).map_err(CoreError::ConfigInvalid)?;
		if !KNOWN_PROTOCOLS.contains(&config.protocol.as_str()) {
			return Err(CoreError::UnsupportedScheme(config.protocol.clone()));
		}
		Ok(config)
	}
}
