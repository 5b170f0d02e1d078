//! Settings errors

use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("could not read settings file '{path}': {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("could not parse settings: {0}")]
	Parse(#[from] toml::de::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
