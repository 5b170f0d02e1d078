//! Engine settings and their sources

use crate::error::{SettingsError, SettingsResult};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Environment variable naming the mock provider implementation.
pub const ENV_MOCK_PROVIDER: &str = "BODKIN_MOCK_PROVIDER";

/// Environment variable listing custom injection marker names (comma-separated).
pub const ENV_CUSTOM_MARKERS: &str = "BODKIN_CUSTOM_MARKERS";

/// Environment variable listing custom injection provider names (comma-separated).
pub const ENV_CUSTOM_PROVIDERS: &str = "BODKIN_CUSTOM_PROVIDERS";

/// Settings consumed by the injection engine at construction time.
///
/// All three collections are read exactly once, when the engine is built.
///
/// # Examples
///
/// ```
/// use bodkin_conf::Settings;
///
/// let settings = Settings::from_toml_str(
/// 	r#"
/// 	mock_provider = "stub"
/// 	custom_injection_markers = ["myapp::Session"]
/// 	"#,
/// )
/// .unwrap();
///
/// assert_eq!(settings.mock_provider.as_deref(), Some("stub"));
/// assert_eq!(settings.custom_injection_markers, vec!["myapp::Session"]);
/// assert!(settings.custom_injection_providers.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
	/// Registry name of the mock provider implementation to instantiate.
	/// Leaving this unset is a fatal configuration error at engine
	/// construction.
	#[serde(default)]
	pub mock_provider: Option<String>,

	/// Names of additional capability markers to treat as injection markers.
	#[serde(default)]
	pub custom_injection_markers: Vec<String>,

	/// Registry names of additional injection provider implementations.
	#[serde(default)]
	pub custom_injection_providers: Vec<String>,
}

impl Settings {
	/// Creates empty settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the mock provider implementation name.
	pub fn with_mock_provider(mut self, name: impl Into<String>) -> Self {
		self.mock_provider = Some(name.into());
		self
	}

	/// Adds a custom injection marker name.
	pub fn with_custom_marker(mut self, name: impl Into<String>) -> Self {
		self.custom_injection_markers.push(name.into());
		self
	}

	/// Adds a custom injection provider name.
	pub fn with_custom_provider(mut self, name: impl Into<String>) -> Self {
		self.custom_injection_providers.push(name.into());
		self
	}

	/// Parses settings from a TOML document.
	pub fn from_toml_str(raw: &str) -> SettingsResult<Self> {
		Ok(toml::from_str(raw)?)
	}

	/// Reads and parses a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.display().to_string(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading settings file");
		Self::from_toml_str(&raw)
	}

	/// Loads settings from the process environment.
	///
	/// A `.env` file is loaded first when present (best effort). The marker
	/// and provider lists are comma-separated; entries are trimmed and empty
	/// entries dropped. An empty or whitespace-only mock provider variable
	/// counts as unset.
	pub fn from_env() -> Self {
		let _ = dotenv::dotenv();

		let mock_provider = env::var(ENV_MOCK_PROVIDER)
			.ok()
			.map(|value| value.trim().to_string())
			.filter(|value| !value.is_empty());

		Self {
			mock_provider,
			custom_injection_markers: split_list(env::var(ENV_CUSTOM_MARKERS).ok()),
			custom_injection_providers: split_list(env::var(ENV_CUSTOM_PROVIDERS).ok()),
		}
	}
}

fn split_list(raw: Option<String>) -> Vec<String> {
	raw.map(|value| {
		value
			.split(',')
			.map(str::trim)
			.filter(|entry| !entry.is_empty())
			.map(str::to_string)
			.collect()
	})
	.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;
	use serial_test::serial;
	use std::io::Write;

	#[rstest]
	fn builder_collects_entries() {
		let settings = Settings::new()
			.with_mock_provider("stub")
			.with_custom_marker("a::First")
			.with_custom_marker("a::Second")
			.with_custom_provider("a::Provider");

		assert_eq!(settings.mock_provider.as_deref(), Some("stub"));
		assert_eq!(settings.custom_injection_markers, vec!["a::First", "a::Second"]);
		assert_eq!(settings.custom_injection_providers, vec!["a::Provider"]);
	}

	#[rstest]
	fn toml_defaults_to_empty_collections() {
		let settings = Settings::from_toml_str("").unwrap();

		assert_eq!(settings, Settings::default());
	}

	#[rstest]
	fn toml_rejects_malformed_document() {
		let result = Settings::from_toml_str("mock_provider = [broken");

		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	fn file_round_trip() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "mock_provider = \"stub\"").unwrap();

		let settings = Settings::from_file(file.path()).unwrap();

		assert_eq!(settings.mock_provider.as_deref(), Some("stub"));
	}

	#[rstest]
	fn missing_file_reports_path() {
		let result = Settings::from_file("/no/such/bodkin.toml");

		match result {
			Err(SettingsError::Io { path, .. }) => assert_eq!(path, "/no/such/bodkin.toml"),
			other => panic!("expected io error, got {other:?}"),
		}
	}

	#[rstest]
	#[serial]
	fn env_lists_are_split_and_trimmed() {
		unsafe {
			env::set_var(ENV_MOCK_PROVIDER, "stub");
			env::set_var(ENV_CUSTOM_MARKERS, " a::One , ,a::Two");
			env::set_var(ENV_CUSTOM_PROVIDERS, "p::One");
		}

		let settings = Settings::from_env();

		unsafe {
			env::remove_var(ENV_MOCK_PROVIDER);
			env::remove_var(ENV_CUSTOM_MARKERS);
			env::remove_var(ENV_CUSTOM_PROVIDERS);
		}

		assert_eq!(settings.mock_provider.as_deref(), Some("stub"));
		assert_eq!(settings.custom_injection_markers, vec!["a::One", "a::Two"]);
		assert_eq!(settings.custom_injection_providers, vec!["p::One"]);
	}

	#[rstest]
	#[serial]
	fn blank_mock_provider_counts_as_unset() {
		unsafe {
			env::set_var(ENV_MOCK_PROVIDER, "   ");
		}

		let settings = Settings::from_env();

		unsafe {
			env::remove_var(ENV_MOCK_PROVIDER);
		}

		assert_eq!(settings.mock_provider, None);
	}
}
