//! Mock provider factory
//!
//! Implementations register a [`MockProviderEntry`] into the
//! [`MOCK_PROVIDERS`] distributed slice and are selected by the configured
//! name. Resolution happens once, at engine construction, and every failure
//! is fatal.

use crate::error::{MockProviderError, MockResult};
use crate::provider::MockProvider;
use linkme::distributed_slice;
use std::sync::Arc;

/// Registry entry for a mock provider implementation.
pub struct MockProviderEntry {
	/// Unique registry name, matched against the configured provider name.
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Factory producing a fresh instance.
	pub build: fn() -> Result<Arc<dyn MockProvider>, String>,
}

#[distributed_slice]
pub static MOCK_PROVIDERS: [MockProviderEntry] = [..];

/// Resolves the configured mock provider name to a fresh instance.
///
/// `None`, an empty string, or a whitespace-only string count as "not
/// configured". An unrecognized name and a failing factory are reported as
/// distinct errors, each naming the configured provider.
///
/// # Examples
///
/// ```
/// use bodkin_mock::{MockProvider, MockProviderError, resolve_mock_provider};
///
/// let provider = resolve_mock_provider(Some("stub")).unwrap();
/// assert_eq!(provider.name(), "stub");
///
/// let missing = resolve_mock_provider(None);
/// assert!(matches!(missing, Err(MockProviderError::NotConfigured)));
/// ```
pub fn resolve_mock_provider(configured: Option<&str>) -> MockResult<Arc<dyn MockProvider>> {
	let name = match configured.map(str::trim) {
		Some(name) if !name.is_empty() => name,
		_ => return Err(MockProviderError::NotConfigured),
	};

	for entry in MOCK_PROVIDERS {
		if entry.name == name {
			tracing::debug!(provider = entry.name, "instantiating mock provider");
			return (entry.build)().map_err(|reason| MockProviderError::Instantiation {
				name: name.to_string(),
				reason,
			});
		}
	}

	Err(MockProviderError::Unknown {
		name: name.to_string(),
	})
}

/// Names of all registered mock provider implementations.
pub fn list_mock_providers() -> Vec<&'static str> {
	MOCK_PROVIDERS.iter().map(|entry| entry.name).collect()
}
