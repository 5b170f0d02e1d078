//! Custom injection provider registry
//!
//! Custom provider implementations register an [`InjectionProviderEntry`]
//! into the [`INJECTION_PROVIDERS`] distributed slice; the extension loader
//! resolves configured names against it during engine construction.

use crate::error::ProviderRegistrationError;
use crate::provider::InjectionProvider;
use linkme::distributed_slice;
use std::sync::Arc;

/// Registry entry for a custom injection provider implementation.
pub struct InjectionProviderEntry {
	/// Unique registry name, matched against configured provider names.
	pub name: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Factory producing a fresh instance.
	pub build: fn() -> Result<Arc<dyn InjectionProvider>, String>,
}

#[distributed_slice]
pub static INJECTION_PROVIDERS: [InjectionProviderEntry] = [..];

/// Resolves a configured provider name to a fresh instance.
///
/// Failures here are recoverable at the engine level: the extension loader
/// logs them and continues with the remaining entries.
pub fn resolve_injection_provider(
	name: &str,
) -> Result<Arc<dyn InjectionProvider>, ProviderRegistrationError> {
	for entry in INJECTION_PROVIDERS {
		if entry.name == name {
			return (entry.build)().map_err(|reason| ProviderRegistrationError::Instantiation {
				name: name.to_string(),
				reason,
			});
		}
	}

	Err(ProviderRegistrationError::Unknown(name.to_string()))
}

/// Names of all registered custom injection provider implementations.
pub fn list_injection_providers() -> Vec<&'static str> {
	INJECTION_PROVIDERS.iter().map(|entry| entry.name).collect()
}
