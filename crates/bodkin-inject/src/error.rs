//! Engine errors

use bodkin_mock::MockProviderError;
use thiserror::Error;

/// Fatal errors raised while constructing the injection engine.
#[derive(Debug, Error)]
pub enum InjectError {
	/// The configured mock provider is missing, unknown, or failed to
	/// instantiate. There is no degraded mode.
	#[error(transparent)]
	MockProvider(#[from] MockProviderError),
}

pub type InjectResult<T> = Result<T, InjectError>;

/// Recoverable per-entry failures during extension loading. Logged and
/// skipped; never abort engine construction.
#[derive(Debug, Error)]
pub enum ProviderRegistrationError {
	#[error("no injection provider named '{0}' is registered")]
	Unknown(String),

	#[error("could not create an instance of injection provider '{name}': {reason}")]
	Instantiation { name: String, reason: String },
}
