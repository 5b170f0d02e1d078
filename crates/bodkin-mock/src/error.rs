//! Mock provider errors
//!
//! Every variant here is a fatal configuration error: the engine cannot be
//! constructed without a working mock provider, and there is no fallback
//! strategy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockProviderError {
	#[error("no mock provider configured")]
	NotConfigured,

	#[error("could not load mock provider '{name}': no such provider is registered")]
	Unknown { name: String },

	#[error("could not create a new instance of mock provider '{name}': {reason}")]
	Instantiation { name: String, reason: String },
}

pub type MockResult<T> = Result<T, MockProviderError>;
