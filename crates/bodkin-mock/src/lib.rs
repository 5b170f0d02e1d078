//! # Bodkin Mock Providers
//!
//! The mock provider capability: the single pluggable strategy object that
//! manufactures test-double instances for arbitrary types, plus the
//! name-keyed factory registry through which one implementation is selected
//! by configuration.
//!
//! Implementations register themselves into the [`MOCK_PROVIDERS`]
//! distributed slice and are resolved by name exactly once per engine:
//!
//! ```rust
//! use bodkin_mock::{MockProvider, resolve_mock_provider};
//!
//! let provider = resolve_mock_provider(Some("stub")).unwrap();
//! assert_eq!(provider.name(), "stub");
//! ```

mod error;
mod factory;
mod provider;
mod stub;

pub use error::{MockProviderError, MockResult};
pub use factory::{MOCK_PROVIDERS, MockProviderEntry, list_mock_providers, resolve_mock_provider};
pub use provider::{MOCK_PROVIDER_TYPE_NAME, MockObject, MockProvider};
pub use stub::{StubMock, StubMockProvider};
