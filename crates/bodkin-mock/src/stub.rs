//! Built-in stub provider

use crate::factory::{MOCK_PROVIDERS, MockProviderEntry};
use crate::provider::{MockObject, MockProvider};
use linkme::distributed_slice;
use std::sync::Arc;

/// Test double manufactured by [`StubMockProvider`].
///
/// Carries no behavior; it records which declared type was requested so the
/// wiring collaborator (and tests) can inspect what was injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubMock {
	type_name: String,
}

impl StubMock {
	/// Declared type this stub stands in for.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}
}

/// Mock provider that manufactures inert [`StubMock`] handles.
///
/// Registered under the name `"stub"`.
///
/// # Examples
///
/// ```
/// use bodkin_mock::{MockProvider, StubMock, StubMockProvider};
///
/// let provider = StubMockProvider;
/// let mock = provider.create_mock("UserRepository");
///
/// let stub = mock.downcast_ref::<StubMock>().unwrap();
/// assert_eq!(stub.type_name(), "UserRepository");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StubMockProvider;

impl MockProvider for StubMockProvider {
	fn name(&self) -> &'static str {
		"stub"
	}

	fn create_mock(&self, type_name: &str) -> MockObject {
		Arc::new(StubMock {
			type_name: type_name.to_string(),
		})
	}
}

#[distributed_slice(MOCK_PROVIDERS)]
static STUB_MOCK_PROVIDER: MockProviderEntry = MockProviderEntry {
	name: "stub",
	description: "Inert stubs that record the requested type",
	build: || Ok(Arc::new(StubMockProvider)),
};
