//! Mock provider capability

use std::any::Any;
use std::sync::Arc;

/// Opaque handle to a manufactured test double.
///
/// The wiring collaborator that injects values into the subject under test
/// downcasts the handle to the concrete double it expects.
pub type MockObject = Arc<dyn Any + Send + Sync>;

/// Declared type name under which a subject under test may request injection
/// of the active mock provider itself.
pub const MOCK_PROVIDER_TYPE_NAME: &str = "bodkin_mock::MockProvider";

/// Strategy for manufacturing test-double instances of arbitrary types.
///
/// Exactly one implementation is instantiated per engine, selected by
/// configuration, and shared read-only by every default provider. When tests
/// run in parallel against one engine, `create_mock` is invoked concurrently;
/// implementations must not rely on unsynchronized mutable state.
pub trait MockProvider: Send + Sync {
	/// Registry name of this implementation.
	fn name(&self) -> &'static str;

	/// Manufactures a test double for the given declared type.
	fn create_mock(&self, type_name: &str) -> MockObject;
}
