//! Injection providers

use crate::marker::Marker;
use crate::target::InjectionTarget;
use bodkin_mock::{MOCK_PROVIDER_TYPE_NAME, MockObject, MockProvider};
use std::sync::Arc;

/// Lookup key identifying an injected value.
///
/// Targets that derive the same key are meant to share the same injected
/// instance; the caching itself is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InjectionKey {
	/// Derived from the declared type of the target (the default rule).
	Type(String),
	/// Derived from a resource mapped name.
	MappedName(String),
}

/// Capability that can test applicability to a target, produce a value for
/// it, and derive a lookup key for that value.
///
/// Provider instances in the Default and Global tiers are shared across
/// concurrently running tests; implementations must not rely on
/// unsynchronized mutable state.
pub trait InjectionProvider: Send + Sync {
	/// Does this provider apply to this target?
	fn verify(&self, target: &InjectionTarget) -> bool;

	/// Produces the value to inject for the given declared type.
	fn injected_object(&self, type_name: &str) -> MockObject;

	/// Derives the lookup key for the injected value.
	fn key(&self, target: &InjectionTarget) -> InjectionKey;
}

/// Default provider: applies when its marker is present on the target,
/// manufactures the value through the shared mock provider, and keys the
/// value by the target's declared type.
pub struct DefaultMockInjectionProvider {
	marker: Marker,
	mock_provider: Arc<dyn MockProvider>,
}

impl DefaultMockInjectionProvider {
	pub fn new(marker: Marker, mock_provider: Arc<dyn MockProvider>) -> Self {
		Self {
			marker,
			mock_provider,
		}
	}

	pub fn marker(&self) -> &Marker {
		&self.marker
	}
}

impl InjectionProvider for DefaultMockInjectionProvider {
	fn verify(&self, target: &InjectionTarget) -> bool {
		target.has_marker(&self.marker)
	}

	fn injected_object(&self, type_name: &str) -> MockObject {
		self.mock_provider.create_mock(type_name)
	}

	fn key(&self, target: &InjectionTarget) -> InjectionKey {
		InjectionKey::Type(target.type_name().to_string())
	}
}

/// Resource provider: behaves like the default provider bound to the
/// resource marker, except that a non-empty mapped name overrides the key.
///
/// # Examples
///
/// ```
/// use bodkin_inject::{InjectionKey, InjectionProvider, InjectionTarget, Marker};
/// use bodkin_inject::ResourceMockInjectionProvider;
/// use bodkin_mock::StubMockProvider;
/// use std::sync::Arc;
///
/// let provider = ResourceMockInjectionProvider::new(Arc::new(StubMockProvider));
/// let target = InjectionTarget::new("DataSource", "data_source")
/// 	.with_mapped_marker(Marker::resource(), "jdbc/myDS");
///
/// assert_eq!(provider.key(&target), InjectionKey::MappedName("jdbc/myDS".into()));
/// ```
pub struct ResourceMockInjectionProvider {
	inner: DefaultMockInjectionProvider,
}

impl ResourceMockInjectionProvider {
	pub fn new(mock_provider: Arc<dyn MockProvider>) -> Self {
		Self {
			inner: DefaultMockInjectionProvider::new(Marker::resource(), mock_provider),
		}
	}
}

impl InjectionProvider for ResourceMockInjectionProvider {
	fn verify(&self, target: &InjectionTarget) -> bool {
		self.inner.verify(target)
	}

	fn injected_object(&self, type_name: &str) -> MockObject {
		self.inner.injected_object(type_name)
	}

	fn key(&self, target: &InjectionTarget) -> InjectionKey {
		match target.mapped_name(&Marker::resource()) {
			Some(mapped_name) if !mapped_name.is_empty() => {
				InjectionKey::MappedName(mapped_name.to_string())
			}
			_ => self.inner.key(target),
		}
	}
}

/// Special-cases the injection point whose declared type is the mock
/// provider capability itself, so a test subject may request injection of
/// the active mock provider instance.
pub struct MockProviderInjectionProvider {
	mock_provider: Arc<dyn MockProvider>,
}

impl MockProviderInjectionProvider {
	pub fn new(mock_provider: Arc<dyn MockProvider>) -> Self {
		Self { mock_provider }
	}
}

impl InjectionProvider for MockProviderInjectionProvider {
	fn verify(&self, target: &InjectionTarget) -> bool {
		target.type_name() == MOCK_PROVIDER_TYPE_NAME
	}

	fn injected_object(&self, _type_name: &str) -> MockObject {
		// The shared instance itself, not a manufactured mock.
		Arc::new(Arc::clone(&self.mock_provider))
	}

	fn key(&self, target: &InjectionTarget) -> InjectionKey {
		InjectionKey::Type(target.type_name().to_string())
	}
}

/// Tagged dispatch over the built-in provider variants.
///
/// The engine registers its built-ins through this enum so that small
/// synthetic provider sets can be enumerated exhaustively in tests; custom
/// providers stay behind the [`InjectionProvider`] trait object.
pub enum BuiltinProvider {
	Default(DefaultMockInjectionProvider),
	Resource(ResourceMockInjectionProvider),
	ActiveMock(MockProviderInjectionProvider),
}

impl InjectionProvider for BuiltinProvider {
	fn verify(&self, target: &InjectionTarget) -> bool {
		match self {
			Self::Default(provider) => provider.verify(target),
			Self::Resource(provider) => provider.verify(target),
			Self::ActiveMock(provider) => provider.verify(target),
		}
	}

	fn injected_object(&self, type_name: &str) -> MockObject {
		match self {
			Self::Default(provider) => provider.injected_object(type_name),
			Self::Resource(provider) => provider.injected_object(type_name),
			Self::ActiveMock(provider) => provider.injected_object(type_name),
		}
	}

	fn key(&self, target: &InjectionTarget) -> InjectionKey {
		match self {
			Self::Default(provider) => provider.key(target),
			Self::Resource(provider) => provider.key(target),
			Self::ActiveMock(provider) => provider.key(target),
		}
	}
}
