//! # Bodkin
//!
//! A test-double injection toolkit for Rust unit tests, inspired by
//! container-style enterprise test frameworks.
//!
//! Bodkin resolves the injection points of a subject under test against a
//! layered set of providers: test-specific providers first, then globally
//! configured custom providers, then the built-in defaults that manufacture
//! test doubles through a single configured mock provider.
//!
//! ## Crates
//!
//! - [`conf`] - the `Settings` read at engine construction (mock provider
//!   name, custom markers, custom providers)
//! - [`mock`] - the `MockProvider` capability and its name-keyed factory
//!   registry
//! - [`inject`] - the resolution engine itself: capability probe, marker
//!   registry, provider tiers, and the first-match resolver
//!
//! ## Feature Flags
//!
//! Capability markers are optional, mirroring environments where a marker
//! type may simply not be available:
//!
//! - `inject` (default) - the general-purpose inject marker
//! - `component-model` (default) - the component-reference marker
//! - `persistence` (default) - the persistence-context and persistence-unit
//!   markers
//! - `annotations` (default) - the resource and post-construct markers
//!
//! ## Quick Example
//!
//! ```rust
//! use bodkin::prelude::*;
//!
//! let settings = Settings::new().with_mock_provider("stub");
//! let configuration = InjectionConfiguration::from_settings(&settings).unwrap();
//!
//! let target = InjectionTarget::new("UserRepository", "repository")
//! 	.with_marker(Marker::inject());
//!
//! let resolution = configuration.resolve(&target).unwrap();
//! assert_eq!(resolution.key, InjectionKey::Type("UserRepository".into()));
//! ```

pub use bodkin_conf as conf;
pub use bodkin_inject as inject;
pub use bodkin_mock as mock;

pub mod prelude {
	//! Convenience re-exports of the types most callers need.

	pub use bodkin_conf::Settings;
	pub use bodkin_inject::{
		AppliedMarker, CapabilityProbe, InjectionConfiguration, InjectionKey, InjectionProvider,
		InjectionTarget, Marker, Resolution, resolve,
	};
	pub use bodkin_mock::{MockObject, MockProvider, StubMockProvider, resolve_mock_provider};
}
