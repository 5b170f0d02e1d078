//! # Bodkin Injection Engine
//!
//! The injection provider resolution engine: given a field or parameter of a
//! subject under test that carries an injection marker, decide which provider
//! furnishes its value and derive a stable lookup key for that value.
//!
//! Providers live in three tiers with fixed precedence - test-specific, then
//! globally configured custom providers, then built-in defaults - and the
//! resolver performs a first-match scan over their concatenation.
//!
//! ## Example
//!
//! ```rust
//! use bodkin_conf::Settings;
//! use bodkin_inject::{InjectionConfiguration, InjectionKey, InjectionTarget, Marker};
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
//!
//! ## Feature Flags
//!
//! Built-in capability markers are feature-gated, each independently
//! optional, modeling environments in which a marker type is not available:
//!
//! - `inject` (default) - general-purpose inject marker
//! - `component-model` (default) - component-reference marker
//! - `persistence` (default) - persistence-context and persistence-unit markers
//! - `annotations` (default) - resource and post-construct markers

pub mod capability;
mod configuration;
mod error;
pub mod marker;
mod postconstruct;
mod provider;
pub mod registry;
mod resolver;
mod target;

pub use capability::{CAPABILITIES, CapabilityEntry, CapabilityKind, CapabilityProbe};
pub use configuration::InjectionConfiguration;
pub use error::{InjectError, InjectResult, ProviderRegistrationError};
pub use marker::Marker;
pub use postconstruct::PostConstructProcessor;
pub use provider::{
	BuiltinProvider, DefaultMockInjectionProvider, InjectionKey, InjectionProvider,
	MockProviderInjectionProvider, ResourceMockInjectionProvider,
};
pub use registry::{
	INJECTION_PROVIDERS, InjectionProviderEntry, list_injection_providers,
	resolve_injection_provider,
};
pub use resolver::{Resolution, resolve};
pub use target::{AppliedMarker, InjectionTarget};

// The settings shape consumed at construction time.
pub use bodkin_conf::Settings;
