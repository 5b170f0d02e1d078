//! Engine construction and provider tiers

use crate::capability::{CapabilityKind, CapabilityProbe};
use crate::error::InjectResult;
use crate::marker::{self, Marker};
use crate::postconstruct::PostConstructProcessor;
use crate::provider::{
	BuiltinProvider, DefaultMockInjectionProvider, InjectionProvider,
	MockProviderInjectionProvider, ResourceMockInjectionProvider,
};
use crate::registry::resolve_injection_provider;
use crate::resolver::{self, Resolution};
use crate::target::InjectionTarget;
use bodkin_conf::Settings;
use bodkin_mock::{MockProvider, resolve_mock_provider};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

/// The injection engine: three provider tiers with fixed precedence, the
/// marker registry, the shared mock provider, and the post-construct
/// processor.
///
/// Construction happens once; afterwards only the test tier can grow. The
/// Default and Global tiers are immutable and safe for concurrent read-only
/// access. Serializing concurrent additions to the test tier across tests
/// that share one engine is the caller's responsibility; the internal lock
/// only keeps the list itself consistent.
///
/// # Examples
///
/// ```
/// use bodkin_conf::Settings;
/// use bodkin_inject::{InjectionConfiguration, Marker};
///
/// let settings = Settings::new().with_mock_provider("stub");
/// let configuration = InjectionConfiguration::from_settings(&settings).unwrap();
///
/// assert!(configuration.is_marker_supported(&Marker::inject()));
/// assert!(!configuration.is_marker_supported(&Marker::custom("no::Such")));
/// ```
pub struct InjectionConfiguration {
	// Built-in default providers, lowest tier.
	default_providers: Vec<Arc<dyn InjectionProvider>>,
	// Custom providers from configuration, middle tier.
	global_providers: Vec<Arc<dyn InjectionProvider>>,
	// Test-specific providers, highest tier; prepend-on-add.
	test_providers: RwLock<Vec<Arc<dyn InjectionProvider>>>,
	markers: HashSet<Marker>,
	mock_provider: Arc<dyn MockProvider>,
	post_construct: PostConstructProcessor,
}

impl InjectionConfiguration {
	/// Builds the engine from environment-derived settings.
	pub fn from_env() -> InjectResult<Self> {
		Self::from_settings(&Settings::from_env())
	}

	/// Builds the engine against the real probed environment.
	pub fn from_settings(settings: &Settings) -> InjectResult<Self> {
		Self::with_probe(settings, CapabilityProbe::from_environment())
	}

	/// Builds the engine against an explicit capability environment.
	///
	/// # Errors
	///
	/// Fails fast when the configured mock provider is missing, unknown, or
	/// cannot be instantiated. Per-entry extension failures are logged and
	/// skipped instead.
	pub fn with_probe(settings: &Settings, probe: CapabilityProbe) -> InjectResult<Self> {
		let mock_provider = resolve_mock_provider(settings.mock_provider.as_deref())?;
		let post_construct =
			PostConstructProcessor::new(probe.lookup_marker(marker::POST_CONSTRUCT));

		let mut configuration = Self {
			default_providers: Vec::new(),
			global_providers: Vec::new(),
			test_providers: RwLock::new(Vec::new()),
			markers: HashSet::new(),
			mock_provider,
			post_construct,
		};

		for name in [
			marker::INJECT,
			marker::COMPONENT,
			marker::PERSISTENCE_CONTEXT,
			marker::PERSISTENCE_UNIT,
		] {
			configuration.register_default_marker(&probe, name);
		}
		configuration.register_resource(&probe);

		configuration.load_custom_markers(settings, &probe);
		configuration.load_custom_providers(settings);

		// The self-injection provider goes in front of every other default
		// so a subject may request the active mock provider itself.
		let self_injection =
			MockProviderInjectionProvider::new(Arc::clone(&configuration.mock_provider));
		configuration
			.default_providers
			.insert(0, Arc::new(BuiltinProvider::ActiveMock(self_injection)));

		Ok(configuration)
	}

	fn register_default_marker(&mut self, probe: &CapabilityProbe, name: &str) {
		let Some(marker) = probe.lookup_marker(name) else {
			return;
		};
		tracing::debug!(marker = %marker, "registering default injection provider");
		let provider =
			DefaultMockInjectionProvider::new(marker.clone(), Arc::clone(&self.mock_provider));
		self.default_providers
			.push(Arc::new(BuiltinProvider::Default(provider)));
		self.markers.insert(marker);
	}

	// The resource provider is appended, not prepended: it must come after
	// the plain defaults registered so far but still ahead of nothing else,
	// so its mapped-name key derivation is reachable for resource targets.
	fn register_resource(&mut self, probe: &CapabilityProbe) {
		let Some(marker) = probe.lookup_marker(marker::RESOURCE) else {
			return;
		};
		tracing::debug!(marker = %marker, "registering resource injection provider");
		self.markers.insert(marker);
		let provider = ResourceMockInjectionProvider::new(Arc::clone(&self.mock_provider));
		self.default_providers
			.push(Arc::new(BuiltinProvider::Resource(provider)));
	}

	fn load_custom_markers(&mut self, settings: &Settings, probe: &CapabilityProbe) {
		for name in &settings.custom_injection_markers {
			let Some(entry) = probe.lookup(name) else {
				tracing::warn!(marker = %name, "skipping unresolvable custom injection marker");
				continue;
			};
			// Only marker-kind capabilities enter the registry; the provider
			// is bound either way, matching the reflective original.
			if entry.kind == CapabilityKind::Marker {
				self.markers.insert(Marker::from_static(entry.name));
			}
			let provider = DefaultMockInjectionProvider::new(
				Marker::from_static(entry.name),
				Arc::clone(&self.mock_provider),
			);
			self.global_providers
				.insert(0, Arc::new(BuiltinProvider::Default(provider)));
		}
	}

	fn load_custom_providers(&mut self, settings: &Settings) {
		for name in &settings.custom_injection_providers {
			match resolve_injection_provider(name) {
				Ok(provider) => self.global_providers.insert(0, provider),
				Err(error) => {
					tracing::warn!(provider = %name, %error, "skipping custom injection provider");
				}
			}
		}
	}

	/// Prepends a provider into the test tier.
	///
	/// The most recently added provider wins within the tier, and the test
	/// tier wins over the Global and Default tiers.
	pub fn add_injection_provider(&self, provider: Arc<dyn InjectionProvider>) {
		self.add_injection_providers([provider]);
	}

	/// Prepends several providers into the test tier, in order; the last
	/// one ends up with the highest precedence.
	pub fn add_injection_providers<I>(&self, providers: I)
	where
		I: IntoIterator<Item = Arc<dyn InjectionProvider>>,
	{
		let mut tier = self
			.test_providers
			.write()
			.unwrap_or_else(PoisonError::into_inner);
		for provider in providers {
			tier.insert(0, provider);
		}
	}

	/// The full provider sequence in precedence order: test tier, then
	/// global, then default. Recomputed from the live tiers on every call.
	pub fn providers(&self) -> Vec<Arc<dyn InjectionProvider>> {
		let test = self
			.test_providers
			.read()
			.unwrap_or_else(PoisonError::into_inner);
		test.iter()
			.chain(self.global_providers.iter())
			.chain(self.default_providers.iter())
			.cloned()
			.collect()
	}

	/// Resolves a target against the full provider sequence.
	pub fn resolve(&self, target: &InjectionTarget) -> Option<Resolution> {
		let providers = self.providers();
		resolver::resolve(&providers, target)
	}

	/// Is the marker registered as a supported injection marker?
	///
	/// The wiring collaborator queries this per field/parameter to decide
	/// whether the resolver needs to be consulted at all.
	pub fn is_marker_supported(&self, marker: &Marker) -> bool {
		self.markers.contains(marker)
	}

	/// Immutable view of the supported markers.
	pub fn supported_markers(&self) -> impl Iterator<Item = &Marker> {
		self.markers.iter()
	}

	/// The single shared mock provider instance.
	pub fn mock_provider(&self) -> &Arc<dyn MockProvider> {
		&self.mock_provider
	}

	/// The post-construct processor; exposed, never invoked by the engine.
	pub fn post_construct_processor(&self) -> &PostConstructProcessor {
		&self.post_construct
	}
}
