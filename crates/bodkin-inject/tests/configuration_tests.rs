//! Tests for engine construction and tier precedence

use bodkin_conf::Settings;
use bodkin_inject::{
	CapabilityEntry, CapabilityKind, CapabilityProbe, InjectError, InjectionConfiguration,
	InjectionKey, InjectionProvider, InjectionTarget, Marker, marker,
};
use bodkin_mock::{MOCK_PROVIDER_TYPE_NAME, MockObject, MockProvider, MockProviderError};
use rstest::*;
use std::sync::Arc;

/// Test-tier provider that applies to every target and identifies itself
/// through its key.
struct LabeledProvider {
	label: &'static str,
}

impl LabeledProvider {
	fn new(label: &'static str) -> Arc<dyn InjectionProvider> {
		Arc::new(Self { label })
	}
}

impl InjectionProvider for LabeledProvider {
	fn verify(&self, _target: &InjectionTarget) -> bool {
		true
	}

	fn injected_object(&self, _type_name: &str) -> MockObject {
		Arc::new(self.label)
	}

	fn key(&self, _target: &InjectionTarget) -> InjectionKey {
		InjectionKey::Type(self.label.to_string())
	}
}

fn stub_settings() -> Settings {
	Settings::new().with_mock_provider("stub")
}

fn inject_target() -> InjectionTarget {
	InjectionTarget::new("UserRepository", "repository").with_marker(Marker::inject())
}

#[rstest]
#[case(Marker::inject())]
#[case(Marker::component())]
#[case(Marker::persistence_context())]
#[case(Marker::persistence_unit())]
#[case(Marker::resource())]
fn present_markers_are_supported_after_construction(#[case] marker: Marker) {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();

	// Act / Assert
	assert!(configuration.is_marker_supported(&marker));
}

#[rstest]
fn absent_markers_are_not_supported() {
	// Arrange - an environment providing only the inject marker
	let probe = CapabilityProbe::with_entries([CapabilityEntry {
		name: marker::INJECT,
		kind: CapabilityKind::Marker,
	}]);

	// Act
	let configuration = InjectionConfiguration::with_probe(&stub_settings(), probe).unwrap();

	// Assert
	assert!(configuration.is_marker_supported(&Marker::inject()));
	assert!(!configuration.is_marker_supported(&Marker::persistence_context()));
	assert!(!configuration.is_marker_supported(&Marker::persistence_unit()));
	assert!(!configuration.is_marker_supported(&Marker::resource()));

	// An absent marker contributes no provider either.
	let persistence_target =
		InjectionTarget::new("EntityManager", "em").with_marker(Marker::persistence_context());
	assert!(configuration.resolve(&persistence_target).is_none());
}

#[rstest]
fn test_tier_wins_and_last_added_wins_within_it() {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();

	// Act
	configuration
		.add_injection_providers([LabeledProvider::new("p1"), LabeledProvider::new("p2")]);

	// Assert - p2 before p1 before any global/default provider
	let resolution = configuration.resolve(&inject_target()).unwrap();
	assert_eq!(resolution.key, InjectionKey::Type("p2".into()));

	let sequence = configuration.providers();
	assert_eq!(sequence[0].key(&inject_target()), InjectionKey::Type("p2".into()));
	assert_eq!(sequence[1].key(&inject_target()), InjectionKey::Type("p1".into()));
}

#[rstest]
fn separate_additions_keep_last_added_first() {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();

	// Act
	configuration.add_injection_provider(LabeledProvider::new("first"));
	configuration.add_injection_provider(LabeledProvider::new("second"));

	// Assert
	let resolution = configuration.resolve(&inject_target()).unwrap();
	assert_eq!(resolution.key, InjectionKey::Type("second".into()));
}

#[rstest]
fn provider_sequence_reflects_additions_after_construction() {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();
	let before = configuration.providers().len();

	// Act
	configuration.add_injection_provider(LabeledProvider::new("late"));

	// Assert - the concatenation is recomputed from the live tiers
	assert_eq!(configuration.providers().len(), before + 1);
}

#[rstest]
fn subject_may_request_the_active_mock_provider_itself() {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();
	let target = InjectionTarget::new(MOCK_PROVIDER_TYPE_NAME, "mock_provider");

	// Act
	let resolution = configuration.resolve(&target).unwrap();

	// Assert - the shared instance, not a manufactured mock
	let provider = resolution
		.value
		.downcast_ref::<Arc<dyn MockProvider>>()
		.unwrap();
	assert_eq!(provider.name(), "stub");
	assert!(Arc::ptr_eq(provider, configuration.mock_provider()));
}

#[rstest]
fn unconfigured_mock_provider_fails_construction() {
	// Act
	let result = InjectionConfiguration::from_settings(&Settings::new());

	// Assert
	match result {
		Err(InjectError::MockProvider(MockProviderError::NotConfigured)) => {}
		other => panic!("expected not-configured error, got {:?}", other.err()),
	}
}

#[rstest]
fn unknown_mock_provider_fails_construction_naming_it() {
	// Arrange
	let settings = Settings::new().with_mock_provider("acme::Missing");

	// Act
	let error = InjectionConfiguration::from_settings(&settings).err().unwrap();

	// Assert
	assert!(error.to_string().contains("acme::Missing"));
}

#[rstest]
fn resource_key_derivation_applies_through_the_engine() {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();
	let target = InjectionTarget::new("DataSource", "data_source")
		.with_mapped_marker(Marker::resource(), "jdbc/myDS");

	// Act
	let resolution = configuration.resolve(&target).unwrap();

	// Assert
	assert_eq!(resolution.key, InjectionKey::MappedName("jdbc/myDS".into()));
}

#[rstest]
fn unmarked_target_resolves_to_none() {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();
	let target = InjectionTarget::new("PlainField", "field");

	// Act / Assert - the caller decides whether that target was mandatory
	assert!(configuration.resolve(&target).is_none());
}

#[rstest]
fn post_construct_marker_is_probed_with_the_environment() {
	// Arrange
	let configuration = InjectionConfiguration::from_settings(&stub_settings()).unwrap();

	// Assert
	assert!(
		configuration
			.post_construct_processor()
			.is_post_construct_marker(&Marker::post_construct())
	);
}

#[rstest]
fn absent_post_construct_capability_yields_empty_processor() {
	// Arrange
	let probe = CapabilityProbe::with_entries([CapabilityEntry {
		name: marker::INJECT,
		kind: CapabilityKind::Marker,
	}]);

	// Act
	let configuration = InjectionConfiguration::with_probe(&stub_settings(), probe).unwrap();

	// Assert
	assert_eq!(
		configuration
			.post_construct_processor()
			.supported_markers()
			.count(),
		0
	);
}
