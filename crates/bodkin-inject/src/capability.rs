//! Capability probe
//!
//! Determines, once at engine construction, which optional capability types
//! are present in the environment. Built-in markers are feature-gated;
//! downstream crates contribute additional capabilities through the
//! [`CAPABILITIES`] distributed slice. Absence is a normal outcome, never an
//! error.

use crate::marker::{self, Marker};
use linkme::distributed_slice;

/// What a capability name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
	/// A marker annotation type, eligible for the injection marker registry.
	Marker,
	/// A resolvable type that is not a marker annotation. Registering it as
	/// an injection marker is silently ignored.
	Service,
}

/// One capability type known to the environment.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityEntry {
	/// Fully-qualified capability name.
	pub name: &'static str,
	pub kind: CapabilityKind,
}

/// Capability types contributed by downstream crates.
#[distributed_slice]
pub static CAPABILITIES: [CapabilityEntry] = [..];

/// Snapshot of the capability types available to the engine.
///
/// Queried independently for each optional marker during engine
/// construction; lookups never fail.
///
/// # Examples
///
/// ```
/// use bodkin_inject::{CapabilityProbe, Marker, marker};
///
/// let probe = CapabilityProbe::from_environment();
/// assert_eq!(probe.lookup_marker(marker::INJECT), Some(Marker::inject()));
/// assert_eq!(probe.lookup_marker("no::Such"), None);
/// ```
#[derive(Debug, Clone)]
pub struct CapabilityProbe {
	entries: Vec<CapabilityEntry>,
}

impl CapabilityProbe {
	/// Probes the real environment: enabled built-ins plus everything
	/// registered in [`CAPABILITIES`].
	pub fn from_environment() -> Self {
		let mut entries = builtin_entries();
		entries.extend(CAPABILITIES.iter().copied());
		Self { entries }
	}

	/// An explicit environment, for modeling absent capabilities in tests.
	pub fn with_entries(entries: impl IntoIterator<Item = CapabilityEntry>) -> Self {
		Self {
			entries: entries.into_iter().collect(),
		}
	}

	/// Resolves a capability name, if present.
	pub fn lookup(&self, name: &str) -> Option<&CapabilityEntry> {
		self.entries.iter().find(|entry| entry.name == name)
	}

	/// Resolves a capability name to a marker. Names that resolve to a
	/// non-marker capability yield `None`.
	pub fn lookup_marker(&self, name: &str) -> Option<Marker> {
		match self.lookup(name) {
			Some(entry) if entry.kind == CapabilityKind::Marker => {
				Some(Marker::from_static(entry.name))
			}
			_ => None,
		}
	}
}

fn builtin_entries() -> Vec<CapabilityEntry> {
	#[allow(unused_mut)]
	let mut entries = Vec::new();

	#[cfg(feature = "inject")]
	entries.push(CapabilityEntry {
		name: marker::INJECT,
		kind: CapabilityKind::Marker,
	});

	#[cfg(feature = "component-model")]
	entries.push(CapabilityEntry {
		name: marker::COMPONENT,
		kind: CapabilityKind::Marker,
	});

	#[cfg(feature = "persistence")]
	{
		entries.push(CapabilityEntry {
			name: marker::PERSISTENCE_CONTEXT,
			kind: CapabilityKind::Marker,
		});
		entries.push(CapabilityEntry {
			name: marker::PERSISTENCE_UNIT,
			kind: CapabilityKind::Marker,
		});
	}

	#[cfg(feature = "annotations")]
	{
		entries.push(CapabilityEntry {
			name: marker::RESOURCE,
			kind: CapabilityKind::Marker,
		});
		entries.push(CapabilityEntry {
			name: marker::POST_CONSTRUCT,
			kind: CapabilityKind::Marker,
		});
	}

	entries
}
