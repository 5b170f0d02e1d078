//! Injection targets

use crate::marker::Marker;

/// One marker as applied to a target, with its qualifying metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMarker {
	marker: Marker,
	mapped_name: Option<String>,
}

impl AppliedMarker {
	pub fn new(marker: Marker) -> Self {
		Self {
			marker,
			mapped_name: None,
		}
	}

	pub fn with_mapped_name(mut self, mapped_name: impl Into<String>) -> Self {
		self.mapped_name = Some(mapped_name.into());
		self
	}

	pub fn marker(&self) -> &Marker {
		&self.marker
	}

	pub fn mapped_name(&self) -> Option<&str> {
		self.mapped_name.as_deref()
	}
}

/// Describes one point needing injection: a field or parameter of the subject
/// under test.
///
/// Immutable; built fresh per target by the wiring collaborator and owned by
/// the caller for the duration of one resolution call.
///
/// # Examples
///
/// ```
/// use bodkin_inject::{InjectionTarget, Marker};
///
/// let target = InjectionTarget::new("DataSource", "data_source")
/// 	.with_mapped_marker(Marker::resource(), "jdbc/myDS");
///
/// assert!(target.has_marker(&Marker::resource()));
/// assert_eq!(target.mapped_name(&Marker::resource()), Some("jdbc/myDS"));
/// assert_eq!(target.mapped_name(&Marker::inject()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionTarget {
	type_name: String,
	member: String,
	markers: Vec<AppliedMarker>,
}

impl InjectionTarget {
	pub fn new(type_name: impl Into<String>, member: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			member: member.into(),
			markers: Vec::new(),
		}
	}

	/// Adds a marker without metadata.
	pub fn with_marker(mut self, marker: Marker) -> Self {
		self.markers.push(AppliedMarker::new(marker));
		self
	}

	/// Adds a marker carrying a mapped name.
	pub fn with_mapped_marker(mut self, marker: Marker, mapped_name: impl Into<String>) -> Self {
		self.markers
			.push(AppliedMarker::new(marker).with_mapped_name(mapped_name));
		self
	}

	/// Declared type of the field or parameter.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Name of the field or parameter.
	pub fn member(&self) -> &str {
		&self.member
	}

	/// All markers applied to this target.
	pub fn markers(&self) -> &[AppliedMarker] {
		&self.markers
	}

	pub fn has_marker(&self, marker: &Marker) -> bool {
		self.markers.iter().any(|applied| applied.marker() == marker)
	}

	/// Mapped name carried by the given marker, if any.
	pub fn mapped_name(&self, marker: &Marker) -> Option<&str> {
		self.markers
			.iter()
			.find(|applied| applied.marker() == marker)
			.and_then(AppliedMarker::mapped_name)
	}
}
