//! Injection markers
//!
//! A marker is an annotation-like type whose presence on a field or parameter
//! signals "this needs injection". Markers are identified by fully-qualified
//! name; the built-in names below are probed at engine construction and may
//! be absent from the environment (see [`crate::capability`]).

use std::borrow::Cow;
use std::fmt;

/// General-purpose inject marker.
pub const INJECT: &str = "bodkin::Inject";

/// Component-reference marker.
pub const COMPONENT: &str = "bodkin::Component";

/// Persistence-context marker.
pub const PERSISTENCE_CONTEXT: &str = "bodkin::PersistenceContext";

/// Persistence-unit marker.
pub const PERSISTENCE_UNIT: &str = "bodkin::PersistenceUnit";

/// Resource marker, carrying an optional mapped name.
pub const RESOURCE: &str = "bodkin::Resource";

/// Post-construct callback marker.
pub const POST_CONSTRUCT: &str = "bodkin::PostConstruct";

/// Identifier of a marker annotation type.
///
/// Cheap to clone and hashable; the engine's marker registry is a set of
/// these.
///
/// # Examples
///
/// ```
/// use bodkin_inject::Marker;
///
/// assert_eq!(Marker::inject().name(), "bodkin::Inject");
/// assert_eq!(Marker::custom("myapp::Session"), Marker::custom("myapp::Session"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
	name: Cow<'static, str>,
}

impl Marker {
	/// Marker for a statically known name.
	pub const fn from_static(name: &'static str) -> Self {
		Self {
			name: Cow::Borrowed(name),
		}
	}

	/// Marker for a name only known at runtime (custom markers from
	/// configuration).
	pub fn custom(name: impl Into<String>) -> Self {
		Self {
			name: Cow::Owned(name.into()),
		}
	}

	/// Fully-qualified marker name.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn inject() -> Self {
		Self::from_static(INJECT)
	}

	pub fn component() -> Self {
		Self::from_static(COMPONENT)
	}

	pub fn persistence_context() -> Self {
		Self::from_static(PERSISTENCE_CONTEXT)
	}

	pub fn persistence_unit() -> Self {
		Self::from_static(PERSISTENCE_UNIT)
	}

	pub fn resource() -> Self {
		Self::from_static(RESOURCE)
	}

	pub fn post_construct() -> Self {
		Self::from_static(POST_CONSTRUCT)
	}
}

impl fmt::Display for Marker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
