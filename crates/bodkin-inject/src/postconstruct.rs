//! Post-construct processor

use crate::marker::Marker;
use std::collections::HashSet;

/// Holds the probed post-construct markers.
///
/// The engine constructs and exposes this processor; invoking callbacks
/// after injection is the post-construction collaborator's job, not the
/// engine's.
#[derive(Debug, Clone, Default)]
pub struct PostConstructProcessor {
	markers: HashSet<Marker>,
}

impl PostConstructProcessor {
	pub fn new(markers: impl IntoIterator<Item = Marker>) -> Self {
		Self {
			markers: markers.into_iter().collect(),
		}
	}

	pub fn is_post_construct_marker(&self, marker: &Marker) -> bool {
		self.markers.contains(marker)
	}

	pub fn supported_markers(&self) -> impl Iterator<Item = &Marker> {
		self.markers.iter()
	}
}
