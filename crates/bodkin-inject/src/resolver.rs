//! First-match resolution

use crate::provider::{InjectionKey, InjectionProvider};
use crate::target::InjectionTarget;
use bodkin_mock::MockObject;
use std::sync::Arc;

/// Outcome of a successful resolution: the injected value and the lookup key
/// under which the caller may cache and share it.
pub struct Resolution {
	pub key: InjectionKey,
	pub value: MockObject,
}

/// Scans `providers` in iteration order and returns the first match.
///
/// The iteration order must already reflect tier precedence; the first
/// provider whose `verify` holds produces the value and the key, and later
/// providers are never consulted. `None` means no provider applied - whether
/// that target was mandatory is the caller's decision. The scan borrows
/// caller-supplied state and mutates nothing.
///
/// # Examples
///
/// ```
/// use bodkin_inject::{InjectionProvider, InjectionTarget, Marker, resolve};
/// use std::sync::Arc;
///
/// let providers: Vec<Arc<dyn InjectionProvider>> = Vec::new();
/// let target = InjectionTarget::new("UserRepository", "repository")
/// 	.with_marker(Marker::inject());
///
/// assert!(resolve(&providers, &target).is_none());
/// ```
pub fn resolve<'a, I>(providers: I, target: &InjectionTarget) -> Option<Resolution>
where
	I: IntoIterator<Item = &'a Arc<dyn InjectionProvider>>,
{
	for provider in providers {
		if provider.verify(target) {
			let value = provider.injected_object(target.type_name());
			let key = provider.key(target);
			return Some(Resolution { key, value });
		}
	}

	None
}
