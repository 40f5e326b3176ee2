//! Liveness checks for instances owned by an external host.
//!
//! A host runtime may destroy objects the registry still references. Types
//! it manages implement [`HostObject`]; a [`LazyHandle`](crate::LazyHandle)
//! parameterized with [`HostManaged`] consults that predicate before trusting
//! its cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// An object whose lifetime is controlled by a host runtime.
pub trait HostObject {
	/// Returns false once the host has destroyed this object.
	fn is_alive(&self) -> bool;
}

/// Strategy deciding whether a cached value is still usable.
pub trait LivenessProbe<T: ?Sized> {
	fn is_alive(value: &T) -> bool;
}

/// Probe for plain values: anything cached is alive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmanaged;

impl<T: ?Sized> LivenessProbe<T> for Unmanaged {
	#[inline]
	fn is_alive(_value: &T) -> bool {
		true
	}
}

/// Probe that defers to [`HostObject::is_alive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HostManaged;

impl<T: ?Sized + HostObject> LivenessProbe<T> for HostManaged {
	#[inline]
	fn is_alive(value: &T) -> bool {
		value.is_alive()
	}
}

/// Shared destruction flag a host flips when it tears an object down.
///
/// Clones observe the same flag. Host-managed types usually embed one and
/// forward [`HostObject::is_alive`] to it.
#[derive(Debug, Clone, Default)]
pub struct Lifeline {
	destroyed: Arc<AtomicBool>,
}

impl Lifeline {
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks the object as destroyed. Idempotent.
	pub fn destroy(&self) {
		if !self.destroyed.swap(true, Ordering::AcqRel) {
			tracing::trace!("lifeline destroyed");
		}
	}

	#[inline]
	pub fn is_alive(&self) -> bool {
		!self.destroyed.load(Ordering::Acquire)
	}
}

impl HostObject for Lifeline {
	fn is_alive(&self) -> bool {
		Lifeline::is_alive(self)
	}
}
