use std::any::Any;
use std::sync::Arc;

use crate::TypeKey;

/// Shared, type-erased reference to a bound object.
///
/// The erased payload is always an `Arc<T>`, which lets unsized targets such
/// as `dyn Logger` travel through the registry. Cloning an `Instance` only
/// bumps reference counts; the registry never owns the object exclusively.
#[derive(Clone)]
pub struct Instance {
	key: TypeKey,
	value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
	/// Wraps an already shared object.
	pub fn new<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
		Self {
			key: TypeKey::of::<T>(),
			value: Arc::new(value),
		}
	}

	/// Moves `value` into a fresh [`Arc`] and wraps it.
	pub fn from_value<T: Send + Sync + 'static>(value: T) -> Self {
		Self::new(Arc::new(value))
	}

	/// Returns the key of the type this instance was created for.
	#[inline]
	pub fn key(&self) -> TypeKey {
		self.key
	}

	/// Returns a typed handle if this instance was created for `T`.
	pub fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
		self.value.downcast_ref::<Arc<T>>().cloned()
	}

	/// Returns true if both instances share the same erased payload.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.value, &other.value)
	}
}

impl std::fmt::Debug for Instance {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Instance").field("type", &self.key.name()).finish_non_exhaustive()
	}
}

impl<T: ?Sized + Send + Sync + 'static> From<Arc<T>> for Instance {
	fn from(value: Arc<T>) -> Self {
		Self::new(value)
	}
}
