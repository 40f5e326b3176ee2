use std::marker::PhantomData;
use std::sync::Arc;

use sdi_locator::{Registry, Result};

use crate::liveness::{LivenessProbe, Unmanaged};


/// Field that resolves its value from a [`Registry`] on demand.
///
/// The handle is unresolved while its cache is empty or the probe `P`
/// reports the cached value dead. A read in that state queries the registry
/// for `T` under the handle's alias and caches whatever comes back, including
/// `None`. A read in the resolved state returns the cache untouched, so later
/// registry changes are not observed until the cache becomes invalid.
///
/// ```
/// use std::sync::Arc;
///
/// use sdi_inject::{Binding, LazyHandle, Registry};
///
/// let registry = Registry::new("doc");
/// let mut port = LazyHandle::<u16>::in_registry(registry.clone(), Some("port"));
/// assert_eq!(port.get().unwrap(), None);
///
/// registry.add(Binding::of(Some("port"), Arc::new(8080u16)));
/// assert_eq!(port.get().unwrap().as_deref(), Some(&8080));
/// ```
pub struct LazyHandle<T: ?Sized, P = Unmanaged> {
	value: Option<Arc<T>>,
	alias: String,
	registry: Registry,
	probe: PhantomData<fn() -> P>,
}

impl<T, P> LazyHandle<T, P>
where
	T: ?Sized + Send + Sync + 'static,
	P: LivenessProbe<T>,
{
	/// Creates an unaliased handle over the global registry.
	pub fn new() -> Self {
		Self::in_registry(sdi_locator::global().clone(), None)
	}

	/// Creates a handle over the global registry for `alias`.
	pub fn aliased(alias: &str) -> Self {
		Self::in_registry(sdi_locator::global().clone(), Some(alias))
	}

	/// Creates a handle resolving from `registry`.
	pub fn in_registry(registry: Registry, alias: Option<&str>) -> Self {
		Self {
			value: None,
			alias: alias.unwrap_or_default().to_owned(),
			registry,
			probe: PhantomData,
		}
	}

	#[inline]
	pub fn alias(&self) -> &str {
		&self.alias
	}

	/// Returns true if the cache holds a value the probe considers alive.
	pub fn is_resolved(&self) -> bool {
		self.value.as_deref().is_some_and(|value| P::is_alive(value))
	}

	/// Returns the cached value, re-resolving it first if it is invalid.
	///
	/// # Errors
	///
	/// Propagates [`LocatorError::TypeMismatch`](sdi_locator::LocatorError)
	/// from the registry. The cache is left as it was.
	pub fn get(&mut self) -> Result<Option<Arc<T>>> {
		if !self.is_resolved() {
			tracing::debug!(
				registry = self.registry.label(),
				ty = std::any::type_name::<T>(),
				alias = self.alias.as_str(),
				stale = self.value.is_some(),
				"resolving lazy handle",
			);
			self.value = self.registry.get::<T>(Some(self.alias.as_str()))?;
		}
		Ok(self.value.clone())
	}

	/// Overwrites the cache without consulting the registry.
	///
	/// The next [`get`](Self::get) validates the new value like any other.
	pub fn set(&mut self, value: Option<Arc<T>>) {
		self.value = value;
	}

	/// Drops the cached value so the next read resolves again.
	pub fn invalidate(&mut self) {
		self.value = None;
	}
}

impl<T, P> Default for LazyHandle<T, P>
where
	T: ?Sized + Send + Sync + 'static,
	P: LivenessProbe<T>,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<T: ?Sized, P> std::fmt::Debug for LazyHandle<T, P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LazyHandle")
			.field("type", &std::any::type_name::<T>())
			.field("alias", &self.alias)
			.field("registry", &self.registry.label())
			.field("cached", &self.value.is_some())
			.finish()
	}
}
