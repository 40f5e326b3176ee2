use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::binding::normalize_alias;
use crate::{Binding, Instance, LocatorError, Result, TypeKey};


type AliasMap = FxHashMap<String, Binding>;

/// Two-level table of bindings: type key, then alias.
///
/// A type entry exists only while at least one alias is bound under it.
/// Inserting at an occupied `(type, alias)` slot replaces the previous
/// binding without error.
///
/// Cloning is cheap and yields a handle to the same table. The map sits
/// behind a lock so a registry can live in a `static`, but callers get no
/// ordering guarantees between concurrent mutations.
#[derive(Clone)]
pub struct Registry {
	label: &'static str,
	entries: Arc<RwLock<FxHashMap<TypeKey, AliasMap>>>,
}

impl Registry {
	/// Creates an empty registry. `label` tags its log output.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			entries: Arc::new(RwLock::new(FxHashMap::default())),
		}
	}

	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Stores `binding`, replacing any binding at the same type and alias.
	pub fn add(&self, binding: Binding) {
		let key = binding.key();
		let alias = binding.alias().to_owned();

		let previous = self
			.entries
			.write()
			.entry(key)
			.or_default()
			.insert(alias.clone(), binding);

		if previous.is_some() {
			tracing::debug!(registry = self.label, ty = key.name(), alias = alias.as_str(), "binding replaced");
		} else {
			tracing::trace!(registry = self.label, ty = key.name(), alias = alias.as_str(), "binding added");
		}
	}

	/// Removes the binding stored at `binding`'s type and alias.
	///
	/// Only the key is consulted; the slot is cleared even if it now holds a
	/// different instance.
	pub fn remove(&self, binding: &Binding) {
		self.remove_slot(binding.key(), binding.alias());
	}

	/// Removes the binding at `key` and `alias`. Missing entries are ignored.
	pub fn remove_key(&self, key: TypeKey, alias: Option<&str>) {
		self.remove_slot(key, normalize_alias(alias));
	}

	/// Removes the binding for `T` at `alias`.
	pub fn remove_type<T: ?Sized + 'static>(&self, alias: Option<&str>) {
		self.remove_key(TypeKey::of::<T>(), alias);
	}

	fn remove_slot(&self, key: TypeKey, alias: &str) {
		let mut entries = self.entries.write();
		let Some(aliases) = entries.get_mut(&key) else {
			return;
		};

		if aliases.remove(alias).is_some() {
			tracing::trace!(registry = self.label, ty = key.name(), alias, "binding removed");
		}

		if aliases.is_empty() {
			entries.remove(&key);
			tracing::debug!(registry = self.label, ty = key.name(), "type entry dropped");
		}
	}

	/// Resolves the instance bound to `T` at `alias`.
	///
	/// Returns `Ok(None)` when nothing is bound there or the binding holds no
	/// instance.
	///
	/// # Errors
	///
	/// Returns [`LocatorError::TypeMismatch`] if the stored instance was
	/// created for a type other than `T`.
	pub fn get<T: ?Sized + Send + Sync + 'static>(&self, alias: Option<&str>) -> Result<Option<Arc<T>>> {
		let alias = normalize_alias(alias);
		let Some(instance) = self.lookup(TypeKey::of::<T>(), alias) else {
			tracing::trace!(registry = self.label, ty = std::any::type_name::<T>(), alias, "lookup miss");
			return Ok(None);
		};

		match instance.downcast::<T>() {
			Some(value) => Ok(Some(value)),
			None => {
				let expected = std::any::type_name::<T>();
				let found = instance.key().name();
				tracing::warn!(registry = self.label, expected, found, alias, "bound instance has the wrong type");
				Err(LocatorError::TypeMismatch {
					expected,
					found,
					alias: alias.to_owned(),
				})
			}
		}
	}

	/// Resolves a value-like `T`, falling back to `T::default()` on a miss.
	///
	/// # Errors
	///
	/// Same as [`Registry::get`].
	pub fn get_or_default<T: Clone + Default + Send + Sync + 'static>(&self, alias: Option<&str>) -> Result<T> {
		Ok(self.get::<T>(alias)?.map(|value| T::clone(&value)).unwrap_or_default())
	}

	/// Returns true if a binding exists for `T` at `alias`, even one whose
	/// instance is absent.
	pub fn contains<T: ?Sized + 'static>(&self, alias: Option<&str>) -> bool {
		self.entries
			.read()
			.get(&TypeKey::of::<T>())
			.is_some_and(|aliases| aliases.contains_key(normalize_alias(alias)))
	}

	/// Returns every alias bound under `T`, sorted.
	pub fn aliases<T: ?Sized + 'static>(&self) -> Vec<String> {
		let entries = self.entries.read();
		let Some(aliases) = entries.get(&TypeKey::of::<T>()) else {
			return Vec::new();
		};
		let mut aliases: Vec<_> = aliases.keys().cloned().collect();
		aliases.sort();
		aliases
	}

	/// Number of types with at least one binding.
	pub fn type_count(&self) -> usize {
		self.entries.read().len()
	}

	/// Total number of bindings across all types.
	pub fn len(&self) -> usize {
		self.entries.read().values().map(AliasMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Drops every binding.
	pub fn clear(&self) {
		self.entries.write().clear();
		tracing::debug!(registry = self.label, "registry cleared");
	}

	fn lookup(&self, key: TypeKey, alias: &str) -> Option<Instance> {
		self.entries.read().get(&key)?.get(alias)?.instance().cloned()
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new("registry")
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("types", &self.type_count())
			.field("bindings", &self.len())
			.finish()
	}
}
