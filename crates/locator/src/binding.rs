use std::sync::Arc;

use crate::{Instance, TypeKey};

/// Association of a type and alias with one shared instance.
///
/// A binding carries no behaviour and performs no validation. An absent
/// alias is normalized to the empty string here, so every binding lives in
/// the same key space lookups use. An absent instance is stored as-is.
#[derive(Debug, Clone)]
pub struct Binding {
	key: TypeKey,
	alias: String,
	instance: Option<Instance>,
}

impl Binding {
	/// Creates a binding from an explicit type key.
	///
	/// The instance is not checked against `key`; a mismatch only surfaces
	/// when the binding is resolved.
	pub fn new(key: TypeKey, alias: Option<&str>, instance: Option<Instance>) -> Self {
		Self {
			key,
			alias: normalize_alias(alias).to_owned(),
			instance,
		}
	}

	/// Binds `instance` under the key of `T`.
	pub fn of<T: ?Sized + Send + Sync + 'static>(alias: Option<&str>, instance: Arc<T>) -> Self {
		Self::new(TypeKey::of::<T>(), alias, Some(Instance::new(instance)))
	}

	/// Creates a binding for `T` whose instance is absent.
	pub fn empty<T: ?Sized + 'static>(alias: Option<&str>) -> Self {
		Self::new(TypeKey::of::<T>(), alias, None)
	}

	#[inline]
	pub fn key(&self) -> TypeKey {
		self.key
	}

	#[inline]
	pub fn alias(&self) -> &str {
		&self.alias
	}

	#[inline]
	pub fn instance(&self) -> Option<&Instance> {
		self.instance.as_ref()
	}
}

/// Maps an absent alias to the canonical empty alias.
#[inline]
pub(crate) fn normalize_alias(alias: Option<&str>) -> &str {
	alias.unwrap_or_default()
}
