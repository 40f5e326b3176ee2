//! The process-wide registry and free functions forwarding to it.
//!
//! Everything here is a thin wrapper over [`Registry`]; code that wants
//! explicit wiring can hold its own registry instead.

use std::sync::{Arc, LazyLock};

use crate::{Binding, Registry, Result, TypeKey};

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| Registry::new("global"));

/// Returns the process-wide registry, creating it empty on first use.
pub fn global() -> &'static Registry {
	&GLOBAL
}

/// See [`Registry::add`].
pub fn add(binding: Binding) {
	GLOBAL.add(binding);
}

/// See [`Registry::remove`].
pub fn remove(binding: &Binding) {
	GLOBAL.remove(binding);
}

/// See [`Registry::remove_key`].
pub fn remove_key(key: TypeKey, alias: Option<&str>) {
	GLOBAL.remove_key(key, alias);
}

/// See [`Registry::remove_type`].
pub fn remove_type<T: ?Sized + 'static>(alias: Option<&str>) {
	GLOBAL.remove_type::<T>(alias);
}

/// See [`Registry::get`].
pub fn get<T: ?Sized + Send + Sync + 'static>(alias: Option<&str>) -> Result<Option<Arc<T>>> {
	GLOBAL.get::<T>(alias)
}

/// See [`Registry::get_or_default`].
pub fn get_or_default<T: Clone + Default + Send + Sync + 'static>(alias: Option<&str>) -> Result<T> {
	GLOBAL.get_or_default::<T>(alias)
}

/// See [`Registry::contains`].
pub fn contains<T: ?Sized + 'static>(alias: Option<&str>) -> bool {
	GLOBAL.contains::<T>(alias)
}

/// Drops every global binding. Meant for test isolation.
pub fn clear() {
	GLOBAL.clear();
}

#[cfg(test)]
mod tests {
	use serial_test::serial;

	use super::*;

	#[derive(Debug, PartialEq)]
	struct Clock(u64);

	#[test]
	#[serial]
	fn test_global_starts_from_cleared_state() {
		clear();
		assert!(global().is_empty());
		assert_eq!(get::<Clock>(None).unwrap(), None);
	}

	#[test]
	#[serial]
	fn test_free_functions_share_one_table() {
		clear();
		add(Binding::of(None, Arc::new(Clock(7))));

		assert!(contains::<Clock>(None));
		assert_eq!(*get::<Clock>(None).unwrap().unwrap(), Clock(7));
		assert_eq!(global().len(), 1);

		remove_type::<Clock>(None);
		assert!(!contains::<Clock>(None));
		assert!(global().is_empty());
	}

	#[test]
	#[serial]
	fn test_remove_by_binding_and_key() {
		clear();
		let binding = Binding::of(Some("a"), Arc::new(Clock(1)));
		add(binding.clone());
		add(Binding::of(Some("b"), Arc::new(Clock(2))));

		remove(&binding);
		assert_eq!(get::<Clock>(Some("a")).unwrap(), None);

		remove_key(TypeKey::of::<Clock>(), Some("b"));
		assert_eq!(global().type_count(), 0);
	}

	#[test]
	#[serial]
	fn test_value_default_on_miss() {
		clear();
		assert_eq!(get_or_default::<u32>(Some("port")).unwrap(), 0);

		add(Binding::of(Some("port"), Arc::new(8080u32)));
		assert_eq!(get_or_default::<u32>(Some("port")).unwrap(), 8080);
		clear();
	}
}
