//! Type and alias keyed instance registry.
//!
//! This crate provides the service-locator half of sdi:
//! - [`TypeKey`]: Type identity token, valid for unsized types
//! - [`Instance`]: Shared, type-erased reference to a bound object
//! - [`Binding`]: A `(type, alias, instance)` record
//! - [`Registry`]: The two-level binding table
//! - [`global()`]: The process-wide registry, with free-function wrappers
//!
//! Misses are not errors: lookups return `None` (or `T::default()` through
//! [`get_or_default`]). The only reported failure is
//! [`LocatorError::TypeMismatch`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use sdi_locator::{Binding, Registry};
//!
//! let registry = Registry::new("doc");
//! registry.add(Binding::of(Some("greeting"), Arc::new(String::from("hello"))));
//!
//! let value = registry.get::<String>(Some("greeting")).unwrap();
//! assert_eq!(value.as_deref().map(String::as_str), Some("hello"));
//! assert!(registry.get::<String>(None).unwrap().is_none());
//! ```

mod binding;
mod error;
mod global;
mod instance;
mod key;
mod registry;

pub use binding::Binding;
pub use error::{LocatorError, Result};
pub use global::{add, clear, contains, get, get_or_default, global, remove, remove_key, remove_type};
pub use instance::Instance;
pub use key::TypeKey;
pub use registry::Registry;
