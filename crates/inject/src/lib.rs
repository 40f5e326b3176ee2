//! Lazily resolved injection fields.
//!
//! [`LazyHandle`] defers a registry lookup until the value is first read and
//! repeats it whenever the cached value turns invalid. Objects owned by an
//! external host opt into liveness checks through [`HostObject`] and the
//! [`HostManaged`] probe.
//!
//! The registry surface of `sdi-locator` is re-exported so consumers only
//! need this crate.

mod handle;
mod liveness;

pub use handle::LazyHandle;
pub use liveness::{HostManaged, HostObject, Lifeline, LivenessProbe, Unmanaged};
pub use sdi_locator::{
	Binding, Instance, LocatorError, Registry, Result, TypeKey, add, clear, contains, get,
	get_or_default, global, remove, remove_key, remove_type,
};
