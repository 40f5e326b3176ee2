use thiserror::Error;

/// Errors reported while resolving a binding.
///
/// A missing binding is never an error; lookups return `None` instead. The
/// only failure is a binding whose instance was created for a different type
/// than the key it was stored under, which is a programming mistake at the
/// registration site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
	/// The stored instance cannot be viewed as the requested type.
	#[error("type mismatch for alias {alias:?}: expected {expected}, found {found}")]
	TypeMismatch {
		expected: &'static str,
		found: &'static str,
		alias: String,
	},
}

pub type Result<T, E = LocatorError> = std::result::Result<T, E>;
