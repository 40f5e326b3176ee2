use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Type identity token used as the outer registry key.
///
/// Equality and hashing only consider the [`TypeId`]; the type name is kept
/// for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	/// Returns the key for `T`.
	///
	/// `T` may be unsized, so trait objects (`dyn Logger`) are valid keys.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Returns the underlying [`TypeId`].
	#[inline]
	pub fn id(self) -> TypeId {
		self.id
	}

	/// Returns the type name, as reported by [`std::any::type_name`].
	#[inline]
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Returns true if this key identifies `T`.
	#[inline]
	pub fn is<T: ?Sized + 'static>(self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl std::fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TypeKey").field(&self.name).finish()
	}
}

impl std::fmt::Display for TypeKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name)
	}
}
