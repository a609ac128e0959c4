//! Enumeration reflection: constant-time value ↔ name lookup.
//!
//! Each enumeration is described once by `(value, name)` pairs, then served
//! from immutable tables:
//!
//! - value → name through a shortcut picked by the value set's
//!   [`Classification`] (offset arithmetic, trailing-zero counting, or a scan);
//! - name → value through a seeded FNV-1a table that is a minimal perfect
//!   hash whenever a seed can be found, and linear probing otherwise.
//!
//! ```
//! use enumeta::Enumeration;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, Enumeration)]
//! #[repr(u8)]
//! enum Perm {
//!     Read = 1,
//!     Write = 2,
//!     Exec = 4,
//! }
//!
//! assert_eq!(Perm::Write.name(), Some("Write"));
//! assert_eq!(Perm::from_name("Exec"), Some(Perm::Exec));
//! assert_eq!(enumeta::cast::<Perm>(2), Some(Perm::Write));
//! assert_eq!(Perm::reflection().to_flag_string(5).as_deref(), Some("Read|Exec"));
//! ```
//!
//! The untyped [`EnumLookup`] serves member lists that only exist at
//! runtime.

mod enumeration;
mod flags;
mod lookup;
mod reflect;

pub use enumeration::Enumeration;
pub use flags::FLAG_SEPARATOR;
pub use lookup::EnumLookup;
pub use reflect::Reflection;

pub use enumeta_hash::{HashPolicy, NameHashTable};
pub use enumeta_ir::{
    normalize_name, BuildError, Classification, DescriptorBuilder, Discriminant, EnumDescriptor,
    Member, NameTable,
};

#[cfg(feature = "derive")]
pub use enumeta_macros::Enumeration;

/// Name of `variant`, or `""` if it has none.
#[inline]
pub fn to_str<E: Enumeration>(variant: E) -> &'static str {
    E::reflection().to_str(variant)
}

/// The variant of `E` with discriminant `repr`.
#[inline]
pub fn cast<E: Enumeration>(repr: E::Repr) -> Option<E> {
    E::reflection().from_repr(repr)
}

/// Whether `repr` is the discriminant of some variant of `E`.
#[inline]
pub fn contains<E: Enumeration>(repr: E::Repr) -> bool {
    E::reflection().contains(repr)
}

/// Position of `variant` in `E`'s value order.
#[inline]
pub fn index_of<E: Enumeration>(variant: E) -> Option<usize> {
    E::reflection().index_of(variant)
}
