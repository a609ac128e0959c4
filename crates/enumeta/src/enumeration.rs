//! The `Enumeration` trait: the per-type source of members.

use enumeta_ir::Discriminant;

use crate::Reflection;

/// A field-less enum whose variants can be reflected.
///
/// Usually implemented with `#[derive(Enumeration)]`. A manual
/// implementation lists every variant in `MEMBERS` in declaration order and
/// returns a process-wide singleton from `reflection`:
///
/// ```
/// use std::sync::OnceLock;
/// use enumeta::{Enumeration, Reflection};
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// #[repr(u8)]
/// enum Level { Low = 1, High = 2 }
///
/// impl Enumeration for Level {
///     type Repr = u8;
///     const MEMBERS: &'static [(Self, &'static str)] =
///         &[(Level::Low, "Low"), (Level::High, "High")];
///
///     fn to_repr(self) -> u8 {
///         self as u8
///     }
///
///     fn reflection() -> &'static Reflection<Self> {
///         static REFLECTION: OnceLock<Reflection<Level>> = OnceLock::new();
///         REFLECTION.get_or_init(Reflection::new)
///     }
/// }
///
/// assert_eq!(Level::High.name(), Some("High"));
/// assert_eq!(Level::from_repr(1), Some(Level::Low));
/// ```
pub trait Enumeration: Copy + Eq + Send + Sync + 'static {
    /// Underlying integer type.
    type Repr: Discriminant;

    /// Every variant with its raw name, in declaration order.
    ///
    /// Raw names may be qualified (`Color::Red`); only the last segment is
    /// kept.
    const MEMBERS: &'static [(Self, &'static str)];

    /// Prefix stripped from every member name.
    const PREFIX: &'static str = "";

    /// Discriminant of `self`.
    fn to_repr(self) -> Self::Repr;

    /// The type's lookup tables, built on first use.
    fn reflection() -> &'static Reflection<Self>;

    /// Name of this variant.
    ///
    /// A variant sharing its value with an earlier-declared variant reports
    /// the earlier name.
    #[inline]
    fn name(self) -> Option<&'static str> {
        Self::reflection().name_of(self)
    }

    /// Position of this variant in value order.
    #[inline]
    fn index(self) -> Option<usize> {
        Self::reflection().index_of(self)
    }

    #[inline]
    fn from_name(name: &str) -> Option<Self> {
        Self::reflection().from_name(name)
    }

    /// Validated conversion from a raw discriminant.
    #[inline]
    fn from_repr(repr: Self::Repr) -> Option<Self> {
        Self::reflection().from_repr(repr)
    }

    #[inline]
    fn from_index(index: usize) -> Option<Self> {
        Self::reflection().from_index(index)
    }
}
