//! Typed reflection over one `Enumeration` type.

use std::any::type_name;
use std::fmt;

use enumeta_hash::HashPolicy;
use enumeta_ir::{BuildError, Classification, Discriminant, EnumDescriptor};

use crate::{EnumLookup, Enumeration};

/// Lookup tables for the enumeration `E`.
///
/// Built once (normally into the `OnceLock` behind
/// [`Enumeration::reflection`]) and read-only afterwards.
pub struct Reflection<E: Enumeration> {
    lookup: EnumLookup,
    /// Variants in value order, parallel to the descriptor's members.
    variants: Box<[E]>,
}

impl<E: Enumeration> Reflection<E> {
    /// Build the tables for `E`, escalating an invalid member list to a panic.
    ///
    /// # Panics
    ///
    /// If `E::MEMBERS` has an empty or duplicate name after normalization.
    pub fn new() -> Self {
        Self::with_policy(&HashPolicy::default())
    }

    /// Like [`Reflection::new`], with a custom hash policy.
    pub fn with_policy(policy: &HashPolicy) -> Self {
        Self::try_with_policy(policy)
            .unwrap_or_else(|e| panic!("invalid enumeration `{}`: {e}", type_name::<E>()))
    }

    pub fn try_new() -> Result<Self, BuildError> {
        Self::try_with_policy(&HashPolicy::default())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(enumeration = type_name::<E>()))]
    pub fn try_with_policy(policy: &HashPolicy) -> Result<Self, BuildError> {
        let descriptor = EnumDescriptor::builder()
            .prefix(E::PREFIX)
            .members(
                E::MEMBERS
                    .iter()
                    .map(|&(variant, raw)| (variant.to_repr().to_i128(), raw)),
            )
            .build()?;
        let variants = descriptor
            .declared()
            .filter_map(|d| E::MEMBERS.get(d).map(|&(variant, _)| variant))
            .collect();
        Ok(Self {
            lookup: EnumLookup::with_policy(descriptor, policy),
            variants,
        })
    }

    /// The untyped engine underneath.
    #[inline]
    pub fn lookup(&self) -> &EnumLookup {
        &self.lookup
    }

    #[inline]
    pub fn descriptor(&self) -> &EnumDescriptor {
        self.lookup.descriptor()
    }

    // === Variant → name / index ===

    /// Whether `repr` is the discriminant of some variant.
    #[inline]
    pub fn contains(&self, repr: E::Repr) -> bool {
        self.lookup.contains(repr.to_i128())
    }

    #[inline]
    pub fn index_of(&self, variant: E) -> Option<usize> {
        self.lookup.index_of(variant.to_repr().to_i128())
    }

    /// Canonical name of `variant`'s value.
    #[inline]
    pub fn name_of(&self, variant: E) -> Option<&str> {
        self.lookup.name_of(variant.to_repr().to_i128())
    }

    /// Like [`Reflection::name_of`], with `""` standing for "no name".
    #[inline]
    pub fn to_str(&self, variant: E) -> &str {
        self.name_of(variant).unwrap_or_default()
    }

    #[inline]
    pub fn name_of_repr(&self, repr: E::Repr) -> Option<&str> {
        self.lookup.name_of(repr.to_i128())
    }

    // === Conversions into E ===

    /// The first-declared variant with discriminant `repr`.
    pub fn from_repr(&self, repr: E::Repr) -> Option<E> {
        self.lookup
            .index_of(repr.to_i128())
            .and_then(|index| self.from_index(index))
    }

    /// The variant at `index` in value order.
    #[inline]
    pub fn from_index(&self, index: usize) -> Option<E> {
        self.variants.get(index).copied()
    }

    pub fn from_name(&self, name: &str) -> Option<E> {
        self.lookup
            .index_of_name(name)
            .and_then(|index| self.from_index(index))
    }

    /// Find a variant with a caller-defined name comparison.
    ///
    /// `eq` receives `(name, member_name)`. Every member is checked.
    pub fn from_name_by<F>(&self, name: &str, eq: F) -> Option<E>
    where
        F: Fn(&str, &str) -> bool,
    {
        self.lookup
            .index_of_name_by(name, eq)
            .and_then(|index| self.from_index(index))
    }

    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.lookup.contains_name(name)
    }

    #[inline]
    pub fn contains_name_by<F>(&self, name: &str, eq: F) -> bool
    where
        F: Fn(&str, &str) -> bool,
    {
        self.lookup.contains_name_by(name, eq)
    }

    // === Iteration and facts ===

    /// Variants in value order.
    #[inline]
    pub fn variants(&self) -> &[E] {
        &self.variants
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lookup.names()
    }

    /// `(variant, name)` pairs in value order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (E, &str)> + '_ {
        self.variants.iter().copied().zip(self.lookup.names())
    }

    /// Variant with the smallest value.
    #[inline]
    pub fn min(&self) -> Option<E> {
        self.variants.first().copied()
    }

    /// Variant with the largest value (first-declared among equals).
    pub fn max(&self) -> Option<E> {
        let max = self.lookup.values().last()?;
        let index = self.lookup.values().iter().position(|v| v == max)?;
        self.from_index(index)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.lookup.len()
    }

    #[inline]
    pub fn classification(&self) -> Classification {
        self.lookup.classification()
    }

    #[inline]
    pub fn has_zero(&self) -> bool {
        self.descriptor().has_zero()
    }

    /// Shortest and longest member name, in bytes.
    #[inline]
    pub fn name_len_bounds(&self) -> (usize, usize) {
        self.descriptor().names().len_bounds()
    }

    // === Flags ===

    #[inline]
    pub fn is_bitflag(&self) -> bool {
        self.lookup.is_bitflag()
    }

    #[inline]
    pub fn contains_flags(&self, bits: E::Repr) -> bool {
        self.lookup.contains_flags(bits.to_i128())
    }

    pub fn write_flags<W>(&self, bits: E::Repr, separator: &str, out: &mut W) -> Result<bool, fmt::Error>
    where
        W: fmt::Write + ?Sized,
    {
        self.lookup.write_flags(bits.to_i128(), separator, out)
    }

    pub fn to_flag_string(&self, bits: E::Repr) -> Option<String> {
        self.lookup.to_flag_string(bits.to_i128())
    }

    /// Parse flag names joined by `separator` into a raw discriminant.
    pub fn parse_flags(&self, text: &str, separator: &str) -> Option<E::Repr> {
        self.lookup
            .parse_flags(text, separator)
            .and_then(E::Repr::from_i128)
    }
}

impl<E: Enumeration> Default for Reflection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Enumeration + fmt::Debug> fmt::Debug for Reflection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflection")
            .field("enumeration", &type_name::<E>())
            .field("lookup", &self.lookup)
            .field("variants", &self.variants)
            .finish()
    }
}
