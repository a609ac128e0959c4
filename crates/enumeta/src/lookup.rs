//! Untyped lookup engine over one enumeration descriptor.
//!
//! Value queries (`contains`, `index_of`, `name_of`) pick a shortcut from the
//! descriptor's classification:
//!
//! - `Contiguous`: range check, then `value - min`.
//! - `ContiguousBitflag`: range check, single-bit test, then the distance in
//!   trailing zeros from the first flag.
//! - `Sparse`: linear scan over the sorted values.
//!
//! Name queries (`value_of`, `index_of_name`) reject names whose length is
//! outside the member set's bounds, then either compare linearly (small sets)
//! or consult the [`NameHashTable`].

use enumeta_hash::{HashPolicy, NameHashTable};
use enumeta_ir::{is_bitflag_set, is_single_bit, BuildError, Classification, EnumDescriptor, Member};

/// Lookup engine for one enumeration.
///
/// Immutable after construction. All queries are allocation-free.
#[derive(Clone, Debug)]
pub struct EnumLookup {
    descriptor: EnumDescriptor,
    /// Name table, absent for sets at or below the policy's small threshold.
    table: Option<NameHashTable>,
    /// Union of all member values, present when every nonzero value is a
    /// single bit.
    flag_mask: Option<i128>,
}

impl EnumLookup {
    /// Build with the default [`HashPolicy`].
    pub fn new(descriptor: EnumDescriptor) -> Self {
        Self::with_policy(descriptor, &HashPolicy::default())
    }

    pub fn with_policy(descriptor: EnumDescriptor, policy: &HashPolicy) -> Self {
        let table = policy
            .uses_table(descriptor.len())
            .then(|| NameHashTable::build(descriptor.names().iter(), policy));
        let flag_mask = is_bitflag_set(descriptor.values())
            .then(|| descriptor.values().iter().fold(0, |mask, &v| mask | v));
        Self {
            descriptor,
            table,
            flag_mask,
        }
    }

    /// Build from `(value, raw name)` pairs in declaration order.
    pub fn from_members<'a, I>(members: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (i128, &'a str)>,
    {
        EnumDescriptor::from_members(members).map(Self::new)
    }

    #[inline]
    pub fn descriptor(&self) -> &EnumDescriptor {
        &self.descriptor
    }

    /// The name hash table, if one was built.
    #[inline]
    pub fn hash_table(&self) -> Option<&NameHashTable> {
        self.table.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.descriptor.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptor.is_empty()
    }

    #[inline]
    pub fn classification(&self) -> Classification {
        self.descriptor.classification()
    }

    /// Union of all member values when every nonzero value is a single bit.
    #[inline]
    pub fn flag_mask(&self) -> Option<i128> {
        self.flag_mask
    }

    #[inline]
    fn in_range(&self, value: i128) -> bool {
        !self.descriptor.is_empty() && (self.descriptor.min()..=self.descriptor.max()).contains(&value)
    }

    // === Value → member ===

    /// Whether some member has `value`.
    pub fn contains(&self, value: i128) -> bool {
        if !self.in_range(value) {
            return false;
        }
        let desc = &self.descriptor;
        match desc.classification() {
            Classification::Contiguous => true,
            Classification::ContiguousBitflag => {
                if value == 0 {
                    return desc.has_zero();
                }
                is_single_bit(value) && value >= desc.first_flag()
            }
            Classification::Sparse => desc.values().contains(&value),
        }
    }

    /// Index of the first member with `value`.
    pub fn index_of(&self, value: i128) -> Option<usize> {
        if !self.in_range(value) {
            return None;
        }
        let desc = &self.descriptor;
        match desc.classification() {
            Classification::Contiguous => usize::try_from(value - desc.min()).ok(),
            Classification::ContiguousBitflag => {
                if !self.contains(value) {
                    return None;
                }
                if value == 0 {
                    return Some(0);
                }
                let skipped = value.trailing_zeros() - desc.first_flag().trailing_zeros();
                Some(usize::from(desc.has_zero()) + skipped as usize)
            }
            Classification::Sparse => desc.values().iter().position(|&v| v == value),
        }
    }

    /// Name of the first member with `value`.
    #[inline]
    pub fn name_of(&self, value: i128) -> Option<&str> {
        self.index_of(value).and_then(|index| self.descriptor.name(index))
    }

    // === Index → member ===

    #[inline]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.descriptor.name(index)
    }

    #[inline]
    pub fn value_at(&self, index: usize) -> Option<i128> {
        self.descriptor.value(index)
    }

    // === Name → member ===

    /// Index of the member named `name` (exact, case-sensitive).
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        let names = self.descriptor.names();
        if !names.may_contain_len(name.len()) {
            return None;
        }
        match &self.table {
            Some(table) => table.find(name, |index| names.get(index).unwrap_or_default()),
            None => names.iter().position(|candidate| candidate == name),
        }
    }

    /// Value of the member named `name`.
    #[inline]
    pub fn value_of(&self, name: &str) -> Option<i128> {
        self.index_of_name(name).and_then(|index| self.descriptor.value(index))
    }

    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.index_of_name(name).is_some()
    }

    /// Index of the first member whose name satisfies `eq(name, member_name)`.
    ///
    /// Scans every member: the predicate need not agree with hashing or with
    /// the length filter (e.g. case-insensitive matching).
    pub fn index_of_name_by<F>(&self, name: &str, eq: F) -> Option<usize>
    where
        F: Fn(&str, &str) -> bool,
    {
        self.descriptor
            .names()
            .iter()
            .position(|candidate| eq(name, candidate))
    }

    pub fn value_of_by<F>(&self, name: &str, eq: F) -> Option<i128>
    where
        F: Fn(&str, &str) -> bool,
    {
        self.index_of_name_by(name, eq)
            .and_then(|index| self.descriptor.value(index))
    }

    pub fn contains_name_by<F>(&self, name: &str, eq: F) -> bool
    where
        F: Fn(&str, &str) -> bool,
    {
        self.index_of_name_by(name, eq).is_some()
    }

    // === Iteration ===

    /// Members in value order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = Member<'_>> + '_ {
        self.descriptor.members()
    }

    /// Names in value order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.descriptor.names().iter()
    }

    /// Values, ascending.
    #[inline]
    pub fn values(&self) -> &[i128] {
        self.descriptor.values()
    }
}

#[cfg(test)]
mod tests;
