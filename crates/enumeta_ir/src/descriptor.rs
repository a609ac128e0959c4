//! Enumeration descriptor: ordered members plus derived facts.
//!
//! Built once from `(value, raw name)` pairs in declaration order:
//!
//! 1. Names are normalized (qualification and prefix stripped) and checked
//!    for emptiness and uniqueness.
//! 2. Members are stably sorted by value. For duplicate values, the
//!    first-declared member therefore comes first and wins value → name.
//! 3. Names are packed into a [`NameTable`] in that sorted order.
//! 4. The value list is classified.

use rustc_hash::FxHashMap;

use crate::classify::{classify, Classification};
use crate::{BuildError, NameTable};

/// Borrowed view of one member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Member<'a> {
    pub value: i128,
    pub name: &'a str,
}

/// Processed description of one enumeration.
///
/// Member `i` is the `i`-th smallest value (ties in declaration order).
/// Every index-based accessor uses this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    values: Box<[i128]>,
    names: NameTable,
    /// Declaration position of each member.
    declared: Box<[u32]>,
    min: i128,
    max: i128,
    classification: Classification,
    has_zero: bool,
    /// Smallest nonzero value for bitflag enumerations, otherwise 0.
    first_flag: i128,
}

impl EnumDescriptor {
    /// Start building a descriptor.
    pub fn builder<'a>() -> DescriptorBuilder<'a> {
        DescriptorBuilder::default()
    }

    /// Build from `(value, raw name)` pairs in declaration order.
    pub fn from_members<'a, I>(members: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (i128, &'a str)>,
    {
        Self::builder().members(members).build()
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value (0 for an empty enumeration).
    #[inline]
    pub fn min(&self) -> i128 {
        self.min
    }

    /// Largest value (0 for an empty enumeration).
    #[inline]
    pub fn max(&self) -> i128 {
        self.max
    }

    #[inline]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Whether some member has value 0.
    #[inline]
    pub fn has_zero(&self) -> bool {
        self.has_zero
    }

    /// Smallest nonzero value when `ContiguousBitflag`, otherwise 0.
    #[inline]
    pub fn first_flag(&self) -> i128 {
        self.first_flag
    }

    /// All values, ascending.
    #[inline]
    pub fn values(&self) -> &[i128] {
        &self.values
    }

    /// All names, in value order.
    #[inline]
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    #[inline]
    pub fn value(&self, index: usize) -> Option<i128> {
        self.values.get(index).copied()
    }

    #[inline]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index)
    }

    pub fn member(&self, index: usize) -> Option<Member<'_>> {
        Some(Member {
            value: self.value(index)?,
            name: self.name(index)?,
        })
    }

    /// Members in value order.
    pub fn members(&self) -> impl ExactSizeIterator<Item = Member<'_>> + '_ {
        self.values
            .iter()
            .zip(self.names.iter())
            .map(|(&value, name)| Member { value, name })
    }

    /// Declaration position of the member at `index`.
    #[inline]
    pub fn declared_index(&self, index: usize) -> Option<usize> {
        self.declared.get(index).map(|&d| d as usize)
    }

    /// Declaration positions of all members, in value order.
    pub fn declared(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.declared.iter().map(|&d| d as usize)
    }
}

/// Strip qualification and `prefix` from a raw member name.
///
/// `Color::Red` and `a::b::Color::Red` become `Red`. A non-empty `prefix` is
/// then removed unless that would leave nothing (`COLOR_RED` with prefix
/// `COLOR_` becomes `RED`, but `COLOR_` stays `COLOR_`). Nothing else is
/// touched, whitespace included.
pub fn normalize_name<'a>(raw: &'a str, prefix: &str) -> &'a str {
    let name = raw.rsplit_once("::").map_or(raw, |(_, tail)| tail);
    match name.strip_prefix(prefix) {
        Some(rest) if !prefix.is_empty() && !rest.is_empty() => rest,
        _ => name,
    }
}

/// Builder for [`EnumDescriptor`].
#[derive(Clone, Debug, Default)]
pub struct DescriptorBuilder<'a> {
    prefix: &'a str,
    members: Vec<(i128, &'a str)>,
}

impl<'a> DescriptorBuilder<'a> {
    /// Prefix stripped from every name.
    #[must_use]
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Append one member.
    #[must_use]
    pub fn member(mut self, value: i128, raw_name: &'a str) -> Self {
        self.members.push((value, raw_name));
        self
    }

    /// Append members in declaration order.
    #[must_use]
    pub fn members<I>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = (i128, &'a str)>,
    {
        self.members.extend(members);
        self
    }

    /// Validate, order and classify the members.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "member count is checked against u32::MAX first"
    )]
    pub fn build(self) -> Result<EnumDescriptor, BuildError> {
        let count = self.members.len();
        if count >= u32::MAX as usize {
            return Err(BuildError::TooManyMembers { count });
        }

        let mut normalized: Vec<(i128, &str)> = Vec::with_capacity(count);
        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        for (index, &(value, raw)) in self.members.iter().enumerate() {
            let name = normalize_name(raw, self.prefix);
            if name.is_empty() {
                return Err(BuildError::EmptyName {
                    index,
                    raw: raw.to_owned(),
                });
            }
            if let Some(&first) = seen.get(name) {
                return Err(BuildError::DuplicateName {
                    name: name.to_owned(),
                    first,
                    second: index,
                });
            }
            seen.insert(name, index);
            normalized.push((value, name));
        }

        // Stable: equal values keep declaration order.
        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by_key(|&i| normalized[i].0);

        let values: Box<[i128]> = order.iter().map(|&i| normalized[i].0).collect();
        let names = NameTable::new(order.iter().map(|&i| normalized[i].1))?;
        let declared: Box<[u32]> = order.iter().map(|&i| i as u32).collect();

        let min = values.first().copied().unwrap_or(0);
        let max = values.last().copied().unwrap_or(0);
        let classification = classify(&values);
        let has_zero = values.binary_search(&0).is_ok();
        let first_flag = if classification == Classification::ContiguousBitflag {
            values[usize::from(has_zero)]
        } else {
            0
        };

        tracing::debug!(
            count,
            min = %min,
            max = %max,
            %classification,
            "built enumeration descriptor"
        );

        Ok(EnumDescriptor {
            values,
            names,
            declared,
            min,
            max,
            classification,
            has_zero,
            first_flag,
        })
    }
}

#[cfg(test)]
mod tests;
