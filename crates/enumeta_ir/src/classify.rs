//! Structural classification of an enumeration's values.
//!
//! The classification picks which query shortcut is legal:
//!
//! | Classification      | Values                                   | `index_of`          |
//! |---------------------|------------------------------------------|---------------------|
//! | `Contiguous`        | `min, min+1, ..., max`                   | `value - min`       |
//! | `ContiguousBitflag` | optional `0`, then `2^k, 2^(k+1), ...`   | trailing-zero count |
//! | `Sparse`            | anything else                            | linear scan         |
//!
//! `Sparse` is always correct, only slower.

use std::fmt;

/// Structural category of an enumeration's value set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Values form an unbroken run of integers.
    Contiguous,
    /// Values are optionally `0`, then successive single-bit powers of two.
    ContiguousBitflag,
    /// Neither of the above.
    Sparse,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Contiguous => "contiguous",
            Classification::ContiguousBitflag => "contiguous-bitflag",
            Classification::Sparse => "sparse",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `value` is a positive power of two.
///
/// Negative values never qualify, even when their two's-complement
/// representation in the backing type has a single set bit.
#[inline]
pub fn is_single_bit(value: i128) -> bool {
    value > 0 && value.count_ones() == 1
}

/// Classify values sorted ascending.
///
/// Contiguity is checked first, so `{0}`, `{1}` and `{0, 1}` are
/// `Contiguous`. Duplicate values break both shortcuts.
pub fn classify(values: &[i128]) -> Classification {
    debug_assert!(
        values.windows(2).all(|w| w[0] <= w[1]),
        "values must be sorted ascending"
    );

    if values.is_empty() {
        return Classification::Sparse;
    }

    if values.windows(2).all(|w| w[0].checked_add(1) == Some(w[1])) {
        return Classification::Contiguous;
    }

    let has_zero = values[0] == 0;
    let flags = &values[usize::from(has_zero)..];
    let contiguous_flags = !flags.is_empty()
        && flags.iter().all(|&v| is_single_bit(v))
        && flags.windows(2).all(|w| w[0].checked_mul(2) == Some(w[1]));

    if contiguous_flags {
        Classification::ContiguousBitflag
    } else {
        Classification::Sparse
    }
}

/// Whether every nonzero value is a single bit and at least one is.
///
/// Unlike `ContiguousBitflag`, gaps between flags are allowed. This is the
/// precondition for composing and parsing flag combinations.
pub fn is_bitflag_set(values: &[i128]) -> bool {
    let mut any_flag = false;
    for &value in values {
        if value == 0 {
            continue;
        }
        if !is_single_bit(value) {
            return false;
        }
        any_flag = true;
    }
    any_flag
}
