//! Construction errors.
//!
//! Every variant is a defect in the enumeration's declaration, detected once
//! at build time. Queries never produce these.

/// Reason an enumeration descriptor could not be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A member's name is empty after normalization.
    #[error("member {index} has an empty name (raw name `{raw}`)")]
    EmptyName { index: usize, raw: String },

    /// Two members share a name. Indices are declaration positions.
    #[error("duplicate member name `{name}` (members {first} and {second})")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    /// More members than a `u32` index can address.
    #[error("too many members: {count} (maximum is {max})", max = u32::MAX - 1)]
    TooManyMembers { count: usize },

    /// Packed names exceed what a `u32` offset can address.
    #[error("member names occupy {bytes} bytes (maximum is {max})", max = u32::MAX)]
    NamesTooLong { bytes: usize },
}
