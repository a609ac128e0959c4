//! Name hashing for enumeration reflection tables.
//!
//! Builds a lookup table over a fixed, unique set of names once, then answers
//! "which index holds this name?" without allocating.
//!
//! # Two-Phase Construction
//!
//! 1. **Perfect search**: tries seeds `0..seed_budget(n)` for a seeded FNV-1a
//!    hash that places all `n` names into `n` distinct slots (a *minimal*
//!    perfect hash). A hit needs exactly one slot probe per query.
//! 2. **Linear probing**: if no seed in the budget works, uses a fixed seed
//!    and a prime-sized table strictly larger than `n`, resolving collisions
//!    by scanning forward.
//!
//! Construction is deterministic: the same names in the same order always
//! produce the same seed and slot contents.
//!
//! The crate knows nothing about enumerations. Callers hand in names at build
//! time and a `key_at(index)` accessor at query time, so the names can live in
//! whatever storage the caller owns.

mod fnv;
mod policy;
mod table;

pub use fnv::{fnv1a, slot_for, FNV_OFFSET_BASIS, FNV_PRIME};
pub use policy::{
    fallback_table_size, next_prime, seed_budget, HashPolicy, FALLBACK_SEED, SMALL_THRESHOLD,
};
pub use table::{NameHashTable, EMPTY_SLOT};
