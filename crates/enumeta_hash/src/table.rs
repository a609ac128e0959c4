//! Name → index hash table.
//!
//! # Layout
//!
//! ```text
//! slots: [idx, idx, EMPTY, idx, ...]   table_size entries
//!          ^ index into the caller's name list, or EMPTY_SLOT
//! ```
//!
//! A perfect table has exactly one slot per name and no empty slots. A
//! probing table has `table_size > n` slots; each name sits at most
//! `max_probe` slots past its home slot.

use crate::fnv::slot_for;
use crate::policy::HashPolicy;

/// Sentinel for an unoccupied slot.
pub const EMPTY_SLOT: u32 = u32::MAX;

/// Hash table mapping names to their position in the caller's name list.
///
/// Immutable after [`build`](Self::build); safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameHashTable {
    /// Name indices by slot, `EMPTY_SLOT` where unoccupied.
    slots: Box<[u32]>,
    /// Seed fed to the hash for every key.
    seed: u32,
    /// Whether the table is a minimal perfect hash.
    perfect: bool,
    /// Longest distance any name sits from its home slot.
    max_probe: u32,
}

impl NameHashTable {
    /// Build a table over `keys`, indexed by iteration order.
    ///
    /// Keys must be unique. With duplicates the perfect search never succeeds
    /// and only the first occurrence is reachable through [`find`](Self::find).
    ///
    /// # Panics
    ///
    /// Panics if there are `u32::MAX` or more keys, or if the policy's
    /// fallback table size does not exceed the key count. Both are
    /// configuration defects, not runtime conditions.
    pub fn build<'k, I>(keys: I, policy: &HashPolicy) -> Self
    where
        I: IntoIterator<Item = &'k str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();
        assert!(
            u32::try_from(keys.len()).is_ok_and(|n| n < EMPTY_SLOT),
            "name table overflow: {} keys",
            keys.len()
        );

        if keys.is_empty() {
            return Self {
                slots: Box::default(),
                seed: 0,
                perfect: true,
                max_probe: 0,
            };
        }

        let budget = (policy.seed_budget)(keys.len());
        if let Some(table) = Self::search_perfect(&keys, budget) {
            return table;
        }
        Self::build_probing(&keys, policy)
    }

    /// Phase 1: try seeds in ascending order until one places every key in a
    /// distinct slot of an `n`-slot table.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "key count is checked against EMPTY_SLOT in build"
    )]
    fn search_perfect(keys: &[&str], budget: u32) -> Option<Self> {
        let n = keys.len();
        let mut slots = vec![EMPTY_SLOT; n];

        for seed in 0..budget {
            slots.fill(EMPTY_SLOT);
            let placed = keys.iter().enumerate().all(|(index, key)| {
                let slot = slot_for(key, seed, n);
                if slots[slot] != EMPTY_SLOT {
                    return false;
                }
                slots[slot] = index as u32;
                true
            });

            if placed {
                tracing::debug!(keys = n, seed, attempts = seed + 1, "found minimal perfect hash");
                return Some(Self {
                    slots: slots.into_boxed_slice(),
                    seed,
                    perfect: true,
                    max_probe: 0,
                });
            }
        }
        None
    }

    /// Phase 2: open addressing with linear probing over a prime-sized table.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "key count and probe distance are bounded by EMPTY_SLOT"
    )]
    fn build_probing(keys: &[&str], policy: &HashPolicy) -> Self {
        let n = keys.len();
        let table_size = (policy.fallback_table_size)(n);
        assert!(
            table_size > n && table_size <= EMPTY_SLOT as usize,
            "fallback table size {table_size} must exceed key count {n}"
        );

        let seed = policy.fallback_seed;
        let mut slots = vec![EMPTY_SLOT; table_size];
        let mut max_probe = 0;

        for (index, key) in keys.iter().enumerate() {
            let home = slot_for(key, seed, table_size);
            // Terminates: table_size > n leaves at least one empty slot.
            let mut probe = 0;
            while slots[(home + probe) % table_size] != EMPTY_SLOT {
                probe += 1;
            }
            slots[(home + probe) % table_size] = index as u32;
            max_probe = max_probe.max(probe);
        }

        tracing::debug!(
            keys = n,
            table_size,
            seed,
            max_probe,
            "no perfect seed within budget, using linear probing"
        );

        Self {
            slots: slots.into_boxed_slice(),
            seed,
            perfect: false,
            max_probe: max_probe as u32,
        }
    }

    /// Find the index of `key`.
    ///
    /// `key_at(i)` must return the `i`-th key passed to [`build`](Self::build).
    /// The stored candidate is always compared against `key`, so names that
    /// were never inserted but share a slot are rejected.
    #[inline]
    pub fn find<'k>(&self, key: &str, key_at: impl Fn(usize) -> &'k str) -> Option<usize> {
        let table_size = self.slots.len();
        if table_size == 0 {
            return None;
        }
        let home = slot_for(key, self.seed, table_size);

        if self.perfect {
            let index = self.slots[home] as usize;
            return (key_at(index) == key).then_some(index);
        }

        for probe in 0..=self.max_probe as usize {
            let stored = self.slots[(home + probe) % table_size];
            if stored == EMPTY_SLOT {
                return None;
            }
            let index = stored as usize;
            if key_at(index) == key {
                return Some(index);
            }
        }
        None
    }

    /// Seed the table was built with.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Whether phase 1 succeeded.
    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.perfect
    }

    /// Number of slots.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    /// Raw slot contents.
    #[inline]
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    /// Longest probe sequence needed by any stored key.
    #[inline]
    pub fn max_probe(&self) -> usize {
        self.max_probe as usize
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|&&slot| slot != EMPTY_SLOT).count()
    }
}
