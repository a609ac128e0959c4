//! Tuning knobs for table construction and name lookup.
//!
//! Every knob is a pure function of the key count. Nothing is read from the
//! environment: the same names always produce the same table.

/// Name sets at or below this size are matched by linear comparison; hashing
/// does not pay for itself there.
pub const SMALL_THRESHOLD: usize = 5;

/// Seed used by the linear-probing fallback table.
pub const FALLBACK_SEED: u32 = 17;

/// Number of seeds tried when searching for a minimal perfect hash.
///
/// The odds of a collision-free placement into exactly `keys` slots fall off
/// quickly with `keys`, so very large sets get a smaller budget to bound the
/// construction cost.
pub fn seed_budget(keys: usize) -> u32 {
    match keys {
        0..=4 => 100,
        5..=16 => 500,
        17..=256 => 2000,
        _ => 1000,
    }
}

/// Slot count of the linear-probing fallback table for `keys` names.
///
/// The smallest prime at or above `1.5 * keys + 1`, which keeps the load
/// factor at or below two thirds.
pub fn fallback_table_size(keys: usize) -> usize {
    next_prime(keys + keys / 2 + 1)
}

/// Smallest prime `>= n`.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 4 {
        return n >= 2;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Construction and lookup policy for name tables.
///
/// [`HashPolicy::default`] is what every enumeration uses. Tests override
/// individual knobs, e.g. a zero seed budget to force the probing table.
#[derive(Clone, Copy, Debug)]
pub struct HashPolicy {
    /// Sets of at most this many names skip the table entirely.
    pub small_threshold: usize,
    /// Seed of the probing table.
    pub fallback_seed: u32,
    /// Seeds to try in the perfect search, by key count.
    pub seed_budget: fn(usize) -> u32,
    /// Probing table size, by key count. Must return more than the key count.
    pub fallback_table_size: fn(usize) -> usize,
}

impl HashPolicy {
    /// The documented defaults.
    pub const DEFAULT: Self = Self {
        small_threshold: SMALL_THRESHOLD,
        fallback_seed: FALLBACK_SEED,
        seed_budget,
        fallback_table_size,
    };

    /// Same policy with the perfect search disabled.
    #[must_use]
    pub fn without_perfect_search(self) -> Self {
        Self {
            seed_budget: |_| 0,
            ..self
        }
    }

    /// Same policy with a different small-set threshold.
    #[must_use]
    pub fn with_small_threshold(self, small_threshold: usize) -> Self {
        Self {
            small_threshold,
            ..self
        }
    }

    /// Whether a set of `keys` names is worth a hash table.
    #[inline]
    pub fn uses_table(&self, keys: usize) -> bool {
        keys > self.small_threshold
    }
}

impl Default for HashPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
