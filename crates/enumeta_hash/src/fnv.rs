//! Seeded 32-bit FNV-1a.

/// 32-bit FNV offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// 32-bit FNV prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hash `key` with FNV-1a, XOR-ing `seed` into the offset basis.
///
/// Seed `0` yields the standard FNV-1a value.
#[inline]
#[expect(clippy::cast_lossless, reason = "u32::from is not usable in const fn")]
pub const fn fnv1a(key: &[u8], seed: u32) -> u32 {
    let mut hash = FNV_OFFSET_BASIS ^ seed;
    let mut i = 0;
    while i < key.len() {
        hash ^= key[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Home slot of `key` in a table of `table_size` slots.
///
/// `table_size` must be nonzero.
#[inline]
pub fn slot_for(key: &str, seed: u32, table_size: usize) -> usize {
    debug_assert!(table_size > 0);
    fnv1a(key.as_bytes(), seed) as usize % table_size
}
