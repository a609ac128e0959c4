//! Packed storage for member names.
//!
//! All names live in one contiguous buffer; a boundary table locates each.
//! One allocation for the bytes, one for the boundaries, however many names.

use crate::BuildError;

/// Member names packed into a single buffer.
///
/// # Layout
///
/// ```text
/// bytes:  "RedGreenBlue"
/// bounds: [0, 3, 8, 12]
///          name i = bytes[bounds[i]..bounds[i + 1]]
/// ```
///
/// `bounds` has one more entry than there are names, so name `i` starts at
/// `bounds[i]` and is `bounds[i + 1] - bounds[i]` bytes long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameTable {
    bytes: Box<str>,
    bounds: Box<[u32]>,
    /// Shortest name length in bytes (0 when empty).
    min_len: u32,
    /// Longest name length in bytes (0 when empty).
    max_len: u32,
}

impl NameTable {
    /// Pack `names` in iteration order.
    pub fn new<'a, I>(names: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut bytes = String::new();
        let mut bounds = vec![0u32];
        let mut min_len = u32::MAX;
        let mut max_len = 0;

        for name in names {
            bytes.push_str(name);
            let end = u32::try_from(bytes.len())
                .map_err(|_| BuildError::NamesTooLong { bytes: bytes.len() })?;
            // Cannot fail: the whole buffer fits in a u32.
            let len = u32::try_from(name.len()).unwrap_or(u32::MAX);
            min_len = min_len.min(len);
            max_len = max_len.max(len);
            bounds.push(end);
        }

        if bounds.len() == 1 {
            min_len = 0;
        }

        Ok(Self {
            bytes: bytes.into_boxed_str(),
            bounds: bounds.into_boxed_slice(),
            min_len,
            max_len,
        })
    }

    /// Number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        let start = *self.bounds.get(index)? as usize;
        let end = *self.bounds.get(index + 1)? as usize;
        Some(&self.bytes[start..end])
    }

    /// Names in storage order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator + '_ {
        self.bounds
            .windows(2)
            .map(|w| &self.bytes[w[0] as usize..w[1] as usize])
    }

    /// Index of the first name equal to `name`, by linear scan.
    pub fn position(&self, name: &str) -> Option<usize> {
        if !self.may_contain_len(name.len()) {
            return None;
        }
        self.iter().position(|candidate| candidate == name)
    }

    /// `(shortest, longest)` name length in bytes.
    #[inline]
    pub fn len_bounds(&self) -> (usize, usize) {
        (self.min_len as usize, self.max_len as usize)
    }

    /// Cheap pre-filter: could a name of `len` bytes be in the table?
    #[inline]
    pub fn may_contain_len(&self, len: usize) -> bool {
        !self.is_empty() && (self.min_len as usize..=self.max_len as usize).contains(&len)
    }

    /// The packed buffer.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.bytes
    }
}
