//! Bitflag composition and parsing.
//!
//! Applies to enumerations whose nonzero values are all single bits. Gaps
//! between flags are allowed here, so these helpers also cover `Sparse`
//! flag sets like `{1, 2, 8}`.
//!
//! A combination is written as the names of its flags in ascending bit order:
//!
//! ```text
//! Read = 1, Write = 2, Exec = 4
//!
//! 0b101  ->  "Read|Exec"
//! ```

use std::fmt;

use crate::EnumLookup;

/// Separator used by [`EnumLookup::to_flag_string`].
pub const FLAG_SEPARATOR: &str = "|";

impl EnumLookup {
    /// Whether every nonzero value is a single bit and at least one is.
    #[inline]
    pub fn is_bitflag(&self) -> bool {
        self.flag_mask().is_some()
    }

    /// Whether `bits` is a combination of member flags.
    ///
    /// `0` counts only when some member has value 0.
    pub fn contains_flags(&self, bits: i128) -> bool {
        let Some(mask) = self.flag_mask() else {
            return false;
        };
        if bits == 0 {
            return self.descriptor().has_zero();
        }
        bits > 0 && bits & !mask == 0
    }

    /// Write the names of the flags in `bits`, joined by `separator`.
    ///
    /// Writes nothing and returns `Ok(false)` when `bits` is not a
    /// combination of member flags. For values shared by several members,
    /// only the first-declared name is written.
    pub fn write_flags<W>(&self, bits: i128, separator: &str, out: &mut W) -> Result<bool, fmt::Error>
    where
        W: fmt::Write + ?Sized,
    {
        if !self.contains_flags(bits) {
            return Ok(false);
        }
        if bits == 0 {
            if let Some(name) = self.name_of(0) {
                out.write_str(name)?;
            }
            return Ok(true);
        }

        let mut previous = 0;
        let mut first = true;
        for member in self.entries() {
            if member.value == 0 || member.value == previous || bits & member.value == 0 {
                continue;
            }
            previous = member.value;
            if !first {
                out.write_str(separator)?;
            }
            out.write_str(member.name)?;
            first = false;
        }
        Ok(true)
    }

    /// Flag names of `bits` joined by `|`, or `None` if `bits` is not a
    /// combination of member flags.
    pub fn to_flag_string(&self, bits: i128) -> Option<String> {
        let mut out = String::new();
        match self.write_flags(bits, FLAG_SEPARATOR, &mut out) {
            Ok(true) => Some(out),
            Ok(false) | Err(_) => None,
        }
    }

    /// Parse `separator`-joined flag names into their combined bits.
    ///
    /// Pieces are trimmed. `None` if any piece is not a member name, or if
    /// this is not a bitflag enumeration.
    pub fn parse_flags(&self, text: &str, separator: &str) -> Option<i128> {
        if !self.is_bitflag() {
            return None;
        }
        text.split(separator)
            .try_fold(0, |bits, piece| Some(bits | self.value_of(piece.trim())?))
    }
}
