//! Procedural macros for enumeta.

use proc_macro::TokenStream;

mod enumeration;
mod utils;

/// Derive `enumeta::Enumeration` for a field-less enum.
///
/// The underlying type comes from `#[repr(..)]` (default `isize`). Member
/// names are the variant identifiers; `#[enumeta(prefix = "...")]` strips a
/// common prefix from them.
///
/// ```text
/// #[derive(Copy, Clone, PartialEq, Eq, enumeta::Enumeration)]
/// #[repr(u8)]
/// #[enumeta(prefix = "Mode")]
/// enum Mode {
///     ModeRead = 1,
///     ModeWrite = 2,
/// }
///
/// assert_eq!(Mode::ModeRead.name(), Some("Read"));
/// ```
#[proc_macro_derive(Enumeration, attributes(enumeta))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    enumeration::derive_enumeration(input)
}
