//! Keyword variant names are reported without the `r#` marker.

#![allow(non_camel_case_types)]

use enumeta::Enumeration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Enumeration)]
#[repr(u8)]
enum Keyword {
    r#fn,
    r#let,
    r#match,
}

fn main() {
    assert_eq!(Keyword::r#let.name(), Some("let"));
    assert_eq!(Keyword::from_name("match"), Some(Keyword::r#match));
    assert_eq!(Keyword::from_index(0), Some(Keyword::r#fn));
}
