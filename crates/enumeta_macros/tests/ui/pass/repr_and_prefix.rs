//! Explicit repr, sparse discriminants and a stripped prefix.

use enumeta::{Classification, Enumeration};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Enumeration)]
#[repr(i16)]
#[enumeta(prefix = "Code")]
pub enum Code {
    CodeNegative = -40,
    CodeZero = 0,
    CodeLarge = 1200,
}

fn main() {
    let code: i16 = Code::CodeLarge.to_repr();
    assert_eq!(code, 1200);
    assert_eq!(Code::CodeNegative.name(), Some("Negative"));
    assert_eq!(Code::from_name("Zero"), Some(Code::CodeZero));
    assert_eq!(Code::reflection().classification(), Classification::Sparse);
}
