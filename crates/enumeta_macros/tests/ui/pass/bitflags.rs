//! Flag enum with a zero member.

use enumeta::Enumeration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Enumeration)]
#[repr(u32)]
enum Access {
    Nothing = 0,
    Read = 1 << 0,
    Write = 1 << 1,
    Exec = 1 << 2,
}

fn main() {
    let reflection = Access::reflection();
    assert!(reflection.is_bitflag());
    assert_eq!(reflection.to_flag_string(0b011).as_deref(), Some("Read|Write"));
    assert_eq!(reflection.parse_flags("Exec|Read", "|"), Some(0b101));
    assert_eq!(Access::Nothing.index(), Some(0));
}
