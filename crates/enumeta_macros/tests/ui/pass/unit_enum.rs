//! Plain enum with implicit discriminants.

use enumeta::Enumeration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Enumeration)]
enum Direction {
    North,
    East,
    South,
    West,
}

fn main() {
    assert_eq!(Direction::South.name(), Some("South"));
    assert_eq!(Direction::from_repr(3), Some(Direction::West));
    assert_eq!(Direction::reflection().count(), 4);
}
