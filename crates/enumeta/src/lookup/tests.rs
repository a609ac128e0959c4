#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn lookup(members: &[(i128, &str)]) -> EnumLookup {
    EnumLookup::from_members(members.iter().copied()).unwrap()
}

fn lookup_with(members: &[(i128, &str)], policy: &HashPolicy) -> EnumLookup {
    let desc = EnumDescriptor::from_members(members.iter().copied()).unwrap();
    EnumLookup::with_policy(desc, policy)
}

// === Contiguous ===

#[test]
fn contiguous_queries() {
    let e = lookup(&[(0, "A"), (1, "B"), (2, "C")]);

    assert_eq!(e.classification(), Classification::Contiguous);
    assert_eq!(e.index_of(1), Some(1));
    assert!(!e.contains(5));
    assert!(!e.contains(-1));
    assert_eq!(e.name_of(2), Some("C"));
    assert_eq!(e.value_of("B"), Some(1));
}

#[test]
fn contiguous_with_offset() {
    let e = lookup(&[(-2, "NegTwo"), (-1, "NegOne"), (0, "Zero"), (1, "One")]);

    assert_eq!(e.index_of(-2), Some(0));
    assert_eq!(e.index_of(1), Some(3));
    assert_eq!(e.name_of(0), Some("Zero"));
    assert_eq!(e.name_of(2), None);
}

// === Bitflags ===

#[test]
fn bitflag_with_zero() {
    let e = lookup(&[(0, "Z"), (1, "A"), (2, "B"), (4, "C")]);

    assert_eq!(e.classification(), Classification::ContiguousBitflag);
    assert!(!e.contains(3));
    assert_eq!(e.index_of(4), Some(3));
    assert_eq!(e.name_of(0), Some("Z"));
    assert_eq!(e.name_of(1), Some("A"));
    assert_eq!(e.name_of(3), None);
}

#[test]
fn bitflag_without_zero() {
    let e = lookup(&[(8, "D"), (16, "E"), (32, "F")]);

    assert!(!e.contains(0));
    assert_eq!(e.index_of(8), Some(0));
    assert_eq!(e.index_of(32), Some(2));
    assert_eq!(e.index_of(24), None);
}

#[test]
fn bitflag_below_first_flag() {
    let e = lookup(&[(0, "None"), (2, "Two"), (4, "Four")]);

    assert!(!e.contains(1));
    assert_eq!(e.index_of(1), None);
    assert_eq!(e.index_of(2), Some(1));
}

// === Sparse ===

#[test]
fn duplicate_values_first_declared_wins() {
    let e = lookup(&[(0, "A"), (1, "B"), (1, "C")]);

    assert_eq!(e.classification(), Classification::Sparse);
    assert_eq!(e.name_of(1), Some("B"));
    assert_eq!(e.value_of("C"), Some(1));
    assert_eq!(e.value_of("B"), Some(1));
}

#[test]
fn duplicate_values_declared_out_of_order() {
    let e = lookup(&[(1, "Later"), (0, "Zero"), (1, "Alias")]);

    assert_eq!(e.name_of(1), Some("Later"));
    assert_eq!(e.value_of("Alias"), Some(1));
}

#[test]
fn sparse_scan() {
    let e = lookup(&[(-5, "Low"), (3, "Mid"), (100, "High")]);

    assert!(e.contains(3));
    assert!(!e.contains(4));
    assert_eq!(e.index_of(100), Some(2));
    assert_eq!(e.name_of(-5), Some("Low"));
}

// === Empty ===

#[test]
fn empty_enumeration_finds_nothing() {
    let e = EnumLookup::from_members(std::iter::empty::<(i128, &str)>()).unwrap();

    assert!(e.is_empty());
    assert!(!e.contains(0));
    assert_eq!(e.index_of(0), None);
    assert_eq!(e.value_of("A"), None);
    assert!(e.hash_table().is_none());
}

// === Names ===

#[test]
fn small_sets_skip_the_table() {
    let e = lookup(&[(0, "First"), (1, "Second"), (2, "Third")]);
    assert!(e.hash_table().is_none());
}

#[test]
fn first_second_third_through_every_table() {
    let members = [(0, "First"), (1, "Second"), (2, "Third")];
    let policies = [
        HashPolicy::default(),
        HashPolicy::default().with_small_threshold(0),
        HashPolicy::default()
            .with_small_threshold(0)
            .without_perfect_search(),
    ];

    for policy in &policies {
        let e = lookup_with(&members, policy);
        assert_eq!(e.value_of("First"), Some(0));
        assert_eq!(e.value_of("Second"), Some(1));
        assert_eq!(e.value_of("Third"), Some(2));
        assert_eq!(e.value_of("Invalid"), None);
    }

    let forced = lookup_with(&members, &policies[2]);
    assert!(!forced.hash_table().unwrap().is_perfect());
}

#[test]
fn large_sets_use_the_table() {
    let names: Vec<String> = (0..40).map(|i| format!("Member{i}")).collect();
    let members: Vec<(i128, &str)> = names
        .iter()
        .enumerate()
        .map(|(i, n)| (i128::try_from(i).unwrap() * 3, n.as_str()))
        .collect();
    let e = lookup(&members);

    assert!(e.hash_table().is_some());
    for (value, name) in &members {
        assert_eq!(e.value_of(name), Some(*value));
        assert_eq!(e.name_of(*value), Some(*name));
    }
    assert_eq!(e.value_of("Member40"), None);
    assert_eq!(e.value_of("member0"), None);
}

#[test]
fn names_match_byte_for_byte() {
    let e = lookup(&[(0, " X"), (1, "X"), (2, "X ")]);

    assert_eq!(e.value_of(" X"), Some(0));
    assert_eq!(e.value_of("X"), Some(1));
    assert_eq!(e.value_of("X "), Some(2));
    assert_eq!(e.name_of(0), Some(" X"));
}

#[test]
fn length_filter_rejects_early() {
    let e = lookup(&[(0, "Ab"), (1, "Cde")]);

    assert_eq!(e.value_of(""), None);
    assert_eq!(e.value_of("A"), None);
    assert_eq!(e.value_of("Abcd"), None);
    assert!(e.contains_name("Cde"));
}

#[test]
fn custom_equivalence_scans_every_member() {
    let e = lookup(&[(0, "Red"), (1, "Green"), (2, "Blue")]);
    let ignore_case = |a: &str, b: &str| a.eq_ignore_ascii_case(b);

    assert_eq!(e.value_of("green"), None);
    assert_eq!(e.value_of_by("green", ignore_case), Some(1));
    assert_eq!(e.index_of_name_by("BLUE", ignore_case), Some(2));
    assert!(e.contains_name_by("rEd", ignore_case));
    assert!(!e.contains_name_by("Purple", ignore_case));
}

#[test]
fn custom_equivalence_ignores_length_bounds() {
    let e = lookup(&[(0, "On"), (1, "Off")]);
    let prefix_of = |query: &str, member: &str| query.starts_with(member);

    assert_eq!(e.value_of_by("Offline", prefix_of), Some(1));
}

// === Iteration ===

#[test]
fn iteration_in_value_order() {
    let e = lookup(&[(4, "Exec"), (1, "Read"), (2, "Write")]);

    assert_eq!(e.values(), &[1, 2, 4]);
    assert_eq!(e.names().collect::<Vec<_>>(), vec!["Read", "Write", "Exec"]);
    assert_eq!(
        e.entries().map(|m| (m.value, m.name)).collect::<Vec<_>>(),
        vec![(1, "Read"), (2, "Write"), (4, "Exec")]
    );
    assert_eq!(e.name_at(2), Some("Exec"));
    assert_eq!(e.value_at(0), Some(1));
    assert_eq!(e.value_at(3), None);
}
