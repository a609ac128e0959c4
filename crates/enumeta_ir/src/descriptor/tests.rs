#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn descriptor(members: &[(i128, &str)]) -> EnumDescriptor {
    EnumDescriptor::from_members(members.iter().copied()).unwrap()
}

// === Construction ===

#[test]
fn derived_facts() {
    let desc = descriptor(&[(0, "A"), (1, "B"), (2, "C")]);

    assert_eq!(desc.len(), 3);
    assert_eq!(desc.min(), 0);
    assert_eq!(desc.max(), 2);
    assert_eq!(desc.classification(), Classification::Contiguous);
    assert!(desc.has_zero());
    assert_eq!(desc.first_flag(), 0);
}

#[test]
fn members_are_sorted_by_value() {
    let desc = descriptor(&[(4, "Exec"), (1, "Read"), (2, "Write")]);

    assert_eq!(desc.values(), &[1, 2, 4]);
    let names: Vec<&str> = desc.names().iter().collect();
    assert_eq!(names, vec!["Read", "Write", "Exec"]);
    assert_eq!(desc.declared_index(0), Some(1));
    assert_eq!(desc.declared_index(1), Some(2));
    assert_eq!(desc.declared_index(2), Some(0));
    assert_eq!(desc.declared_index(3), None);
    assert_eq!(desc.declared().collect::<Vec<_>>(), vec![1, 2, 0]);
}

#[test]
fn duplicate_values_keep_declaration_order() {
    let desc = descriptor(&[(1, "C"), (0, "A"), (1, "B")]);

    let members: Vec<Member<'_>> = desc.members().collect();
    assert_eq!(
        members,
        vec![
            Member { value: 0, name: "A" },
            Member { value: 1, name: "C" },
            Member { value: 1, name: "B" },
        ]
    );
    assert_eq!(desc.classification(), Classification::Sparse);
}

#[test]
fn bitflag_facts() {
    let desc = descriptor(&[(0, "Z"), (1, "A"), (2, "B"), (4, "C")]);
    assert_eq!(desc.classification(), Classification::ContiguousBitflag);
    assert!(desc.has_zero());
    assert_eq!(desc.first_flag(), 1);

    let desc = descriptor(&[(8, "D"), (16, "E")]);
    assert_eq!(desc.classification(), Classification::ContiguousBitflag);
    assert!(!desc.has_zero());
    assert_eq!(desc.first_flag(), 8);
}

#[test]
fn signed_range() {
    let desc = descriptor(&[(-1, "Neg"), (-3, "Lower"), (-2, "Mid")]);
    assert_eq!(desc.min(), -3);
    assert_eq!(desc.max(), -1);
    assert_eq!(desc.classification(), Classification::Contiguous);
    assert!(!desc.has_zero());
}

#[test]
fn empty_enumeration() {
    let desc = EnumDescriptor::from_members(std::iter::empty::<(i128, &str)>()).unwrap();
    assert!(desc.is_empty());
    assert_eq!((desc.min(), desc.max()), (0, 0));
    assert_eq!(desc.classification(), Classification::Sparse);
    assert_eq!(desc.member(0), None);
}

#[test]
fn member_access() {
    let desc = descriptor(&[(10, "Ten"), (20, "Twenty")]);
    assert_eq!(desc.member(1), Some(Member { value: 20, name: "Twenty" }));
    assert_eq!(desc.value(0), Some(10));
    assert_eq!(desc.name(0), Some("Ten"));
    assert_eq!(desc.value(2), None);
}

// === Names ===

#[test]
fn qualified_names_are_stripped() {
    assert_eq!(normalize_name("Color::Red", ""), "Red");
    assert_eq!(normalize_name("crate::gfx::Color::Red", ""), "Red");
    assert_eq!(normalize_name("Red", ""), "Red");
}

#[test]
fn prefix_is_stripped() {
    assert_eq!(normalize_name("COLOR_RED", "COLOR_"), "RED");
    assert_eq!(normalize_name("Color::COLOR_RED", "COLOR_"), "RED");
    assert_eq!(normalize_name("RED", "COLOR_"), "RED");
}

#[test]
fn prefix_never_empties_a_name() {
    assert_eq!(normalize_name("COLOR_", "COLOR_"), "COLOR_");
}

#[test]
fn whitespace_is_kept() {
    assert_eq!(normalize_name(" A", ""), " A");
    assert_eq!(normalize_name("Color:: Red ", ""), " Red ");

    let desc = descriptor(&[(0, " A"), (1, "A ")]);
    assert_eq!(desc.name(0), Some(" A"));
    assert_eq!(desc.name(1), Some("A "));
}

#[test]
fn builder_applies_prefix() {
    let desc = EnumDescriptor::builder()
        .prefix("Mode")
        .member(0, "ModeRead")
        .member(1, "ModeWrite")
        .build()
        .unwrap();
    assert_eq!(desc.name(0), Some("Read"));
    assert_eq!(desc.name(1), Some("Write"));
}

// === Errors ===

#[test]
fn duplicate_names_are_rejected() {
    let err = EnumDescriptor::from_members([(0, "A"), (1, "B"), (2, "A")]).unwrap_err();
    assert_eq!(
        err,
        BuildError::DuplicateName {
            name: "A".to_owned(),
            first: 0,
            second: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "duplicate member name `A` (members 0 and 2)"
    );
}

#[test]
fn names_colliding_after_normalization_are_rejected() {
    let err = EnumDescriptor::from_members([(0, "A::Red"), (1, "B::Red")]).unwrap_err();
    assert!(matches!(err, BuildError::DuplicateName { first: 0, second: 1, .. }));
}

#[test]
fn empty_names_are_rejected() {
    let err = EnumDescriptor::from_members([(0, "A"), (1, "Color::")]).unwrap_err();
    assert_eq!(
        err,
        BuildError::EmptyName {
            index: 1,
            raw: "Color::".to_owned(),
        }
    );
}
