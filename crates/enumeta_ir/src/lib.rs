//! Enumeta IR - Enumeration Descriptor Types
//!
//! This crate contains the data model shared by the lookup engine:
//! - [`Discriminant`] for the primitive integers an enumeration can be backed by
//! - [`NameTable`], all member names packed into one buffer
//! - [`classify`] and [`Classification`], the structural shortcut selector
//! - [`EnumDescriptor`], the ordered member list plus derived facts
//!
//! # Design Philosophy
//!
//! - **Build Once**: descriptors are constructed at initialization and never
//!   mutated, so they can be shared by reference across threads.
//! - **Widen Everything**: member values are stored as `i128`, which holds
//!   every `i8..i64` and `u8..u64` value losslessly.
//! - **Value Order**: members are stored stably sorted by value; each keeps
//!   its declaration position for typed callers.

mod classify;
mod descriptor;
mod discriminant;
mod error;
mod names;

pub use classify::{classify, is_bitflag_set, is_single_bit, Classification};
pub use descriptor::{normalize_name, DescriptorBuilder, EnumDescriptor, Member};
pub use discriminant::Discriminant;
pub use error::BuildError;
pub use names::NameTable;
