#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the Grafter compiler and runtime.
//!
//! - [`Interner`] turns type and language names into cheap [`Symbol`] handles.
//! - [`TypeHierarchy`] answers `is-a` questions about node types. The
//!   [`DynamicTypeHierarchy`] implementation is built in code or loaded from
//!   JSON.

mod hierarchy;
mod interner;

#[cfg(test)]
mod hierarchy_tests;
#[cfg(test)]
mod interner_tests;

pub use hierarchy::{
    DynamicTypeHierarchy, HierarchyError, RawType, TypeHierarchy, TypeInfo, TypeKind,
    parse_type_hierarchy,
};
pub use interner::{Interner, Symbol};
