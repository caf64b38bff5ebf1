//! Symbol resolution over Java-style class hierarchies.
//!
//! A [`ResolutionContext`] turns qualified names into declarations through an ordered chain of
//! [`TypeProvider`]s. On top of it this crate computes ancestor closures with generic
//! substitution ([`all_super_classes`], [`all_interfaces`]), inherited members ([`get_field`],
//! [`all_methods`]), overload resolution ([`solve_method`]) and assignability
//! ([`is_assignable_by`]).
//!
//! ```
//! use javelin_resolve::{all_super_classes, ResolutionContext};
//!
//! let ctx = ResolutionContext::with_minimal_jdk();
//! let array_list = ctx.solve_type("java.util.ArrayList").unwrap();
//! let supers: Vec<String> = all_super_classes(&ctx, &array_list)
//!     .unwrap()
//!     .iter()
//!     .map(|ty| ty.describe())
//!     .collect();
//! assert_eq!(
//!     supers,
//!     ["java.util.AbstractList<E>", "java.util.AbstractCollection<E>", "java.lang.Object"]
//! );
//! ```

#![forbid(unsafe_code)]

mod assign;
mod context;
mod hierarchy;
mod members;
mod providers;

pub use assign::{can_be_assigned_to, is_assignable_by, is_more_specific};
pub use context::ResolutionContext;
pub use hierarchy::{
    all_ancestors, all_interfaces, all_super_classes, ancestors_of_type, as_super_type,
    interfaces_of_type, super_classes_of_type,
};
pub use javelin_jdk::MinimalJdk;
pub use javelin_types::{ResolveError, Result, TypeProvider};
pub use members::{
    all_fields, all_methods, all_methods_of_type, get_field, get_field_in_type, has_field,
    solve_method, solve_method_in_type, solve_symbol, Member,
};
pub use providers::{MemoryProvider, StubLoadError, StubProvider};
