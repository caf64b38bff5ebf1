//! Type usages, class/interface declarations and generic substitution.
//!
//! Declarations are plain immutable values that refer to their supertypes by qualified name.
//! Everything that has to look another declaration up (ancestor closures, inherited members,
//! assignability) lives in `javelin-resolve`.

#![forbid(unsafe_code)]

mod decl;
mod error;
pub mod format;
pub mod parse;
mod provider;
mod stub;
mod subst;
mod ty;

pub use decl::{ClassDecl, ClassKind, FieldDecl, MethodDecl, ParamDecl, TypeParam, Visibility};
pub use error::{Malformed, ResolveError, Result, SymbolKind};
pub use parse::{parse_type, TypeScope};
pub use provider::TypeProvider;
pub use stub::{FieldStub, MethodStub, TypeDefStub, TypeParamStub};
pub use subst::Substitution;
pub use ty::{
    ClassType, PrimitiveType, Type, TypeParamOwner, TypeVar, WildcardBound, CLONEABLE, OBJECT,
    SERIALIZABLE,
};
