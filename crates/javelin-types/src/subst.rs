//! Type-argument substitution across inheritance edges.
//!
//! Walking `class C extends B<String>` / `class B<T> extends A<T>` is done one edge at a time:
//! the substitution derived for `B` is applied to `B`'s declared usage of `A` before the
//! substitution for `A` is derived from it.

use crate::error::{Malformed, Result};
use crate::{
    ClassType, FieldDecl, MethodDecl, ParamDecl, Type, TypeParam, TypeVar, WildcardBound,
};

/// An ordered mapping from type variables to type usages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    pairs: Vec<(TypeVar, Type)>,
    /// Derived from a raw usage of a generic declaration.
    raw: bool,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping from a supertype's declared parameters to the arguments of `usage`.
    ///
    /// A raw usage of a generic declaration maps every parameter to its erasure and marks the
    /// substitution raw (see [`Substitution::instantiate`]); any other argument count mismatch
    /// is malformed.
    pub fn for_supertype(params: &[TypeParam], usage: &ClassType) -> Result<Self> {
        if usage.args.is_empty() {
            let mut erased: Substitution = params
                .iter()
                .map(|tp| (tp.as_var(), tp.erasure()))
                .collect();
            erased.raw = !params.is_empty();
            return Ok(erased);
        }

        if usage.args.len() != params.len() {
            return Err(Malformed::ArityMismatch {
                name: usage.name.clone(),
                expected: params.len(),
                found: usage.args.len(),
            }
            .into());
        }

        Ok(params
            .iter()
            .zip(&usage.args)
            .map(|(tp, arg)| (tp.as_var(), arg.clone()))
            .collect())
    }

    /// Insert or replace the mapping for `var`.
    pub fn insert(&mut self, var: TypeVar, ty: Type) {
        match self.pairs.iter_mut().find(|(existing, _)| *existing == var) {
            Some(slot) => slot.1 = ty,
            None => self.pairs.push((var, ty)),
        }
    }

    pub fn get(&self, var: &TypeVar) -> Option<&Type> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == var)
            .map(|(_, ty)| ty)
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeVar, &Type)> + '_ {
        self.pairs.iter().map(|(var, ty)| (var, ty))
    }

    pub fn apply(&self, ty: &Type) -> Type {
        if self.is_empty() {
            return ty.clone();
        }
        match ty {
            Type::TypeVar(var) => self.get(var).cloned().unwrap_or_else(|| ty.clone()),
            Type::Class(class) => Type::Class(self.apply_class(class)),
            Type::Array(elem) => Type::array(self.apply(elem)),
            Type::Wildcard(WildcardBound::Extends(bound)) => {
                Type::Wildcard(WildcardBound::Extends(Box::new(self.apply(bound))))
            }
            Type::Wildcard(WildcardBound::Super(bound)) => {
                Type::Wildcard(WildcardBound::Super(Box::new(self.apply(bound))))
            }
            Type::Wildcard(WildcardBound::Unbounded)
            | Type::Primitive(_)
            | Type::Void
            | Type::Null => ty.clone(),
        }
    }

    pub fn apply_class(&self, class: &ClassType) -> ClassType {
        ClassType {
            name: class.name.clone(),
            args: class.args.iter().map(|arg| self.apply(arg)).collect(),
        }
    }

    /// A class usage written in the substituted declaration: its own type or a declared
    /// supertype. Under a raw substitution the result is raw too (JLS 4.8), while member
    /// signatures still see the erased parameters through [`Substitution::apply`].
    pub fn instantiate(&self, declared: &ClassType) -> ClassType {
        if self.raw {
            ClassType::raw(declared.name.clone())
        } else {
            self.apply_class(declared)
        }
    }

    /// `self` followed by `next`: `self.then(next).apply(t) == next.apply(&self.apply(t))`.
    pub fn then(&self, next: &Substitution) -> Substitution {
        let mut out: Substitution = self
            .pairs
            .iter()
            .map(|(var, ty)| (var.clone(), next.apply(ty)))
            .collect();
        for (var, ty) in &next.pairs {
            if out.get(var).is_none() {
                out.pairs.push((var.clone(), ty.clone()));
            }
        }
        out.raw = self.raw || next.raw;
        out
    }

    pub fn apply_to_field(&self, field: &FieldDecl) -> FieldDecl {
        FieldDecl {
            ty: self.apply(&field.ty),
            ..field.clone()
        }
    }

    /// Substitute a method signature. The method's own type parameters shadow any mapping for
    /// a variable with the same identity.
    pub fn apply_to_method(&self, method: &MethodDecl) -> MethodDecl {
        let shadowed;
        let subst = if method
            .type_params
            .iter()
            .any(|tp| self.get(&tp.as_var()).is_some())
        {
            shadowed = self.without(method.type_params.iter().map(TypeParam::as_var));
            &shadowed
        } else {
            self
        };

        MethodDecl {
            name: method.name.clone(),
            type_params: method
                .type_params
                .iter()
                .map(|tp| TypeParam {
                    bounds: tp.bounds.iter().map(|b| subst.apply(b)).collect(),
                    ..tp.clone()
                })
                .collect(),
            params: method
                .params
                .iter()
                .map(|p| ParamDecl {
                    name: p.name.clone(),
                    ty: subst.apply(&p.ty),
                })
                .collect(),
            return_type: subst.apply(&method.return_type),
            visibility: method.visibility,
            is_static: method.is_static,
            is_abstract: method.is_abstract,
        }
    }

    fn without(&self, vars: impl Iterator<Item = TypeVar>) -> Substitution {
        let vars: Vec<TypeVar> = vars.collect();
        self.pairs
            .iter()
            .filter(|(var, _)| !vars.contains(var))
            .cloned()
            .collect()
    }
}

impl FromIterator<(TypeVar, Type)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (TypeVar, Type)>>(iter: I) -> Self {
        let mut out = Substitution::new();
        for (var, ty) in iter {
            out.insert(var, ty);
        }
        out
    }
}
