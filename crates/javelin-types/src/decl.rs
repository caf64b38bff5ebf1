//! Class and interface declarations.
//!
//! Declarations report their members exactly as written: field and method types are expressed in
//! terms of the declaration's own type parameters. Viewing a member through a subtype is the job
//! of [`crate::Substitution`].

use serde::{Deserialize, Serialize};

use crate::error::{Malformed, ResolveError, Result, SymbolKind};
use crate::ty::{package_name, simple_name, OBJECT};
use crate::{ClassType, Type, TypeParamOwner, TypeVar};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

/// A declared type parameter together with its upper bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    pub owner: TypeParamOwner,
    /// Explicit upper bounds; empty means the implicit `java.lang.Object`.
    pub bounds: Vec<Type>,
}

impl TypeParam {
    pub fn as_var(&self) -> TypeVar {
        TypeVar {
            name: self.name.clone(),
            owner: self.owner.clone(),
        }
    }

    pub fn as_type(&self) -> Type {
        Type::TypeVar(self.as_var())
    }

    pub fn is_var(&self, var: &TypeVar) -> bool {
        self.name == var.name && self.owner == var.owner
    }

    /// Explicit bounds, or `java.lang.Object` when none were declared.
    pub fn upper_bounds(&self) -> Vec<Type> {
        if self.bounds.is_empty() {
            vec![Type::object()]
        } else {
            self.bounds.clone()
        }
    }

    /// Erasure of the parameter: the erasure of its leftmost bound.
    pub fn erasure(&self) -> Type {
        self.bounds
            .first()
            .map(Type::erasure)
            .unwrap_or_else(Type::object)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: Type,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
}

impl FieldDecl {
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub type_params: Vec<TypeParam>,
    pub params: Vec<ParamDecl>,
    pub return_type: Type,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
}

impl MethodDecl {
    pub fn num_params(&self) -> usize {
        self.params.len()
    }

    pub fn param(&self, index: usize) -> Option<&ParamDecl> {
        self.params.get(index)
    }

    pub fn param_types(&self) -> impl Iterator<Item = &Type> + '_ {
        self.params.iter().map(|p| &p.ty)
    }

    pub fn type_param(&self, name: &str) -> Option<&TypeParam> {
        self.type_params.iter().find(|tp| tp.name == name)
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    pub fn is_package_private(&self) -> bool {
        self.visibility == Visibility::PackagePrivate
    }

    /// `name(T1, T2)`
    pub fn signature(&self) -> String {
        crate::format::format_method_signature(self)
    }
}

/// A class or interface, independent of where it was loaded from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub kind: ClassKind,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub type_params: Vec<TypeParam>,
    /// The superclass as written at the `extends` site; `None` when omitted.
    pub super_class: Option<ClassType>,
    pub interfaces: Vec<ClassType>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn is_class(&self) -> bool {
        self.kind == ClassKind::Class
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    pub fn package_name(&self) -> Option<&str> {
        package_name(&self.name)
    }

    pub fn is_root(&self) -> bool {
        self.name == OBJECT
    }

    /// The direct superclass usage.
    ///
    /// Classes without an explicit `extends` clause report `java.lang.Object` with no type
    /// arguments. Interfaces and the root class report `None`.
    pub fn super_class(&self) -> Option<ClassType> {
        match self.kind {
            ClassKind::Interface => None,
            ClassKind::Class => self
                .super_class
                .clone()
                .or_else(|| (!self.is_root()).then(ClassType::object)),
        }
    }

    /// Directly declared superinterfaces, in declaration order.
    pub fn interfaces(&self) -> &[ClassType] {
        &self.interfaces
    }

    pub fn type_params(&self) -> &[TypeParam] {
        &self.type_params
    }

    pub fn type_param(&self, name: &str) -> Option<&TypeParam> {
        self.type_params.iter().find(|tp| tp.name == name)
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// This declaration instantiated with its own type variables (`Foo<E>` for `class Foo<E>`).
    pub fn as_type(&self) -> ClassType {
        ClassType::new(
            self.name.clone(),
            self.type_params.iter().map(TypeParam::as_type).collect(),
        )
    }

    /// Direct (non-inherited) field lookup.
    pub fn field(&self, name: &str) -> Result<&FieldDecl> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| ResolveError::not_found(SymbolKind::Field, &self.name, name))
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Methods introduced or overridden by this declaration.
    pub fn declared_methods(&self) -> &[MethodDecl] {
        &self.methods
    }

    pub fn declared_methods_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a MethodDecl> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Check structural invariants: no dangling type variables, consistent kinds and unique
    /// type parameter names.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| -> ResolveError {
            Malformed::InvalidDeclaration {
                name: self.name.clone(),
                message,
            }
            .into()
        };

        if self.is_interface() && self.super_class.is_some() {
            return Err(invalid("an interface cannot extend a class".to_string()));
        }

        let own_owner = TypeParamOwner::Class(self.name.clone());
        for (idx, tp) in self.type_params.iter().enumerate() {
            if tp.owner != own_owner {
                return Err(invalid(format!(
                    "type parameter `{}` is owned by `{}`",
                    tp.name,
                    tp.owner.declaring_class()
                )));
            }
            if self.type_params[..idx].iter().any(|other| other.name == tp.name) {
                return Err(invalid(format!("duplicate type parameter `{}`", tp.name)));
            }
        }

        if let Some(tp) = cyclic_bound(&self.type_params) {
            return Err(invalid(format!("type parameter `{}` has a cyclic bound", tp.name)));
        }

        let class_scope = |var: &TypeVar| self.type_params.iter().any(|tp| tp.is_var(var));

        for tp in &self.type_params {
            for bound in &tp.bounds {
                check_scope(bound, &self.name, &class_scope)?;
            }
        }
        if let Some(super_class) = &self.super_class {
            check_scope(&Type::Class(super_class.clone()), &self.name, &class_scope)?;
        }
        for iface in &self.interfaces {
            check_scope(&Type::Class(iface.clone()), &self.name, &class_scope)?;
        }

        for field in &self.fields {
            if field.ty.is_void() {
                return Err(invalid(format!("field `{}` has type void", field.name)));
            }
            let context = format!("{}.{}", self.name, field.name);
            check_scope(&field.ty, &context, &class_scope)?;
        }

        for (index, method) in self.methods.iter().enumerate() {
            let context = format!("{}.{}", self.name, method.signature());
            let method_scope = |var: &TypeVar| {
                class_scope(var) || method.type_params.iter().any(|tp| tp.is_var(var))
            };
            for tp in &method.type_params {
                let expected = TypeParamOwner::Method {
                    class: self.name.clone(),
                    method: method.name.clone(),
                    index,
                };
                if tp.owner != expected {
                    return Err(invalid(format!(
                        "type parameter `{}` of `{}` has a foreign owner",
                        tp.name, method.name
                    )));
                }
                for bound in &tp.bounds {
                    check_scope(bound, &context, &method_scope)?;
                }
            }
            if let Some(tp) = cyclic_bound(&method.type_params) {
                return Err(invalid(format!(
                    "type parameter `{}` of `{}` has a cyclic bound",
                    tp.name, method.name
                )));
            }
            for param in &method.params {
                if param.ty.is_void() {
                    return Err(invalid(format!("parameter `{}` has type void", param.name)));
                }
                check_scope(&param.ty, &context, &method_scope)?;
            }
            check_scope(&method.return_type, &context, &method_scope)?;
        }

        Ok(())
    }
}

/// A parameter reachable from itself through bounds that are bare type variables
/// (`<T extends U, U extends T>`).
fn cyclic_bound(params: &[TypeParam]) -> Option<&TypeParam> {
    let direct = |tp: &TypeParam| -> Vec<usize> {
        tp.bounds
            .iter()
            .filter_map(Type::as_type_var)
            .filter_map(|var| params.iter().position(|other| other.is_var(var)))
            .collect()
    };

    params.iter().enumerate().find_map(|(start, tp)| {
        let mut seen = vec![false; params.len()];
        let mut stack = direct(tp);
        while let Some(idx) = stack.pop() {
            if idx == start {
                return Some(tp);
            }
            if !std::mem::replace(&mut seen[idx], true) {
                stack.extend(direct(&params[idx]));
            }
        }
        None
    })
}

fn check_scope(ty: &Type, context: &str, in_scope: &dyn Fn(&TypeVar) -> bool) -> Result<()> {
    let mut dangling = None;
    ty.for_each_type_var(&mut |var| {
        if dangling.is_none() && !in_scope(var) {
            dangling = Some(var.name.clone());
        }
    });
    match dangling {
        Some(var) => Err(Malformed::DanglingTypeVariable {
            var,
            context: context.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
