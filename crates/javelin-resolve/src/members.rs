//! Inherited member lookup and overload resolution.

use std::ops::Deref;

use javelin_types::format::format_generic_signature;
use javelin_types::{
    ClassDecl, ClassType, FieldDecl, MethodDecl, ResolveError, Result, Substitution, SymbolKind,
    Type, TypeParam,
};

use crate::assign::{is_more_specific, Assignability};
use crate::hierarchy::{instantiate, interface_closure, super_class_chain, Ancestor};
use crate::ResolutionContext;

/// A member together with the type that declares it.
///
/// `owner` is the declaring class as instantiated from the queried type and `decl` has that
/// instantiation applied, so `Bar extends Foo<String>` sees `Foo<String>.field: String`.
#[derive(Debug, Clone, PartialEq)]
pub struct Member<T> {
    pub owner: ClassType,
    pub decl: T,
}

impl<T> Member<T> {
    pub fn owner_name(&self) -> &str {
        &self.owner.name
    }

    pub fn into_decl(self) -> T {
        self.decl
    }
}

impl<T> Deref for Member<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.decl
    }
}

/// Classes and interfaces a member lookup visits, closest first.
struct Scopes {
    classes: Vec<Ancestor>,
    interfaces: Vec<Ancestor>,
}

fn scopes(ctx: &ResolutionContext, decl: &ClassDecl, subst: &Substitution) -> Result<Scopes> {
    let classes = super_class_chain(ctx, decl, subst)?;
    let interfaces = interface_closure(ctx, decl, subst, &classes)?;
    Ok(Scopes {
        classes,
        interfaces,
    })
}

/// Look up a field by name: `decl` itself, then its superclasses, then its interfaces.
///
/// Private fields of ancestors are not inherited.
pub fn get_field(ctx: &ResolutionContext, decl: &ClassDecl, name: &str) -> Result<Member<FieldDecl>> {
    find_field(ctx, decl, &Substitution::new(), name)
}

/// [`get_field`] on a concrete instantiation such as `Foo<String>`.
pub fn get_field_in_type(
    ctx: &ResolutionContext,
    ty: &ClassType,
    name: &str,
) -> Result<Member<FieldDecl>> {
    let (decl, subst) = instantiate(ctx, ty)?;
    find_field(ctx, &decl, &subst, name)
}

pub fn has_field(ctx: &ResolutionContext, decl: &ClassDecl, name: &str) -> Result<bool> {
    Ok(solve_symbol(ctx, decl, name)?.is_some())
}

/// Like [`get_field`] but an absent field is `Ok(None)`; other failures propagate.
pub fn solve_symbol(
    ctx: &ResolutionContext,
    decl: &ClassDecl,
    name: &str,
) -> Result<Option<Member<FieldDecl>>> {
    match get_field(ctx, decl, name) {
        Ok(field) => Ok(Some(field)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

fn find_field(
    ctx: &ResolutionContext,
    decl: &ClassDecl,
    subst: &Substitution,
    name: &str,
) -> Result<Member<FieldDecl>> {
    if let Some(field) = decl.fields.iter().find(|f| f.name == name) {
        return Ok(Member {
            owner: subst.instantiate(&decl.as_type()),
            decl: subst.apply_to_field(field),
        });
    }

    let scopes = scopes(ctx, decl, subst)?;
    for ancestor in scopes.classes.iter().chain(&scopes.interfaces) {
        if let Some(field) = ancestor
            .decl
            .fields
            .iter()
            .find(|f| f.name == name && !f.is_private())
        {
            return Ok(Member {
                owner: ancestor.usage.clone(),
                decl: ancestor.subst.apply_to_field(field),
            });
        }
    }

    Err(ResolveError::not_found(SymbolKind::Field, &decl.name, name))
}

/// Every field visible in `decl`, closest first. A field hides ancestor fields of the same name.
pub fn all_fields(ctx: &ResolutionContext, decl: &ClassDecl) -> Result<Vec<Member<FieldDecl>>> {
    let subst = Substitution::new();
    let mut out: Vec<Member<FieldDecl>> = decl
        .fields
        .iter()
        .map(|field| Member {
            owner: decl.as_type(),
            decl: field.clone(),
        })
        .collect();

    let scopes = scopes(ctx, decl, &subst)?;
    for ancestor in scopes.classes.iter().chain(&scopes.interfaces) {
        for field in ancestor.decl.fields.iter().filter(|f| !f.is_private()) {
            if out.iter().any(|seen| seen.name == field.name) {
                continue;
            }
            out.push(Member {
                owner: ancestor.usage.clone(),
                decl: ancestor.subst.apply_to_field(field),
            });
        }
    }
    Ok(out)
}

/// Every method visible in `decl`: its own, then its superclasses', then its interfaces'.
///
/// An inherited method with the same name and parameter types as one already collected is
/// overridden and dropped.
pub fn all_methods(ctx: &ResolutionContext, decl: &ClassDecl) -> Result<Vec<Member<MethodDecl>>> {
    collect_methods(ctx, decl, &Substitution::new())
}

/// [`all_methods`] on a concrete instantiation such as `ArrayList<String>`.
pub fn all_methods_of_type(
    ctx: &ResolutionContext,
    ty: &ClassType,
) -> Result<Vec<Member<MethodDecl>>> {
    let (decl, subst) = instantiate(ctx, ty)?;
    collect_methods(ctx, &decl, &subst)
}

fn collect_methods(
    ctx: &ResolutionContext,
    decl: &ClassDecl,
    subst: &Substitution,
) -> Result<Vec<Member<MethodDecl>>> {
    let owner = subst.instantiate(&decl.as_type());
    let mut out: Vec<Member<MethodDecl>> = Vec::new();
    let mut keys: Vec<OverrideKey> = Vec::new();

    let mut add = |owner: &ClassType, method: MethodDecl| {
        let key = OverrideKey::of(&method);
        if keys.contains(&key) {
            tracing::trace!(
                target = "javelin.members",
                owner = %owner,
                method = %method.signature(),
                "overridden"
            );
            return;
        }
        keys.push(key);
        out.push(Member {
            owner: owner.clone(),
            decl: method,
        });
    };

    for method in decl.declared_methods() {
        add(&owner, subst.apply_to_method(method));
    }

    let scopes = scopes(ctx, decl, subst)?;
    for ancestor in scopes.classes.iter().chain(&scopes.interfaces) {
        for method in ancestor.decl.declared_methods() {
            if method.is_private() {
                continue;
            }
            add(&ancestor.usage, ancestor.subst.apply_to_method(method));
        }
    }

    Ok(out)
}

/// Name and parameter types with the method's own type parameters erased, so generic methods
/// declared at different levels compare equal.
#[derive(Debug, PartialEq)]
struct OverrideKey {
    name: String,
    params: Vec<Type>,
}

impl OverrideKey {
    fn of(method: &MethodDecl) -> Self {
        let erase: Substitution = method
            .type_params
            .iter()
            .map(|tp| (tp.as_var(), tp.erasure()))
            .collect();
        Self {
            name: method.name.clone(),
            params: method.param_types().map(|ty| erase.apply(ty)).collect(),
        }
    }
}

/// Resolve a call of `name` with arguments of the given types.
///
/// Candidates are filtered by name, arity and applicability (each argument assignable to its
/// parameter); the unique most specific candidate wins. No applicable candidate is
/// [`ResolveError::NotFound`], several equally specific ones are [`ResolveError::Ambiguous`].
pub fn solve_method(
    ctx: &ResolutionContext,
    decl: &ClassDecl,
    name: &str,
    arg_types: &[Type],
) -> Result<Member<MethodDecl>> {
    let methods = collect_methods(ctx, decl, &Substitution::new())?;
    select_method(ctx, &decl.name, methods, name, arg_types)
}

/// [`solve_method`] on a concrete instantiation: `ArrayList<String>.add(E)` takes a `String`.
pub fn solve_method_in_type(
    ctx: &ResolutionContext,
    ty: &ClassType,
    name: &str,
    arg_types: &[Type],
) -> Result<Member<MethodDecl>> {
    let methods = all_methods_of_type(ctx, ty)?;
    select_method(ctx, &ty.name, methods, name, arg_types)
}

fn select_method(
    ctx: &ResolutionContext,
    owner: &str,
    methods: Vec<Member<MethodDecl>>,
    name: &str,
    arg_types: &[Type],
) -> Result<Member<MethodDecl>> {
    let mut applicable: Vec<Member<MethodDecl>> = Vec::new();
    for method in methods {
        if method.name != name || method.num_params() != arg_types.len() {
            continue;
        }
        if is_applicable(ctx, &method.type_params, &method, arg_types)? {
            applicable.push(method);
        } else {
            tracing::debug!(
                target = "javelin.members",
                candidate = %method.signature(),
                "not applicable"
            );
        }
    }

    if applicable.is_empty() {
        return Err(ResolveError::not_found(SymbolKind::Method, owner, name));
    }

    let mut maximal: Vec<usize> = Vec::new();
    'candidates: for (idx, candidate) in applicable.iter().enumerate() {
        for (other_idx, other) in applicable.iter().enumerate() {
            if idx != other_idx && !is_more_specific(ctx, candidate, other)? {
                continue 'candidates;
            }
        }
        maximal.push(idx);
    }

    if let [idx] = maximal[..] {
        let chosen = applicable.swap_remove(idx);
        tracing::debug!(
            target = "javelin.members",
            owner = %chosen.owner,
            method = %chosen.signature(),
            "resolved method"
        );
        return Ok(chosen);
    }

    let tied: Vec<&Member<MethodDecl>> = if maximal.is_empty() {
        applicable.iter().collect()
    } else {
        maximal.iter().map(|&idx| &applicable[idx]).collect()
    };
    Err(ResolveError::Ambiguous {
        name: name.to_owned(),
        candidates: tied
            .iter()
            .map(|m| format!("{}.{}", m.owner, format_generic_signature(m)))
            .collect(),
    })
}

fn is_applicable(
    ctx: &ResolutionContext,
    type_params: &[TypeParam],
    method: &MethodDecl,
    arg_types: &[Type],
) -> Result<bool> {
    let mut check = Assignability::new(ctx, type_params);
    for (param, arg) in method.param_types().zip(arg_types) {
        if !check.check(param, arg)? {
            return Ok(false);
        }
    }
    Ok(true)
}
