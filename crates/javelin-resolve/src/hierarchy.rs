//! Ancestor closures.
//!
//! Every walk carries the substitution of the type it started from, so ancestors are reported
//! as instantiated from that type (`ArrayList<String>` sees `List<String>`, a bare declaration
//! `ArrayList` sees `List<E>` with `E` owned by `ArrayList`). Ancestors of a raw usage are raw.

use std::collections::HashSet;
use std::sync::Arc;

use javelin_types::{ClassDecl, ClassType, ResolveError, Result, Substitution};

use crate::ResolutionContext;

/// An ancestor reached by a closure walk.
#[derive(Debug, Clone)]
pub(crate) struct Ancestor {
    /// The ancestor as instantiated from the starting type.
    pub usage: ClassType,
    pub decl: Arc<ClassDecl>,
    /// Maps the ancestor's own type parameters to `usage`'s arguments.
    pub subst: Substitution,
}

/// Superclass chain of `decl`, nearest first, ending with `java.lang.Object`.
///
/// `decl` itself is never included. Interfaces report just the root type.
pub fn all_super_classes(ctx: &ResolutionContext, decl: &ClassDecl) -> Result<Vec<ClassType>> {
    if decl.is_interface() {
        return Ok(vec![ClassType::object()]);
    }
    let chain = super_class_chain(ctx, decl, &Substitution::new())?;
    Ok(chain.into_iter().map(|a| a.usage).collect())
}

/// Every interface implemented by `decl` directly or through its superclasses, depth first,
/// de-duplicated by qualified name.
pub fn all_interfaces(ctx: &ResolutionContext, decl: &ClassDecl) -> Result<Vec<ClassType>> {
    let subst = Substitution::new();
    let chain = super_class_chain(ctx, decl, &subst)?;
    let closure = interface_closure(ctx, decl, &subst, &chain)?;
    Ok(closure.into_iter().map(|a| a.usage).collect())
}

/// [`all_super_classes`] followed by [`all_interfaces`].
pub fn all_ancestors(ctx: &ResolutionContext, decl: &ClassDecl) -> Result<Vec<ClassType>> {
    let mut out = all_super_classes(ctx, decl)?;
    out.extend(all_interfaces(ctx, decl)?);
    Ok(out)
}

pub fn super_classes_of_type(ctx: &ResolutionContext, ty: &ClassType) -> Result<Vec<ClassType>> {
    let (decl, subst) = instantiate(ctx, ty)?;
    if decl.is_interface() {
        return Ok(vec![ClassType::object()]);
    }
    let chain = super_class_chain(ctx, &decl, &subst)?;
    Ok(chain.into_iter().map(|a| a.usage).collect())
}

pub fn interfaces_of_type(ctx: &ResolutionContext, ty: &ClassType) -> Result<Vec<ClassType>> {
    let (decl, subst) = instantiate(ctx, ty)?;
    let chain = super_class_chain(ctx, &decl, &subst)?;
    let closure = interface_closure(ctx, &decl, &subst, &chain)?;
    Ok(closure.into_iter().map(|a| a.usage).collect())
}

pub fn ancestors_of_type(ctx: &ResolutionContext, ty: &ClassType) -> Result<Vec<ClassType>> {
    let mut out = super_classes_of_type(ctx, ty)?;
    out.extend(interfaces_of_type(ctx, ty)?);
    Ok(out)
}

/// `ty` viewed as its ancestor named `target` (or `ty` itself when the names match).
///
/// Example: `ArrayList<String>` as `java.util.Collection` is `Collection<String>`.
pub fn as_super_type(
    ctx: &ResolutionContext,
    ty: &ClassType,
    target: &str,
) -> Result<Option<ClassType>> {
    if ty.name == target {
        return Ok(Some(ty.clone()));
    }
    Ok(ancestors_of_type(ctx, ty)?
        .into_iter()
        .find(|ancestor| ancestor.name == target))
}

/// Resolve `ty`'s declaration and the substitution from its parameters to `ty`'s arguments.
pub(crate) fn instantiate(
    ctx: &ResolutionContext,
    ty: &ClassType,
) -> Result<(Arc<ClassDecl>, Substitution)> {
    let decl = ctx.solve_type(&ty.name)?;
    let subst = Substitution::for_supertype(decl.type_params(), ty)?;
    Ok((decl, subst))
}

/// Walk the superclass chain of `decl`, whose own type parameters are mapped by `subst`.
pub(crate) fn super_class_chain(
    ctx: &ResolutionContext,
    decl: &ClassDecl,
    subst: &Substitution,
) -> Result<Vec<Ancestor>> {
    let mut path = vec![decl.name.clone()];
    let mut out: Vec<Ancestor> = Vec::new();

    let mut next = decl.super_class().map(|sup| subst.instantiate(&sup));
    while let Some(usage) = next {
        if path.contains(&usage.name) {
            path.push(usage.name);
            return Err(ResolveError::CyclicHierarchy { path });
        }
        tracing::trace!(target = "javelin.hierarchy", from = %decl.name, superclass = %usage, "superclass");

        let sup_decl = ctx.solve_type(&usage.name)?;
        let sup_subst = Substitution::for_supertype(sup_decl.type_params(), &usage)?;
        next = sup_decl
            .super_class()
            .map(|sup| sup_subst.instantiate(&sup));
        path.push(usage.name.clone());
        out.push(Ancestor {
            usage,
            decl: sup_decl,
            subst: sup_subst,
        });
    }

    Ok(out)
}

/// Depth-first interface closure of `decl` and the classes of `chain`.
pub(crate) fn interface_closure(
    ctx: &ResolutionContext,
    decl: &ClassDecl,
    subst: &Substitution,
    chain: &[Ancestor],
) -> Result<Vec<Ancestor>> {
    let mut walk = InterfaceWalk {
        ctx,
        seen: HashSet::new(),
        path: Vec::new(),
        out: Vec::new(),
    };

    walk.path.push(decl.name.clone());
    for iface in decl.interfaces() {
        walk.visit(subst.instantiate(iface))?;
    }
    walk.path.pop();

    for ancestor in chain {
        walk.path.push(ancestor.decl.name.clone());
        for iface in ancestor.decl.interfaces() {
            walk.visit(ancestor.subst.instantiate(iface))?;
        }
        walk.path.pop();
    }

    Ok(walk.out)
}

struct InterfaceWalk<'a> {
    ctx: &'a ResolutionContext,
    seen: HashSet<String>,
    path: Vec<String>,
    out: Vec<Ancestor>,
}

impl InterfaceWalk<'_> {
    fn visit(&mut self, usage: ClassType) -> Result<()> {
        if self.path.contains(&usage.name) {
            let mut path = self.path.clone();
            path.push(usage.name);
            return Err(ResolveError::CyclicHierarchy { path });
        }
        if !self.seen.insert(usage.name.clone()) {
            return Ok(());
        }
        tracing::trace!(target = "javelin.hierarchy", interface = %usage, "interface");

        let decl = self.ctx.solve_type(&usage.name)?;
        let subst = Substitution::for_supertype(decl.type_params(), &usage)?;

        let supers: Vec<ClassType> = decl
            .interfaces()
            .iter()
            .map(|iface| subst.instantiate(iface))
            .collect();

        self.path.push(usage.name.clone());
        self.out.push(Ancestor {
            usage,
            decl,
            subst,
        });
        for sup in supers {
            self.visit(sup)?;
        }
        self.path.pop();
        Ok(())
    }
}
