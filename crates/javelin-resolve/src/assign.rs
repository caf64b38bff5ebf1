//! Assignment compatibility between type usages.
//!
//! Covers identity, widening primitive conversion, widening reference conversion with type
//! argument containment, and unchecked conversion to and from raw types. Boxing and unboxing are
//! not performed.

use javelin_types::{
    ClassType, Malformed, MethodDecl, Result, Substitution, Type, TypeParam, TypeParamOwner,
    TypeVar, WildcardBound, CLONEABLE, SERIALIZABLE,
};

use crate::hierarchy::as_super_type;
use crate::ResolutionContext;

/// Whether a value of type `source` can be assigned to a variable of type `target`.
pub fn is_assignable_by(ctx: &ResolutionContext, target: &Type, source: &Type) -> Result<bool> {
    Assignability::new(ctx, std::iter::empty()).check(target, source)
}

/// Whether a value of type `source` can be assigned to `target`; the arguments of
/// [`is_assignable_by`] swapped.
pub fn can_be_assigned_to(ctx: &ResolutionContext, source: &Type, target: &Type) -> Result<bool> {
    is_assignable_by(ctx, target, source)
}

/// Whether `a` is at least as specific as `b`: same arity and each parameter of `a` is assignable
/// to the corresponding parameter of `b`.
pub fn is_more_specific(ctx: &ResolutionContext, a: &MethodDecl, b: &MethodDecl) -> Result<bool> {
    if a.num_params() != b.num_params() {
        return Ok(false);
    }
    // `b`'s variables are inferred from `a`'s parameters; `a`'s are fixed but keep their
    // substituted bounds.
    let mut check = Assignability::new(ctx, b.type_params.iter().chain(&a.type_params));
    for (pa, pb) in a.param_types().zip(b.param_types()) {
        if !check.check(pb, pa)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Assignability with the type parameters of the method being called in scope.
pub(crate) struct Assignability<'a> {
    ctx: &'a ResolutionContext,
    /// Method type parameters with bounds already substituted for the receiver.
    method_params: Vec<&'a TypeParam>,
    /// Type variables whose bounds are being expanded.
    visiting: Vec<TypeVar>,
}

impl<'a> Assignability<'a> {
    pub(crate) fn new(
        ctx: &'a ResolutionContext,
        method_params: impl IntoIterator<Item = &'a TypeParam>,
    ) -> Self {
        Self {
            ctx,
            method_params: method_params.into_iter().collect(),
            visiting: Vec::new(),
        }
    }

    pub(crate) fn check(&mut self, target: &Type, source: &Type) -> Result<bool> {
        if target == source {
            return Ok(true);
        }

        match (target, source) {
            (Type::Void, _) | (_, Type::Void) => Ok(false),

            (Type::Primitive(t), Type::Primitive(s)) => Ok(s.widens_to(*t)),
            (Type::Primitive(_), _) | (_, Type::Primitive(_)) => Ok(false),

            (Type::Null, _) => Ok(false),
            (_, Type::Null) => Ok(true),

            (Type::Wildcard(_), _) => self.contains(target, source),
            (_, Type::Wildcard(bound)) => match bound {
                WildcardBound::Extends(upper) => self.check(target, upper),
                WildcardBound::Unbounded | WildcardBound::Super(_) => {
                    self.check(target, &Type::object())
                }
            },

            (Type::TypeVar(var), _) => self.check_type_var_target(var, source),
            (_, Type::TypeVar(var)) => self.check_type_var_source(target, var),

            (Type::Array(t_elem), Type::Array(s_elem)) => {
                if t_elem.is_primitive() || s_elem.is_primitive() {
                    Ok(t_elem == s_elem)
                } else {
                    self.check(t_elem, s_elem)
                }
            }
            (Type::Array(_), _) => Ok(false),

            (Type::Class(t), Type::Array(_)) => {
                Ok(t.is_object() || t.name == CLONEABLE || t.name == SERIALIZABLE)
            }
            (Type::Class(t), Type::Class(s)) => self.check_class(t, s),
        }
    }

    fn check_class(&mut self, target: &ClassType, source: &ClassType) -> Result<bool> {
        if target.is_object() {
            return Ok(true);
        }

        let Some(found) = as_super_type(self.ctx, source, &target.name)? else {
            return Ok(false);
        };

        // Unchecked conversion in either direction.
        if target.is_raw() || found.is_raw() {
            return Ok(true);
        }
        if found.args.len() != target.args.len() {
            return Err(Malformed::ArityMismatch {
                name: target.name.clone(),
                expected: found.args.len(),
                found: target.args.len(),
            }
            .into());
        }

        for (t_arg, s_arg) in target.args.iter().zip(&found.args) {
            if !self.contains(t_arg, s_arg)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Type argument containment (JLS 4.5.1).
    fn contains(&mut self, target: &Type, source: &Type) -> Result<bool> {
        match target {
            Type::Wildcard(WildcardBound::Unbounded) => Ok(true),
            Type::Wildcard(WildcardBound::Extends(bound)) => match source {
                Type::Wildcard(WildcardBound::Extends(s_bound)) => self.check(bound, s_bound),
                Type::Wildcard(_) => self.check(bound, &Type::object()),
                _ => self.check(bound, source),
            },
            Type::Wildcard(WildcardBound::Super(bound)) => match source {
                Type::Wildcard(WildcardBound::Super(s_bound)) => self.check(s_bound, bound),
                Type::Wildcard(_) => Ok(false),
                _ => self.check(source, bound),
            },
            _ => Ok(target == source),
        }
    }

    fn check_type_var_target(&mut self, var: &TypeVar, source: &Type) -> Result<bool> {
        // A class type variable is a fixed, unknown type: only itself (and null) fits.
        if var.declared_on_class() {
            return Ok(false);
        }

        // A method type variable is inferred from the argument, so it accepts anything that
        // satisfies all of its bounds with the variable itself replaced by the source.
        if self.visiting.contains(var) {
            return Ok(false);
        }
        let bounds = self.bounds_of(var)?;
        let inferred: Substitution = [(var.clone(), source.clone())].into_iter().collect();

        self.visiting.push(var.clone());
        let accepted = self.all_accept(&bounds, &inferred, source);
        self.visiting.pop();
        accepted
    }

    fn all_accept(&mut self, bounds: &[Type], inferred: &Substitution, source: &Type) -> Result<bool> {
        for bound in bounds {
            if !self.check(&inferred.apply(bound), source)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn check_type_var_source(&mut self, target: &Type, var: &TypeVar) -> Result<bool> {
        if self.visiting.contains(var) {
            return Ok(false);
        }

        let bounds = self.bounds_of(var)?;
        self.visiting.push(var.clone());
        let accepted = self.any_accepts(target, &bounds);
        self.visiting.pop();
        accepted
    }

    fn any_accepts(&mut self, target: &Type, sources: &[Type]) -> Result<bool> {
        for source in sources {
            if self.check(target, source)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Upper bounds of `var`, `java.lang.Object` when none are declared.
    fn bounds_of(&self, var: &TypeVar) -> Result<Vec<Type>> {
        if let Some(tp) = self.method_params.iter().find(|tp| tp.is_var(var)) {
            return Ok(tp.upper_bounds());
        }

        let decl = self.ctx.solve_type(var.declaring_class())?;
        let param = match &var.owner {
            TypeParamOwner::Class(_) => decl.type_param(&var.name),
            TypeParamOwner::Method { index, .. } => decl
                .declared_methods()
                .get(*index)
                .and_then(|m| m.type_params.iter().find(|tp| tp.is_var(var))),
        };
        Ok(param
            .map(TypeParam::upper_bounds)
            .unwrap_or_else(|| vec![Type::object()]))
    }
}
