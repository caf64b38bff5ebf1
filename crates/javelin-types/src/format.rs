//! Java-like rendering of types and signatures.
//!
//! The output is stable and fully qualified, intended for diagnostics and tests rather than
//! for source generation (no import-aware shortening).

use std::fmt;

use crate::{ClassType, MethodDecl, PrimitiveType, Type, TypeParam, TypeVar, WildcardBound};

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.args.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        write_comma_separated(f, &self.args)?;
        f.write_str(">")
    }
}

impl fmt::Display for WildcardBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildcardBound::Unbounded => f.write_str("?"),
            WildcardBound::Extends(bound) => write!(f, "? extends {bound}"),
            WildcardBound::Super(bound) => write!(f, "? super {bound}"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => f.write_str("void"),
            Type::Null => f.write_str("null"),
            Type::Primitive(p) => fmt::Display::fmt(p, f),
            Type::Array(elem) => write!(f, "{elem}[]"),
            Type::Class(class) => fmt::Display::fmt(class, f),
            Type::TypeVar(var) => fmt::Display::fmt(var, f),
            Type::Wildcard(bound) => fmt::Display::fmt(bound, f),
        }
    }
}

impl fmt::Display for TypeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (idx, bound) in self.bounds.iter().enumerate() {
            f.write_str(if idx == 0 { " extends " } else { " & " })?;
            fmt::Display::fmt(bound, f)?;
        }
        Ok(())
    }
}

/// [`format_method_signature`] prefixed with the method's type parameters, e.g.
/// `<T extends java.lang.Number> m(T)`.
pub fn format_generic_signature(method: &MethodDecl) -> String {
    if method.type_params.is_empty() {
        return format_method_signature(method);
    }
    let params: Vec<String> = method.type_params.iter().map(ToString::to_string).collect();
    format!("<{}> {}", params.join(", "), format_method_signature(method))
}

/// `name(T1, T2)`, the form used to identify an overload.
pub fn format_method_signature(method: &MethodDecl) -> String {
    let mut out = String::new();
    out.push_str(&method.name);
    out.push('(');
    for (idx, param) in method.params.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&param.ty.to_string());
    }
    out.push(')');
    out
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, types: &[Type]) -> fmt::Result {
    for (idx, ty) in types.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(ty, f)?;
    }
    Ok(())
}
