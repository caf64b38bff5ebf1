//! Type usages: a type as it appears at a reference site.

use serde::{Deserialize, Serialize};

/// Qualified name of the universal root class.
pub const OBJECT: &str = "java.lang.Object";
/// Interfaces every array type implements (JLS 4.10.3).
pub const CLONEABLE: &str = "java.lang.Cloneable";
pub const SERIALIZABLE: &str = "java.io.Serializable";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Char,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Identity or widening primitive conversion (JLS 5.1.2).
    pub fn widens_to(self, target: PrimitiveType) -> bool {
        use PrimitiveType::*;

        if self == target {
            return true;
        }
        matches!(
            (self, target),
            (Byte, Short | Int | Long | Float | Double)
                | (Short, Int | Long | Float | Double)
                | (Char, Int | Long | Float | Double)
                | (Int, Long | Float | Double)
                | (Long, Float | Double)
                | (Float, Double)
        )
    }
}

/// The entity that introduces a type parameter.
///
/// A method parameter `E` and a class parameter `E` of the enclosing class are distinct
/// variables; the owner is part of the identity. Methods are identified by their position among
/// the class's declared methods, so overloads that each declare `<T>` own different variables.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeParamOwner {
    Class(String),
    Method {
        class: String,
        method: String,
        index: usize,
    },
}

impl TypeParamOwner {
    /// Qualified name of the class that (directly or through one of its methods) declares the
    /// parameter.
    pub fn declaring_class(&self) -> &str {
        match self {
            TypeParamOwner::Class(class) | TypeParamOwner::Method { class, .. } => class,
        }
    }
}

/// A reference to a declared type parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeVar {
    pub name: String,
    pub owner: TypeParamOwner,
}

impl TypeVar {
    pub fn class(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: TypeParamOwner::Class(class.into()),
        }
    }

    /// A parameter of the method at `index` in the declared methods of `class`.
    pub fn method(
        class: impl Into<String>,
        method: impl Into<String>,
        index: usize,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: TypeParamOwner::Method {
                class: class.into(),
                method: method.into(),
                index,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_on_class(&self) -> bool {
        matches!(self.owner, TypeParamOwner::Class(_))
    }

    pub fn declared_on_method(&self) -> bool {
        matches!(self.owner, TypeParamOwner::Method { .. })
    }

    pub fn declaring_class(&self) -> &str {
        self.owner.declaring_class()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildcardBound {
    Unbounded,
    Extends(Box<Type>),
    Super(Box<Type>),
}

/// A (possibly parameterized) reference to a class or interface declaration.
///
/// An empty argument list is a raw usage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Type>,
}

impl ClassType {
    pub fn new(name: impl Into<String>, args: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn raw(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn object() -> Self {
        Self::raw(OBJECT)
    }

    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    pub fn is_raw(&self) -> bool {
        self.args.is_empty()
    }

    pub fn is_object(&self) -> bool {
        self.name == OBJECT
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Only valid as a method return type.
    Void,
    /// The type of the `null` literal.
    Null,
    Primitive(PrimitiveType),
    Array(Box<Type>),
    Class(ClassType),
    TypeVar(TypeVar),
    Wildcard(WildcardBound),
}

impl Type {
    pub fn class(name: impl Into<String>, args: Vec<Type>) -> Self {
        Type::Class(ClassType::new(name, args))
    }

    pub fn object() -> Self {
        Type::Class(ClassType::object())
    }

    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    pub fn boolean() -> Self {
        Type::Primitive(PrimitiveType::Boolean)
    }

    pub fn int() -> Self {
        Type::Primitive(PrimitiveType::Int)
    }

    pub fn long() -> Self {
        Type::Primitive(PrimitiveType::Long)
    }

    pub fn char() -> Self {
        Type::Primitive(PrimitiveType::Char)
    }

    pub fn double() -> Self {
        Type::Primitive(PrimitiveType::Double)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Type::Null)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    /// Class, array and type-variable usages denote reference types.
    pub fn is_reference_type(&self) -> bool {
        matches!(self, Type::Class(_) | Type::Array(_) | Type::TypeVar(_))
    }

    pub fn is_type_variable(&self) -> bool {
        matches!(self, Type::TypeVar(_))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Type::Wildcard(_))
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            Type::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_type_var(&self) -> Option<&TypeVar> {
        match self {
            Type::TypeVar(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            Type::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Qualified name of a class usage.
    pub fn qualified_name(&self) -> Option<&str> {
        self.as_class().map(ClassType::qualified_name)
    }

    /// Canonical textual form used in diagnostics, e.g. `java.util.List<E>` or `int[]`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Erasure without bound information: type variables erase to the root type.
    ///
    /// Use [`crate::TypeParam::erasure`] when the declaring parameter is at hand.
    pub fn erasure(&self) -> Type {
        match self {
            Type::Class(class) => Type::Class(ClassType::raw(class.name.clone())),
            Type::Array(elem) => Type::array(elem.erasure()),
            Type::TypeVar(_) => Type::object(),
            Type::Wildcard(WildcardBound::Extends(bound)) => bound.erasure(),
            Type::Wildcard(_) => Type::object(),
            other => other.clone(),
        }
    }

    /// Calls `f` for every type variable occurring in `self`, in textual order.
    pub fn for_each_type_var(&self, f: &mut dyn FnMut(&TypeVar)) {
        match self {
            Type::TypeVar(var) => f(var),
            Type::Array(elem) => elem.for_each_type_var(f),
            Type::Class(class) => {
                for arg in &class.args {
                    arg.for_each_type_var(f);
                }
            }
            Type::Wildcard(WildcardBound::Extends(bound))
            | Type::Wildcard(WildcardBound::Super(bound)) => bound.for_each_type_var(f),
            Type::Wildcard(WildcardBound::Unbounded)
            | Type::Void
            | Type::Null
            | Type::Primitive(_) => {}
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(value: PrimitiveType) -> Self {
        Type::Primitive(value)
    }
}

impl From<ClassType> for Type {
    fn from(value: ClassType) -> Self {
        Type::Class(value)
    }
}

impl From<TypeVar> for Type {
    fn from(value: TypeVar) -> Self {
        Type::TypeVar(value)
    }
}

pub(crate) fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(_, simple)| simple)
        .unwrap_or(qualified)
}

pub(crate) fn package_name(qualified: &str) -> Option<&str> {
    qualified.rsplit_once('.').map(|(package, _)| package)
}
