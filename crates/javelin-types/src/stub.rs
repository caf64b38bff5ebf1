//! Serializable declaration stubs.
//!
//! A stub describes a class with types written as Java source text. It is the interchange format
//! for declaration providers (JSON stub files, the built-in JDK) and doubles as a builder for
//! tests:
//!
//! ```
//! use javelin_types::{MethodStub, TypeDefStub};
//!
//! let decl = TypeDefStub::class("com.example.Foo")
//!     .type_param("E")
//!     .field("field", "E")
//!     .method(MethodStub::new("get").returns("E"))
//!     .build()
//!     .unwrap();
//! assert_eq!(decl.field("field").unwrap().ty.describe(), "E");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Malformed, Result};
use crate::parse::{parse_param, parse_type, TypeScope};
use crate::{
    ClassDecl, ClassKind, ClassType, FieldDecl, MethodDecl, ParamDecl, Type, TypeParam,
    TypeParamOwner, TypeVar, Visibility,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDefStub {
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub type_params: Vec<TypeParamStub>,
    #[serde(default)]
    pub super_class: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldStub>,
    #[serde(default)]
    pub methods: Vec<MethodStub>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeParamStub {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldStub {
    pub name: String,
    pub ty: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_final: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodStub {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<TypeParamStub>,
    /// Parameter types, optionally followed by a name: `"int index"`.
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default = "MethodStub::default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
}

impl TypeDefStub {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::Public,
            is_abstract: kind == ClassKind::Interface,
            type_params: Vec::new(),
            super_class: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Interface)
    }

    pub fn type_param(self, name: &str) -> Self {
        self.type_param_bounded(name, &[])
    }

    pub fn type_param_bounded(mut self, name: &str, bounds: &[&str]) -> Self {
        self.type_params.push(TypeParamStub::new(name, bounds));
        self
    }

    pub fn extends(mut self, super_class: &str) -> Self {
        self.super_class = Some(super_class.to_string());
        self
    }

    pub fn implements(mut self, iface: &str) -> Self {
        self.interfaces.push(iface.to_string());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn field(self, name: &str, ty: &str) -> Self {
        self.field_stub(FieldStub::new(name, ty))
    }

    pub fn field_stub(mut self, field: FieldStub) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: MethodStub) -> Self {
        self.methods.push(method);
        self
    }

    /// Alias of [`TypeDefStub::to_decl`] for builder chains.
    pub fn build(&self) -> Result<ClassDecl> {
        self.to_decl()
    }

    /// Parse every type in the stub and produce a validated declaration.
    pub fn to_decl(&self) -> Result<ClassDecl> {
        let owner = TypeParamOwner::Class(self.name.clone());

        // All class parameters are in scope before any bound is parsed so self-referential
        // bounds (`E extends Comparable<E>`) resolve.
        let scope = TypeScope::with_vars(self.type_params.iter().map(|tp| TypeVar {
            name: tp.name.clone(),
            owner: owner.clone(),
        }));

        let type_params = self
            .type_params
            .iter()
            .map(|tp| tp.to_param(owner.clone(), &scope))
            .collect::<Result<Vec<_>>>()?;

        let super_class = self
            .super_class
            .as_deref()
            .map(|text| parse_class_type(text, &scope))
            .transpose()?;

        let interfaces = self
            .interfaces
            .iter()
            .map(|text| parse_class_type(text, &scope))
            .collect::<Result<Vec<_>>>()?;

        let fields = self
            .fields
            .iter()
            .map(|field| {
                Ok(FieldDecl {
                    name: field.name.clone(),
                    ty: parse_type(&field.ty, &scope)?,
                    visibility: field.visibility,
                    is_static: field.is_static,
                    is_final: field.is_final,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let methods = self
            .methods
            .iter()
            .enumerate()
            .map(|(index, method)| method.to_decl(&self.name, index, &scope))
            .collect::<Result<Vec<_>>>()?;

        let decl = ClassDecl {
            name: self.name.clone(),
            kind: self.kind,
            visibility: self.visibility,
            is_abstract: self.is_abstract,
            type_params,
            super_class,
            interfaces,
            fields,
            methods,
        };
        decl.validate()?;
        Ok(decl)
    }
}

impl TypeParamStub {
    pub fn new(name: &str, bounds: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            bounds: bounds.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn to_param(&self, owner: TypeParamOwner, scope: &TypeScope) -> Result<TypeParam> {
        let bounds = self
            .bounds
            .iter()
            .map(|b| parse_type(b, scope))
            .collect::<Result<Vec<_>>>()?;
        Ok(TypeParam {
            name: self.name.clone(),
            owner,
            bounds,
        })
    }
}

impl FieldStub {
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn as_final(mut self) -> Self {
        self.is_final = true;
        self
    }
}

impl MethodStub {
    fn default_return_type() -> String {
        "void".to_string()
    }

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_params: Vec::new(),
            params: Vec::new(),
            return_type: Self::default_return_type(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
        }
    }

    pub fn type_param(self, name: &str) -> Self {
        self.type_param_bounded(name, &[])
    }

    pub fn type_param_bounded(mut self, name: &str, bounds: &[&str]) -> Self {
        self.type_params.push(TypeParamStub::new(name, bounds));
        self
    }

    pub fn param(mut self, param: &str) -> Self {
        self.params.push(param.to_string());
        self
    }

    pub fn returns(mut self, ty: &str) -> Self {
        self.return_type = ty.to_string();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    fn to_decl(&self, class: &str, index: usize, class_scope: &TypeScope) -> Result<MethodDecl> {
        let owner = TypeParamOwner::Method {
            class: class.to_string(),
            method: self.name.clone(),
            index,
        };

        let mut scope = class_scope.clone();
        for tp in &self.type_params {
            scope.push(TypeVar {
                name: tp.name.clone(),
                owner: owner.clone(),
            });
        }

        let type_params = self
            .type_params
            .iter()
            .map(|tp| tp.to_param(owner.clone(), &scope))
            .collect::<Result<Vec<_>>>()?;

        let params = self
            .params
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let (ty, name) = parse_param(text, &scope)?;
                Ok(ParamDecl {
                    name: name.unwrap_or_else(|| format!("arg{idx}")),
                    ty,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MethodDecl {
            name: self.name.clone(),
            type_params,
            params,
            return_type: parse_type(&self.return_type, &scope)?,
            visibility: self.visibility,
            is_static: self.is_static,
            is_abstract: self.is_abstract,
        })
    }
}

fn parse_class_type(text: &str, scope: &TypeScope) -> Result<ClassType> {
    match parse_type(text, scope)? {
        Type::Class(class) => Ok(class),
        other => Err(Malformed::Unparseable {
            text: text.to_string(),
            offset: 0,
            message: format!("`{other}` is not a class or interface type"),
        }
        .into()),
    }
}
