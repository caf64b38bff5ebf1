//! Parser for types written in Java source syntax.
//!
//! Only fully qualified names are understood; there is no import resolution. A single-segment
//! name that matches an in-scope type parameter becomes a type variable.

use crate::error::{Malformed, ResolveError, Result};
use crate::{ClassType, PrimitiveType, Type, TypeVar, WildcardBound};

/// Type variables visible while parsing. Later entries shadow earlier ones, so method
/// parameters pushed after class parameters win on a name clash.
#[derive(Clone, Debug, Default)]
pub struct TypeScope {
    vars: Vec<TypeVar>,
}

impl TypeScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vars(vars: impl IntoIterator<Item = TypeVar>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    pub fn push(&mut self, var: TypeVar) {
        self.vars.push(var);
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeVar> {
        self.vars.iter().rev().find(|var| var.name == name)
    }
}

/// Parse a complete type, e.g. `java.util.Map<K, ? extends java.util.List<V>>[]`.
pub fn parse_type(text: &str, scope: &TypeScope) -> Result<Type> {
    let mut parser = Parser::new(text, scope);
    let ty = parser.ty()?;
    parser.expect_end()?;
    Ok(ty)
}

/// Parse a parameter: a type optionally followed by a name (`int index`).
pub fn parse_param(text: &str, scope: &TypeScope) -> Result<(Type, Option<String>)> {
    let mut parser = Parser::new(text, scope);
    let ty = parser.ty()?;
    parser.skip_ws();
    let name = if parser.at_end() {
        None
    } else {
        Some(parser.ident()?.to_string())
    };
    parser.expect_end()?;
    Ok((ty, name))
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    scope: &'a TypeScope,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, scope: &'a TypeScope) -> Self {
        Self {
            text,
            pos: 0,
            scope,
        }
    }

    fn error(&self, message: impl Into<String>) -> ResolveError {
        Malformed::Unparseable {
            text: self.text.to_string(),
            offset: self.pos,
            message: message.into(),
        }
        .into()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.text.len() - trimmed.len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_ws();
        self.rest().chars().next()
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, ch: char) -> Result<()> {
        if self.eat(ch) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{ch}`")))
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        self.skip_ws();
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error("unexpected trailing input"))
        }
    }

    fn ident(&mut self) -> Result<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, c)) if c.is_alphabetic() || c == '_' || c == '$' => {}
            _ => return Err(self.error("expected identifier")),
        }
        let len = chars
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$'))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        self.pos += len;
        Ok(&rest[..len])
    }

    /// Peek at the next identifier without consuming it.
    fn peek_keyword(&mut self, keyword: &str) -> bool {
        self.skip_ws();
        let rest = self.rest();
        rest.starts_with(keyword)
            && !rest[keyword.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }

    fn ty(&mut self) -> Result<Type> {
        if self.peek() == Some('?') {
            return Err(self.error("wildcards are only allowed as type arguments"));
        }

        let scope = self.scope;
        let start = self.pos;
        let mut name = self.ident()?.to_string();
        let mut single_segment = true;
        while self.eat('.') {
            single_segment = false;
            name.push('.');
            name.push_str(self.ident()?);
        }

        let mut ty = if single_segment && name == "void" {
            Type::Void
        } else if let Some(p) = single_segment
            .then(|| PrimitiveType::from_keyword(&name))
            .flatten()
        {
            Type::Primitive(p)
        } else if let Some(var) = single_segment.then(|| scope.lookup(&name)).flatten() {
            if self.peek() == Some('<') {
                self.pos = start;
                return Err(self.error(format!("type variable `{name}` cannot take arguments")));
            }
            Type::TypeVar(var.clone())
        } else {
            let mut args = Vec::new();
            if self.eat('<') {
                loop {
                    args.push(self.type_arg()?);
                    if self.eat(',') {
                        continue;
                    }
                    self.expect('>')?;
                    break;
                }
            }
            Type::Class(ClassType::new(name, args))
        };

        while self.eat('[') {
            self.expect(']')?;
            if ty.is_void() {
                return Err(self.error("void cannot be an array element"));
            }
            ty = Type::array(ty);
        }
        Ok(ty)
    }

    fn type_arg(&mut self) -> Result<Type> {
        if !self.eat('?') {
            let ty = self.ty()?;
            if ty.is_primitive() || ty.is_void() {
                return Err(self.error(format!("`{ty}` cannot be a type argument")));
            }
            return Ok(ty);
        }

        if self.peek_keyword("extends") {
            self.ident()?;
            Ok(Type::Wildcard(WildcardBound::Extends(Box::new(self.ty()?))))
        } else if self.peek_keyword("super") {
            self.ident()?;
            Ok(Type::Wildcard(WildcardBound::Super(Box::new(self.ty()?))))
        } else {
            Ok(Type::Wildcard(WildcardBound::Unbounded))
        }
    }
}
