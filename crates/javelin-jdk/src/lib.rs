//! Built-in declarations for a small slice of the Java standard library.
//!
//! [`MinimalJdk`] needs no disk IO and no system JDK. It covers `java.lang.Object`, `String`, the
//! boxed primitives and the `java.util` collection hierarchy down to `ArrayList`, which is enough
//! to resolve ancestors and members of typical user code in tests.

#![forbid(unsafe_code)]

mod stubs;

use std::collections::HashMap;

use javelin_types::{ClassDecl, Result, TypeDefStub, TypeProvider};

/// Declaration provider backed by the built-in stub table.
///
/// Lookups accept binary names (`java.lang.String`) and internal names (`java/lang/String`).
#[derive(Debug, Clone)]
pub struct MinimalJdk {
    stubs: HashMap<String, TypeDefStub>,
}

impl MinimalJdk {
    pub fn new() -> Self {
        let stubs = stubs::minimal_jdk_stubs()
            .into_iter()
            .map(|stub| (stub.name.clone(), stub))
            .collect();
        Self { stubs }
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stubs.contains_key(internal_to_binary(name).as_str())
    }

    /// Raw stub for `name`, before parsing.
    pub fn stub(&self, name: &str) -> Option<&TypeDefStub> {
        self.stubs.get(internal_to_binary(name).as_str())
    }

    /// Binary names of every built-in type, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stubs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for MinimalJdk {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeProvider for MinimalJdk {
    fn lookup_type(&self, qualified_name: &str) -> Result<Option<ClassDecl>> {
        let binary = internal_to_binary(qualified_name);
        let Some(stub) = self.stubs.get(binary.as_str()) else {
            return Ok(None);
        };
        tracing::trace!(target = "javelin.jdk", name = %binary, "built-in declaration");
        stub.to_decl().map(Some)
    }

    fn name(&self) -> &str {
        "minimal-jdk"
    }
}

fn internal_to_binary(name: &str) -> String {
    name.replace('/', ".")
}
