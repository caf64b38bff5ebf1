//! Bundled [`TypeProvider`] implementations.

use std::path::Path;

use indexmap::IndexMap;
use javelin_types::{ClassDecl, ResolveError, Result, TypeDefStub, TypeProvider};
use thiserror::Error;

/// Declarations held in memory, keyed by qualified name.
#[derive(Debug, Default, Clone)]
pub struct MemoryProvider {
    decls: IndexMap<String, ClassDecl>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `decl`, returning the declaration it replaced.
    pub fn insert(&mut self, decl: ClassDecl) -> Option<ClassDecl> {
        self.decls.insert(decl.name.clone(), decl)
    }

    pub fn with(mut self, decl: ClassDecl) -> Self {
        self.insert(decl);
        self
    }

    /// Qualified names in insertion order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.decls.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl FromIterator<ClassDecl> for MemoryProvider {
    fn from_iter<I: IntoIterator<Item = ClassDecl>>(iter: I) -> Self {
        let mut out = Self::new();
        for decl in iter {
            out.insert(decl);
        }
        out
    }
}

impl TypeProvider for MemoryProvider {
    fn lookup_type(&self, qualified_name: &str) -> Result<Option<ClassDecl>> {
        Ok(self.decls.get(qualified_name).cloned())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[derive(Debug, Error)]
pub enum StubLoadError {
    #[error("failed to read stub file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse stub file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("stub file {path} declares `{name}` more than once")]
    Duplicate { path: String, name: String },
    #[error("invalid stub `{name}` in {path}: {source}")]
    Invalid {
        path: String,
        name: String,
        #[source]
        source: ResolveError,
    },
}

/// Declarations described by [`TypeDefStub`]s.
///
/// Stubs are converted on lookup, so a stub built in code with broken type text surfaces as
/// [`ResolveError::MalformedUsage`] rather than as an unknown type.
#[derive(Debug, Clone)]
pub struct StubProvider {
    label: String,
    stubs: IndexMap<String, TypeDefStub>,
}

impl StubProvider {
    pub fn new(stubs: impl IntoIterator<Item = TypeDefStub>) -> Self {
        Self {
            label: "stubs".to_owned(),
            stubs: stubs
                .into_iter()
                .map(|stub| (stub.name.clone(), stub))
                .collect(),
        }
    }

    /// Load a JSON array of stubs. Every stub is converted once up front so broken files fail
    /// here instead of at the first lookup.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, StubLoadError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| StubLoadError::Io {
            path: shown.clone(),
            source,
        })?;
        let provider = Self::load_from_str(&text, &shown)?;
        tracing::debug!(
            target = "javelin.stubs",
            path = %shown,
            types = provider.len(),
            "loaded stub file"
        );
        Ok(provider)
    }

    /// Parse a JSON array of stubs; `label` names the source in errors and logs.
    pub fn load_from_str(text: &str, label: &str) -> Result<Self, StubLoadError> {
        let parsed: Vec<TypeDefStub> =
            serde_json::from_str(text).map_err(|source| StubLoadError::Json {
                path: label.to_owned(),
                source,
            })?;

        let mut stubs = IndexMap::with_capacity(parsed.len());
        for stub in parsed {
            if let Err(source) = stub.to_decl() {
                return Err(StubLoadError::Invalid {
                    path: label.to_owned(),
                    name: stub.name,
                    source,
                });
            }
            if stubs.contains_key(&stub.name) {
                return Err(StubLoadError::Duplicate {
                    path: label.to_owned(),
                    name: stub.name,
                });
            }
            stubs.insert(stub.name.clone(), stub);
        }

        Ok(Self {
            label: label.to_owned(),
            stubs,
        })
    }

    /// Qualified names in file order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.stubs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }
}

impl TypeProvider for StubProvider {
    fn lookup_type(&self, qualified_name: &str) -> Result<Option<ClassDecl>> {
        self.stubs
            .get(qualified_name)
            .map(TypeDefStub::to_decl)
            .transpose()
    }

    fn name(&self) -> &str {
        &self.label
    }
}
