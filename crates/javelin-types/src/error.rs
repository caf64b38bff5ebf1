use std::fmt;

pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

/// The kind of symbol a lookup was looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Field,
    Method,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymbolKind::Field => "field",
            SymbolKind::Method => "method",
        })
    }
}

/// Ways a type usage or declaration can be structurally invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("`{name}` expects {expected} type argument(s) but {found} were supplied")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("type variable `{var}` is not in scope in `{context}`")]
    DanglingTypeVariable { var: String, context: String },

    #[error("cannot parse type `{text}` at offset {offset}: {message}")]
    Unparseable {
        text: String,
        offset: usize,
        message: String,
    },

    #[error("provider returned `{found}` when asked for `{requested}`")]
    NameMismatch { requested: String, found: String },

    #[error("invalid declaration `{name}`: {message}")]
    InvalidDeclaration { name: String, message: String },
}

/// Errors produced by symbol resolution.
///
/// Every failure reaches the immediate caller unwrapped so it can tell "nothing exists"
/// (`NotFound`, `UnsolvedSymbol`) from "the input is broken" (`MalformedUsage`,
/// `CyclicHierarchy`).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("{kind} `{name}` not found in `{owner}`")]
    NotFound {
        kind: SymbolKind,
        owner: String,
        name: String,
    },

    #[error("unsolved symbol `{name}`")]
    UnsolvedSymbol { name: String },

    #[error("ambiguous call to `{name}`; candidates: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },

    #[error("malformed type usage: {0}")]
    MalformedUsage(#[from] Malformed),

    #[error("cyclic hierarchy: {}", path.join(" -> "))]
    CyclicHierarchy { path: Vec<String> },
}

impl ResolveError {
    pub fn not_found(kind: SymbolKind, owner: impl Into<String>, name: impl Into<String>) -> Self {
        ResolveError::NotFound {
            kind,
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn unsolved(name: impl Into<String>) -> Self {
        ResolveError::UnsolvedSymbol { name: name.into() }
    }

    /// `true` for errors that indicate an invalid program or a provider bug rather than an
    /// ordinary unresolved reference.
    pub fn is_hard_failure(&self) -> bool {
        matches!(
            self,
            ResolveError::MalformedUsage(_) | ResolveError::CyclicHierarchy { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}
