use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use javelin_config::ResolverConfig;
use javelin_jdk::MinimalJdk;
use javelin_types::{ClassDecl, ClassType, Malformed, ResolveError, Result, Type, TypeProvider};
use parking_lot::RwLock;

use crate::providers::{StubLoadError, StubProvider};

/// A chain of declaration providers plus a memoization cache.
///
/// Providers are consulted in registration order; the first one that knows a name wins. Resolved
/// declarations are validated once and shared as `Arc<ClassDecl>`, so repeated lookups of the
/// same name return pointer-equal values.
pub struct ResolutionContext {
    providers: Vec<Box<dyn TypeProvider>>,
    cache: RwLock<HashMap<String, Arc<ClassDecl>>>,
}

impl fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let providers: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("ResolutionContext")
            .field("providers", &providers)
            .field("cached", &self.cached_len())
            .finish()
    }
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionContext {
    /// A context without providers; every lookup is unsolved.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A context backed only by the built-in minimal JDK.
    pub fn with_minimal_jdk() -> Self {
        Self::new().with_provider(MinimalJdk::new())
    }

    /// Build the provider chain described by `config`: stub files in order, then the built-in
    /// JDK when enabled.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, StubLoadError> {
        let mut ctx = Self::new();
        for path in &config.stubs {
            ctx.push_provider(StubProvider::load_from_path(path)?);
        }
        if config.builtin_jdk {
            ctx.push_provider(MinimalJdk::new());
        }
        tracing::debug!(
            target = "javelin.context",
            providers = ctx.provider_count(),
            "resolution context configured"
        );
        Ok(ctx)
    }

    pub fn with_provider(mut self, provider: impl TypeProvider + 'static) -> Self {
        self.push_provider(provider);
        self
    }

    /// Append a provider. Cached declarations are dropped since the new provider may change
    /// what later lookups see.
    pub fn push_provider(&mut self, provider: impl TypeProvider + 'static) {
        self.providers.push(Box::new(provider));
        self.cache.get_mut().clear();
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Resolve a qualified name to its declaration.
    ///
    /// Returns [`ResolveError::UnsolvedSymbol`] when no provider knows `name`. Provider errors and
    /// validation failures are returned as-is and are not cached.
    pub fn solve_type(&self, name: &str) -> Result<Arc<ClassDecl>> {
        if let Some(decl) = self.cache.read().get(name) {
            tracing::trace!(target = "javelin.context", name, "cache hit");
            return Ok(decl.clone());
        }

        for provider in &self.providers {
            let Some(decl) = provider.lookup_type(name)? else {
                continue;
            };

            if decl.name != name {
                return Err(Malformed::NameMismatch {
                    requested: name.to_owned(),
                    found: decl.name,
                }
                .into());
            }
            if let Err(err) = decl.validate() {
                tracing::warn!(
                    target = "javelin.context",
                    name,
                    provider = provider.name(),
                    error = %err,
                    "declaration failed validation"
                );
                return Err(err);
            }

            tracing::debug!(
                target = "javelin.context",
                name,
                provider = provider.name(),
                "resolved type"
            );
            let decl = Arc::new(decl);
            // Another thread may have resolved the same name meanwhile; keep the first entry.
            let mut cache = self.cache.write();
            return Ok(cache.entry(name.to_owned()).or_insert(decl).clone());
        }

        Err(ResolveError::unsolved(name))
    }

    /// Whether some provider knows `name`. Failures other than "unsolved" propagate.
    pub fn has_type(&self, name: &str) -> Result<bool> {
        match self.solve_type(name) {
            Ok(_) => Ok(true),
            Err(ResolveError::UnsolvedSymbol { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Build a usage of `name`, checking the argument count against the declaration.
    ///
    /// An empty `args` is a raw usage and is always accepted.
    pub fn class_type(&self, name: &str, args: Vec<Type>) -> Result<ClassType> {
        let decl = self.solve_type(name)?;
        let expected = decl.type_params().len();
        if !args.is_empty() && args.len() != expected {
            return Err(Malformed::ArityMismatch {
                name: name.to_owned(),
                expected,
                found: args.len(),
            }
            .into());
        }
        Ok(ClassType::new(name, args))
    }
}
