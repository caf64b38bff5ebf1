use std::sync::Arc;

use crate::{ClassDecl, Result};

/// A source of declarations: a runtime, parsed sources, an archive index, ...
///
/// `Ok(None)` means the provider does not know `qualified_name`; errors are reserved for
/// declarations the provider found but could not produce (malformed stubs and the like).
pub trait TypeProvider: Send + Sync {
    fn lookup_type(&self, qualified_name: &str) -> Result<Option<ClassDecl>>;

    /// Short label used in logs.
    fn name(&self) -> &str {
        "provider"
    }
}

impl<T: TypeProvider + ?Sized> TypeProvider for &T {
    fn lookup_type(&self, qualified_name: &str) -> Result<Option<ClassDecl>> {
        (**self).lookup_type(qualified_name)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: TypeProvider + ?Sized> TypeProvider for Box<T> {
    fn lookup_type(&self, qualified_name: &str) -> Result<Option<ClassDecl>> {
        (**self).lookup_type(qualified_name)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: TypeProvider + ?Sized> TypeProvider for Arc<T> {
    fn lookup_type(&self, qualified_name: &str) -> Result<Option<ClassDecl>> {
        (**self).lookup_type(qualified_name)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
