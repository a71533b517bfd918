//! Per translation unit state shared by the nullable rewrites.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Namespaces the generated code needs `using` directives for.
///
/// Insertion is idempotent. Iteration follows first-registration order so
/// the emitted directive list is stable across runs.
#[derive(Clone, Debug, Default)]
pub struct ImportRequirements {
    namespaces: IndexSet<String, FxBuildHasher>,
}

impl ImportRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `namespace`. Returns `true` if it was not already present.
    pub fn register(&mut self, namespace: &str) -> bool {
        if self.namespaces.contains(namespace) {
            return false;
        }
        self.namespaces.insert(namespace.to_string())
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(String::as_str)
    }

    /// Take every recorded namespace, leaving the set empty.
    pub fn flush(&mut self) -> Vec<String> {
        self.namespaces.drain(..).collect()
    }
}

/// State threaded through every rewrite in one translation unit.
#[derive(Debug, Default)]
pub struct RewriteContext {
    imports: ImportRequirements,
}

impl RewriteContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn imports(&self) -> &ImportRequirements {
        &self.imports
    }

    pub const fn imports_mut(&mut self) -> &mut ImportRequirements {
        &mut self.imports
    }

    /// End of the translation unit: the namespaces to emit as `using`
    /// directives.
    pub fn finish(mut self) -> Vec<String> {
        self.imports.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut imports = ImportRequirements::new();
        assert!(imports.register("VBtoCSharp.Compatiblity"));
        assert!(!imports.register("VBtoCSharp.Compatiblity"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_flush_keeps_registration_order() {
        let mut ctx = RewriteContext::new();
        ctx.imports_mut().register("B");
        ctx.imports_mut().register("A");
        ctx.imports_mut().register("B");
        assert_eq!(ctx.imports().iter().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(ctx.finish(), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_flush_empties_set() {
        let mut imports = ImportRequirements::new();
        imports.register("A");
        assert_eq!(imports.flush().len(), 1);
        assert!(imports.is_empty());
        assert!(!imports.contains("A"));
    }
}
