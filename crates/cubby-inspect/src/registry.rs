//! Tag-recognition registry.
//!
//! Mirrors how debugger pretty-printer frameworks work: recognizers are
//! registered once and consulted for every candidate value. Entries are
//! kept in registration order so that listings and precedence are
//! deterministic.

use cubby_core::kind::ContainerKind;
use indexmap::IndexMap;

/// Ordered mapping from reserved tag values to container kinds.
///
/// [`Registry::with_builtin`] seeds the two library kinds; callers that
/// define additional layout-compatible containers can register their own
/// tags alongside them.
pub struct Registry {
    entries: IndexMap<u64, ContainerKind>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create a registry pre-seeded with the built-in container kinds.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for kind in [ContainerKind::Flat, ContainerKind::Block] {
            registry.register(kind.tag(), kind);
        }
        registry
    }

    /// Register `tag` as identifying `kind`.
    ///
    /// Re-registering an existing tag overwrites its kind but keeps its
    /// position in the order.
    pub fn register(&mut self, tag: u64, kind: ContainerKind) {
        self.entries.insert(tag, kind);
    }

    /// Resolve a tag to its registered kind.
    pub fn recognize(&self, tag: u64) -> Option<ContainerKind> {
        self.entries.get(&tag).copied()
    }

    /// Registered `(tag, kind)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (u64, ContainerKind)> + '_ {
        self.entries.iter().map(|(&tag, &kind)| (tag, kind))
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_recognizes_both_kinds() {
        let registry = Registry::with_builtin();
        assert_eq!(
            registry.recognize(ContainerKind::Flat.tag()),
            Some(ContainerKind::Flat)
        );
        assert_eq!(
            registry.recognize(ContainerKind::Block.tag()),
            Some(ContainerKind::Block)
        );
        assert_eq!(registry.recognize(0xDEAD_BEEF), None);
    }

    #[test]
    fn entries_preserve_registration_order() {
        let mut registry = Registry::new();
        registry.register(3, ContainerKind::Block);
        registry.register(1, ContainerKind::Flat);
        let order: Vec<u64> = registry.entries().map(|(tag, _)| tag).collect();
        assert_eq!(order, vec![3, 1]);
    }

    #[test]
    fn empty_registry_recognizes_nothing() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.recognize(ContainerKind::Flat.tag()), None);
    }
}
