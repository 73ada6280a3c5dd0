//! Function registry: deployment target names → functions.

use std::collections::HashMap;
use std::sync::Arc;

use crate::function::CloudEventFunction;

/// Registry mapping target names to event functions.
///
/// A process serves one target at a time; the registry is the menu the host
/// binary picks from at startup.
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn CloudEventFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function under a target name.
    pub fn register(&mut self, target: &str, function: impl CloudEventFunction + 'static) {
        let _ = self
            .functions
            .insert(target.to_owned(), Arc::new(function));
    }

    /// Look up a function by target name.
    pub fn get(&self, target: &str) -> Option<Arc<dyn CloudEventFunction>> {
        self.functions.get(target).cloned()
    }

    /// List all registered target names (sorted).
    pub fn targets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check whether a target is registered.
    pub fn has_target(&self, target: &str) -> bool {
        self.functions.contains_key(target)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
