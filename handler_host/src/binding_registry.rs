use std::collections::HashMap;
use std::sync::RwLock;

use crate::handler_binding::HandlerBinding;

/// Handler bindings a host has loaded, by name.
pub struct BindingRegistry {
    bindings: RwLock<HashMap<String, HandlerBinding>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
        }
    }

    /// Adds `binding`, replacing one with the same name.
    pub fn register(&self, binding: HandlerBinding) {
        let mut map = self.bindings.write().unwrap_or_else(|e| e.into_inner());
        map.insert(binding.name.clone(), binding);
    }

    pub fn get(&self, name: &str) -> Option<HandlerBinding> {
        let map = self.bindings.read().unwrap_or_else(|e| e.into_inner());
        map.get(name).cloned()
    }

    pub fn all(&self) -> Vec<HandlerBinding> {
        let map = self.bindings.read().unwrap_or_else(|e| e.into_inner());
        map.values().cloned().collect()
    }
}

impl Default for BindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
