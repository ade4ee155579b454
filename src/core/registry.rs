use std::collections::HashMap;

use crate::core::errors::RegistryError;
use crate::core::families::multi_input::{image_batch, string_concat, value_to_string};
use crate::core::families::yellow_bus::{yellow_bus, yellow_bus_compact};
use crate::core::families::FamilyConfig;
use crate::core::hooks::NodePlugin;

/// Registered node families, keyed by host node-type name.
///
/// A host adapter looks up the family for each node type it encounters
/// and builds one plugin per node instance from it.
pub struct FamilyRegistry {
    families: HashMap<String, FamilyConfig>,
}

impl FamilyRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            families: HashMap::new(),
        }
    }

    /// Registry preloaded with every family this crate ships
    pub fn with_builtin_families() -> Self {
        let mut registry = Self::new();
        let builtins = [
            yellow_bus(),
            yellow_bus_compact(),
            image_batch(),
            string_concat(),
            value_to_string(),
        ];
        for family in builtins {
            registry
                .register(family)
                .expect("builtin family names are distinct");
        }
        registry
    }

    /// Register a family
    pub fn register(&mut self, family: FamilyConfig) -> Result<(), RegistryError> {
        let name = family.type_name().to_string();
        if self.families.contains_key(&name) {
            return Err(RegistryError::DuplicateFamily(name));
        }
        self.families.insert(name, family);
        Ok(())
    }

    /// Get a family by node-type name
    pub fn get(&self, type_name: &str) -> Option<&FamilyConfig> {
        self.families.get(type_name)
    }

    /// Whether a family is registered for this node type
    pub fn has_family(&self, type_name: &str) -> bool {
        self.families.contains_key(type_name)
    }

    /// Build the plugin for one node of the given type, if the family is
    /// known
    pub fn plugin_for(&self, type_name: &str) -> Option<NodePlugin> {
        self.get(type_name).cloned().map(NodePlugin::new)
    }

    /// Registered node-type names, sorted
    pub fn family_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.families.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered families
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
