use std::fmt;

/// Errors from family registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A family with the same node-type name is already registered
    DuplicateFamily(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateFamily(name) => {
                write!(f, "family '{}' is already registered", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
