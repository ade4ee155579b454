use std::fmt;

/// Identifier for a node owned by the host graph.
///
/// The engine never dereferences one of these itself; it hands them back
/// to the host whenever an upstream lookup is needed, and tolerates the
/// host no longer knowing the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(uuid::Uuid);

impl NodeId {
    /// Create a fresh node identifier
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Wrap an identifier supplied by the host
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying uuid
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side of a node a port lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// Semantic type tag carried by a port slot.
///
/// `"*"` marks a slot whose type has not been resolved from a connection
/// yet; everything else is an opaque host type name such as `IMAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotType(String);

impl SlotType {
    /// The unresolved-type marker
    pub const WILDCARD: &'static str = "*";

    /// Create a type tag from a host type name
    pub fn new(tag: &str) -> Self {
        Self(tag.to_string())
    }

    /// The wildcard/unresolved type
    pub fn wildcard() -> Self {
        Self(Self::WILDCARD.to_string())
    }

    /// Whether this is the wildcard type
    pub fn is_wildcard(&self) -> bool {
        self.0 == Self::WILDCARD
    }

    /// Get the raw tag string
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
