use serde::{Deserialize, Serialize};

/// The engine's durable state: the pair count and nothing else.
///
/// Types and labels are never persisted. Upstream identity is not
/// resolvable until the rest of the graph has loaded, so they are
/// re-derived from the connection events the host fires during load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Desired pair count at save time
    pub count: usize,
}

impl PersistedState {
    /// Record for a node that wants `count` pairs
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}
