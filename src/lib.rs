pub mod core;

// Re-export commonly used types
pub use crate::core::engine::PortSyncEngine;
pub use crate::core::events::{ConnectionEvent, LinkInfo};
pub use crate::core::families::FamilyConfig;
pub use crate::core::hooks::NodePlugin;
pub use crate::core::host::Host;
pub use crate::core::registry::FamilyRegistry;
pub use crate::core::state::NodeState;
pub use crate::core::types::{NodeId, PortDirection, SlotType};
