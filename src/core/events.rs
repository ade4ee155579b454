use crate::core::types::{NodeId, PortDirection};

/// Reference to the upstream output slot feeding a new connection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkInfo {
    /// Node whose output feeds this connection
    pub upstream: NodeId,
    /// Index into that node's output slots
    pub output_slot: usize,
}

/// A wire to or from one of this node's ports was made or broken.
///
/// Delivered by the host from its connections-changed callback. `link`
/// is present only for `connected == true`, and may refer to a node the
/// host has deleted in the meantime; the engine treats that as a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionEvent {
    /// Which side of this node the wire touched
    pub direction: PortDirection,
    /// Index of the affected pair
    pub pair_index: usize,
    /// Whether the wire was made or broken
    pub connected: bool,
    /// The upstream end of the wire, when one was made
    pub link: Option<LinkInfo>,
}

impl ConnectionEvent {
    /// Event for a wire being made
    pub fn connected(direction: PortDirection, pair_index: usize, link: LinkInfo) -> Self {
        Self {
            direction,
            pair_index,
            connected: true,
            link: Some(link),
        }
    }

    /// Event for a wire being broken
    pub fn disconnected(direction: PortDirection, pair_index: usize) -> Self {
        Self {
            direction,
            pair_index,
            connected: false,
            link: None,
        }
    }
}
