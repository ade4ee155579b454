use crate::core::types::{NodeId, PortDirection, SlotType};

/// One output slot on an upstream node, as the host reports it
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSlot {
    /// Resolved semantic type of the slot
    pub slot_type: SlotType,
    /// Slot display name
    pub name: String,
}

/// Snapshot of an upstream node taken at lookup time.
///
/// A snapshot rather than a live reference: the engine reads what it
/// needs and never holds onto host graph state across events.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamInfo {
    /// User-visible node title, when one is set
    pub title: Option<String>,
    /// Host node-type name, the fallback display name
    pub type_name: String,
    /// The node's output slots in order
    pub outputs: Vec<OutputSlot>,
}

impl UpstreamInfo {
    /// Display name: the title when set, otherwise the type name
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.type_name)
    }

    /// Get an output slot by index
    pub fn output(&self, slot: usize) -> Option<&OutputSlot> {
        self.outputs.get(slot)
    }
}

/// Host surface the engine drives.
///
/// The host owns the real port lists, the canvas and the graph; the
/// engine mirrors its pair list through the structural calls and asks
/// for redraws after visible changes. Lookups return `None` for
/// anything the host no longer knows about, so every engine operation
/// stays total.
pub trait Host {
    /// Mirror a pair side appended at the tail of the node's port list
    fn append_port(&mut self, direction: PortDirection, label: &str, slot_type: &SlotType);

    /// Mirror a pair side removed at `index`
    fn remove_port(&mut self, direction: PortDirection, index: usize);

    /// Schedule a canvas repaint and node resize
    fn request_redraw(&mut self);

    /// Snapshot an upstream node; `None` when it no longer exists
    fn upstream_node(&self, id: NodeId) -> Option<UpstreamInfo>;

    /// Current value of a named count widget; `None` when the widget is
    /// absent
    fn read_control_value(&self, control: &str) -> Option<i64>;
}
