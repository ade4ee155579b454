use log::debug;

use crate::core::events::ConnectionEvent;
use crate::core::families::{FamilyConfig, Typing};
use crate::core::host::Host;
use crate::core::persist::PersistedState;
use crate::core::state::NodeState;
use crate::core::types::PortDirection;

/// Keeps a node's pair list consistent with its target count and each
/// pair's type and labels consistent with its upstream connection.
///
/// One engine instance exists per node and owns that node family's
/// policy. Every operation is total over missing host data: an absent
/// widget, a stale upstream reference or an out-of-range pair index
/// degrades to a no-op or a default, never a fault — the engine runs
/// inside the host's UI event path where a panic would take down the
/// whole editor.
#[derive(Debug, Clone)]
pub struct PortSyncEngine {
    family: FamilyConfig,
}

impl PortSyncEngine {
    /// Create an engine for one node of the given family
    pub fn new(family: FamilyConfig) -> Self {
        Self { family }
    }

    /// The family policy this engine applies
    pub fn family(&self) -> &FamilyConfig {
        &self.family
    }

    /// Fresh state for a node of this family
    pub fn initial_state(&self) -> NodeState {
        NodeState::with_count(self.family.default_count())
    }

    /// Bring the pair list in line with the count widget.
    ///
    /// The target is the widget value when the widget is readable,
    /// otherwise the current `state.target_count`; either way it is
    /// clamped to the family's range before use. Equal counts
    /// short-circuit without touching any pair and without a redraw.
    pub fn reconcile(&self, state: &mut NodeState, host: &mut dyn Host) {
        let raw = host
            .read_control_value(self.family.control())
            .unwrap_or(state.target_count as i64);
        self.apply_target(state, host, raw);
    }

    /// React to the count widget changing to `value`
    pub fn on_count_changed(&self, state: &mut NodeState, host: &mut dyn Host, value: i64) {
        self.apply_target(state, host, value);
    }

    /// Apply a connection change to the pair at `event.pair_index`.
    ///
    /// Only input-side events carry type information; an output-side
    /// event is ignored because outputs inherit their type through the
    /// paired input. Unknown pair indices and stale upstream references
    /// are no-ops.
    pub fn on_connection_changed(
        &self,
        state: &mut NodeState,
        host: &mut dyn Host,
        event: &ConnectionEvent,
    ) {
        if event.direction != PortDirection::Input {
            return;
        }
        let pair = match state.pairs.get_mut(event.pair_index) {
            Some(pair) => pair,
            None => return,
        };

        if !event.connected {
            let resting = self.family.new_pair(event.pair_index);
            if !pair.connected && *pair == resting {
                return; // repeated disconnect, nothing left to reset
            }
            *pair = resting;
            debug!(
                "'{}' pair {} reset to resting state",
                self.family.type_name(),
                event.pair_index
            );
            host.request_redraw();
            return;
        }

        let link = match event.link {
            Some(link) => link,
            None => return,
        };
        let upstream = match host.upstream_node(link.upstream) {
            Some(upstream) => upstream,
            None => return, // raced with upstream node deletion
        };
        let slot = match upstream.output(link.output_slot) {
            Some(slot) => slot,
            None => return,
        };

        // Declared and multi-type slots keep their type; only inferred
        // slots adopt the upstream type.
        let resolved = match self.family.typing() {
            Typing::Inferred => slot.slot_type.clone(),
            _ => pair.input.slot_type.clone(),
        };
        let upstream_name = upstream.display_name();

        pair.input.slot_type = resolved.clone();
        pair.input.label =
            self.family
                .connected_input_label(event.pair_index, &resolved, upstream_name);
        if let Some(output) = pair.output.as_mut() {
            output.slot_type = resolved.clone();
            output.label =
                self.family
                    .connected_output_label(event.pair_index, &resolved, upstream_name);
        }
        pair.connected = true;

        debug!(
            "'{}' pair {} resolved to {} from '{}'",
            self.family.type_name(),
            event.pair_index,
            resolved,
            upstream_name
        );
        host.request_redraw();
    }

    /// Snapshot the durable state: the pair count and nothing else
    pub fn serialize(&self, state: &NodeState) -> PersistedState {
        PersistedState::new(state.target_count)
    }

    /// Restore from a serialized record, then rebuild the pair list.
    ///
    /// Runs before upstream nodes are guaranteed to exist: pairs come
    /// back in their resting state and the host re-fires connection
    /// events during graph load to resolve types. A missing record
    /// falls back to the family default.
    pub fn restore(
        &self,
        state: &mut NodeState,
        host: &mut dyn Host,
        persisted: Option<&PersistedState>,
    ) {
        let count = persisted
            .map(|record| record.count as i64)
            .unwrap_or(self.family.default_count() as i64);
        self.apply_target(state, host, count);
    }

    /// Adopt a source node's pair count after the host cloned it.
    ///
    /// Connection-derived types and labels are not copied; every pair of
    /// the clone is put back in its resting state and the host re-fires
    /// connection events for whatever the clone is actually wired to.
    pub fn on_cloned(
        &self,
        state: &mut NodeState,
        host: &mut dyn Host,
        source: &NodeState,
    ) {
        let mut reset_any = false;
        for pair in &mut state.pairs {
            let resting = self.family.new_pair(pair.index);
            if *pair != resting {
                *pair = resting;
                reset_any = true;
            }
        }

        let target = self.family.clamp_count(source.target_count as i64);
        state.target_count = target;
        let resized = self.sync_pairs(state, host);
        if reset_any || resized {
            host.request_redraw();
        }
    }

    /// Clamp `raw`, store it and resize the pair list, redrawing only
    /// when the structure actually changed
    fn apply_target(&self, state: &mut NodeState, host: &mut dyn Host, raw: i64) {
        state.target_count = self.family.clamp_count(raw);
        if self.sync_pairs(state, host) {
            host.request_redraw();
        }
    }

    /// Resize the pair list to `state.target_count`, mirroring every
    /// structural change to the host. Returns whether anything changed.
    fn sync_pairs(&self, state: &mut NodeState, host: &mut dyn Host) -> bool {
        let target = state.target_count;
        if state.pairs.len() == target {
            return false;
        }

        while state.pairs.len() > target {
            let index = state.pairs.len() - 1;
            // Remove both sides together or the host's input and output
            // lists desynchronize.
            host.remove_port(PortDirection::Input, index);
            if self.family.paired() {
                host.remove_port(PortDirection::Output, index);
            }
            state.pairs.pop();
        }

        while state.pairs.len() < target {
            let pair = self.family.new_pair(state.pairs.len());
            host.append_port(
                PortDirection::Input,
                &pair.input.label,
                &pair.input.slot_type,
            );
            if let Some(output) = &pair.output {
                host.append_port(PortDirection::Output, &output.label, &output.slot_type);
            }
            state.pairs.push(pair);
        }

        debug!(
            "'{}' reconciled to {} pairs",
            self.family.type_name(),
            target
        );
        true
    }
}
