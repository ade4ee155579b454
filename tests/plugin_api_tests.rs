use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dynbus::core::events::{ConnectionEvent, LinkInfo};
use dynbus::core::host::{Host, OutputSlot, UpstreamInfo};
use dynbus::core::persist::PersistedState;
use dynbus::core::registry::FamilyRegistry;
use dynbus::core::types::{NodeId, PortDirection, SlotType};

/// Minimal host for driving plugins through the public API
struct MiniHost {
    inputs: Vec<(String, SlotType)>,
    outputs: Vec<(String, SlotType)>,
    redraws: usize,
    controls: HashMap<String, i64>,
    upstreams: HashMap<NodeId, UpstreamInfo>,
}

impl MiniHost {
    fn new() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            redraws: 0,
            controls: HashMap::new(),
            upstreams: HashMap::new(),
        }
    }

    fn add_upstream(&mut self, title: Option<&str>, type_name: &str, slot_type: &str) -> NodeId {
        let id = NodeId::new();
        self.upstreams.insert(
            id,
            UpstreamInfo {
                title: title.map(str::to_string),
                type_name: type_name.to_string(),
                outputs: vec![OutputSlot {
                    slot_type: SlotType::new(slot_type),
                    name: "out".to_string(),
                }],
            },
        );
        id
    }
}

impl Host for MiniHost {
    fn append_port(&mut self, direction: PortDirection, label: &str, slot_type: &SlotType) {
        let entry = (label.to_string(), slot_type.clone());
        match direction {
            PortDirection::Input => self.inputs.push(entry),
            PortDirection::Output => self.outputs.push(entry),
        }
    }

    fn remove_port(&mut self, direction: PortDirection, index: usize) {
        let list = match direction {
            PortDirection::Input => &mut self.inputs,
            PortDirection::Output => &mut self.outputs,
        };
        if index < list.len() {
            list.remove(index);
        }
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn upstream_node(&self, id: NodeId) -> Option<UpstreamInfo> {
        self.upstreams.get(&id).cloned()
    }

    fn read_control_value(&self, control: &str) -> Option<i64> {
        self.controls.get(control).copied()
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn bus_node_full_lifecycle() {
    init_logging();
    let registry = FamilyRegistry::with_builtin_families();
    let mut plugin = registry.plugin_for("YellowBus").expect("builtin family");
    let mut state = plugin.initial_state();
    let mut host = MiniHost::new();

    // Creation builds the default single pair.
    plugin.on_created(&mut state, &mut host);
    assert_eq!(state.pair_count(), 1);
    assert_eq!(host.inputs.len(), 1);
    assert_eq!(host.outputs.len(), 1);

    // The user grows the bus to three pairs.
    host.controls.insert("pairs".to_string(), 3);
    plugin.on_widget_change(&mut state, &mut host, "pairs", 3);
    assert_eq!(state.pair_count(), 3);

    // Wiring a FLOAT producer into pair 0 types both sides.
    let loader = host.add_upstream(Some("Loader"), "FloatLoader", "FLOAT");
    plugin.on_connections_change(
        &mut state,
        &mut host,
        &ConnectionEvent::connected(
            PortDirection::Input,
            0,
            LinkInfo {
                upstream: loader,
                output_slot: 0,
            },
        ),
    );
    let pair = state.pair(0).unwrap();
    assert_eq!(pair.input.slot_type.tag(), "FLOAT");
    assert_eq!(pair.output.as_ref().unwrap().slot_type.tag(), "FLOAT");
    assert_eq!(pair.input.label, "in_1 (FLOAT)");

    // Unwiring resets the pair to its resting state.
    plugin.on_connections_change(
        &mut state,
        &mut host,
        &ConnectionEvent::disconnected(PortDirection::Input, 0),
    );
    let pair = state.pair(0).unwrap();
    assert!(pair.input.slot_type.is_wildcard());
    assert_eq!(pair.input.label, "in_1");
}

#[test]
fn persistence_round_trips_through_json() {
    init_logging();
    let registry = FamilyRegistry::with_builtin_families();
    let mut plugin = registry.plugin_for("YellowBus").expect("builtin family");
    let mut state = plugin.initial_state();
    let mut host = MiniHost::new();

    plugin.on_created(&mut state, &mut host);
    plugin.on_widget_change(&mut state, &mut host, "pairs", 3);
    plugin.on_widget_change(&mut state, &mut host, "pairs", 5);

    let record = plugin.on_serialize(&state);
    let json = serde_json::to_string(&record).expect("record serializes");
    assert_eq!(json, r#"{"count":5}"#);

    let restored_record: PersistedState = serde_json::from_str(&json).expect("record parses");
    let mut restored_plugin = registry.plugin_for("YellowBus").expect("builtin family");
    let mut restored = restored_plugin.initial_state();
    let mut new_host = MiniHost::new();
    restored_plugin.on_configure(&mut restored, &mut new_host, Some(&restored_record));

    assert_eq!(restored.pair_count(), 5);
    assert!(restored.pairs.iter().all(|pair| pair.is_wildcard()));
    assert_eq!(new_host.inputs.len(), 5);
    assert_eq!(new_host.outputs.len(), 5);
}

#[test]
fn clones_copy_the_count_and_rest_every_pair() {
    init_logging();
    let registry = FamilyRegistry::with_builtin_families();
    let mut plugin = registry.plugin_for("YellowBus").expect("builtin family");
    let mut source = plugin.initial_state();
    let mut host = MiniHost::new();

    plugin.on_created(&mut source, &mut host);
    plugin.on_widget_change(&mut source, &mut host, "pairs", 4);
    let decoder = host.add_upstream(None, "VaeDecode", "IMAGE");
    plugin.on_connections_change(
        &mut source,
        &mut host,
        &ConnectionEvent::connected(
            PortDirection::Input,
            2,
            LinkInfo {
                upstream: decoder,
                output_slot: 0,
            },
        ),
    );

    let mut clone_plugin = registry.plugin_for("YellowBus").expect("builtin family");
    let mut clone = clone_plugin.initial_state();
    let mut clone_host = MiniHost::new();
    clone_plugin.on_cloned(&mut clone, &mut clone_host, &source);

    assert_eq!(clone.pair_count(), 4);
    assert!(
        clone.pairs.iter().all(|pair| pair.is_wildcard() && !pair.connected),
        "connection-derived state is never copied to a clone"
    );
}

#[test]
fn multi_input_nodes_track_their_inputcount_widget() {
    init_logging();
    let registry = FamilyRegistry::with_builtin_families();
    let mut plugin = registry.plugin_for("ImageBatchMulti").expect("builtin family");
    let mut state = plugin.initial_state();
    let mut host = MiniHost::new();

    plugin.on_created(&mut state, &mut host);
    assert_eq!(state.pair_count(), 2);
    assert_eq!(host.outputs.len(), 0, "multi-input families add no outputs");
    assert_eq!(host.inputs[0].0, "image_1");
    assert_eq!(host.inputs[0].1.tag(), "IMAGE");

    plugin.on_widget_change(&mut state, &mut host, "inputcount", 4);
    assert_eq!(state.pair_count(), 4);

    plugin.on_widget_change(&mut state, &mut host, "inputcount", 1);
    assert_eq!(state.pair_count(), 2, "inputcount never drops below two");
}

#[test]
fn random_count_sequences_keep_engine_and_host_in_sync() {
    init_logging();
    let registry = FamilyRegistry::with_builtin_families();
    let mut plugin = registry.plugin_for("YellowBus").expect("builtin family");
    let mut state = plugin.initial_state();
    let mut host = MiniHost::new();
    plugin.on_created(&mut state, &mut host);

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let raw: i64 = rng.gen_range(-20..1200);
        plugin.on_widget_change(&mut state, &mut host, "pairs", raw);

        let expected = raw.clamp(0, 1000) as usize;
        assert_eq!(state.pair_count(), expected);
        assert_eq!(state.target_count, expected);
        assert_eq!(host.inputs.len(), expected, "host inputs must mirror the pairs");
        assert_eq!(host.outputs.len(), expected, "host outputs must mirror the pairs");
    }
}

#[test]
fn registering_a_family_twice_fails_cleanly() {
    let mut registry = FamilyRegistry::with_builtin_families();
    let duplicate = dynbus::core::families::yellow_bus::yellow_bus();
    assert!(registry.register(duplicate).is_err());
    assert_eq!(registry.len(), 5);
}
