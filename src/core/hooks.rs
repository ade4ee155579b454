use crate::core::engine::PortSyncEngine;
use crate::core::events::ConnectionEvent;
use crate::core::families::FamilyConfig;
use crate::core::host::Host;
use crate::core::persist::PersistedState;
use crate::core::state::NodeState;

/// Whether the hook chain keeps running after a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookFlow {
    /// Pass the event on to the next registered handler
    Continue,
    /// Swallow the event; later handlers do not see it
    Stop,
}

/// One participant in a node's lifecycle.
///
/// Handlers run in registration order and each hook may stop the chain.
/// Every method defaults to passing through, so a handler implements
/// only the hooks it cares about.
pub trait LifecycleHandler {
    /// The node was created
    fn on_created(&mut self, _state: &mut NodeState, _host: &mut dyn Host) -> HookFlow {
        HookFlow::Continue
    }

    /// A widget on the node changed value
    fn on_widget_change(
        &mut self,
        _state: &mut NodeState,
        _host: &mut dyn Host,
        _name: &str,
        _value: i64,
    ) -> HookFlow {
        HookFlow::Continue
    }

    /// A wire to or from the node was made or broken
    fn on_connections_change(
        &mut self,
        _state: &mut NodeState,
        _host: &mut dyn Host,
        _event: &ConnectionEvent,
    ) -> HookFlow {
        HookFlow::Continue
    }

    /// The host is saving the node
    fn on_serialize(&mut self, _state: &NodeState, _out: &mut PersistedState) -> HookFlow {
        HookFlow::Continue
    }

    /// The host is restoring the node from a saved record
    fn on_configure(
        &mut self,
        _state: &mut NodeState,
        _host: &mut dyn Host,
        _persisted: Option<&PersistedState>,
    ) -> HookFlow {
        HookFlow::Continue
    }

    /// The node was cloned from `source`
    fn on_cloned(
        &mut self,
        _state: &mut NodeState,
        _host: &mut dyn Host,
        _source: &NodeState,
    ) -> HookFlow {
        HookFlow::Continue
    }
}

/// Ordered list of lifecycle handlers for one node.
///
/// This replaces the save-original-and-wrap chaining of handler
/// overrides: the lifecycle is a fixed set of named hooks, and handlers
/// registered for them run in registration order until one stops the
/// chain.
pub struct HookChain {
    handlers: Vec<Box<dyn LifecycleHandler>>,
}

impl HookChain {
    /// Empty chain
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler; it runs after everything registered before it
    pub fn register(&mut self, handler: Box<dyn LifecycleHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch the created hook
    pub fn created(&mut self, state: &mut NodeState, host: &mut dyn Host) {
        for handler in &mut self.handlers {
            if handler.on_created(state, host) == HookFlow::Stop {
                break;
            }
        }
    }

    /// Dispatch a widget change
    pub fn widget_change(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        name: &str,
        value: i64,
    ) {
        for handler in &mut self.handlers {
            if handler.on_widget_change(state, host, name, value) == HookFlow::Stop {
                break;
            }
        }
    }

    /// Dispatch a connection change
    pub fn connections_change(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        event: &ConnectionEvent,
    ) {
        for handler in &mut self.handlers {
            if handler.on_connections_change(state, host, event) == HookFlow::Stop {
                break;
            }
        }
    }

    /// Dispatch serialization into `out`
    pub fn serialize(&mut self, state: &NodeState, out: &mut PersistedState) {
        for handler in &mut self.handlers {
            if handler.on_serialize(state, out) == HookFlow::Stop {
                break;
            }
        }
    }

    /// Dispatch restoration from a saved record
    pub fn configure(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        persisted: Option<&PersistedState>,
    ) {
        for handler in &mut self.handlers {
            if handler.on_configure(state, host, persisted) == HookFlow::Stop {
                break;
            }
        }
    }

    /// Dispatch the cloned hook
    pub fn cloned(&mut self, state: &mut NodeState, host: &mut dyn Host, source: &NodeState) {
        for handler in &mut self.handlers {
            if handler.on_cloned(state, host, source) == HookFlow::Stop {
                break;
            }
        }
    }
}

impl Default for HookChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in handler driving a [`PortSyncEngine`] from the lifecycle
/// hooks
pub struct PortSyncHandler {
    engine: PortSyncEngine,
}

impl PortSyncHandler {
    /// Wrap an engine as a lifecycle handler
    pub fn new(engine: PortSyncEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine
    pub fn engine(&self) -> &PortSyncEngine {
        &self.engine
    }
}

impl LifecycleHandler for PortSyncHandler {
    fn on_created(&mut self, state: &mut NodeState, host: &mut dyn Host) -> HookFlow {
        self.engine.reconcile(state, host);
        HookFlow::Continue
    }

    fn on_widget_change(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        name: &str,
        value: i64,
    ) -> HookFlow {
        if name == self.engine.family().control() {
            self.engine.on_count_changed(state, host, value);
        }
        HookFlow::Continue
    }

    fn on_connections_change(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        event: &ConnectionEvent,
    ) -> HookFlow {
        self.engine.on_connection_changed(state, host, event);
        HookFlow::Continue
    }

    fn on_serialize(&mut self, state: &NodeState, out: &mut PersistedState) -> HookFlow {
        *out = self.engine.serialize(state);
        HookFlow::Continue
    }

    fn on_configure(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        persisted: Option<&PersistedState>,
    ) -> HookFlow {
        self.engine.restore(state, host, persisted);
        HookFlow::Continue
    }

    fn on_cloned(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        source: &NodeState,
    ) -> HookFlow {
        self.engine.on_cloned(state, host, source);
        HookFlow::Continue
    }
}

/// A node family's plugin: the hook chain a host adapter drives.
///
/// Created with the standard port-sync handler already registered;
/// extra handlers run after it in registration order.
pub struct NodePlugin {
    family: FamilyConfig,
    chain: HookChain,
}

impl NodePlugin {
    /// Plugin with the standard port-sync chain for `family`
    pub fn new(family: FamilyConfig) -> Self {
        let mut chain = HookChain::new();
        chain.register(Box::new(PortSyncHandler::new(PortSyncEngine::new(
            family.clone(),
        ))));
        Self { family, chain }
    }

    /// Append an extra handler behind the built-in port-sync handler
    pub fn with_handler(mut self, handler: Box<dyn LifecycleHandler>) -> Self {
        self.chain.register(handler);
        self
    }

    /// The family this plugin serves
    pub fn family(&self) -> &FamilyConfig {
        &self.family
    }

    /// Fresh per-node state for this family
    pub fn initial_state(&self) -> NodeState {
        NodeState::with_count(self.family.default_count())
    }

    /// Host callback: the node was created
    pub fn on_created(&mut self, state: &mut NodeState, host: &mut dyn Host) {
        self.chain.created(state, host);
    }

    /// Host callback: a widget changed value
    pub fn on_widget_change(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        name: &str,
        value: i64,
    ) {
        self.chain.widget_change(state, host, name, value);
    }

    /// Host callback: a wire was made or broken
    pub fn on_connections_change(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        event: &ConnectionEvent,
    ) {
        self.chain.connections_change(state, host, event);
    }

    /// Host callback: the node is being saved
    pub fn on_serialize(&mut self, state: &NodeState) -> PersistedState {
        let mut out = PersistedState::new(state.target_count);
        self.chain.serialize(state, &mut out);
        out
    }

    /// Host callback: the node is being restored
    pub fn on_configure(
        &mut self,
        state: &mut NodeState,
        host: &mut dyn Host,
        persisted: Option<&PersistedState>,
    ) {
        self.chain.configure(state, host, persisted);
    }

    /// Host callback: the node was cloned from `source`
    pub fn on_cloned(&mut self, state: &mut NodeState, host: &mut dyn Host, source: &NodeState) {
        self.chain.cloned(state, host, source);
    }
}
