//! Bus family presets: paired inputs and outputs carrying one inferred
//! type per pair.

use super::FamilyConfig;

/// The standard bus: unbounded pair count driven by a `pairs` widget,
/// wildcard slots that adopt the upstream type, labels tagged with the
/// resolved type while connected.
pub fn yellow_bus() -> FamilyConfig {
    FamilyConfig::new("YellowBus")
}

/// The compact bus variant: add/remove one pair at a time, always at
/// least one pair, never more than ten.
pub fn yellow_bus_compact() -> FamilyConfig {
    FamilyConfig::new("YellowBusCompact").with_counts(1, 1, 10)
}
