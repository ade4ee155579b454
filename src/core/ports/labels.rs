use crate::core::types::SlotType;

/// Policy for deriving a pair side's display label.
///
/// The shipped node families disagree on what a port label should show;
/// the policy is part of the family configuration, not the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Labels never leave their `<prefix><index+1>` default
    Fixed,
    /// Append the resolved type while connected, e.g. `in_3 (IMAGE)`
    TypeTagged,
    /// Show the upstream node's display name while connected; an optional
    /// placeholder replaces the `<prefix><index+1>` default while
    /// disconnected
    UpstreamName {
        /// Label shown while the slot has no connection
        placeholder: Option<String>,
    },
}

impl LabelPolicy {
    /// Label for a slot with no connection.
    ///
    /// This is both the label a freshly created pair gets and the label a
    /// disconnect resets to, so connect-then-disconnect always lands back
    /// on the exact starting label.
    pub fn resting_label(&self, prefix: &str, index: usize) -> String {
        match self {
            LabelPolicy::UpstreamName {
                placeholder: Some(text),
            } => text.clone(),
            _ => format!("{}{}", prefix, index + 1),
        }
    }

    /// Label for a slot whose connection resolved to `slot_type` from an
    /// upstream node displaying as `upstream_name`
    pub fn resolved_label(
        &self,
        prefix: &str,
        index: usize,
        slot_type: &SlotType,
        upstream_name: &str,
    ) -> String {
        match self {
            LabelPolicy::Fixed => format!("{}{}", prefix, index + 1),
            LabelPolicy::TypeTagged => format!("{}{} ({})", prefix, index + 1, slot_type),
            LabelPolicy::UpstreamName { .. } => upstream_name.to_string(),
        }
    }
}
