pub mod multi_input;
pub mod yellow_bus;

use crate::core::ports::{LabelPolicy, PortFace, PortPair};
use crate::core::types::SlotType;

/// Hard ceiling on the pair count any family may request.
///
/// This is the largest bound any shipped count widget allows; families
/// usually configure a lower `max_count`.
pub const MAX_TARGET_COUNT: usize = 1000;

/// Typing discipline of a family's slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Typing {
    /// Slots start at the wildcard type and adopt whatever type the
    /// connected upstream output carries
    Inferred,
    /// Slots carry one declared type that connections never change
    Declared(SlotType),
    /// Slots accept any of several declared types; like `Declared`,
    /// connections never change the slot type
    AnyOf(Vec<SlotType>),
}

/// Per-family policy for one dynamic-port node type.
///
/// Everything the engine treats as a configuration constant lives here:
/// label prefixes, count-widget name and bounds, typing discipline, label
/// policy, and whether inputs are mirrored by outputs.
#[derive(Debug, Clone)]
pub struct FamilyConfig {
    type_name: String,
    input_prefix: String,
    output_prefix: String,
    control: String,
    default_count: usize,
    min_count: usize,
    max_count: usize,
    typing: Typing,
    labels: LabelPolicy,
    paired: bool,
}

impl FamilyConfig {
    /// Create a family bound to a host node-type name.
    ///
    /// Defaults describe a paired bus: `in_`/`out_` prefixes, a `pairs`
    /// count widget starting at 1, inferred typing and type-tagged labels.
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            input_prefix: "in_".to_string(),
            output_prefix: "out_".to_string(),
            control: "pairs".to_string(),
            default_count: 1,
            min_count: 0,
            max_count: MAX_TARGET_COUNT,
            typing: Typing::Inferred,
            labels: LabelPolicy::TypeTagged,
            paired: true,
        }
    }

    /// Set the input and output label prefixes
    pub fn with_prefixes(mut self, input: &str, output: &str) -> Self {
        self.input_prefix = input.to_string();
        self.output_prefix = output.to_string();
        self
    }

    /// Set the name of the count widget this family listens to
    pub fn with_control(mut self, control: &str) -> Self {
        self.control = control.to_string();
        self
    }

    /// Set the default, minimum and maximum pair counts.
    ///
    /// All three are capped at [`MAX_TARGET_COUNT`]; the default is kept
    /// inside the configured range.
    pub fn with_counts(mut self, default: usize, min: usize, max: usize) -> Self {
        self.max_count = max.min(MAX_TARGET_COUNT);
        self.min_count = min.min(self.max_count);
        self.default_count = default.clamp(self.min_count, self.max_count);
        self
    }

    /// Set the typing discipline
    pub fn with_typing(mut self, typing: Typing) -> Self {
        self.typing = typing;
        self
    }

    /// Set the label policy
    pub fn with_labels(mut self, labels: LabelPolicy) -> Self {
        self.labels = labels;
        self
    }

    /// Mark this family as input-only: pairs have no output side
    pub fn input_only(mut self) -> Self {
        self.paired = false;
        self
    }

    /// Host node-type name this family binds to
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name of the count widget
    pub fn control(&self) -> &str {
        &self.control
    }

    /// Pair count a fresh node starts with
    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// Smallest allowed pair count
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Largest allowed pair count
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Typing discipline of this family's slots
    pub fn typing(&self) -> &Typing {
        &self.typing
    }

    /// Label policy of this family
    pub fn labels(&self) -> &LabelPolicy {
        &self.labels
    }

    /// Whether inputs are mirrored by same-index outputs
    pub fn paired(&self) -> bool {
        self.paired
    }

    /// Clamp a widget-supplied target to this family's valid range.
    ///
    /// Negative and oversized values are silently coerced; this never
    /// fails.
    pub fn clamp_count(&self, raw: i64) -> usize {
        if raw < self.min_count as i64 {
            self.min_count
        } else if raw > self.max_count as i64 {
            self.max_count
        } else {
            raw as usize
        }
    }

    /// Build a fresh pair at `index` in its resting state
    pub fn new_pair(&self, index: usize) -> PortPair {
        let slot_type = self.resting_type();
        let input = PortFace::new(
            slot_type.clone(),
            &self.labels.resting_label(&self.input_prefix, index),
        );
        let output = if self.paired {
            Some(PortFace::new(
                slot_type,
                &self.labels.resting_label(&self.output_prefix, index),
            ))
        } else {
            None
        };
        PortPair {
            index,
            input,
            output,
            connected: false,
        }
    }

    /// Slot type a pair carries before any connection resolves it
    pub fn resting_type(&self) -> SlotType {
        match &self.typing {
            Typing::Inferred => SlotType::wildcard(),
            Typing::Declared(slot_type) => slot_type.clone(),
            Typing::AnyOf(slot_types) => {
                let joined: Vec<&str> = slot_types.iter().map(|t| t.tag()).collect();
                SlotType::new(&joined.join(","))
            }
        }
    }

    /// Input label for a pair whose connection resolved
    pub(crate) fn connected_input_label(
        &self,
        index: usize,
        slot_type: &SlotType,
        upstream_name: &str,
    ) -> String {
        self.labels
            .resolved_label(&self.input_prefix, index, slot_type, upstream_name)
    }

    /// Output label for a pair whose connection resolved
    pub(crate) fn connected_output_label(
        &self,
        index: usize,
        slot_type: &SlotType,
        upstream_name: &str,
    ) -> String {
        self.labels
            .resolved_label(&self.output_prefix, index, slot_type, upstream_name)
    }
}
