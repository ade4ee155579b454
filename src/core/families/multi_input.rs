//! Multi-input family presets: input-only nodes whose input list follows
//! an `inputcount` widget.

use super::{FamilyConfig, Typing};
use crate::core::ports::LabelPolicy;
use crate::core::types::SlotType;

/// Image batcher: a growing list of `IMAGE` inputs. The widget starts at
/// two inputs and never drops below two.
pub fn image_batch() -> FamilyConfig {
    FamilyConfig::new("ImageBatchMulti")
        .input_only()
        .with_prefixes("image_", "")
        .with_control("inputcount")
        .with_counts(2, 2, 1000)
        .with_typing(Typing::Declared(SlotType::new("IMAGE")))
        .with_labels(LabelPolicy::Fixed)
}

/// String concatenator: a growing list of `STRING` inputs
pub fn string_concat() -> FamilyConfig {
    FamilyConfig::new("StringConcatMulti")
        .input_only()
        .with_prefixes("string_", "")
        .with_control("inputcount")
        .with_counts(2, 2, 1000)
        .with_typing(Typing::Declared(SlotType::new("STRING")))
        .with_labels(LabelPolicy::Fixed)
}

/// Value stringifier: accepts scalar values of several types and labels
/// each input after the node feeding it.
pub fn value_to_string() -> FamilyConfig {
    FamilyConfig::new("NodeValueToString")
        .input_only()
        .with_prefixes("value_", "")
        .with_control("inputcount")
        .with_counts(2, 2, 1000)
        .with_typing(Typing::AnyOf(vec![
            SlotType::new("STRING"),
            SlotType::new("INT"),
            SlotType::new("FLOAT"),
        ]))
        .with_labels(LabelPolicy::UpstreamName {
            placeholder: Some("Not Connected".to_string()),
        })
}
