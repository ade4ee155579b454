pub mod labels;
pub mod pair;

pub use labels::LabelPolicy;
pub use pair::{PortFace, PortPair};
