use serde::{Deserialize, Serialize};

/// Allowed/forbidden judgment for one item, as produced by the upstream model.
///
/// All three fields are required; the model's output is rejected if any is
/// missing or has the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemVerdict {
    pub carry_on: bool,
    pub checked_bag: bool,
    pub description: String,
}
