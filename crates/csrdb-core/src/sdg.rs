//! Sustainable Development Goal reference entries (static seed of 17).

use serde::{Deserialize, Serialize};

/// One of the 17 SDG reference entries. Editable but not creatable through
/// the access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sdg {
    pub id: i64,
    pub goal: String,
    pub logo: String,
    pub description: String,
    /// Ordered list of indicator texts; serialized as a JSON column on export.
    pub indicators: Vec<String>,
}
