use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry in the ordered role catalog (the allocation grid's row axis).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    /// Trade or discipline, e.g. `concrete`, `electrical`, `project_controls`.
    pub trade: Option<String>,
}
