use serde::{Deserialize, Serialize};

/// Links a cell-tower id to the HUNTER point that observed it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    #[serde(default)]
    pub cell_id: String,
    #[serde(default)]
    pub punto: String,
}

impl CellRecord {
    pub fn new(cell_id: impl Into<String>, punto: impl Into<String>) -> Self {
        Self {
            cell_id: cell_id.into(),
            punto: punto.into(),
        }
    }
}

/// Party role of a number in a call record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Originator,
    Receptor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Originator => f.pad("originator"),
            Role::Receptor => f.pad("receptor"),
        }
    }
}

/// One correlation result: a target number seen through a set of cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationEntry {
    #[serde(default)]
    pub target_number: String,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub occurrences: u32,
    /// Unix milliseconds.
    #[serde(default)]
    pub first_detection: Option<i64>,
    /// Unix milliseconds.
    #[serde(default)]
    pub last_detection: Option<i64>,
    #[serde(default)]
    pub related_cells: Vec<String>,
    #[serde(default)]
    pub role: Role,
}

/// Everything a correlation page is rendered from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationDataset {
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub cells: Vec<CellRecord>,
    #[serde(default)]
    pub results: Vec<CorrelationEntry>,
}
