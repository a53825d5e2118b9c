use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::records::CorrelationDataset;

pub fn load_dataset(path: &Path) -> Result<CorrelationDataset> {
    let data = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset: CorrelationDataset =
        serde_json::from_str(&data).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(
        "Loaded mission {:?}: {} cells, {} correlation results",
        dataset.mission,
        dataset.cells.len(),
        dataset.results.len()
    );
    Ok(dataset)
}
