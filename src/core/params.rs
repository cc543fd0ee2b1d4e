use serde::{Deserialize, Serialize};

use crate::types::PreviewFormat;

/// Pipeline parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Upper bound on the number of rows either output table may hold
    pub record_budget: usize,
    /// Seed for the land attribute sampler; same seed, same tables
    pub seed: u64,
    /// Encoding of the verification preview
    pub preview_format: PreviewFormat,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            record_budget: 10_000,
            seed: 0,
            preview_format: PreviewFormat::PNG,
        }
    }
}
