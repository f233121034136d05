// ============================================================
// CORPUS DOMAIN LAYER
// ============================================================
// Rows, run configuration, and classification results
// No I/O

mod csv_row;
mod partition;
mod pipeline_config;

pub use csv_row::Row;
pub use partition::{ClassifyOutcome, PartitionResult};
pub use pipeline_config::PipelineConfig;
