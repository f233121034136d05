//! Batch tools for a sentence corpus stored as CSV.
//!
//! Two independent stages run over the same corpus file:
//! [`VocabularyExtractor`] writes the sorted set of distinct tokens, and
//! [`SentenceClassifier`] splits sentences by whole-word presence of target
//! words into "filtered" and "remaining" files.

pub mod application;
pub mod domain;
pub mod infrastructure;

mod app;

pub use app::{init_tracing, run};
pub use application::{
    CorpusPipeline, PipelineReport, SentenceClassifier, TargetMatcher, VocabularyExtractor,
    VocabularySummary,
};
pub use domain::corpus::{ClassifyOutcome, PartitionResult, PipelineConfig, Row};
pub use domain::error::{AppError, Result};
pub use infrastructure::csv::CsvStore;
