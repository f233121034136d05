// ============================================================
// CORPUS PIPELINE
// ============================================================
// Vocabulary extraction followed by sentence classification

use crate::domain::corpus::{ClassifyOutcome, PipelineConfig};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::CsvStore;

use super::sentence_classifier::SentenceClassifier;
use super::vocabulary_extractor::{VocabularyExtractor, VocabularySummary};

/// Results of both stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub vocabulary: VocabularySummary,
    pub classification: ClassifyOutcome,
}

/// Runs both stages over the configured files
pub struct CorpusPipeline {
    config: PipelineConfig,
    store: CsvStore,
}

impl CorpusPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            store: CsvStore::default(),
        }
    }

    pub fn run(&self) -> Result<PipelineReport> {
        self.config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid pipeline config: {}", e))
        })?;

        let vocabulary = VocabularyExtractor::new(self.store.clone())
            .extract(&self.config.sentences_path, &self.config.unique_words_path)?;

        let classification = SentenceClassifier::new(self.store.clone())
            .with_progress_interval(self.config.progress_interval)
            .classify(
                &self.config.target_words_path,
                &self.config.sentences_path,
                &self.config.filtered_path,
                &self.config.remaining_path,
            )?;

        Ok(PipelineReport {
            vocabulary,
            classification,
        })
    }
}
