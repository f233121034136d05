pub mod corpus_pipeline;
pub mod sentence_classifier;
pub mod vocabulary_extractor;

pub use corpus_pipeline::{CorpusPipeline, PipelineReport};
pub use sentence_classifier::{SentenceClassifier, TargetMatcher};
pub use vocabulary_extractor::{VocabularyExtractor, VocabularySummary};
