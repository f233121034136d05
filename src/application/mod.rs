pub mod use_cases;

pub use use_cases::{
    CorpusPipeline, PipelineReport, SentenceClassifier, TargetMatcher, VocabularyExtractor,
    VocabularySummary,
};
