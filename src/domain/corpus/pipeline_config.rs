// ============================================================
// PIPELINE CONFIGURATION
// ============================================================
// File locations and reporting knobs for one run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths and settings for the vocabulary + classification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Sentence corpus; read by both stages and re-saved by the classifier
    pub sentences_path: PathBuf,

    /// Target words, one per row
    pub target_words_path: PathBuf,

    /// Sorted vocabulary output
    pub unique_words_path: PathBuf,

    /// Sentences containing a target word
    pub filtered_path: PathBuf,

    /// Sentences containing none
    pub remaining_path: PathBuf,

    /// Emit a progress event every N sentences (default: 1000)
    pub progress_interval: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sentences_path: PathBuf::from("sentences_data.csv"),
            target_words_path: PathBuf::from("target_words.csv"),
            unique_words_path: PathBuf::from("unique_words.csv"),
            filtered_path: PathBuf::from("filtered_sentences.csv"),
            remaining_path: PathBuf::from("remaining_sentences.csv"),
            progress_interval: 1000,
        }
    }
}

impl PipelineConfig {
    /// Same file names, rooted in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            sentences_path: dir.join(defaults.sentences_path),
            target_words_path: dir.join(defaults.target_words_path),
            unique_words_path: dir.join(defaults.unique_words_path),
            filtered_path: dir.join(defaults.filtered_path),
            remaining_path: dir.join(defaults.remaining_path),
            progress_interval: defaults.progress_interval,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.progress_interval == 0 {
            return Err("progress_interval must be > 0".to_string());
        }

        let outputs = [
            ("unique_words_path", &self.unique_words_path),
            ("filtered_path", &self.filtered_path),
            ("remaining_path", &self.remaining_path),
        ];
        for (name, path) in outputs {
            if path == &self.sentences_path || path == &self.target_words_path {
                return Err(format!(
                    "{} must not point at an input file ({})",
                    name,
                    path.display()
                ));
            }
        }
        if self.filtered_path == self.remaining_path {
            return Err("filtered_path and remaining_path must differ".to_string());
        }
        Ok(())
    }
}
