// ============================================================
// VOCABULARY EXTRACTOR USE CASE
// ============================================================
// Tokenize every sentence and save the sorted set of distinct words

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::domain::corpus::Row;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::CsvStore;
use crate::infrastructure::text::WordTokenizer;

/// What an extraction run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySummary {
    /// Sentences read from the input
    pub sentence_count: usize,

    /// Distinct words written
    pub word_count: usize,

    pub output_path: PathBuf,
}

/// Vocabulary extraction use case
pub struct VocabularyExtractor {
    store: CsvStore,
}

impl VocabularyExtractor {
    pub fn new(store: CsvStore) -> Self {
        Self { store }
    }

    /// Read sentences from `input_path`, write sorted unique words to `output_path`.
    ///
    /// Unlike the classifier, a missing or unreadable input is an error here.
    pub fn extract(&self, input_path: &Path, output_path: &Path) -> Result<VocabularySummary> {
        let sentences = self.read_sentences(input_path)?;
        let words = Self::vocabulary(sentences.iter().map(String::as_str));

        let rows: Vec<Row> = words.iter().map(|w| Row::single(w.as_str())).collect();
        self.store.save(output_path, &rows)?;

        tracing::info!("Unique words saved to {}", output_path.display());

        Ok(VocabularySummary {
            sentence_count: sentences.len(),
            word_count: words.len(),
            output_path: output_path.to_path_buf(),
        })
    }

    /// Distinct tokens across all sentences, sorted ascending
    pub fn vocabulary<'a>(sentences: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut unique_words = HashSet::new();
        for sentence in sentences {
            unique_words.extend(WordTokenizer::tokenize(sentence));
        }

        let mut sorted_words: Vec<String> = unique_words.into_iter().collect();
        sorted_words.sort_unstable();
        sorted_words
    }

    /// First field of every record; a record without one is a parse error
    fn read_sentences(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)?;

        // The csv reader skips blank lines, so find them before parsing
        if let Some(record_number) = first_blank_record(&content) {
            return Err(AppError::ParseError(format!(
                "{}: record {} has no sentence field",
                path.display(),
                record_number
            )));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut sentences = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let sentence = record.get(0).ok_or_else(|| {
                AppError::ParseError(format!(
                    "{}: record {} has no sentence field",
                    path.display(),
                    index + 1
                ))
            })?;
            sentences.push(sentence.to_string());
        }

        Ok(sentences)
    }
}

/// 1-based number of the first record that is an empty line.
///
/// Line breaks inside quoted fields do not end a record. A missing final
/// newline does not create an extra record.
fn first_blank_record(content: &str) -> Option<usize> {
    let mut record = 1usize;
    let mut line_empty = true;
    let mut in_quotes = false;

    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                line_empty = false;
            }
            '\n' if !in_quotes => {
                if line_empty {
                    return Some(record);
                }
                record += 1;
                line_empty = true;
            }
            '\r' if !in_quotes => {}
            _ => line_empty = false,
        }
    }

    None
}

impl Default for VocabularyExtractor {
    fn default() -> Self {
        Self::new(CsvStore::default())
    }
}
