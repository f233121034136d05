// ============================================================
// SENTENCE CLASSIFIER USE CASE
// ============================================================
// Split a sentence corpus by whole-word presence of target words

use std::path::Path;

use regex::Regex;

use crate::domain::corpus::{ClassifyOutcome, PartitionResult, Row};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::CsvStore;

/// Target words compiled as `\b<word>\b` patterns, in target-file order.
///
/// Words are used as raw regex syntax and are not lowercased; only the
/// sentence is lowercased before matching. A target word written with
/// capitals therefore never matches.
#[derive(Debug, Clone)]
pub struct TargetMatcher {
    patterns: Vec<(String, Regex)>,
}

impl TargetMatcher {
    /// Compile every target word up front
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let patterns = words
            .into_iter()
            .map(|word| {
                Regex::new(&format!(r"\b{}\b", word))
                    .map(|re| (word.to_string(), re))
                    .map_err(|e| {
                        AppError::ValidationError(format!(
                            "target word {:?} is not a valid pattern: {}",
                            word, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// One target word per row, taken from the first field
    pub fn from_rows(rows: &[Row]) -> Result<Self> {
        Self::new(rows.iter().filter_map(Row::first_field))
    }

    /// First target word found in the lowercased sentence
    pub fn first_match(&self, sentence: &str) -> Option<&str> {
        let lowered = sentence.to_lowercase();
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(&lowered))
            .map(|(word, _)| word.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.patterns.len()
    }
}

/// Sentence classification use case
pub struct SentenceClassifier {
    store: CsvStore,
    progress_interval: usize,
}

impl SentenceClassifier {
    pub fn new(store: CsvStore) -> Self {
        Self {
            store,
            progress_interval: 1000,
        }
    }

    /// Emit a progress event every `interval` sentences
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Load targets and sentences, write both partitions, re-save the corpus.
    ///
    /// Missing or empty inputs end the run early with nothing written.
    /// When no sentence matches, the partition files are left untouched.
    pub fn classify(
        &self,
        target_path: &Path,
        sentence_path: &Path,
        filtered_out_path: &Path,
        remaining_out_path: &Path,
    ) -> Result<ClassifyOutcome> {
        let target_words = self.store.load(target_path);
        if target_words.is_empty() {
            tracing::warn!("No target words in {}, skipping", target_path.display());
            return Ok(ClassifyOutcome::TargetsUnavailable);
        }

        let sentences_data = self.store.load(sentence_path);
        if sentences_data.is_empty() {
            tracing::warn!("No sentences in {}, skipping", sentence_path.display());
            return Ok(ClassifyOutcome::CorpusUnavailable);
        }

        let matcher = TargetMatcher::from_rows(&target_words)?;
        let partition = self.partition(&matcher, &sentences_data);

        let outcome = if partition.has_matches() {
            self.store.save(filtered_out_path, &partition.filtered)?;
            tracing::info!("Filtered data saved in {}.", filtered_out_path.display());

            self.store.save(remaining_out_path, &partition.remaining)?;
            tracing::info!("Remaining data saved in {}.", remaining_out_path.display());

            ClassifyOutcome::Partitioned {
                filtered: partition.filtered.len(),
                remaining: partition.remaining.len(),
            }
        } else {
            tracing::warn!("No data found matching the criteria.");
            ClassifyOutcome::NoMatches {
                total: partition.total(),
            }
        };

        self.store.save(sentence_path, &sentences_data)?;
        tracing::info!("Original dataset saved in {}.", sentence_path.display());

        Ok(outcome)
    }

    /// Route each row to `filtered` on its first matching target word, else `remaining`
    pub fn partition(&self, matcher: &TargetMatcher, sentences: &[Row]) -> PartitionResult {
        let total = sentences.len();
        let mut result = PartitionResult::default();

        for (i, row) in sentences.iter().enumerate() {
            let sentence = row.first_field().unwrap_or("");
            match matcher.first_match(sentence) {
                Some(word) => {
                    tracing::trace!(target_word = word, row = i + 1, "matched");
                    result.filtered.push(row.clone());
                }
                None => result.remaining.push(row.clone()),
            }

            if (i + 1) % self.progress_interval == 0 {
                tracing::debug!("Processing Sentences: {}/{}", i + 1, total);
            }
        }

        tracing::debug!(
            "Processed {} sentences against {} target words: {} filtered, {} remaining",
            total,
            matcher.len(),
            result.filtered.len(),
            result.remaining.len()
        );

        result
    }
}

impl Default for SentenceClassifier {
    fn default() -> Self {
        Self::new(CsvStore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct Paths {
        _dir: tempfile::TempDir,
        targets: PathBuf,
        sentences: PathBuf,
        filtered: PathBuf,
        remaining: PathBuf,
    }

    fn setup(targets: &str, sentences: &str) -> Paths {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths {
            targets: dir.path().join("target_words.csv"),
            sentences: dir.path().join("sentences_data.csv"),
            filtered: dir.path().join("filtered_sentences.csv"),
            remaining: dir.path().join("remaining_sentences.csv"),
            _dir: dir,
        };
        fs::write(&paths.targets, targets).unwrap();
        fs::write(&paths.sentences, sentences).unwrap();
        paths
    }

    fn run(paths: &Paths) -> ClassifyOutcome {
        SentenceClassifier::default()
            .classify(
                &paths.targets,
                &paths.sentences,
                &paths.filtered,
                &paths.remaining,
            )
            .unwrap()
    }

    fn first_fields(path: &Path) -> Vec<String> {
        CsvStore::new()
            .load(path)
            .iter()
            .filter_map(|row| row.first_field().map(str::to_string))
            .collect()
    }

    fn rows(sentences: &[&str]) -> Vec<Row> {
        sentences.iter().map(|s| Row::single(*s)).collect()
    }

    #[test]
    fn test_word_boundary_match() {
        let matcher = TargetMatcher::new(["cat"]).unwrap();
        assert_eq!(matcher.first_match("the cat sat"), Some("cat"));
        assert_eq!(matcher.first_match("category error"), None);
        assert_eq!(matcher.first_match("a cat, then"), Some("cat"));
    }

    #[test]
    fn test_sentence_is_lowercased() {
        let matcher = TargetMatcher::new(["cat"]).unwrap();
        assert_eq!(matcher.first_match("The CAT sat"), Some("cat"));
    }

    #[test]
    fn test_capitalized_target_never_matches() {
        let matcher = TargetMatcher::new(["Cat"]).unwrap();
        assert_eq!(matcher.first_match("the cat sat"), None);
        assert_eq!(matcher.first_match("The Cat sat"), None);
    }

    #[test]
    fn test_target_word_is_raw_pattern() {
        let matcher = TargetMatcher::new(["c.t"]).unwrap();
        assert_eq!(matcher.first_match("the cot"), Some("c.t"));
    }

    #[test]
    fn test_invalid_pattern_is_validation_error() {
        let result = TargetMatcher::new(["cat", "(unclosed"]);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_first_target_wins() {
        let matcher = TargetMatcher::new(["dog", "cat"]).unwrap();
        assert_eq!(matcher.first_match("cat chases dog"), Some("dog"));
    }

    #[test]
    fn test_partition_complete_and_ordered() {
        let matcher = TargetMatcher::new(["cat", "dog"]).unwrap();
        let corpus = rows(&[
            "the cat sat",
            "category error",
            "a dog ran",
            "nothing here",
            "cat and dog",
        ]);

        let result = SentenceClassifier::default().partition(&matcher, &corpus);

        assert_eq!(
            result.filtered,
            rows(&["the cat sat", "a dog ran", "cat and dog"])
        );
        assert_eq!(result.remaining, rows(&["category error", "nothing here"]));
        assert_eq!(result.total(), corpus.len());
    }

    #[test]
    fn test_partition_keeps_extra_fields() {
        let matcher = TargetMatcher::new(["cat"]).unwrap();
        let corpus = vec![Row::new(vec!["the cat".to_string(), "label-1".to_string()])];

        let result = SentenceClassifier::default().partition(&matcher, &corpus);

        assert_eq!(result.filtered, corpus);
    }

    #[test]
    fn test_classify_writes_both_partitions() {
        let paths = setup(
            "cat\ndog\n",
            "The cat sat\nCategory error\nA dog ran\nNothing here\n",
        );

        let outcome = run(&paths);

        assert_eq!(
            outcome,
            ClassifyOutcome::Partitioned {
                filtered: 2,
                remaining: 2
            }
        );
        assert_eq!(first_fields(&paths.filtered), vec!["The cat sat", "A dog ran"]);
        assert_eq!(
            first_fields(&paths.remaining),
            vec!["Category error", "Nothing here"]
        );
        assert_eq!(
            first_fields(&paths.sentences),
            vec!["The cat sat", "Category error", "A dog ran", "Nothing here"]
        );
    }

    #[test]
    fn test_empty_targets_write_nothing() {
        let paths = setup("", "the cat sat\n");

        let outcome = run(&paths);

        assert_eq!(outcome, ClassifyOutcome::TargetsUnavailable);
        assert!(!paths.filtered.exists());
        assert!(!paths.remaining.exists());
        assert_eq!(fs::read_to_string(&paths.sentences).unwrap(), "the cat sat\n");
    }

    #[test]
    fn test_missing_targets_write_nothing() {
        let paths = setup("cat\n", "the cat sat\n");
        fs::remove_file(&paths.targets).unwrap();

        assert_eq!(run(&paths), ClassifyOutcome::TargetsUnavailable);
        assert!(!paths.filtered.exists());
        assert!(!paths.remaining.exists());
    }

    #[test]
    fn test_empty_corpus_writes_nothing() {
        let paths = setup("cat\n", "\n\n");

        assert_eq!(run(&paths), ClassifyOutcome::CorpusUnavailable);
        assert!(!paths.filtered.exists());
        assert!(!paths.remaining.exists());
        assert_eq!(fs::read_to_string(&paths.sentences).unwrap(), "\n\n");
    }

    #[test]
    fn test_no_matches_skips_partition_files() {
        let paths = setup("zebra\n", "the cat sat\na dog ran\n");

        let outcome = run(&paths);

        assert_eq!(outcome, ClassifyOutcome::NoMatches { total: 2 });
        assert!(!outcome.wrote_partitions());
        assert!(!paths.filtered.exists());
        assert!(!paths.remaining.exists());
        // corpus still re-saved
        assert_eq!(
            fs::read_to_string(&paths.sentences).unwrap(),
            "the cat sat\r\na dog ran\r\n"
        );
    }

    #[test]
    fn test_rerun_on_resaved_corpus_is_stable() {
        let paths = setup(
            "cat\n",
            "\"the cat, quoted\",x\nno match\n\"plain cat\"\n",
        );

        run(&paths);
        let first_filtered = CsvStore::new().load(&paths.filtered);
        let first_remaining = CsvStore::new().load(&paths.remaining);

        run(&paths);
        assert_eq!(CsvStore::new().load(&paths.filtered), first_filtered);
        assert_eq!(CsvStore::new().load(&paths.remaining), first_remaining);
        assert_eq!(
            first_fields(&paths.filtered),
            vec!["the cat, quoted", "plain cat"]
        );
    }

    #[test]
    fn test_invalid_target_pattern_is_error() {
        let paths = setup("(cat\n", "the cat sat\n");

        let result = SentenceClassifier::default().classify(
            &paths.targets,
            &paths.sentences,
            &paths.filtered,
            &paths.remaining,
        );

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(!paths.filtered.exists());
    }
}
