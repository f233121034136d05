// ============================================================
// PARTITION RESULT
// ============================================================
// Outcome of splitting a corpus by target-word presence

use super::Row;

/// Disjoint split of a corpus, each side in corpus order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionResult {
    /// Rows containing at least one target word
    pub filtered: Vec<Row>,

    /// Rows containing none
    pub remaining: Vec<Row>,
}

impl PartitionResult {
    pub fn total(&self) -> usize {
        self.filtered.len() + self.remaining.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.filtered.is_empty()
    }
}

/// What a classification run ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyOutcome {
    /// Target word file missing, empty or malformed; nothing written
    TargetsUnavailable,

    /// Sentence file missing, empty or malformed; nothing written
    CorpusUnavailable,

    /// No sentence matched; partition files not written, corpus re-saved
    NoMatches { total: usize },

    /// Both partition files written, corpus re-saved
    Partitioned { filtered: usize, remaining: usize },
}

impl ClassifyOutcome {
    /// Whether the partition files were produced
    pub fn wrote_partitions(&self) -> bool {
        matches!(self, ClassifyOutcome::Partitioned { .. })
    }
}

impl std::fmt::Display for ClassifyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyOutcome::TargetsUnavailable => write!(f, "skipped (no target words)"),
            ClassifyOutcome::CorpusUnavailable => write!(f, "skipped (no sentences)"),
            ClassifyOutcome::NoMatches { total } => {
                write!(f, "no matches in {} sentences", total)
            }
            ClassifyOutcome::Partitioned {
                filtered,
                remaining,
            } => write!(f, "{} filtered, {} remaining", filtered, remaining),
        }
    }
}
