// ============================================================
// CSV STORE
// ============================================================
// Load and save headerless CSV files as ordered rows

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};

use crate::domain::corpus::Row;
use crate::domain::error::{AppError, Result};

/// Reads and writes corpus files
#[derive(Debug, Clone)]
pub struct CsvStore {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values (default: false, fields round-trip unchanged)
    trim: bool,
}

impl Default for CsvStore {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl CsvStore {
    /// Create a new store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Load rows, reporting failures in the log only.
    ///
    /// A missing or malformed file yields an empty Vec, same as a file with
    /// no usable rows. Callers treat empty as "nothing to do".
    pub fn load(&self, path: &Path) -> Vec<Row> {
        match self.try_load(path) {
            Ok(rows) => rows,
            Err(AppError::NotFound(_)) => {
                tracing::error!("Error: {} not found.", path.display());
                Vec::new()
            }
            Err(AppError::ParseError(e)) => {
                tracing::error!(
                    "Error: {} is empty or not properly formatted. ({})",
                    path.display(),
                    e
                );
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Error: failed to read {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Load rows, keeping the failure kind
    pub fn try_load(&self, path: &Path) -> Result<Vec<Row>> {
        let content = self.read_with_encoding_detection(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string, dropping empty rows
    pub fn parse_content(&self, content: &str) -> Result<Vec<Row>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            let row = Row::new(record.iter().map(str::to_string).collect());
            if !row.is_empty() {
                rows.push(row);
            }
        }

        Ok(rows)
    }

    /// Write rows, replacing any existing file
    pub fn save(&self, path: &Path, rows: &[Row]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::CRLF)
            .flexible(true)
            .from_path(path)?;

        for row in rows {
            writer.write_record(&row.fields)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Read file as UTF-8, falling back to lossy decoding
    fn read_with_encoding_detection(&self, path: &Path) -> Result<String> {
        let buffer = fs::read(path)?;

        match String::from_utf8(buffer) {
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!(
                    "{} is not valid UTF-8, replacing invalid sequences",
                    path.display()
                );
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&[&str]]) -> Vec<Row> {
        values
            .iter()
            .map(|fields| Row::new(fields.iter().map(|f| f.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_parse_headerless_csv() {
        let content = "the cat sat\n\"a dog, barking\",extra\n";
        let parsed = CsvStore::new().parse_content(content).unwrap();

        assert_eq!(
            parsed,
            rows(&[&["the cat sat"], &["a dog, barking", "extra"]])
        );
    }

    #[test]
    fn test_parse_drops_empty_rows() {
        let content = "first\n\n\"\"\nsecond\n";
        let parsed = CsvStore::new().parse_content(content).unwrap();

        assert_eq!(parsed, rows(&[&["first"], &["second"]]));
    }

    #[test]
    fn test_parse_keeps_whitespace_by_default() {
        let parsed = CsvStore::new().parse_content("  padded  \n").unwrap();
        assert_eq!(parsed[0].first_field(), Some("  padded  "));

        let trimmed = CsvStore::new()
            .with_trim(true)
            .parse_content("  padded  \n")
            .unwrap();
        assert_eq!(trimmed[0].first_field(), Some("padded"));
    }

    #[test]
    fn test_custom_delimiter() {
        let parsed = CsvStore::new()
            .with_delimiter(b';')
            .parse_content("a;b\n")
            .unwrap();
        assert_eq!(parsed, rows(&[&["a", "b"]]));
    }

    #[test]
    fn test_try_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = CsvStore::new().try_load(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CsvStore::new().load(&dir.path().join("missing.csv")).is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let original = rows(&[
            &["plain sentence"],
            &["has, comma", "second field"],
            &["has \"quotes\""],
            &["multi\nline"],
        ]);

        let store = CsvStore::new();
        store.save(&path, &original).unwrap();
        assert_eq!(store.load(&path), original);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let store = CsvStore::new();

        store.save(&path, &rows(&[&["one"], &["two"], &["three"]])).unwrap();
        store.save(&path, &rows(&[&["only"]])).unwrap();

        assert_eq!(store.load(&path), rows(&[&["only"]]));
        assert_eq!(fs::read_to_string(&path).unwrap(), "only\r\n");
    }

    #[test]
    fn test_lossy_fallback_for_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        fs::write(&path, b"caf\xe9 au lait\n").unwrap();

        let loaded = CsvStore::new().load(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].first_field(), Some("caf\u{FFFD} au lait"));
    }
}
