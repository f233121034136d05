// ============================================================
// CSV ROW
// ============================================================
// One CSV record; only the first field carries meaning

/// A single CSV record, fields in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Convenience for single-field rows (one word or one sentence)
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            fields: vec![value.into()],
        }
    }

    /// The sentence or word this row stands for
    pub fn first_field(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Zero fields, or exactly one empty field
    pub fn is_empty(&self) -> bool {
        match self.fields.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }
}
