use serde::{Deserialize, Serialize};

/// Stable identifier for a column, used to attach persisted widths across
/// re-renders of the same payload shape.
///
/// Derived from the source field name when one exists, otherwise from the
/// zero-based positional index as `c<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn positional(index: usize) -> Self {
        Self(format!("c{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One column of a normalized table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: ColumnKey,
    /// Position in the model's column order.
    pub index: usize,
    pub header: String,
    /// Source type annotation (e.g. a Spark SQL type), when the payload
    /// carried one.
    pub type_label: Option<String>,
}

impl Column {
    pub fn new(key: ColumnKey, index: usize, header: impl Into<String>) -> Self {
        Self {
            key,
            index,
            header: header.into(),
            type_label: None,
        }
    }

    pub fn with_type_label(mut self, label: impl Into<String>) -> Self {
        self.type_label = Some(label.into());
        self
    }

    /// Synthesized header for a column with no source name: `col_<1-based>`.
    pub fn synthesized_header(index: usize) -> String {
        format!("col_{}", index + 1)
    }
}
