use serde_json::Value;

/// One cell slot of a normalized row.
///
/// `Missing` is distinct from a JSON null: a short source row simply has no
/// value at that column, while `null` is a value the query produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Value(Value),
}

impl CellValue {
    /// The display-text contract shared by every rendering path:
    ///
    /// - `Missing` → `""`
    /// - `null` → `"∅"`
    /// - strings → verbatim, no quotes
    /// - booleans and numbers → default string conversion
    /// - objects and arrays → compact JSON serialization
    pub fn display_text(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Value(value) => json_text(value),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Display text for a raw JSON value, under the same contract as
/// [`CellValue::display_text`].
pub fn json_text(value: &Value) -> String {
    match value {
        Value::Null => "∅".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// One row of a normalized table.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Cells aligned to the model's column order, exactly one per column.
    Cells(Vec<CellValue>),
    /// A source row that was not an array where one was expected; rendered
    /// as a single cell spanning the row.
    Opaque(Value),
}

impl Row {
    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        match self {
            Self::Cells(cells) => cells.get(index),
            Self::Opaque(_) => None,
        }
    }
}
