use super::{Column, Row};

/// A normalized rectangular table: ordered columns plus ordered rows.
///
/// Invariant: every [`Row::Cells`] row holds exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableModel {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl TableModel {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        debug_assert!(
            rows.iter().all(|row| match row {
                Row::Cells(cells) => cells.len() == columns.len(),
                Row::Opaque(_) => true,
            }),
            "rows must be aligned to the column count"
        );
        Self { columns, rows }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
