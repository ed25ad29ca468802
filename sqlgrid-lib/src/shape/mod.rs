//! Shape inference over an untyped payload.
//!
//! The recognized payload layouts form an explicit tagged union rather than
//! duck-typed fallthrough: each [`TableShape`] variant has one decoder that
//! either produces a [`TableModel`] or reports a miss, and the variants are
//! tried in one fixed priority order.

mod arrays;
mod columns;
mod fields;
mod objects;

use serde_json::Value;

use crate::model::{CellValue, Row, TableModel};

/// A recognized payload layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// `{schema: {fields: [{name, type?}, ...]}, data|rows: [...]}`
    SchemaFields,
    /// `{schema: {columns: ["a", "b", ...]}, data|rows: [...]}`
    SchemaColumns,
    /// `[{...}, {...}, ...]`
    ObjectRows,
    /// `[[...], [...], ...]`
    ArrayRows,
}

impl TableShape {
    /// Canonical inference order; first match wins.
    pub const PRIORITY: [TableShape; 4] = [
        TableShape::SchemaFields,
        TableShape::SchemaColumns,
        TableShape::ObjectRows,
        TableShape::ArrayRows,
    ];

    /// Try to decode `json` as this shape.
    pub fn decode(self, json: &Value) -> Option<TableModel> {
        match self {
            Self::SchemaFields => fields::decode(json),
            Self::SchemaColumns => columns::decode(json),
            Self::ObjectRows => objects::decode(json),
            Self::ArrayRows => arrays::decode(json),
        }
    }
}

/// Infer a table from an arbitrary parsed payload, or report that none of
/// the recognized shapes matched.
pub fn normalize(json: &Value) -> Option<TableModel> {
    for shape in TableShape::PRIORITY {
        if let Some(model) = shape.decode(json) {
            log::debug!(
                "payload matched {:?}: {} columns, {} rows",
                shape,
                model.column_count(),
                model.row_count()
            );
            return Some(model);
        }
    }
    log::debug!("payload matched no table shape");
    None
}

/// The `data` array of a schema-shaped payload, with `rows` as an accepted
/// alias.
fn data_rows(json: &Value) -> Option<&Vec<Value>> {
    json.get("data")
        .and_then(Value::as_array)
        .or_else(|| json.get("rows").and_then(Value::as_array))
}

/// Align one source row to `width` columns: short rows pad with missing
/// cells, long rows drop the excess, and a non-array row stays opaque (it
/// renders as a single spanning cell).
fn align_row(source: &Value, width: usize) -> Row {
    let Some(values) = source.as_array() else {
        return Row::Opaque(source.clone());
    };

    let mut cells: Vec<CellValue> = values
        .iter()
        .take(width)
        .cloned()
        .map(CellValue::from)
        .collect();
    cells.resize(width, CellValue::Missing);

    Row::Cells(cells)
}
