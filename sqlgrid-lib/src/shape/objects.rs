//! Array-of-objects form: `[{...}, {...}, ...]`.

use serde_json::Value;

use crate::model::{CellValue, Column, ColumnKey, Row, TableModel};

pub(super) fn decode(json: &Value) -> Option<TableModel> {
    let elements = json.as_array()?;
    if !elements.first()?.is_object() {
        return None;
    }

    // Column order is the union of keys across every row, first seen first.
    let mut names: Vec<&str> = Vec::new();
    for element in elements {
        let Some(object) = element.as_object() else {
            continue;
        };
        for key in object.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key);
            }
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(index, name)| Column::new(ColumnKey::new(*name), index, *name))
        .collect();

    let rows = elements
        .iter()
        .map(|element| match element.as_object() {
            Some(object) => Row::Cells(
                names
                    .iter()
                    .map(|name| {
                        object
                            .get(*name)
                            .cloned()
                            .map_or(CellValue::Missing, CellValue::from)
                    })
                    .collect(),
            ),
            None => Row::Opaque(element.clone()),
        })
        .collect();

    Some(TableModel::new(columns, rows))
}
