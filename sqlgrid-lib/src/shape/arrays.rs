//! Array-of-arrays form: `[[...], [...], ...]`.

use serde_json::Value;

use crate::model::{Column, ColumnKey, TableModel};

pub(super) fn decode(json: &Value) -> Option<TableModel> {
    let elements = json.as_array()?;
    if !elements.first()?.is_array() {
        return None;
    }

    // Column count is the widest row; shorter rows pad with missing cells.
    let width = elements
        .iter()
        .filter_map(Value::as_array)
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let columns: Vec<Column> = (0..width)
        .map(|index| {
            Column::new(
                ColumnKey::positional(index),
                index,
                Column::synthesized_header(index),
            )
        })
        .collect();

    let rows = elements
        .iter()
        .map(|row| super::align_row(row, width))
        .collect();

    Some(TableModel::new(columns, rows))
}
