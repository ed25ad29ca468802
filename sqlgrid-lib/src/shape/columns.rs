//! Column-list schema form: `{schema: {columns: ["a", ...]}, data|rows: [...]}`.

use serde_json::Value;

use crate::model::{Column, ColumnKey, TableModel};

pub(super) fn decode(json: &Value) -> Option<TableModel> {
    let names = json.get("schema")?.get("columns")?.as_array()?;
    let data = super::data_rows(json)?;

    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(index, name)| match name.as_str() {
            Some(name) => Column::new(ColumnKey::new(name), index, name),
            None => Column::new(
                ColumnKey::positional(index),
                index,
                Column::synthesized_header(index),
            ),
        })
        .collect();

    let rows = data
        .iter()
        .map(|row| super::align_row(row, columns.len()))
        .collect();

    Some(TableModel::new(columns, rows))
}
