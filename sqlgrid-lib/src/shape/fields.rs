//! Field-list schema form: `{schema: {fields: [{name, type?}]}, data|rows: [...]}`.

use serde_json::Value;

use crate::model::{json_text, Column, ColumnKey, TableModel};

pub(super) fn decode(json: &Value) -> Option<TableModel> {
    let fields = json.get("schema")?.get("fields")?.as_array()?;
    let data = super::data_rows(json)?;

    let columns: Vec<Column> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let name = field.get("name").and_then(Value::as_str);
            let key = name
                .map(ColumnKey::new)
                .unwrap_or_else(|| ColumnKey::positional(index));
            let header = name
                .map(str::to_string)
                .unwrap_or_else(|| Column::synthesized_header(index));

            let mut column = Column::new(key, index, header);
            if let Some(label) = type_label(field) {
                column = column.with_type_label(label);
            }
            column
        })
        .collect();

    let rows = data
        .iter()
        .map(|row| super::align_row(row, columns.len()))
        .collect();

    Some(TableModel::new(columns, rows))
}

/// Stringified `type` annotation: plain strings kept as-is, structured types
/// (Spark struct/map/array descriptors) serialized to JSON.
fn type_label(field: &Value) -> Option<String> {
    match field.get("type")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(json_text(other)),
    }
}
