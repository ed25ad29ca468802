//! The normalized table model produced by shape inference.

mod column;
mod row;
mod table;

pub use column::{Column, ColumnKey};
pub use row::{json_text, CellValue, Row};
pub use table::TableModel;
