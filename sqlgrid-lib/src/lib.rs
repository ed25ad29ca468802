//! Rendering pipeline for tabular notebook output.
//!
//! One render call per output item: [`normalize`] infers a rectangular
//! table from an untyped JSON payload, and [`TableView`] materializes it as
//! a [`griddom`] element tree with a pinned header, per-column resize
//! handles, and a row-count-based scroll cap. Column widths survive
//! re-renders through a host-persisted [`WidthState`].
//!
//! Payloads that parse but match no table shape fall back to a
//! pretty-printed dump; payloads that fail to parse fall back to a short
//! diagnostic. See [`OutputView`].

pub mod error;
pub mod model;
pub mod output;
pub mod shape;
pub mod state;
pub mod table;

pub use error::PayloadError;
pub use model::{json_text, CellValue, Column, ColumnKey, Row, TableModel};
pub use output::{parse_payload, OutputView};
pub use shape::{normalize, TableShape};
pub use state::{StateStore, WidthState};
pub use table::{GridMetrics, ResizeState, TableView, WidthChange};
