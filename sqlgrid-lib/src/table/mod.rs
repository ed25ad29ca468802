//! The table materializer: builds the element tree for a normalized model,
//! measures the row-count cap after layout, and tracks resize gestures.

mod build;
mod measure;
mod resize;

pub use resize::{ResizeState, WidthChange};

use griddom::{Element, Layout, ScrollState};

use crate::model::{ColumnKey, TableModel};
use crate::state::WidthState;

/// Element id of the grid wrapper (horizontal scroll container).
pub const GRID_ID: &str = "sql-grid";
/// Element id of the pinned header row.
pub const HEADER_ID: &str = "sql-grid-header";
/// Element id of the vertically scrolled body.
pub const BODY_ID: &str = "sql-grid-body";

/// Element data key carrying a resize handle's column key.
pub(crate) const COL_KEY_DATA: &str = "col-key";

pub(crate) fn head_cell_id(key: &ColumnKey) -> String {
    format!("sql-grid-head-{key}")
}

pub(crate) fn handle_id(key: &ColumnKey) -> String {
    format!("sql-grid-handle-{key}")
}

pub(crate) fn row_id(index: usize) -> String {
    format!("sql-grid-row-{index}")
}

pub(crate) fn cell_id(row: usize, col: usize) -> String {
    format!("sql-grid-cell-{row}-{col}")
}

/// Sizing knobs for the grid. The defaults carry the renderer's canonical
/// pixel-flavored values; cell-based hosts (terminals) use [`compact`].
///
/// [`compact`]: GridMetrics::compact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    /// Narrowest a column can be dragged, and the threshold below which a
    /// persisted width is ignored.
    pub min_col_width: u16,
    /// Header height assumed when measurement fails.
    pub header_height: u16,
    /// Row height assumed when measurement fails.
    pub row_height: u16,
    /// Row count above which the body gets a height cap.
    pub max_visible_rows: usize,
    /// Extra height added on top of the capped rows.
    pub cap_slack: u16,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            min_col_width: 24,
            header_height: 32,
            row_height: 28,
            max_visible_rows: 20,
            cap_slack: 8,
        }
    }
}

impl GridMetrics {
    /// Terminal-cell sizing: one-cell rows, one-cell slack for the
    /// horizontal scrollbar.
    pub fn compact() -> Self {
        Self {
            min_col_width: 6,
            header_height: 1,
            row_height: 1,
            max_visible_rows: 20,
            cap_slack: 1,
        }
    }
}

/// One normalized table plus everything needed to materialize it.
///
/// Rendering is two-phase: [`element`] builds the structure for the current
/// frame, and after the layout pass [`measure`] reads laid-out heights and
/// decides the row-count cap applied on subsequent frames.
///
/// [`element`]: TableView::element
/// [`measure`]: TableView::measure
#[derive(Debug)]
pub struct TableView {
    model: TableModel,
    widths: WidthState,
    metrics: GridMetrics,
    row_cap: Option<u16>,
}

impl TableView {
    pub fn new(model: TableModel, widths: WidthState) -> Self {
        Self {
            model,
            widths,
            metrics: GridMetrics::default(),
            row_cap: None,
        }
    }

    pub fn with_metrics(mut self, metrics: GridMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn widths(&self) -> &WidthState {
        &self.widths
    }

    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    /// Cap decided by the last measure pass, when one applies.
    pub fn row_cap(&self) -> Option<u16> {
        self.row_cap
    }

    /// Record a completed resize so the next build picks it up.
    pub fn apply_width(&mut self, change: &WidthChange) {
        self.widths
            .set_width(change.key.clone(), change.width);
    }

    /// Phase 1: build the element tree for the current frame.
    pub fn element(&self, resize: &ResizeState, scroll: &ScrollState) -> Element {
        build::build(self, resize, scroll)
    }

    /// Phase 2: after layout, measure header/row heights and set or clear
    /// the row-count cap. Missing or degenerate measurements fall back to
    /// the metrics defaults; this never fails.
    pub fn measure(&mut self, layout: &Layout) {
        measure::apply(self, layout);
    }
}
