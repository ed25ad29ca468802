use griddom::Layout;

use super::{row_id, TableView, HEADER_ID};

/// Deferred measurement step: decide the body's height cap from laid-out
/// header and row heights. Runs after every layout pass; a model at or under
/// the visible-row threshold never gets a cap.
pub(super) fn apply(view: &mut TableView, layout: &Layout) {
    let metrics = view.metrics;

    if view.model.row_count() <= metrics.max_visible_rows {
        view.row_cap = None;
        return;
    }

    // Swallow measurement failures: a missing or zero-height rect falls
    // back to the default sizing.
    let header_height = layout
        .get(HEADER_ID)
        .map(|r| r.height)
        .filter(|h| *h > 0)
        .unwrap_or(metrics.header_height);
    let row_height = layout
        .get(&row_id(0))
        .map(|r| r.height)
        .filter(|h| *h > 0)
        .unwrap_or(metrics.row_height);

    let cap = header_height + metrics.max_visible_rows as u16 * row_height + metrics.cap_slack;

    if view.row_cap != Some(cap) {
        log::debug!(
            "capping grid at {cap} ({} rows, header {header_height}, row {row_height})",
            view.model.row_count()
        );
    }
    view.row_cap = Some(cap);
}
