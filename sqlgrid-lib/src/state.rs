//! Persisted per-output state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ColumnKey;

/// Column widths persisted by the host across re-renders and reloads of one
/// output item. The renderer reads it at build time and the host rewrites
/// entries when a resize gesture completes; entries are never deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidthState {
    #[serde(default)]
    pub col_widths: HashMap<ColumnKey, u16>,
}

impl WidthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self, key: &ColumnKey) -> Option<u16> {
        self.col_widths.get(key).copied()
    }

    pub fn set_width(&mut self, key: ColumnKey, width: u16) {
        self.col_widths.insert(key, width);
    }

    pub fn is_empty(&self) -> bool {
        self.col_widths.is_empty()
    }
}

/// Host persistence seam, mirroring a notebook runtime's per-output
/// `getState`/`setState` blob. Implementations must tolerate missing or
/// unreadable state by returning `None`.
pub trait StateStore {
    fn load(&self) -> Option<WidthState>;
    fn save(&self, state: &WidthState);
}
