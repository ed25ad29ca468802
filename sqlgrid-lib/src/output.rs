//! Top-level pipeline for one rendered output item.

use griddom::{Color, Edges, Element, ScrollState, Style};
use serde_json::Value;

use crate::error::PayloadError;
use crate::shape::normalize;
use crate::state::WidthState;
use crate::table::{ResizeState, TableView};

const ERROR_FG: Color = Color::Rgb {
    r: 224,
    g: 108,
    b: 117,
};

/// Parse the raw payload bytes of one output item. A failure here is the
/// upstream error handled before shape inference is attempted.
pub fn parse_payload(raw: &str) -> Result<Value, PayloadError> {
    Ok(serde_json::from_str(raw)?)
}

/// What one received payload renders as. Every failure mode has a visible
/// fallback; a payload never produces a blank output.
#[derive(Debug)]
pub enum OutputView {
    /// The payload normalized into a table.
    Table(TableView),
    /// No recognized table shape: pretty-printed dump of the parsed JSON.
    Raw(String),
    /// The payload was not valid JSON: short diagnostic text.
    Malformed(String),
}

impl OutputView {
    pub fn from_raw(raw: &str, widths: WidthState) -> Self {
        match parse_payload(raw) {
            Err(err) => {
                log::warn!("output payload rejected: {err}");
                Self::Malformed(format!("Unable to parse output as JSON: {err}"))
            }
            Ok(json) => Self::from_json(&json, widths),
        }
    }

    pub fn from_json(json: &Value, widths: WidthState) -> Self {
        match normalize(json) {
            Some(model) => Self::Table(TableView::new(model, widths)),
            None => Self::Raw(
                serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string()),
            ),
        }
    }

    pub fn as_table(&self) -> Option<&TableView> {
        match self {
            Self::Table(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut TableView> {
        match self {
            Self::Table(view) => Some(view),
            _ => None,
        }
    }

    /// Build the element tree for the current frame.
    pub fn element(&self, resize: &ResizeState, scroll: &ScrollState) -> Element {
        match self {
            Self::Table(view) => view.element(resize, scroll),
            Self::Raw(pretty) => Element::text(pretty.clone())
                .id("sql-output-raw")
                .padding(Edges::all(1)),
            Self::Malformed(message) => Element::text(message.clone())
                .id("sql-output-error")
                .padding(Edges::all(1))
                .style(Style::new().foreground(ERROR_FG)),
        }
    }
}
