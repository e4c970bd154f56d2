// Render domain models - what the compositor emits and what the host receives
use serde::Serialize;
use serde_json::Value;

pub const NO_DATA_MESSAGE: &str = "No time series data available";

/// How gauges share the panel area
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tiling {
    /// One gauge, full container size
    Single,
    /// Left-to-right, each cell takes `cell_percent` of the width
    Horizontal { cell_percent: f64 },
    /// Top-to-bottom, each cell takes `cell_percent` of the height
    Vertical { cell_percent: f64 },
    /// Square container: every gauge gets the full size and they overlap
    Overlapping,
}

/// One gauge to draw
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub width: f64,
    pub height: f64,
    pub tiling: Tiling,
    pub show_label: bool,
    pub prefix: String,
    pub suffix: String,
}

/// Outcome of composing a panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRender {
    Gauges(Vec<RenderDescriptor>),
    /// Time series were supplied but normalized to nothing
    Nothing,
    /// No recognizable payload at all
    NoData,
}

/// Placement of a gauge cell inside the panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "display")]
pub enum CellStyle {
    #[serde(rename = "unset")]
    Unset,
    #[serde(rename = "inline-block", rename_all = "camelCase")]
    InlineBlock { width_percent: f64, height: f64 },
    #[serde(rename = "block", rename_all = "camelCase")]
    Block { width: f64, height_percent: f64 },
}

impl CellStyle {
    pub fn for_descriptor(descriptor: &RenderDescriptor) -> Self {
        match descriptor.tiling {
            Tiling::Horizontal { cell_percent } => CellStyle::InlineBlock {
                width_percent: cell_percent,
                height: descriptor.height,
            },
            Tiling::Vertical { cell_percent } => CellStyle::Block {
                width: descriptor.width,
                height_percent: cell_percent,
            },
            Tiling::Single | Tiling::Overlapping => CellStyle::Unset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeCell {
    pub key: String,
    pub style: CellStyle,
    /// Renderer output for this gauge
    pub gauge: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Render tree handed back to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PanelView {
    Gauges { cells: Vec<GaugeCell> },
    Empty,
    Message { text: String },
}
