// Panel domain models - options and the payload supplied per render
use super::series::RawSeries;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_STAT: &str = "avg";

/// How multiple series are presented. Any mode other than `combine` repeats
/// one gauge per series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MultiSeriesMode {
    Combine,
    #[default]
    Repeat,
}

impl From<String> for MultiSeriesMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "combine" => MultiSeriesMode::Combine,
            _ => MultiSeriesMode::Repeat,
        }
    }
}

impl From<MultiSeriesMode> for String {
    fn from(mode: MultiSeriesMode) -> Self {
        match mode {
            MultiSeriesMode::Combine => "combine".to_string(),
            MultiSeriesMode::Repeat => "repeat".to_string(),
        }
    }
}

fn default_stat() -> String {
    DEFAULT_STAT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeOptions {
    #[serde(default = "default_stat")]
    pub stat: String,
    #[serde(default)]
    pub multi_series_mode: MultiSeriesMode,
    /// Template, resolved through the interpolator before rendering
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Visual options (thresholds, decimals, min/max value, ...) forwarded
    /// untouched to the renderer.
    #[serde(flatten)]
    pub visual: Map<String, Value>,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            stat: default_stat(),
            multi_series_mode: MultiSeriesMode::default(),
            prefix: String::new(),
            suffix: String::new(),
            visual: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl Cell {
    /// Numeric value of the cell. Text holding a number (SQL decimals often
    /// arrive as strings) counts; booleans and nulls do not.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(text) => text.trim().parse().ok(),
            Cell::Bool(_) | Cell::Null => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

pub type Row = Vec<Cell>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

/// Payload shape of one render. On the wire this is an object carrying
/// `timeSeries` or `tableData`; time series win when both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PanelDataWire", into = "PanelDataWire")]
pub enum PanelData {
    TimeSeries(Vec<RawSeries>),
    Table(TableData),
    #[default]
    Empty,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PanelDataWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_series: Option<Vec<RawSeries>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table_data: Option<TableData>,
}

impl From<PanelDataWire> for PanelData {
    fn from(wire: PanelDataWire) -> Self {
        match (wire.time_series, wire.table_data) {
            (Some(series), _) => PanelData::TimeSeries(series),
            (None, Some(table)) => PanelData::Table(table),
            (None, None) => PanelData::Empty,
        }
    }
}

impl From<PanelData> for PanelDataWire {
    fn from(data: PanelData) -> Self {
        match data {
            PanelData::TimeSeries(series) => PanelDataWire {
                time_series: Some(series),
                table_data: None,
            },
            PanelData::Table(table) => PanelDataWire {
                time_series: None,
                table_data: Some(table),
            },
            PanelData::Empty => PanelDataWire::default(),
        }
    }
}

/// Everything the compositor needs for one render
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRequest {
    pub options: GaugeOptions,
    pub panel_data: PanelData,
    pub width: f64,
    pub height: f64,
}

impl PanelRequest {
    pub fn new(options: GaugeOptions, panel_data: PanelData, width: f64, height: f64) -> Self {
        Self {
            options,
            panel_data,
            width,
            height,
        }
    }
}
