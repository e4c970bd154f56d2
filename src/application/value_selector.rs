// Value selection - picks the number a gauge displays
use crate::domain::error::PanelError;
use crate::domain::panel::Row;
use crate::domain::series::Series;

/// Configured stat of a series
pub fn stat_value(series: &Series, stat: &str) -> Result<f64, PanelError> {
    series.stats.get(stat).ok_or_else(|| PanelError::UnknownStat {
        stat: stat.to_string(),
        series: series.label.clone(),
    })
}

/// First cell, scanning rows in order, whose numeric value (see
/// `Cell::as_number`) is strictly positive. Tables carry no stat bundle so
/// the configured stat is ignored.
pub fn first_positive(rows: &[Row]) -> Result<f64, PanelError> {
    rows.iter()
        .flatten()
        .filter_map(|cell| cell.as_number())
        .find(|value| *value > 0.0)
        .ok_or(PanelError::NoPositiveValue)
}
