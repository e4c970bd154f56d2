// Errors raised while composing a gauge panel
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    #[error("stat '{stat}' is not available on series '{series}'")]
    UnknownStat { stat: String, series: String },

    #[error("table data contains no value greater than zero")]
    NoPositiveValue,
}
