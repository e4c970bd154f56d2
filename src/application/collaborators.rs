// Collaborator traits consumed by the gauge compositor and panel service
use crate::domain::panel::GaugeOptions;
use crate::domain::series::{RawSeries, Series};
use crate::domain::theme::Theme;
use serde_json::Value;

/// How null datapoints are treated while summarizing a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullValueMode {
    /// Nulls are absent values and skipped
    Null,
    /// Nulls are skipped as well; kept distinct for hosts that draw gaps differently
    Ignore,
    /// Nulls count as zero
    AsZero,
}

pub trait SeriesNormalizer: Send + Sync {
    /// Summarize raw series into labelled stat bundles, one output per input
    fn normalize(&self, raw: &[RawSeries], null_mode: NullValueMode) -> Vec<Series>;
}

pub trait TemplateInterpolator {
    /// Resolve variables inside a prefix/suffix template
    fn interpolate(&self, template: &str) -> String;
}

impl<F> TemplateInterpolator for F
where
    F: Fn(&str) -> String,
{
    fn interpolate(&self, template: &str) -> String {
        self(template)
    }
}

/// Arguments for drawing a single gauge
#[derive(Debug, Clone, Copy)]
pub struct GaugeArgs<'a> {
    pub value: f64,
    pub options: &'a GaugeOptions,
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub theme: &'a Theme,
    pub width: f64,
    pub height: f64,
}

pub trait GaugeRenderer: Send + Sync {
    fn render(&self, args: GaugeArgs<'_>) -> Value;
}
