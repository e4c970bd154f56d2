// Gauge compositor - decides how many gauges to draw, with which values and sizes
use crate::application::collaborators::{NullValueMode, SeriesNormalizer, TemplateInterpolator};
use crate::application::layout_engine::{self, Layout};
use crate::application::series_aggregator;
use crate::application::value_selector;
use crate::domain::error::PanelError;
use crate::domain::panel::{GaugeOptions, MultiSeriesMode, PanelData, PanelRequest, TableData};
use crate::domain::render::{PanelRender, RenderDescriptor, Tiling};
use crate::domain::series::Series;
use std::num::NonZeroUsize;
use std::sync::Arc;

const TABLE_KEY: &str = "table";

/// Prefix and suffix after interpolation
struct Affixes {
    prefix: String,
    suffix: String,
}

impl Affixes {
    fn resolve(options: &GaugeOptions, interpolator: &dyn TemplateInterpolator) -> Self {
        Self {
            prefix: interpolator.interpolate(&options.prefix),
            suffix: interpolator.interpolate(&options.suffix),
        }
    }
}

#[derive(Clone)]
pub struct GaugeCompositor {
    normalizer: Arc<dyn SeriesNormalizer>,
}

impl GaugeCompositor {
    pub fn new(normalizer: Arc<dyn SeriesNormalizer>) -> Self {
        Self { normalizer }
    }

    /// Compose one render. Payload shapes are checked in priority order:
    /// time series, then table data, then nothing.
    pub fn compose(
        &self,
        request: &PanelRequest,
        interpolator: &dyn TemplateInterpolator,
    ) -> Result<PanelRender, PanelError> {
        match &request.panel_data {
            PanelData::TimeSeries(raw) => {
                let series = self.normalizer.normalize(raw, NullValueMode::Null);
                tracing::debug!(
                    "Normalized {} raw series into {} series",
                    raw.len(),
                    series.len()
                );

                match series.len() {
                    0 => Ok(PanelRender::Nothing),
                    1 => self.single_gauge(request, &series[0], interpolator),
                    _ => self.multiple_gauges(request, series, interpolator),
                }
            }
            PanelData::Table(table) => self.table_gauge(request, table, interpolator),
            PanelData::Empty => {
                tracing::debug!("Panel has neither time series nor table data");
                Ok(PanelRender::NoData)
            }
        }
    }

    fn multiple_gauges(
        &self,
        request: &PanelRequest,
        mut series: Vec<Series>,
        interpolator: &dyn TemplateInterpolator,
    ) -> Result<PanelRender, PanelError> {
        let options = &request.options;

        if options.multi_series_mode == MultiSeriesMode::Combine {
            if let Some((first, rest)) = series.split_first() {
                let combined = series_aggregator::combine(first, rest);
                series = combined;
            }
        }

        let Some(count) = NonZeroUsize::new(series.len()) else {
            return Ok(PanelRender::Nothing);
        };
        let Layout {
            tiling,
            gauge_width,
            gauge_height,
        } = layout_engine::layout(request.width, request.height, count);

        tracing::debug!(
            "Laying out {} gauges as {:?} at {}x{}",
            count,
            tiling,
            gauge_width,
            gauge_height
        );

        let affixes = Affixes::resolve(options, interpolator);
        let descriptors = series
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                Ok(RenderDescriptor {
                    key: format!("{}-{}", s.label, index),
                    value: value_selector::stat_value(&s, &options.stat)?,
                    label: s.label,
                    width: gauge_width,
                    height: gauge_height,
                    tiling,
                    show_label: true,
                    prefix: affixes.prefix.clone(),
                    suffix: affixes.suffix.clone(),
                })
            })
            .collect::<Result<Vec<_>, PanelError>>()?;

        Ok(PanelRender::Gauges(descriptors))
    }

    fn single_gauge(
        &self,
        request: &PanelRequest,
        series: &Series,
        interpolator: &dyn TemplateInterpolator,
    ) -> Result<PanelRender, PanelError> {
        let value = value_selector::stat_value(series, &request.options.stat)?;
        let affixes = Affixes::resolve(&request.options, interpolator);

        Ok(PanelRender::Gauges(vec![full_size(
            request,
            series.label.clone(),
            series.label.clone(),
            value,
            affixes,
        )]))
    }

    fn table_gauge(
        &self,
        request: &PanelRequest,
        table: &TableData,
        interpolator: &dyn TemplateInterpolator,
    ) -> Result<PanelRender, PanelError> {
        let value = value_selector::first_positive(&table.rows)?;
        let affixes = Affixes::resolve(&request.options, interpolator);

        Ok(PanelRender::Gauges(vec![full_size(
            request,
            TABLE_KEY.to_string(),
            String::new(),
            value,
            affixes,
        )]))
    }
}

fn full_size(
    request: &PanelRequest,
    key: String,
    label: String,
    value: f64,
    affixes: Affixes,
) -> RenderDescriptor {
    RenderDescriptor {
        key,
        label,
        value,
        width: request.width,
        height: request.height,
        tiling: Tiling::Single,
        show_label: false,
        prefix: affixes.prefix,
        suffix: affixes.suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::panel::Cell;
    use crate::domain::series::{RawSeries, StatBundle};
    use std::sync::Mutex;

    /// Returns a fixed set of series and records the null mode it was asked for
    struct FixedNormalizer {
        series: Vec<Series>,
        requested_mode: Mutex<Option<NullValueMode>>,
    }

    impl FixedNormalizer {
        fn new(series: Vec<Series>) -> Arc<Self> {
            Arc::new(Self {
                series,
                requested_mode: Mutex::new(None),
            })
        }
    }

    impl SeriesNormalizer for FixedNormalizer {
        fn normalize(&self, _raw: &[RawSeries], null_mode: NullValueMode) -> Vec<Series> {
            *self.requested_mode.lock().unwrap() = Some(null_mode);
            self.series.clone()
        }
    }

    fn series(label: &str, avg: f64) -> Series {
        let stats: StatBundle = [("total", avg * 2.0), ("min", 0.0), ("max", avg), ("avg", avg)]
            .into_iter()
            .collect();
        Series::new(label, stats)
    }

    fn request(options: GaugeOptions, panel_data: PanelData, width: f64, height: f64) -> PanelRequest {
        PanelRequest::new(options, panel_data, width, height)
    }

    fn time_series() -> PanelData {
        PanelData::TimeSeries(vec![RawSeries::new("ignored", vec![])])
    }

    fn identity(template: &str) -> String {
        template.to_string()
    }

    fn gauges(render: PanelRender) -> Vec<RenderDescriptor> {
        match render {
            PanelRender::Gauges(descriptors) => descriptors,
            other => panic!("expected gauges, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_normalization_renders_nothing() {
        let normalizer = FixedNormalizer::new(vec![]);
        let compositor = GaugeCompositor::new(normalizer.clone());

        let render = compositor
            .compose(
                &request(GaugeOptions::default(), PanelData::TimeSeries(vec![]), 300.0, 100.0),
                &identity,
            )
            .unwrap();

        assert_eq!(render, PanelRender::Nothing);
        assert_eq!(
            *normalizer.requested_mode.lock().unwrap(),
            Some(NullValueMode::Null)
        );
    }

    #[test]
    fn test_missing_payload_renders_no_data() {
        let compositor = GaugeCompositor::new(FixedNormalizer::new(vec![series("a", 1.0)]));
        let render = compositor
            .compose(
                &request(GaugeOptions::default(), PanelData::Empty, 300.0, 100.0),
                &identity,
            )
            .unwrap();

        assert_eq!(render, PanelRender::NoData);
    }

    #[test]
    fn test_single_series_uses_full_size_and_configured_stat() {
        let compositor = GaugeCompositor::new(FixedNormalizer::new(vec![series("cpu", 4.0)]));
        let options = GaugeOptions {
            stat: "total".to_string(),
            ..GaugeOptions::default()
        };

        let descriptors = gauges(
            compositor
                .compose(&request(options, time_series(), 300.0, 100.0), &identity)
                .unwrap(),
        );

        assert_eq!(descriptors.len(), 1);
        let gauge = &descriptors[0];
        assert_eq!(gauge.value, 8.0);
        assert_eq!((gauge.width, gauge.height), (300.0, 100.0));
        assert_eq!(gauge.tiling, Tiling::Single);
        assert!(!gauge.show_label);
    }

    #[test]
    fn test_multiple_series_repeat_one_gauge_each() {
        let compositor = GaugeCompositor::new(FixedNormalizer::new(vec![
            series("a", 1.0),
            series("b", 2.0),
            series("c", 3.0),
        ]));

        let descriptors = gauges(
            compositor
                .compose(
                    &request(GaugeOptions::default(), time_series(), 300.0, 100.0),
                    &identity,
                )
                .unwrap(),
        );

        let keys: Vec<&str> = descriptors.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["a-0", "b-1", "c-2"]);
        let values: Vec<f64> = descriptors.iter().map(|d| d.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        for gauge in &descriptors {
            assert_eq!((gauge.width, gauge.height), (90.0, 100.0));
            assert!(gauge.show_label);
        }
    }

    #[test]
    fn test_combine_collapses_to_one_labelled_gauge() {
        let compositor =
            GaugeCompositor::new(FixedNormalizer::new(vec![series("a", 4.0), series("b", 8.0)]));
        let options = GaugeOptions {
            multi_series_mode: MultiSeriesMode::Combine,
            ..GaugeOptions::default()
        };

        let descriptors = gauges(
            compositor
                .compose(&request(options, time_series(), 100.0, 300.0), &identity)
                .unwrap(),
        );

        assert_eq!(descriptors.len(), 1);
        let gauge = &descriptors[0];
        assert_eq!(gauge.key, "Combined time series-0");
        assert_eq!(gauge.value, 6.0);
        assert_eq!((gauge.width, gauge.height), (100.0, 300.0));
        assert!(gauge.show_label);
    }

    #[test]
    fn test_unknown_stat_fails_the_render() {
        let compositor =
            GaugeCompositor::new(FixedNormalizer::new(vec![series("a", 1.0), series("b", 2.0)]));
        let options = GaugeOptions {
            stat: "p99".to_string(),
            ..GaugeOptions::default()
        };

        let err = compositor
            .compose(&request(options, time_series(), 300.0, 100.0), &identity)
            .unwrap_err();

        assert_eq!(
            err,
            PanelError::UnknownStat {
                stat: "p99".to_string(),
                series: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_table_data_selects_first_positive_value() {
        let compositor = GaugeCompositor::new(FixedNormalizer::new(vec![]));
        let rows = vec![
            vec![Cell::from(0.0), Cell::from(-1.0), Cell::from(5.0)],
            vec![Cell::from(0.0), Cell::from(0.0), Cell::from(0.0)],
        ];

        let descriptors = gauges(
            compositor
                .compose(
                    &request(
                        GaugeOptions::default(),
                        PanelData::Table(TableData::new(rows)),
                        250.0,
                        120.0,
                    ),
                    &identity,
                )
                .unwrap(),
        );

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].value, 5.0);
        assert_eq!((descriptors[0].width, descriptors[0].height), (250.0, 120.0));
    }

    #[test]
    fn test_table_without_positive_value_is_an_error() {
        let compositor = GaugeCompositor::new(FixedNormalizer::new(vec![]));
        let panel_data = PanelData::Table(TableData::new(vec![vec![Cell::from(0.0)]]));

        let err = compositor
            .compose(
                &request(GaugeOptions::default(), panel_data, 100.0, 100.0),
                &identity,
            )
            .unwrap_err();

        assert_eq!(err, PanelError::NoPositiveValue);
    }

    #[test]
    fn test_prefix_and_suffix_are_interpolated() {
        let compositor =
            GaugeCompositor::new(FixedNormalizer::new(vec![series("a", 1.0), series("b", 2.0)]));
        let options = GaugeOptions {
            prefix: "$host:".to_string(),
            suffix: " ms".to_string(),
            ..GaugeOptions::default()
        };
        let interpolate = |template: &str| template.replace("$host", "web-1");

        let descriptors = gauges(
            compositor
                .compose(&request(options, time_series(), 300.0, 100.0), &interpolate)
                .unwrap(),
        );

        for gauge in &descriptors {
            assert_eq!(gauge.prefix, "web-1:");
            assert_eq!(gauge.suffix, " ms");
        }
    }
}
