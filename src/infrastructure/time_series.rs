// Time series normalization - summarizes raw datapoints into stat bundles
use crate::application::collaborators::{NullValueMode, SeriesNormalizer};
use crate::domain::series::{RawSeries, STAT_AVG, STAT_MAX, STAT_MIN, STAT_TOTAL, Series, StatBundle};

pub const STAT_CURRENT: &str = "current";
pub const STAT_FIRST: &str = "first";
pub const STAT_DELTA: &str = "delta";
pub const STAT_DIFF: &str = "diff";
pub const STAT_RANGE: &str = "range";
pub const STAT_COUNT: &str = "count";
pub const STAT_LOGMIN: &str = "logmin";
pub const STAT_TIME_STEP: &str = "timeStep";

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsNormalizer;

impl StatsNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn summarize(raw: &RawSeries, null_mode: NullValueMode) -> Series {
        let mut points: Vec<(f64, i64)> = raw
            .datapoints
            .iter()
            .filter_map(|(value, time)| match (value, null_mode) {
                (Some(v), _) => Some((*v, *time)),
                (None, NullValueMode::AsZero) => Some((0.0, *time)),
                (None, NullValueMode::Null | NullValueMode::Ignore) => None,
            })
            .collect();
        points.sort_by_key(|(_, time)| *time);

        Series::new(raw.target.clone(), Self::stats(&points))
    }

    fn stats(points: &[(f64, i64)]) -> StatBundle {
        let (Some(&(first, _)), Some(&(current, _))) = (points.first(), points.last()) else {
            return empty_stats();
        };

        let total: f64 = points.iter().map(|(v, _)| v).sum();
        let min = points.iter().map(|(v, _)| *v).fold(f64::INFINITY, f64::min);
        let max = points.iter().map(|(v, _)| *v).fold(f64::NEG_INFINITY, f64::max);
        let logmin = points
            .iter()
            .map(|(v, _)| *v)
            .filter(|v| *v > 0.0)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))))
            .unwrap_or(0.0);

        let mut delta = 0.0;
        let mut time_step: Option<i64> = None;
        for pair in points.windows(2) {
            let ((previous, previous_time), (value, time)) = (pair[0], pair[1]);
            // A drop means the counter was reset; count from zero again
            delta += if value < previous { value } else { value - previous };

            let gap = time - previous_time;
            if gap > 0 {
                time_step = Some(time_step.map_or(gap, |step| step.min(gap)));
            }
        }

        let count = points.len() as f64;
        let mut stats = StatBundle::new();
        stats.insert(STAT_TOTAL, total);
        stats.insert(STAT_MIN, min);
        stats.insert(STAT_MAX, max);
        stats.insert(STAT_AVG, total / count);
        stats.insert(STAT_LOGMIN, logmin);
        stats.insert(STAT_CURRENT, current);
        stats.insert(STAT_FIRST, first);
        stats.insert(STAT_DIFF, current - first);
        stats.insert(STAT_RANGE, max - min);
        stats.insert(STAT_DELTA, delta);
        stats.insert(STAT_COUNT, count);
        stats.insert(STAT_TIME_STEP, time_step.unwrap_or(0) as f64);
        stats
    }
}

/// Same key set as a populated series, all zero
fn empty_stats() -> StatBundle {
    [
        STAT_TOTAL,
        STAT_MIN,
        STAT_MAX,
        STAT_AVG,
        STAT_LOGMIN,
        STAT_CURRENT,
        STAT_FIRST,
        STAT_DIFF,
        STAT_RANGE,
        STAT_DELTA,
        STAT_COUNT,
        STAT_TIME_STEP,
    ]
    .into_iter()
    .map(|stat| (stat, 0.0))
    .collect()
}

impl SeriesNormalizer for StatsNormalizer {
    fn normalize(&self, raw: &[RawSeries], null_mode: NullValueMode) -> Vec<Series> {
        raw.iter()
            .map(|series| Self::summarize(series, null_mode))
            .collect()
    }
}
