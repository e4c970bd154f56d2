// Series aggregation - collapses several series into one synthetic series
use crate::domain::series::{STAT_AVG, STAT_MAX, STAT_MIN, STAT_TOTAL, Series};

pub const COMBINED_LABEL: &str = "Combined time series";

/// Stats folded by summation. `min` and `max` are summed too, not compared.
const ADDITIVE_STATS: [&str; 4] = [STAT_TOTAL, STAT_MIN, STAT_MAX, STAT_AVG];

/// Combine `first` and `rest` into a single series. `avg` ends up as the mean
/// of the per-series averages; other stats not in the additive set are taken
/// from `first`.
pub fn combine(first: &Series, rest: &[Series]) -> Vec<Series> {
    let mut stats = first.stats.clone();

    for series in rest {
        for stat in ADDITIVE_STATS {
            match (stats.get(stat), series.stats.get(stat)) {
                (Some(acc), Some(value)) => stats.insert(stat, acc + value),
                (_, None) => tracing::warn!(
                    "Series {} has no '{}' stat, skipping it while combining",
                    series.label,
                    stat
                ),
                (None, Some(_)) => tracing::warn!(
                    "Series {} has no '{}' stat, skipping it while combining",
                    first.label,
                    stat
                ),
            }
        }
    }

    let count = (rest.len() + 1) as f64;
    if let Some(avg) = stats.get(STAT_AVG) {
        stats.insert(STAT_AVG, avg / count);
    }

    vec![Series::new(COMBINED_LABEL, stats)]
}
