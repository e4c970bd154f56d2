// Series domain models - raw datapoints and summarized statistics
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STAT_TOTAL: &str = "total";
pub const STAT_MIN: &str = "min";
pub const STAT_MAX: &str = "max";
pub const STAT_AVG: &str = "avg";

/// One series as delivered by the host's query layer: `[value, epoch_ms]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    pub target: String,
    #[serde(default)]
    pub datapoints: Vec<(Option<f64>, i64)>,
}

impl RawSeries {
    pub fn new(target: impl Into<String>, datapoints: Vec<(Option<f64>, i64)>) -> Self {
        Self {
            target: target.into(),
            datapoints,
        }
    }
}

/// Summary statistics keyed by stat name (`total`, `min`, `max`, `avg`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBundle(BTreeMap<String, f64>);

impl StatBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: &str) -> Option<f64> {
        self.0.get(stat).copied()
    }

    pub fn insert(&mut self, stat: impl Into<String>, value: f64) {
        self.0.insert(stat.into(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StatBundle {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub stats: StatBundle,
}

impl Series {
    pub fn new(label: impl Into<String>, stats: StatBundle) -> Self {
        Self {
            label: label.into(),
            stats,
        }
    }
}
