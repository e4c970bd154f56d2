// Gauge panel - value selection, series combination and layout for dashboard gauges
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
