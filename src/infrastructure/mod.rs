// Infrastructure layer - Default collaborators and configuration
pub mod config;
pub mod gauge_renderer;
pub mod interpolation;
pub mod time_series;
