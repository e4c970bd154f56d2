// Domain layer - Panel data, series statistics and render descriptors
pub mod error;
pub mod panel;
pub mod render;
pub mod series;
pub mod theme;
