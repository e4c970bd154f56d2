// Application layer - Value selection, aggregation, layout and composition
pub mod collaborators;
pub mod gauge_compositor;
pub mod layout_engine;
pub mod panel_service;
pub mod series_aggregator;
pub mod value_selector;
