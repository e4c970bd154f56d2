// Presentation layer - HTTP surface for the dashboard host
pub mod app_state;
pub mod handlers;
