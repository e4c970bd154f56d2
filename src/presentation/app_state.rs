// Application state for HTTP handlers
use crate::application::panel_service::PanelService;
use crate::domain::theme::{Theme, ThemeName};

#[derive(Clone)]
pub struct AppState {
    pub panel_service: PanelService,
    pub default_theme: ThemeName,
}

impl AppState {
    /// Theme for one request: the caller's choice, else the configured default
    pub fn resolve_theme(&self, requested: Option<ThemeName>) -> Theme {
        Theme::new(requested.unwrap_or(self.default_theme))
    }
}
