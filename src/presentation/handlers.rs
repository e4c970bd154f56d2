// HTTP request handlers
use crate::domain::error::PanelError;
use crate::domain::panel::{GaugeOptions, PanelData, PanelRequest};
use crate::domain::render::PanelView;
use crate::domain::theme::ThemeName;
use crate::infrastructure::interpolation::VariableInterpolator;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<ThemeName>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPanelBody {
    #[serde(default)]
    pub options: GaugeOptions,
    #[serde(default)]
    pub panel_data: PanelData,
    pub width: f64,
    pub height: f64,
    /// Dashboard variables available to prefix/suffix templates
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

#[derive(Debug)]
pub struct ApiError(pub PanelError);

impl From<PanelError> for ApiError {
    fn from(err: PanelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render a gauge panel for the given options and data
pub async fn render_gauge_panel(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThemeQuery>,
    Json(body): Json<RenderPanelBody>,
) -> Result<Json<PanelView>, ApiError> {
    let theme = state.resolve_theme(query.theme);
    let interpolator = VariableInterpolator::new(body.variables);
    let request = PanelRequest::new(body.options, body.panel_data, body.width, body.height);

    match state.panel_service.render(&request, &theme, &interpolator) {
        Ok(view) => Ok(Json(view)),
        Err(e) => {
            tracing::warn!("Error rendering gauge panel: {}", e);
            Err(e.into())
        }
    }
}
