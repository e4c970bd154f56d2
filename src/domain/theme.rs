// Theme handle threaded from the host through to the gauge renderer
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Opaque to the compositor; only the renderer looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: ThemeName,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        Self { name }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}
