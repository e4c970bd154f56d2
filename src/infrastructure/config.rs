use crate::domain::theme::ThemeName;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub default_theme: ThemeName,
    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            default_theme: ThemeName::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Load `config/server` (optional) overlaid with `GAUGE__*` environment variables
pub fn load_server_settings() -> anyhow::Result<ServerSettings> {
    load_server_settings_from("config/server")
}

pub fn load_server_settings_from(path: &str) -> anyhow::Result<ServerSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("GAUGE").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
