//! Runtime application configuration.

use ui_events::{ListenerConfig, ToastConfig};

use super::manager::SettingsManager;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub ui_ws_host: String,
    pub ui_ws_port: u16,
    pub toast_delay_ms: u64,
    pub toast_width: String,
    pub manage_row_class: String,
    pub demo_toast: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 8081,
            ui_ws_host: "127.0.0.1".into(),
            ui_ws_port: 8081,
            toast_delay_ms: ui_events::toast::DEFAULT_DELAY_MS,
            toast_width: ui_events::toast::DEFAULT_WIDTH.into(),
            manage_row_class: "wanted".into(),
            demo_toast: false,
        }
    }
}

impl AppConfig {
    /// Load configuration; any invalid value is an error.
    pub fn load(sm: &SettingsManager) -> Result<Self, anyhow::Error> {
        let g = |key: &str| sm.get_validated(key);

        Ok(Self {
            server_host: g("SERVER_HOST")?,
            server_port: g("SERVER_PORT")?.parse()?,
            ui_ws_host: g("UI_WS_HOST")?,
            ui_ws_port: g("UI_WS_PORT")?.parse()?,
            toast_delay_ms: g("TOAST_DELAY_MS")?.parse()?,
            toast_width: g("TOAST_WIDTH")?,
            manage_row_class: g("MANAGE_ROW_CLASS")?,
            demo_toast: g("UI_DEMO_TOAST")? == "true",
        })
    }

    pub fn toast_config(&self) -> ToastConfig {
        ToastConfig {
            delay_ms: self.toast_delay_ms,
            width: self.toast_width.clone(),
            ..ToastConfig::default()
        }
    }

    pub fn listener_config(&self) -> Result<ListenerConfig, anyhow::Error> {
        Ok(ListenerConfig::for_host(&self.ui_ws_host, self.ui_ws_port)?)
    }
}
