//! SettingsManager: environment-backed settings with defaults and validation.

use std::collections::HashMap;

use super::SettingInfo;
use super::defaults::{self, DEFAULT_SETTINGS};
use super::validation::validate_setting;

/// Resolves settings from a snapshot of key/value pairs (normally the process
/// environment after `.env` is loaded), falling back to defaults.
pub struct SettingsManager {
    values: HashMap<String, String>,
}

impl SettingsManager {
    /// Snapshot the known keys from the process environment.
    pub fn from_env() -> Self {
        let values = defaults::keys()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self { values }
    }

    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Get a setting value. Empty or missing values fall back to the default.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        if let Some(val) = self.values.get(key).map(|v| v.trim()) {
            if !val.is_empty() {
                return Ok(val.to_string());
            }
        }
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            return Ok(def.default.to_string());
        }
        anyhow::bail!("setting not found: {key}");
    }

    /// Get a setting and check it against its validation rule.
    pub fn get_validated(&self, key: &str) -> Result<String, anyhow::Error> {
        let value = self.get_setting(key)?;
        validate_setting(key, &value)
            .map_err(|e| anyhow::anyhow!("invalid value for {key} ({value:?}): {e}"))?;
        Ok(value)
    }

    /// Every known setting with its effective value.
    pub fn get_all_settings(&self) -> Vec<SettingInfo> {
        defaults::keys()
            .filter_map(|key| DEFAULT_SETTINGS.get(key))
            .map(|def| {
                let value = self.get_setting(def.key).unwrap_or_default();
                SettingInfo {
                    key: def.key.to_string(),
                    is_default: value == def.default,
                    value,
                    description: def.description.to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(pairs: &[(&str, &str)]) -> SettingsManager {
        SettingsManager::from_map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn falls_back_to_default() {
        let sm = manager(&[("SERVER_PORT", "  ")]);
        assert_eq!(sm.get_setting("SERVER_PORT").unwrap(), "8081");
        assert_eq!(sm.get_setting("TOAST_WIDTH").unwrap(), "340px");
    }

    #[test]
    fn unknown_key_is_error() {
        assert!(manager(&[]).get_setting("NOPE").is_err());
    }

    #[test]
    fn validated_rejects_bad_values() {
        let sm = manager(&[("UI_WS_PORT", "abc")]);
        let err = sm.get_validated("UI_WS_PORT").unwrap_err();
        assert!(err.to_string().contains("UI_WS_PORT"));
    }

    #[test]
    fn all_settings_marks_overrides() {
        let sm = manager(&[("MANAGE_ROW_CLASS", "good")]);
        let all = sm.get_all_settings();
        assert_eq!(all.len(), defaults::keys().count());
        let row_class = all.iter().find(|s| s.key == "MANAGE_ROW_CLASS").unwrap();
        assert_eq!(row_class.value, "good");
        assert!(!row_class.is_default);
        let port = all.iter().find(|s| s.key == "SERVER_PORT").unwrap();
        assert!(port.is_default);
    }

    #[test]
    fn toast_delay_description_scopes_it_to_page_toasts() {
        let all = manager(&[]).get_all_settings();
        let delay = all.iter().find(|s| s.key == "TOAST_DELAY_MS").unwrap();
        assert_eq!(delay.value, "5000");
        assert!(delay.description.contains("page toast"));
        assert!(delay.description.contains("console output is not timed"));
    }
}
