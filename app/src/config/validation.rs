//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9\-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)*$")
        .unwrap()
});
static RE_PIXELS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9][0-9]{0,3}px$").unwrap());
static RE_CSS_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[_A-Za-z][_A-Za-z0-9\-]*$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SERVER_HOST" | "UI_WS_HOST" => {
            if !RE_HOST.is_match(value) {
                return Err("must be a host name or IPv4 address".into());
            }
        }
        "SERVER_PORT" | "UI_WS_PORT" => validate_int_range(value, 1, 65535)?,
        "TOAST_DELAY_MS" => validate_int_range(value, 500, 60_000)?,
        "TOAST_WIDTH" => {
            if !RE_PIXELS.is_match(value) {
                return Err("must be a pixel width such as '340px'".into());
            }
        }
        "MANAGE_ROW_CLASS" => {
            if !RE_CSS_CLASS.is_match(value) {
                return Err("must be a single CSS class name".into());
            }
        }
        "UI_DEMO_TOAST" => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
