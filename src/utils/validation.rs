use crate::utils::error::{Result, SmokeError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// SDL 驅動名稱，例如 `x11`、`wayland`、`dummy`、`KMSDRM`
pub fn validate_driver_name(field_name: &str, driver: &str) -> Result<()> {
    validate_non_empty_string(field_name, driver)?;

    if let Some(bad) = driver
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: driver.to_string(),
            reason: format!("Unexpected character '{}' in driver name", bad.escape_default()),
        });
    }
    Ok(())
}

pub fn validate_hint(field_name: &str, name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('\0') || name.contains('=') {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Hint name cannot contain '=' or null bytes".to_string(),
        });
    }

    if value.contains('\0') {
        return Err(SmokeError::InvalidConfigValueError {
            field: format!("{}.{}", field_name, name),
            value: value.to_string(),
            reason: "Hint value contains null bytes".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}
