use crate::utils::error::{ConfigError, ConfigResult};
use url::Url;

pub trait Validate {
    fn validate(&self) -> ConfigResult<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> ConfigResult<()> {
    if value < min_value {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> ConfigResult<()> {
    if value < min || value > max {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks a `host[:port]` authority and splits it into its parts.
///
/// The authority is parsed under a non-special scheme so an explicit port is
/// kept even when it matches a well-known default, then the host is checked
/// against the rules an `http` URL applies.
pub fn validate_host(field_name: &str, authority: &str) -> ConfigResult<(String, Option<u16>)> {
    validate_non_empty_string(field_name, authority)?;

    let invalid = |reason: String| ConfigError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: authority.to_string(),
        reason,
    };

    let parsed = Url::parse(&format!("authority://{}", authority))
        .map_err(|e| invalid(format!("Invalid host format: {}", e)))?;

    if !parsed.username().is_empty()
        || parsed.password().is_some()
        || !parsed.path().is_empty()
        || parsed.query().is_some()
        || parsed.fragment().is_some()
    {
        return Err(invalid("Expected a bare host with an optional port".to_string()));
    }

    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| invalid("Host cannot be empty".to_string()))?;

    let mut probe = Url::parse("http://placeholder/").map_err(|e| invalid(e.to_string()))?;
    probe
        .set_host(Some(host))
        .map_err(|e| invalid(format!("Invalid host: {}", e)))?;

    // normalized form, as the rewritten request URL will carry it
    let host = probe
        .host_str()
        .ok_or_else(|| invalid("Host cannot be empty".to_string()))?
        .to_string();

    Ok((host, parsed.port()))
}
