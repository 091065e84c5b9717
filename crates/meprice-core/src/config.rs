use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default product feed, as served by the MePrice API.
pub const DEFAULT_UPSTREAM_URL: &str = "https://mepriceapi.vercel.app/barang/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("MEPRICE_ENV", "development"))?;

    let bind_addr = or_default("MEPRICE_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("MEPRICE_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("MEPRICE_LOG_LEVEL", "info");

    let upstream_url = or_default("MEPRICE_UPSTREAM_URL", DEFAULT_UPSTREAM_URL);
    validate_http_url("MEPRICE_UPSTREAM_URL", &upstream_url)?;

    let catalog_url = or_default("MEPRICE_CATALOG_URL", &upstream_url);
    validate_http_url("MEPRICE_CATALOG_URL", &catalog_url)?;

    let request_timeout_secs = or_default("MEPRICE_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("MEPRICE_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "MEPRICE_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("MEPRICE_USER_AGENT", "meprice/0.1 (storefront)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        upstream_url,
        catalog_url,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MEPRICE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn validate_http_url(var: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("'{url}' is not an http(s) URL"),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
