use std::{net::SocketAddr, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const PNW_API_URL: &str = "https://api.politicsandwar.com/graphql";
const UPSTREAM_TIMEOUT_SECS: u64 = 30;
const API_BIND_ADDR: &str = "0.0.0.0:3001";
const WAR_CHECK_CRON: &str = "0 */5 * * * *";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub pnw_api_url: Url,
    pub upstream_timeout: Duration,

    pub api_bind_addr: SocketAddr,
    pub war_check_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            pnw_api_url: parse_env("PNW_API_URL", PNW_API_URL, |value| {
                Url::parse(value).map_err(|e| e.to_string())
            })?,
            upstream_timeout: parse_env(
                "UPSTREAM_TIMEOUT_SECS",
                &UPSTREAM_TIMEOUT_SECS.to_string(),
                |value| match value.parse::<u64>() {
                    Ok(0) => Err("timeout must be greater than zero".to_string()),
                    Ok(secs) => Ok(Duration::from_secs(secs)),
                    Err(e) => Err(e.to_string()),
                },
            )?,
            api_bind_addr: parse_env("API_BIND_ADDR", API_BIND_ADDR, |value| {
                value.parse::<SocketAddr>().map_err(|e| e.to_string())
            })?,
            war_check_cron: std::env::var("WAR_CHECK_CRON")
                .unwrap_or_else(|_| WAR_CHECK_CRON.to_string()),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// Reads an optional variable, falling back to `default`, and converts it with `parse`.
fn parse_env<T>(
    var: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    let value = std::env::var(var).unwrap_or_else(|_| default.to_string());

    parse(&value).map_err(|reason| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_reports_variable_name_on_failure() {
        let result = parse_env("VALINOR_TEST_UNSET_TIMEOUT", "abc", |value| {
            value.parse::<u64>().map_err(|e| e.to_string())
        });

        match result {
            Err(ConfigError::InvalidEnvValue { var, .. }) => {
                assert_eq!(var, "VALINOR_TEST_UNSET_TIMEOUT")
            }
            other => panic!("expected InvalidEnvValue, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn parse_env_uses_default_when_unset() {
        let result = parse_env("VALINOR_TEST_UNSET_URL", PNW_API_URL, |value| {
            Url::parse(value).map_err(|e| e.to_string())
        });

        assert_eq!(result.unwrap().as_str(), PNW_API_URL);
    }

    #[test]
    fn required_reports_missing_variable() {
        let result = required("VALINOR_TEST_UNSET_REQUIRED");

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(var)) if var == "VALINOR_TEST_UNSET_REQUIRED"
        ));
    }
}
