use std::env;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted `ACTIVATION_TTL_MINUTES`: one minute up to one week.
pub const ACTIVATION_TTL_RANGE: RangeInclusive<i64> = 1..=10_080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} is invalid: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub admin_key: String,
    pub activation_ttl_minutes: i64,
    pub search: SearchConfig,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub application_id: String,
    pub api_key: String,
    /// Overrides the default `https://{application_id}-dsn.algolia.net` host.
    pub host: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(EnvConfig {
            port: parse_or(&lookup, "PORT", 8080)?,
            db_url: get("DATABASE_URL")?,
            admin_key: get("ADMIN_KEY")?,
            activation_ttl_minutes: parse_in_range(
                &lookup,
                "ACTIVATION_TTL_MINUTES",
                15,
                ACTIVATION_TTL_RANGE,
            )?,
            search: SearchConfig {
                application_id: get("ALGOLIA_APPLICATION_ID")?,
                api_key: get("ALGOLIA_API_KEY")?,
                host: lookup("ALGOLIA_HOST").filter(|h| !h.is_empty()),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_in_range<F>(
    lookup: &F,
    key: &'static str,
    default: i64,
    range: RangeInclusive<i64>,
) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::Invalid { key, value: value.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base() -> HashMap<&'static str, String> {
        HashMap::from([
            ("DATABASE_URL", "sqlite::memory:".to_string()),
            ("ADMIN_KEY", "admin".to_string()),
            ("ALGOLIA_APPLICATION_ID", "APPID".to_string()),
            ("ALGOLIA_API_KEY", "key".to_string()),
        ])
    }

    #[test]
    fn defaults_apply_when_optional_keys_are_absent() {
        let vars = base();
        let cfg = EnvConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.activation_ttl_minutes, 15);
        assert_eq!(cfg.search.host, None);
    }

    #[test]
    fn missing_required_key_is_reported() {
        let mut vars = base();
        vars.remove("ADMIN_KEY");
        let err = EnvConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ADMIN_KEY")));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut vars = base();
        vars.insert("PORT", "eighty".to_string());
        let err = EnvConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn activation_ttl_outside_range_is_rejected() {
        for raw in ["0", "-5", "10081", "9223372036854775807"] {
            let mut vars = base();
            vars.insert("ACTIVATION_TTL_MINUTES", raw.to_string());
            let err = EnvConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { key: "ACTIVATION_TTL_MINUTES", .. }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn activation_ttl_bounds_are_accepted() {
        for raw in ["1", "10080"] {
            let mut vars = base();
            vars.insert("ACTIVATION_TTL_MINUTES", raw.to_string());
            let cfg = EnvConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
            assert_eq!(cfg.activation_ttl_minutes.to_string(), raw);
        }
    }
}
