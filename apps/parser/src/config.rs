use anyhow::{bail, Context, Result};

use crate::ingest::FormatPolicy;

/// CLI configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub format_policy: FormatPolicy,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            format_policy: FormatPolicy::Lenient,
            pretty: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let strict = optional_bool("FOLIO_STRICT_FORMATS")?.unwrap_or(false);

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            format_policy: if strict {
                FormatPolicy::Strict
            } else {
                FormatPolicy::Lenient
            },
            pretty: optional_bool("FOLIO_PRETTY")?.unwrap_or(defaults.pretty),
        })
    }
}

fn optional_bool(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(value) => parse_bool(&value)
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' must be a boolean")),
        Err(_) => Ok(None),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_bool(v).unwrap(), "{v}");
        }
        for v in ["0", "false", "No", "off", ""] {
            assert!(!parse_bool(v).unwrap(), "{v}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.format_policy, FormatPolicy::Lenient);
        assert!(config.pretty);
    }
}
