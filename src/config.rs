//! Frontend Configuration
//!
//! Baked in at build time: `DSA_TRACKER_API_BASE` and `DSA_TRACKER_LOG`.

use log::LevelFilter;

/// How long a notification stays visible
pub const DEFAULT_NOTICE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for `/api/...` paths; empty means same origin
    pub api_base: String,
    pub notice_ttl_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("DSA_TRACKER_API_BASE"), option_env!("DSA_TRACKER_LOG"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base.map(normalize_base).unwrap_or(defaults.api_base),
            log_level: log_level.map(parse_level).unwrap_or(defaults.log_level),
            ..defaults
        }
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_level(raw: &str) -> LevelFilter {
    raw.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base, "");
        assert_eq!(config.notice_ttl_ms, 5_000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_api_base_trailing_slash() {
        let config = AppConfig::from_values(Some("http://127.0.0.1:5000/"), None);
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(AppConfig::from_values(None, Some("debug")).log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::from_values(None, Some("WARN")).log_level, LevelFilter::Warn);
        assert_eq!(AppConfig::from_values(None, Some("loud")).log_level, LevelFilter::Info);
    }
}
