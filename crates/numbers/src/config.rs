//! Demo configuration loaded from environment variables.

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `NUMBERS_COUNT` — how many numbers to feed through the view (default: `10`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub count: i64,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            count: lookup("NUMBERS_COUNT")
                .and_then(|c| c.parse().ok())
                .filter(|c: &i64| *c >= 0)
                .unwrap_or(defaults.count),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 10,
            log_level: "info".to_string(),
        }
    }
}
