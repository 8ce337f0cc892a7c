use std::env;

use tracing::warn;

pub const BUFFER_SIZE_VAR: &str = "ORDER_SYSTEM_BUFFER_SIZE";
pub const LOG_FILTER_VAR: &str = "ORDER_SYSTEM_LOG";

/// Startup settings for [`OrderSystem`](super::OrderSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Mailbox capacity of every store and of the cache counter.
    pub buffer_size: usize,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads the settings from the environment, keeping defaults for anything
    /// unset or unusable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, fallback = config.buffer_size, "Ignoring invalid {}", BUFFER_SIZE_VAR),
            }
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), SystemConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = SystemConfig::from_lookup(lookup(&[(BUFFER_SIZE_VAR, "128"), (LOG_FILTER_VAR, "debug")]));
        assert_eq!(config.buffer_size, 128);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SystemConfig::from_lookup(lookup(&[(BUFFER_SIZE_VAR, "0"), (LOG_FILTER_VAR, " ")]));
        assert_eq!(config, SystemConfig::default());

        let config = SystemConfig::from_lookup(lookup(&[(BUFFER_SIZE_VAR, "lots")]));
        assert_eq!(config.buffer_size, 32);
    }
}
