use crate::scoring::DEFAULT_SCORING_URL;
use std::{env, net::SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub scoring_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            scoring_url: DEFAULT_SCORING_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(port) = lookup("PORT").and_then(|value| value.parse::<u16>().ok()) {
            settings.port = port;
        }
        if let Some(url) = lookup("ZENFLOW_SCORING_URL").filter(|value| !value.trim().is_empty()) {
            settings.scoring_url = url;
        }

        settings
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let settings = settings_from(&[]);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.scoring_url, "http://127.0.0.1:8000/stress");
        assert_eq!(settings.bind_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn env_overrides_defaults() {
        let settings = settings_from(&[
            ("PORT", "9100"),
            ("ZENFLOW_SCORING_URL", "http://scoring.local/stress"),
        ]);
        assert_eq!(settings.port, 9100);
        assert_eq!(settings.scoring_url, "http://scoring.local/stress");
    }

    #[test]
    fn bad_values_fall_back() {
        let settings = settings_from(&[("PORT", "eighty"), ("ZENFLOW_SCORING_URL", "  ")]);
        assert_eq!(settings, Settings::default());
    }
}
