//! Runtime settings, read from the environment (and `.env`, loaded by the
//! binary before anything else).
//!
//! | Variable               | Default                                   |
//! |------------------------|-------------------------------------------|
//! | `CONGRESS_DATA_URL`    | FiveThirtyEight `data_aging_congress.csv` |
//! | `PARTY_CODES_PATH`     | `assets/party_codes.csv`                  |
//! | `WIKIPEDIA_USER_AGENT` | [`DEFAULT_USER_AGENT`]                    |
//! | `LOG_FILE_PATH`        | `logs/congress_aging.log`                 |

use crate::loader::DEFAULT_DATA_URL;

pub const DEFAULT_PARTY_CODES_PATH: &str = "assets/party_codes.csv";
pub const DEFAULT_USER_AGENT: &str =
    "congress_aging/0.1 (https://github.com/fivethirtyeight/data/tree/master/congress-demographics)";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/congress_aging.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_source: String,
    pub party_codes_path: String,
    pub user_agent: String,
    pub log_file_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_URL.to_string(),
            party_codes_path: DEFAULT_PARTY_CODES_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_file_path: DEFAULT_LOG_FILE_PATH.to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; empty values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, default: String| {
            lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or(default)
        };

        Self {
            data_source: get("CONGRESS_DATA_URL", defaults.data_source),
            party_codes_path: get("PARTY_CODES_PATH", defaults.party_codes_path),
            user_agent: get("WIKIPEDIA_USER_AGENT", defaults.user_agent),
            log_file_path: get("LOG_FILE_PATH", defaults.log_file_path),
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, data: Option<String>, party_codes: Option<String>) -> Self {
        if let Some(data) = data {
            self.data_source = data;
        }
        if let Some(party_codes) = party_codes {
            self.party_codes_path = party_codes;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.data_source, DEFAULT_DATA_URL);
    }

    #[test]
    fn test_env_values_override_defaults() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("CONGRESS_DATA_URL", "data/congress.csv"),
            ("WIKIPEDIA_USER_AGENT", "tester/1.0"),
            ("LOG_FILE_PATH", "  "),
        ]);
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.data_source, "data/congress.csv");
        assert_eq!(settings.user_agent, "tester/1.0");
        assert_eq!(settings.party_codes_path, DEFAULT_PARTY_CODES_PATH);
        assert_eq!(settings.log_file_path, DEFAULT_LOG_FILE_PATH);
    }

    #[test]
    fn test_cli_overrides_win() {
        let settings = Settings::default().with_overrides(None, Some("parties.csv".to_string()));
        assert_eq!(settings.data_source, DEFAULT_DATA_URL);
        assert_eq!(settings.party_codes_path, "parties.csv");
    }
}
