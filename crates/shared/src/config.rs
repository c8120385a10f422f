//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Group identity.
    #[serde(default)]
    pub group: GroupConfig,
    /// Credential generation settings.
    #[serde(default)]
    pub security: SecurityConfig,
    /// In-memory store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Group identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    /// Display name of the group.
    #[serde(default = "default_group_name")]
    pub name: String,
    /// Currency all ledger amounts are kept in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            name: default_group_name(),
            currency: default_currency(),
        }
    }
}

fn default_group_name() -> String {
    "Chama Self Help Group".to_string()
}

const fn default_currency() -> Currency {
    Currency::Kes
}

/// Credential generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Number of digits in generated PINs.
    #[serde(default = "default_pin_length")]
    pub pin_length: u32,
    /// Number of name characters used as the member code prefix.
    #[serde(default = "default_member_code_prefix_len")]
    pub member_code_prefix_len: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            pin_length: default_pin_length(),
            member_code_prefix_len: default_member_code_prefix_len(),
        }
    }
}

const fn default_pin_length() -> u32 {
    4
}

const fn default_member_code_prefix_len() -> usize {
    3
}

/// In-memory store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Artificial delay applied to every credential check, in milliseconds.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    /// Whether to load the demo group on startup.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

const fn default_simulated_latency_ms() -> u64 {
    500
}

const fn default_seed_demo_data() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CHAMA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.group.currency, Currency::Kes);
        assert_eq!(config.security.pin_length, 4);
        assert_eq!(config.security.member_code_prefix_len, 3);
        assert_eq!(config.store.simulated_latency_ms, 500);
        assert!(config.store.seed_demo_data);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "CHAMA__GROUP__NAME",
                "CHAMA__STORE__SIMULATED_LATENCY_MS",
                "CHAMA__STORE__SEED_DEMO_DATA",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.group.name, "Chama Self Help Group");
                assert_eq!(config.store.simulated_latency_ms, 500);
            },
        );
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("CHAMA__GROUP__NAME", Some("Umoja Women Group")),
                ("CHAMA__STORE__SIMULATED_LATENCY_MS", Some("0")),
                ("CHAMA__STORE__SEED_DEMO_DATA", Some("false")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.group.name, "Umoja Women Group");
                assert_eq!(config.store.simulated_latency_ms, 0);
                assert!(!config.store.seed_demo_data);
            },
        );
    }
}
