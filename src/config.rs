//! # Configuration
//!
//! Settings loaded from an optional file plus `ARENA__`-prefixed
//! environment variables, with `.env` honoured.
//!
//! ```text
//! ARENA__QUOTE__MIDPOINT=50
//! ARENA__QUOTE__SENSITIVITY=10
//! ARENA__QUOTE__FLOOR=10
//! ARENA__QUOTE__CEILING=90
//! ARENA__LEADERBOARD__TOP_N=5
//! ARENA__CHARTS__SEED=42
//! ARENA__LOGGING__LEVEL=debug
//! ARENA__LOGGING__JSON=true
//! ```
//!
//! Environment variables override the file. Every key has a default.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::leaderboard::DEFAULT_TOP_N;
use crate::domain::services::quote_model::QuoteModelConfig;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "ARENA";
const ENV_SEPARATOR: &str = "__";

/// Leaderboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardSettings {
    /// Leaders shown per table.
    pub top_n: usize,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Chart settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// All arena settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quote model parameters.
    pub quote: QuoteModelConfig,
    /// Leaderboard settings.
    pub leaderboard: LeaderboardSettings,
    /// Chart settings.
    pub charts: ChartSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads `.env`, then `path` if given, then the environment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read
    /// or the resulting settings are invalid.
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            tracing::debug!(path = %dotenv.display(), "loaded .env");
        }

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        Self::finish(builder.build())
    }

    /// Parses settings from TOML text, without the environment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` on malformed or invalid
    /// settings.
    pub fn from_toml(text: &str) -> ApplicationResult<Self> {
        Self::finish(
            Config::builder()
                .add_source(File::from_str(text, FileFormat::Toml))
                .build(),
        )
    }

    fn finish(built: Result<Config, config::ConfigError>) -> ApplicationResult<Self> {
        let app: Self = built
            .and_then(|cfg| cfg.try_deserialize::<Self>())
            .map_err(|e| ApplicationError::configuration(e.to_string()))?;
        app.validate()?;
        Ok(app)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first problem.
    pub fn validate(&self) -> ApplicationResult<()> {
        self.quote
            .validate()
            .map_err(|e| ApplicationError::configuration(e.to_string()))?;
        if self.logging.level.trim().is_empty() {
            return Err(ApplicationError::configuration("logging.level is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unsafe_code)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rust_decimal_macros::dec;
    use std::env;

    // Tests that touch ARENA__ variables run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock();
        for (key, value) in vars {
            unsafe {
                env::set_var(key, value);
            }
        }
        let result = f();
        for (key, _) in vars {
            unsafe {
                env::remove_var(key);
            }
        }
        result
    }

    #[test]
    fn env_overrides_nested_keys() {
        let cfg = with_env(
            &[
                ("ARENA__QUOTE__FLOOR", "5"),
                ("ARENA__QUOTE__CEILING", "95"),
                ("ARENA__LEADERBOARD__TOP_N", "3"),
            ],
            || AppConfig::load(None),
        )
        .unwrap();
        assert_eq!(cfg.quote.floor(), dec!(5));
        assert_eq!(cfg.quote.ceiling(), dec!(95));
        assert_eq!(cfg.quote.sensitivity(), dec!(10));
        assert_eq!(cfg.leaderboard.top_n, 3);
    }

    #[test]
    fn asymmetric_env_override_rejected() {
        let err = with_env(&[("ARENA__QUOTE__FLOOR", "20")], || AppConfig::load(None)).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.leaderboard.top_n, 5);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.charts.seed, None);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [charts]
            seed = 42

            [quote]
            sensitivity = "5"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.charts.seed, Some(42));
        assert_eq!(cfg.quote.sensitivity(), dec!(5));
        assert_eq!(cfg.quote.floor(), dec!(10));
    }

    #[test]
    fn asymmetric_bounds_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [quote]
            floor = "20"
            ceiling = "90"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn empty_level_rejected() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "  ".to_string();
        assert!(cfg.validate().is_err());
    }
}
