//! Build-time configuration for the dashboard.

use crate::error::{AppError, Result};
use log::LevelFilter;

pub const DEFAULT_STORAGE_KEY: &str = "authCode";
pub const DEFAULT_LOGIN_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Local storage key holding the auth code
    pub storage_key: String,
    /// Simulated login round-trip
    pub login_delay_ms: u32,
    pub user_name: String,
    pub user_code: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            user_name: "John Doe".to_string(),
            user_code: "TRD2024".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Reads `TRADEPRO_*` overrides baked in at compile time.
    pub fn from_build_env() -> Result<Self> {
        Self::with_overrides(
            option_env!("TRADEPRO_STORAGE_KEY"),
            option_env!("TRADEPRO_LOGIN_DELAY_MS"),
            option_env!("TRADEPRO_LOG_LEVEL"),
        )
    }

    pub fn with_overrides(
        storage_key: Option<&str>,
        login_delay_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(key) = storage_key {
            let key = key.trim();
            if key.is_empty() {
                return Err(AppError::Config("storage key must not be empty".to_string()));
            }
            config.storage_key = key.to_string();
        }

        if let Some(raw) = login_delay_ms {
            config.login_delay_ms = raw.trim().parse::<u32>().map_err(|e| {
                AppError::Config(format!("invalid login delay {:?}: {}", raw, e))
            })?;
        }

        if let Some(raw) = log_level {
            config.log_level = raw
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| AppError::Config(format!("invalid log level {:?}", raw)))?;
        }

        Ok(config)
    }
}
