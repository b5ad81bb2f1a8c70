//! Build-time configuration.
//!
//! A wasm bundle has no process environment at runtime, so settings are baked
//! in when `trunk build` runs:
//!
//! - `PINYIMAGE_API_BASE`: origin of the backend, e.g.
//!   `https://pinyimage-backend.onrender.com`. Unset or empty keeps requests
//!   same-origin.
//! - `PINYIMAGE_LOG`: maximum log level (`error`, `warn`, `info`, `debug`,
//!   `trace`, `off`). Defaults to `info`.

use common::api::ApiConfig;
use log::LevelFilter;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PINYIMAGE_API_BASE"), option_env!("PINYIMAGE_LOG"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api: ApiConfig::new(api_base.unwrap_or_default()),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}
