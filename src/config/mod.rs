mod basic;
mod cors;

pub use basic::BasicConfig;
pub use cors::CorsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Cross-origin policy (see `cors` table in config.toml).
    #[serde(default)]
    pub cors: CorsConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "TRIVIA_";

impl Config {
    /// Builds a Figment that merges defaults, an optional TOML file and
    /// `TRIVIA_`-prefixed environment variables (`__` separates tables,
    /// e.g. `TRIVIA_BASIC__LISTEN_PORT`).
    pub fn figment_from(path: &Path) -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if path.is_file() {
            figment.merge(Toml::file(path))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn figment() -> Figment {
        Self::figment_from(&PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration from defaults, `config.toml` (if present) and the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
