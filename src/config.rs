//! Application settings read from the process environment.
//!
//! Every field falls back to a default, so an empty environment yields a
//! working SQLite setup under `./data`.

use crate::db::{AnyDbProvider, EnvEncoding, db_provider_factory};
use crate::error::DbResult;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SETTINGS_KEYS: [&str; 5] = ["db_engine", "data_dir", "env_file", "env_encoding", "log_level"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `postgres` or `sqlite`; unknown values behave like `sqlite`.
    pub db_engine: String,
    pub data_dir: PathBuf,
    /// Env file holding the `POSTGRES_*` variables.
    pub env_file: PathBuf,
    pub env_encoding: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_engine: "sqlite".to_string(),
            data_dir: PathBuf::from("data"),
            env_file: PathBuf::from(".env"),
            env_encoding: EnvEncoding::default().to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Env::raw().only(&SETTINGS_KEYS))
    }

    /// Load settings from `DB_ENGINE`, `DATA_DIR`, `ENV_FILE`,
    /// `ENV_ENCODING` and `LOG_LEVEL`.
    pub fn load() -> DbResult<Self> {
        Ok(Self::figment().extract()?)
    }

    pub fn env_encoding(&self) -> DbResult<EnvEncoding> {
        self.env_encoding.parse()
    }

    /// Resolve the configured database provider.
    pub fn db_provider(&self) -> DbResult<AnyDbProvider> {
        db_provider_factory(
            &self.db_engine,
            &self.data_dir,
            &self.env_file,
            self.env_encoding()?,
        )
    }
}
