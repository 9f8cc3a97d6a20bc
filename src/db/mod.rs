//! Database connection targets.
//!
//! Layout:
//! - `sqlite.rs`: embedded file-backed database under the data directory
//! - `postgres.rs`: networked PostgreSQL configured from `POSTGRES_*` variables
//! - `env_source.rs`: env file + process environment loading

pub mod env_source;
pub mod postgres;
pub mod sqlite;

pub use env_source::EnvEncoding;
pub use postgres::PostgresProvider;
pub use sqlite::SqliteProvider;

use crate::error::DbResult;
use std::path::Path;
use tracing::debug;

/// Provider name that selects PostgreSQL; anything else selects SQLite.
pub const POSTGRES_PROVIDER: &str = "postgres";

/// A configured source of one database connection URL.
pub trait DbProvider: Send + Sync {
    /// Full connection URL, credentials included.
    fn db_url(&self) -> DbResult<String>;

    /// Connection URL safe for logs and diagnostics.
    fn db_url_public(&self) -> String;
}

/// The provider chosen by [`db_provider_factory`].
#[derive(Debug)]
pub enum AnyDbProvider {
    Sqlite(SqliteProvider),
    Postgres(PostgresProvider),
}

impl DbProvider for AnyDbProvider {
    fn db_url(&self) -> DbResult<String> {
        match self {
            AnyDbProvider::Sqlite(p) => p.db_url(),
            AnyDbProvider::Postgres(p) => p.db_url(),
        }
    }

    fn db_url_public(&self) -> String {
        match self {
            AnyDbProvider::Sqlite(p) => p.db_url_public(),
            AnyDbProvider::Postgres(p) => p.db_url_public(),
        }
    }
}

impl From<SqliteProvider> for AnyDbProvider {
    fn from(p: SqliteProvider) -> Self {
        AnyDbProvider::Sqlite(p)
    }
}

impl From<PostgresProvider> for AnyDbProvider {
    fn from(p: PostgresProvider) -> Self {
        AnyDbProvider::Postgres(p)
    }
}

/// Pick a provider by name.
///
/// `"postgres"` reads its settings from `env_file` and the process
/// environment. Every other name, unknown ones included, falls back to
/// SQLite under `data_dir`.
pub fn db_provider_factory(
    provider_name: &str,
    data_dir: &Path,
    env_file: &Path,
    env_encoding: EnvEncoding,
) -> DbResult<AnyDbProvider> {
    if provider_name == POSTGRES_PROVIDER {
        debug!(env_file = %env_file.display(), encoding = %env_encoding, "selected postgres provider");
        return PostgresProvider::from_env_file(env_file, env_encoding).map(Into::into);
    }

    debug!(
        provider = provider_name,
        data_dir = %data_dir.display(),
        "selected sqlite provider"
    );
    Ok(SqliteProvider::new(data_dir).into())
}
