pub mod config;
pub mod db;
pub mod error;

pub use config::Settings;
pub use db::{AnyDbProvider, DbProvider, EnvEncoding, db_provider_factory};
pub use error::{DbConfigError, DbResult};
