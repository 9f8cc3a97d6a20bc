use thiserror::Error as ThisError;

pub type DbResult<T> = Result<T, DbConfigError>;

/// Errors raised while resolving a database connection target.
#[derive(Debug, ThisError)]
pub enum DbConfigError {
    #[error("POSTGRES_URL_OVERRIDE scheme must be postgresql, got `{scheme}`")]
    InvalidOverrideScheme { scheme: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("database host is missing")]
    MissingHost,

    #[error("invalid database port: {0:?}")]
    InvalidPort(String),

    #[error("invalid {0} for a postgresql URL")]
    InvalidComponent(&'static str),

    #[error("unsupported env file encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("env file is not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("env file parse error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("settings error: {0}")]
    Settings(#[from] Box<figment::Error>),
}

impl From<figment::Error> for DbConfigError {
    fn from(e: figment::Error) -> Self {
        DbConfigError::Settings(Box::new(e))
    }
}
