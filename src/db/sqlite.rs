use super::DbProvider;
use std::path::{Path, PathBuf};

/// File name shared by every SQLite database; a prefix may precede it.
pub const SQLITE_FILE_NAME: &str = "mealie.db";

/// Embedded, file-backed database living under the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteProvider {
    data_dir: PathBuf,
    prefix: String,
}

impl SqliteProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(data_dir, "")
    }

    /// Prefix the database file name, e.g. `test_` gives `test_mealie.db`.
    pub fn with_prefix(data_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}{SQLITE_FILE_NAME}", self.prefix))
    }
}

impl DbProvider for SqliteProvider {
    fn db_url(&self) -> crate::error::DbResult<String> {
        let path = self.db_path();
        // Falls back to the joined path when the working directory is gone.
        let absolute = std::path::absolute(&path).unwrap_or(path);
        Ok(format!("sqlite:///{}", absolute.display()))
    }

    fn db_url_public(&self) -> String {
        self.db_url().unwrap_or_default()
    }
}
