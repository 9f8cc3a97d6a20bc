//! Reads the key/value pairs that configure a database provider.
//!
//! Values come from an optional env file, overlaid by the process
//! environment. Keys are upper-cased so lookups are case-insensitive.

use crate::error::{DbConfigError, DbResult};
use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Text encoding of an env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvEncoding {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl EnvEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvEncoding::Utf8 => "utf-8",
            EnvEncoding::Latin1 => "latin-1",
            EnvEncoding::Ascii => "ascii",
        }
    }

    /// Decode raw file contents into text.
    pub fn decode(&self, bytes: Vec<u8>) -> DbResult<String> {
        let decode_err = || DbConfigError::Decode {
            encoding: self.as_str(),
        };
        match self {
            EnvEncoding::Utf8 => String::from_utf8(bytes).map_err(|_| decode_err()),
            EnvEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            EnvEncoding::Ascii if bytes.is_ascii() => {
                String::from_utf8(bytes).map_err(|_| decode_err())
            }
            EnvEncoding::Ascii => Err(decode_err()),
        }
    }
}

impl fmt::Display for EnvEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvEncoding {
    type Err = DbConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(EnvEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(EnvEncoding::Latin1),
            "ascii" | "us-ascii" => Ok(EnvEncoding::Ascii),
            _ => Err(DbConfigError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Parse an env file into upper-cased key/value pairs.
///
/// A missing file yields an empty map.
pub fn read_env_file(path: &Path, encoding: EnvEncoding) -> DbResult<HashMap<String, String>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "env file not found; using defaults");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e.into()),
    };
    let text = encoding.decode(bytes)?;

    dotenvy::from_read_iter(text.as_bytes())
        .map(|item| item.map(|(k, v)| (k.to_ascii_uppercase(), v)).map_err(Into::into))
        .collect()
}

/// Merge env file values with the process environment; the process wins.
///
/// Process variables whose name or value is not valid unicode are skipped.
pub fn load_env_vars(env_file: &Path, encoding: EnvEncoding) -> DbResult<HashMap<String, String>> {
    let mut vars = read_env_file(env_file, encoding)?;
    vars.extend(std::env::vars_os().filter_map(|(k, v)| {
        match (k.into_string(), v.into_string()) {
            (Ok(k), Ok(v)) => Some((k.to_ascii_uppercase(), v)),
            (Ok(k), Err(_)) => {
                debug!(key = %k, "skipping non-unicode environment variable");
                None
            }
            _ => None,
        }
    }));
    Ok(vars)
}
