use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

/// Crate error type for the fallible surfaces: configuration loading and
/// (de)serialization. The parse path itself raises no errors; malformed
/// dump text degrades to best-effort reconstruction instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum RepodumpError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for RepodumpError {
    fn from(src: toml::de::Error) -> RepodumpError {
        RepodumpError::Serialization(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for RepodumpError {
    fn from(src: toml::ser::Error) -> RepodumpError {
        RepodumpError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<JsonError> for RepodumpError {
    fn from(src: JsonError) -> RepodumpError {
        RepodumpError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<io::Error> for RepodumpError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => RepodumpError::NotFound(format!("{x}")),
            _ => RepodumpError::Io(format!("IOError: {}", x.kind())),
        }
    }
}
