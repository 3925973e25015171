// Error types shared across the upload pipeline

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ShutterError {
    #[error("Could not resolve the current user's home directory")]
    HomeDirNotFound,

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Path has no file name: {0:?}")]
    InvalidFileName(PathBuf),

    #[error("Failed to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {0:?}")]
    NotAFile(PathBuf),

    #[error("Object store client error: {0}")]
    Client(String),

    #[error("Upload of {key} failed: {message}")]
    Upload { key: String, message: String },

    #[error("Presigning {key} failed: {message}")]
    Presign { key: String, message: String },

    #[error("Invalid URL {url:?}: {source}")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type ShutterResult<T> = std::result::Result<T, ShutterError>;
